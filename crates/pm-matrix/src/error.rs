use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid zero-sized matrix")]
    ZeroSize,
    #[error("size {size} is too big, {size}x{size} elements of {element_bytes} bytes would overflow an unsigned int")]
    SizeOverflow { size: u64, element_bytes: u64 },
    #[error("size {size} is too big, {size}x{size} elements exceed the addressable range")]
    Unaddressable { size: usize },
    #[error("buffer length mismatch for size {size}: expected {expected}, got {got}")]
    LengthMismatch {
        size: usize,
        expected: usize,
        got: usize,
    },
    #[error("matrix size mismatch: expected {expected}x{expected}, got {got}x{got}")]
    SizeMismatch { expected: usize, got: usize },
    #[error("cannot reduce an empty matrix sequence")]
    EmptySequence,
    #[error("failed to allocate {elements} matrix elements")]
    Allocation { elements: usize },
    #[error("invalid worker pool: {0}")]
    InvalidPool(String),
    #[error("could not open file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("inputs could not be read correctly: missing {0}")]
    MissingField(&'static str),
    #[error("inputs could not be read correctly: {name} = {value:?} is not an unsigned integer")]
    InvalidField { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
