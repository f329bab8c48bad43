use std::path::Path;

use pm_matrix::input::{parse_pair, read_pair};
use pm_matrix::limits::check_size;
use pm_matrix::{ElementKind, MatrixError, Result};

/// Seed of the sign-matrix generator used by the tree-reduce program.
pub const SEED: u64 = 123;

/// Validated input of the tree-reduce program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceInput {
    /// Number of matrices to multiply.
    pub count: usize,
    /// Rows (and columns) of every matrix.
    pub size: usize,
}

impl ReduceInput {
    const FIELDS: [&'static str; 2] = ["n", "size"];

    /// Read `n size` from a text file.
    ///
    /// # Errors
    /// Fails if the file cannot be read, either field is missing or not an
    /// unsigned integer, either is zero, or a `size x size` i32 matrix would
    /// overflow the unsigned range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let (count, size) = read_pair(path, Self::FIELDS)?;
        Self::new(count, size)
    }

    /// Parse `n size` from text.
    pub fn parse(text: &str) -> Result<Self> {
        let (count, size) = parse_pair(text, Self::FIELDS)?;
        Self::new(count, size)
    }

    fn new(count: u32, size: u32) -> Result<Self> {
        if count == 0 {
            return Err(MatrixError::EmptySequence);
        }
        check_size(u64::from(size), ElementKind::I32)?;
        Ok(ReduceInput {
            count: count as usize,
            size: size as usize,
        })
    }
}
