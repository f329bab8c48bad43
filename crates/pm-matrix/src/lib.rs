//! `pm-matrix` - Square matrix value type and shared plumbing for par-matrix.
//!
//! This crate provides:
//! - A `Matrix<T>` type owning a row-major `size x size` buffer
//! - An `Element` trait covering the numeric cell types (f32, f64, i32, i64)
//! - A `MatmulBackend` trait for pluggable pairwise multiplication
//! - A reference single-threaded `CpuBackend`
//! - A fixed-width `WorkerPool` handed explicitly to the compute components
//! - Size limits, seeded generation, printing and input-file helpers

pub mod backend;
pub mod cpu;
pub mod element;
pub mod error;
pub mod generate;
pub mod input;
pub mod limits;
pub mod matrix;
pub mod pool;
pub mod print;

// Re-export primary types at the crate root for convenience.
pub use backend::MatmulBackend;
pub use cpu::CpuBackend;
pub use element::{Element, ElementKind};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use pool::WorkerPool;
