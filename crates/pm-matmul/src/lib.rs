//! `pm-matmul` - Dense multiply kernel for par-matrix.
//!
//! Computes C = A @ B for square matrices by splitting the rows of C into one
//! contiguous slice per worker of a [`WorkerPool`](pm_matrix::WorkerPool).

pub mod config;
pub mod kernel;

pub use config::MatmulInput;
pub use kernel::{multiply, multiply_into, ParallelBackend};
