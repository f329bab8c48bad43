//! `pm-reduce` - Ordered tree reduction for par-matrix.
//!
//! Multiplies a sequence `M0, M1, ..., Mn-1` into `M0 @ M1 @ ... @ Mn-1` by
//! splitting it into a binary tree of adjacent ranges. Sibling subtrees run
//! as independent tasks on a [`WorkerPool`](pm_matrix::WorkerPool); each
//! internal node multiplies its children left-to-right once both are done.

pub mod config;
pub mod engine;

pub use config::{ReduceInput, SEED};
pub use engine::{fold_sequential, SplitPoint, TreeReducer};
