use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{MatrixError, Result};

/// Worker count used by both programs, independent of the host's core count.
pub const DEFAULT_WIDTH: usize = 4;

/// A fixed-width pool of worker threads.
///
/// Built once per program and passed by reference to the compute
/// components; nothing in this workspace touches rayon's global pool.
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
    width: usize,
}

impl WorkerPool {
    /// Create a pool with exactly `width` workers.
    ///
    /// # Errors
    /// Returns `InvalidPool` if `width == 0` or the threads cannot be spawned.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(MatrixError::InvalidPool(
                "width must be > 0".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(width)
            .thread_name(|i| format!("pm-worker-{}", i))
            .build()
            .map_err(|e| MatrixError::InvalidPool(e.to_string()))?;
        debug!("worker pool ready: width={}", width);
        Ok(WorkerPool { pool, width })
    }

    /// Create the standard pool of [`DEFAULT_WIDTH`] workers.
    pub fn fixed() -> Result<Self> {
        Self::new(DEFAULT_WIDTH)
    }

    /// Number of worker threads.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Run `op` inside the pool and block until it returns.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Run `a` and `b` potentially in parallel inside the pool, returning
    /// once both have finished.
    pub fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.join(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        let pool = WorkerPool::fixed().unwrap();
        assert_eq!(pool.width(), DEFAULT_WIDTH);
        assert_eq!(pool.install(rayon::current_num_threads), 4);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            WorkerPool::new(0),
            Err(MatrixError::InvalidPool(_))
        ));
    }

    #[test]
    fn test_install_runs_on_worker() {
        let pool = WorkerPool::new(2).unwrap();
        let name = pool.install(|| std::thread::current().name().map(str::to_string));
        assert!(name.unwrap().starts_with("pm-worker-"));
    }

    #[test]
    fn test_join_returns_both() {
        let pool = WorkerPool::new(2).unwrap();
        let (a, b) = pool.join(|| 1 + 1, || "right");
        assert_eq!(a, 2);
        assert_eq!(b, "right");
    }
}
