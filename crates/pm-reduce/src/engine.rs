use log::{debug, trace};

use pm_matrix::{Element, MatmulBackend, Matrix, MatrixError, Result, WorkerPool};

/// Where a range of two or more matrices is cut into left and right subtrees.
///
/// Every choice yields the same product; only the tree shape (and so the
/// available parallelism) changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPoint {
    /// Balanced tree: the left half gets `len / 2` matrices.
    #[default]
    Midpoint,
    /// Right-leaning chain: `M0 @ (M1 @ (...))`.
    AfterFirst,
    /// Left-leaning chain: `((M0 @ M1) @ ...) @ Mn-1`.
    BeforeLast,
}

impl SplitPoint {
    /// Length of the left part for a range of `len >= 2` matrices, always in
    /// `1..len`.
    pub fn left_len(self, len: usize) -> usize {
        debug_assert!(len >= 2);
        match self {
            SplitPoint::Midpoint => len / 2,
            SplitPoint::AfterFirst => 1,
            SplitPoint::BeforeLast => len - 1,
        }
    }
}

/// Reduces a matrix sequence to its ordered product on a worker pool.
///
/// Leaves are the input matrices; every internal node performs one
/// `left @ right` through `backend` after both subtrees have finished, and
/// drops both children once the product exists.
#[derive(Debug)]
pub struct TreeReducer<'a, T: Element> {
    pool: &'a WorkerPool,
    backend: &'a dyn MatmulBackend<T>,
    split: SplitPoint,
}

impl<'a, T: Element> TreeReducer<'a, T> {
    pub fn new(pool: &'a WorkerPool, backend: &'a dyn MatmulBackend<T>) -> Self {
        TreeReducer {
            pool,
            backend,
            split: SplitPoint::default(),
        }
    }

    /// Builder-style override of the split point.
    pub fn with_split(mut self, split: SplitPoint) -> Self {
        self.split = split;
        self
    }

    /// Reduce `seq` to `seq[0] @ seq[1] @ ... @ seq[n-1]`.
    ///
    /// A single matrix is returned unchanged.
    ///
    /// # Errors
    /// Returns `EmptySequence` for an empty input and `SizeMismatch` if the
    /// matrices do not all share one size; both are detected before any
    /// multiplication starts. Allocation failures inside the tree propagate.
    pub fn reduce(&self, seq: Vec<Matrix<T>>) -> Result<Matrix<T>> {
        let size = validate(&seq)?;
        debug!(
            "reduce: n={} size={} kind={} split={:?} backend={} workers={}",
            seq.len(),
            size,
            T::KIND,
            self.split,
            self.backend.name(),
            self.pool.width()
        );
        self.pool.install(|| self.reduce_range(seq))
    }

    fn reduce_range(&self, seq: Vec<Matrix<T>>) -> Result<Matrix<T>> {
        let mut left = match <[Matrix<T>; 1]>::try_from(seq) {
            Ok([leaf]) => return Ok(leaf),
            Err(seq) => seq,
        };
        let right = left.split_off(self.split.left_len(left.len()));
        let (n_left, n_right) = (left.len(), right.len());

        let (left, right) = self
            .pool
            .join(|| self.reduce_range(left), || self.reduce_range(right));
        let (left, right) = (left?, right?);

        trace!("combine: {} @ {} matrices", n_left, n_right);
        self.backend.matmul(&left, &right)
    }
}

/// Sequential left fold `((M0 @ M1) @ M2) @ ...`, consuming the sequence.
pub fn fold_sequential<T: Element>(
    backend: &dyn MatmulBackend<T>,
    seq: Vec<Matrix<T>>,
) -> Result<Matrix<T>> {
    validate(&seq)?;
    let mut iter = seq.into_iter();
    let first = iter.next().ok_or(MatrixError::EmptySequence)?;
    iter.try_fold(first, |acc, m| backend.matmul(&acc, &m))
}

/// Checks that `seq` is non-empty and uniformly sized, returning the size.
fn validate<T: Element>(seq: &[Matrix<T>]) -> Result<usize> {
    let size = seq.first().ok_or(MatrixError::EmptySequence)?.size();
    if let Some((index, m)) = seq.iter().enumerate().find(|(_, m)| m.size() != size) {
        debug!("reduce: matrix {} has size {}, expected {}", index, m.size(), size);
        return Err(MatrixError::SizeMismatch {
            expected: size,
            got: m.size(),
        });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_matrix::{generate, CpuBackend};

    fn pool() -> WorkerPool {
        WorkerPool::fixed().unwrap()
    }

    fn m2(data: [i32; 4]) -> Matrix<i32> {
        Matrix::from_vec(2, data.to_vec()).unwrap()
    }

    fn scalars(values: &[i64]) -> Vec<Matrix<i64>> {
        values
            .iter()
            .map(|&v| Matrix::from_vec(1, vec![v]).unwrap())
            .collect()
    }

    #[test]
    fn test_scalar_product() {
        let pool = pool();
        let cpu = CpuBackend::new();
        let r = TreeReducer::new(&pool, &cpu)
            .reduce(scalars(&[2, 3, 4, 5]))
            .unwrap();
        assert_eq!(r.as_slice(), &[120]);
    }

    #[test]
    fn test_single_matrix_unchanged() {
        let pool = pool();
        let cpu = CpuBackend::new();
        let m = m2([1, 2, 3, 4]);
        let r = TreeReducer::new(&pool, &cpu).reduce(vec![m.clone()]).unwrap();
        assert_eq!(r, m);
    }

    #[test]
    fn test_order_preserved() {
        let pool = pool();
        let cpu = CpuBackend::new();
        let a = m2([1, 1, 0, 1]);
        let b = m2([1, 0, 1, 1]);
        let ab = cpu.matmul(&a, &b).unwrap();
        let ba = cpu.matmul(&b, &a).unwrap();
        assert_ne!(ab, ba);

        let r = TreeReducer::new(&pool, &cpu).reduce(vec![a, b]).unwrap();
        assert_eq!(r, ab);
    }

    #[test]
    fn test_matches_sequential_fold() {
        let pool = pool();
        let cpu = CpuBackend::new();
        for n in 1..=9 {
            let seq = generate::sign_sequence(n, 3, 123).unwrap();
            let expected = fold_sequential(&cpu, seq.clone()).unwrap();
            let r = TreeReducer::new(&pool, &cpu).reduce(seq).unwrap();
            assert_eq!(r, expected, "n={n}");
        }
    }

    #[test]
    fn test_split_points_agree() {
        let pool = pool();
        let cpu = CpuBackend::new();
        let seq = generate::sign_sequence(7, 4, 99).unwrap();
        let expected = fold_sequential(&cpu, seq.clone()).unwrap();
        for split in [
            SplitPoint::Midpoint,
            SplitPoint::AfterFirst,
            SplitPoint::BeforeLast,
        ] {
            let reducer = TreeReducer::new(&pool, &cpu).with_split(split);
            assert_eq!(reducer.reduce(seq.clone()).unwrap(), expected, "{split:?}");
        }
    }

    #[test]
    fn test_left_len() {
        assert_eq!(SplitPoint::Midpoint.left_len(2), 1);
        assert_eq!(SplitPoint::Midpoint.left_len(5), 2);
        assert_eq!(SplitPoint::AfterFirst.left_len(5), 1);
        assert_eq!(SplitPoint::BeforeLast.left_len(5), 4);
    }

    #[test]
    fn test_empty_rejected() {
        let pool = pool();
        let cpu = CpuBackend::new();
        assert!(matches!(
            TreeReducer::<i32>::new(&pool, &cpu).reduce(vec![]),
            Err(MatrixError::EmptySequence)
        ));
        assert!(matches!(
            fold_sequential::<i32>(&cpu, vec![]),
            Err(MatrixError::EmptySequence)
        ));
    }

    #[test]
    fn test_mixed_sizes_rejected() {
        let pool = pool();
        let cpu = CpuBackend::new();
        let seq = vec![
            Matrix::<i32>::identity(2).unwrap(),
            Matrix::<i32>::identity(2).unwrap(),
            Matrix::<i32>::identity(3).unwrap(),
        ];
        assert!(matches!(
            TreeReducer::new(&pool, &cpu).reduce(seq),
            Err(MatrixError::SizeMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_single_worker() {
        let pool = WorkerPool::new(1).unwrap();
        let cpu = CpuBackend::new();
        let r = TreeReducer::new(&pool, &cpu)
            .reduce(scalars(&[-1, 2, -3, 4, 5]))
            .unwrap();
        assert_eq!(r.as_slice(), &[120]);
    }
}
