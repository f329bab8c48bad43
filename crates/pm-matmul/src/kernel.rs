use log::debug;
use rayon::prelude::*;

use pm_matrix::backend::check_operands;
use pm_matrix::{Element, MatmulBackend, Matrix, Result, WorkerPool};

/// Multiply `a` by `b` into the pre-allocated `c` using every worker in `pool`.
///
/// Rows of `c` are split into `pool.width()` contiguous slices of
/// `ceil(n / width)` rows; each slice is written by exactly one task and
/// no task reads another's output. Returns once all slices are done.
pub fn multiply_into<T: Element>(
    pool: &WorkerPool,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
) -> Result<()> {
    check_operands(a, b, c)?;

    let n = a.size();
    let rows_per_worker = n.div_ceil(pool.width());
    debug!(
        "multiply: size={} kind={} workers={} rows_per_worker={}",
        n,
        T::KIND,
        pool.width(),
        rows_per_worker
    );

    let b = b.as_slice();
    let c = c.as_mut_slice();
    pool.install(|| {
        c.par_chunks_mut(rows_per_worker * n)
            .enumerate()
            .for_each(|(worker, c_rows)| {
                let first_row = worker * rows_per_worker;
                for (r, c_row) in c_rows.chunks_exact_mut(n).enumerate() {
                    let i = first_row + r;
                    multiply_row(a.row(i), b, c_row);
                }
            });
    });
    Ok(())
}

/// Multiply `a` by `b`, allocating the result.
pub fn multiply<T: Element>(pool: &WorkerPool, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let mut c = Matrix::zeros(a.size())?;
    multiply_into(pool, a, b, &mut c)?;
    Ok(c)
}

/// Computes one output row: `c_row[j] = sum_k a_row[k] * b[k][j]`.
///
/// The row is zeroed and then accumulated in ascending `k`, so each cell has a
/// single accumulator seeded at zero. The `j` loop walks two contiguous
/// slices with no cross-iteration dependency and vectorizes.
#[inline]
fn multiply_row<T: Element>(a_row: &[T], b: &[T], c_row: &mut [T]) {
    c_row.fill(T::zero());
    for (&a_ik, b_row) in a_row.iter().zip(b.chunks_exact(c_row.len())) {
        for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
            *c_ij = T::mul_acc(*c_ij, a_ik, b_kj);
        }
    }
}

/// [`MatmulBackend`] running the row-parallel kernel on a borrowed pool.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBackend<'p> {
    pool: &'p WorkerPool,
}

impl<'p> ParallelBackend<'p> {
    pub fn new(pool: &'p WorkerPool) -> Self {
        ParallelBackend { pool }
    }
}

impl<T: Element> MatmulBackend<T> for ParallelBackend<'_> {
    fn name(&self) -> &str {
        "parallel"
    }

    fn matmul_into(&self, a: &Matrix<T>, b: &Matrix<T>, c: &mut Matrix<T>) -> Result<()> {
        multiply_into(self.pool, a, b, c)
    }
}
