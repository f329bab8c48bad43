use std::fmt::Debug;

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Trait for pluggable pairwise matrix multiplication (reference CPU loop,
/// row-parallel kernel, etc.).
///
/// Implementations must produce `C[i][j] = sum_k A[i][k] * B[k][j]` with a
/// single accumulator per cell seeded at zero.
pub trait MatmulBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu", "parallel").
    fn name(&self) -> &str;

    /// Matrix multiplication into a pre-allocated result: C = A @ B.
    ///
    /// Every cell of `c` is overwritten; its previous contents are irrelevant.
    fn matmul_into(&self, a: &Matrix<T>, b: &Matrix<T>, c: &mut Matrix<T>) -> Result<()>;

    /// Matrix multiplication returning a freshly allocated result.
    fn matmul(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        let mut c = Matrix::zeros(a.size())?;
        self.matmul_into(a, b, &mut c)?;
        Ok(c)
    }
}

/// Checks that `a`, `b` and `c` all share one size.
pub fn check_operands<T: Element>(a: &Matrix<T>, b: &Matrix<T>, c: &Matrix<T>) -> Result<()> {
    for other in [b.size(), c.size()] {
        if other != a.size() {
            return Err(MatrixError::SizeMismatch {
                expected: a.size(),
                got: other,
            });
        }
    }
    Ok(())
}
