use crate::backend::{check_operands, MatmulBackend};
use crate::element::Element;
use crate::error::Result;
use crate::matrix::Matrix;

/// Pure-Rust single-threaded backend.
///
/// Straight `i-j-k` loops with one accumulator per output cell. Used as the
/// pairwise combine inside tree-reduction tasks, where parallelism comes from
/// the tree, and as the reference dot product in tests.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> MatmulBackend<T> for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn matmul_into(&self, a: &Matrix<T>, b: &Matrix<T>, c: &mut Matrix<T>) -> Result<()> {
        check_operands(a, b, c)?;

        let n = a.size();
        let (a, b) = (a.as_slice(), b.as_slice());
        let c = c.as_mut_slice();
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = T::mul_acc(sum, a[i * n + k], b[k * n + j]);
                }
                c[i * n + j] = sum;
            }
        }
        Ok(())
    }
}
