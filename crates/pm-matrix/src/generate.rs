//! Seeded pseudo-random matrix generation.
//!
//! All generators draw from `rand::rngs::StdRng` seeded with `seed_from_u64`.
//! A given seed reproduces the same matrices for a given build of this
//! workspace; the sequence is not compatible with C's `rand()`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::matrix::Matrix;

/// Generate the two operands of the dense multiply program.
///
/// Cells are visited in row-major order; at each cell A draws first, then B.
/// Every value is a whole number in `0..10`.
pub fn digit_pair(size: usize, seed: u32) -> Result<(Matrix<f32>, Matrix<f32>)> {
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let mut a = Matrix::<f32>::zeros(size)?;
    let mut b = Matrix::<f32>::zeros(size)?;
    for (x, y) in a.as_mut_slice().iter_mut().zip(b.as_mut_slice()) {
        *x = f32::from(rng.gen_range(0u8..10));
        *y = f32::from(rng.gen_range(0u8..10));
    }
    Ok((a, b))
}

/// Generate a matrix whose cells are each -1 or +1.
pub fn sign_matrix<R: Rng>(size: usize, rng: &mut R) -> Result<Matrix<i32>> {
    Matrix::from_fn(size, |_, _| 2 * rng.gen_range(0..2) - 1)
}

/// Generate `count` sign matrices in order from a single generator.
pub fn sign_sequence(count: usize, size: usize, seed: u64) -> Result<Vec<Matrix<i32>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| sign_matrix(size, &mut rng)).collect()
}
