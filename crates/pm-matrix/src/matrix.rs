use crate::element::{Element, ElementKind};
use crate::error::{MatrixError, Result};
use crate::limits;

/// A square matrix owning a contiguous, row-major buffer.
///
/// `element(i, j)` lives at `data[i * size + j]`. The size is fixed at
/// construction and the buffer always holds exactly `size * size` cells.
/// Dropping the matrix releases the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Element> {
    size: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Create a zero-filled `size x size` matrix.
    ///
    /// # Errors
    /// Returns `ZeroSize` for `size == 0`, `Unaddressable` if the element count
    /// does not fit in `usize`, and `Allocation` if the buffer cannot be
    /// reserved.
    pub fn zeros(size: usize) -> Result<Self> {
        let n = Self::checked_len(size)?;
        let mut data = Vec::new();
        data.try_reserve_exact(n)
            .map_err(|_| MatrixError::Allocation { elements: n })?;
        data.resize(n, T::zero());
        Ok(Matrix { size, data })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != size * size`.
    pub fn from_vec(size: usize, data: Vec<T>) -> Result<Self> {
        let n = Self::checked_len(size)?;
        if data.len() != n {
            return Err(MatrixError::LengthMismatch {
                size,
                expected: n,
                got: data.len(),
            });
        }
        Ok(Matrix { size, data })
    }

    /// Create a matrix whose cell `(i, j)` is `f(i, j)`, filled in row-major order.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::zeros(size)?;
        for (i, row) in m.data.chunks_exact_mut(size).enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = f(i, j);
            }
        }
        Ok(m)
    }

    /// Create the `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    fn checked_len(size: usize) -> Result<usize> {
        if size == 0 {
            return Err(MatrixError::ZeroSize);
        }
        limits::element_count(size).ok_or(MatrixError::Unaddressable { size })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `size * size`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element kind of this matrix.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Returns cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.size && j < self.size);
        self.data[i * self.size + j]
    }

    /// Overwrites cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i < self.size && j < self.size);
        self.data[i * self.size + j] = value;
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.size)
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying row-major data mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
