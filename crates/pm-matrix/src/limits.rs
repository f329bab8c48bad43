use crate::element::ElementKind;
use crate::error::{MatrixError, Result};

/// Upper bound of the unsigned integer type the programs size their buffers with.
pub const UNSIGNED_MAX: u64 = u32::MAX as u64;

/// Returns true if a `size x size` matrix of `element_bytes`-wide cells would
/// overflow [`UNSIGNED_MAX`] in either its element count or its byte size.
///
/// A zero `size` never overflows; it is rejected separately.
pub fn overflows_unsigned(size: u64, element_bytes: u64) -> bool {
    if size == 0 {
        return false;
    }
    size > UNSIGNED_MAX
        || size > UNSIGNED_MAX / size
        || element_bytes > UNSIGNED_MAX
        || (element_bytes != 0 && size * size > UNSIGNED_MAX / element_bytes)
}

/// Validates a requested matrix size for the given element kind before
/// anything is allocated.
pub fn check_size(size: u64, kind: ElementKind) -> Result<()> {
    if size == 0 {
        return Err(MatrixError::ZeroSize);
    }
    let element_bytes = kind.size_in_bytes() as u64;
    if overflows_unsigned(size, element_bytes) {
        return Err(MatrixError::SizeOverflow {
            size,
            element_bytes,
        });
    }
    Ok(())
}

/// Number of elements in a `size x size` matrix, or `None` if it does not fit
/// in `usize`.
pub fn element_count(size: usize) -> Option<usize> {
    size.checked_mul(size)
}
