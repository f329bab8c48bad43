use std::path::Path;

use pm_matrix::input::{parse_pair, read_pair};
use pm_matrix::limits::check_size;
use pm_matrix::{ElementKind, Result};

/// Validated input of the dense multiply program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatmulInput {
    /// Rows (and columns) of both operands.
    pub size: usize,
    /// Seed for the operand generator.
    pub seed: u32,
}

impl MatmulInput {
    const FIELDS: [&'static str; 2] = ["size", "seed"];

    /// Read `size seed` from a text file.
    ///
    /// # Errors
    /// Fails if the file cannot be read, either field is missing or not an
    /// unsigned integer, `size` is zero, or a `size x size` f32 matrix would
    /// overflow the unsigned range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let (size, seed) = read_pair(path, Self::FIELDS)?;
        Self::new(size, seed)
    }

    /// Parse `size seed` from text.
    pub fn parse(text: &str) -> Result<Self> {
        let (size, seed) = parse_pair(text, Self::FIELDS)?;
        Self::new(size, seed)
    }

    fn new(size: u32, seed: u32) -> Result<Self> {
        check_size(u64::from(size), ElementKind::F32)?;
        Ok(MatmulInput {
            size: size as usize,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_matrix::MatrixError;

    #[test]
    fn test_parse() {
        let input = MatmulInput::parse("2 1\n").unwrap();
        assert_eq!(input, MatmulInput { size: 2, seed: 1 });
    }

    #[test]
    fn test_zero_size() {
        assert!(matches!(
            MatmulInput::parse("0 1"),
            Err(MatrixError::ZeroSize)
        ));
    }

    #[test]
    fn test_overflowing_size() {
        assert!(MatmulInput::parse("32767 0").is_ok());
        assert!(matches!(
            MatmulInput::parse("32768 0"),
            Err(MatrixError::SizeOverflow { .. })
        ));
        assert!(MatmulInput::parse("4294967295 0").is_err());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            MatmulInput::parse("12"),
            Err(MatrixError::MissingField("seed"))
        ));
        assert!(matches!(
            MatmulInput::parse("x 1"),
            Err(MatrixError::InvalidField { name: "size", .. })
        ));
    }
}
