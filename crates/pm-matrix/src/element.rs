use std::fmt;
use std::io::{self, Write};

/// Numeric kinds a matrix cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit floating point (dense multiply program).
    F32,
    /// 64-bit floating point.
    F64,
    /// 32-bit signed integer (tree-reduction program).
    I32,
    /// 64-bit signed integer.
    I64,
}

impl ElementKind {
    /// Returns the size in bytes of a single element.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            ElementKind::F32 | ElementKind::I32 => 4,
            ElementKind::F64 | ElementKind::I64 => 8,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::F32 => write!(f, "f32"),
            ElementKind::F64 => write!(f, "f64"),
            ElementKind::I32 => write!(f, "i32"),
            ElementKind::I64 => write!(f, "i64"),
        }
    }
}

/// A numeric cell type usable inside a [`Matrix`](crate::Matrix).
///
/// Integer kinds accumulate with wrapping arithmetic so that long products
/// stay defined and do not depend on the order rows are processed in.
pub trait Element: Copy + Send + Sync + PartialEq + fmt::Debug + 'static {
    const KIND: ElementKind;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Returns `acc + a * b`.
    fn mul_acc(acc: Self, a: Self, b: Self) -> Self;

    /// Writes this value in the cell format used when printing a matrix.
    fn write_cell<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()>;
}

macro_rules! float_element {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            #[inline(always)]
            fn mul_acc(acc: Self, a: Self, b: Self) -> Self {
                acc + a * b
            }

            fn write_cell<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
                write!(w, " {:5.1}", self)
            }
        }
    };
}

macro_rules! int_element {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            #[inline(always)]
            fn mul_acc(acc: Self, a: Self, b: Self) -> Self {
                acc.wrapping_add(a.wrapping_mul(b))
            }

            fn write_cell<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
                write!(w, "{} ", self)
            }
        }
    };
}

float_element!(f32, ElementKind::F32);
float_element!(f64, ElementKind::F64);
int_element!(i32, ElementKind::I32);
int_element!(i64, ElementKind::I64);
