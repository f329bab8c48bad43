use std::io::{self, Write};

use crate::element::Element;
use crate::matrix::Matrix;

/// Write `m` one row per line using the element's cell format.
pub fn write_matrix<T: Element, W: Write + ?Sized>(w: &mut W, m: &Matrix<T>) -> io::Result<()> {
    for row in m.rows() {
        for cell in row {
            cell.write_cell(w)?;
        }
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Element>(m: &Matrix<T>) -> String {
        let mut buf = Vec::new();
        write_matrix(&mut buf, m).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_float_rows() {
        let m = Matrix::from_vec(2, vec![1.0f32, 20.0, 3.5, 0.0]).unwrap();
        assert_eq!(render(&m), "   1.0  20.0\n   3.5   0.0\n");
    }

    #[test]
    fn test_int_rows() {
        let m = Matrix::from_vec(2, vec![-1i32, 1, 4, -16]).unwrap();
        assert_eq!(render(&m), "-1 1 \n4 -16 \n");
    }
}
