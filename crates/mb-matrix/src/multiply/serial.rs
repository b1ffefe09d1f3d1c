use crate::error::Result;
use crate::matrix::Matrix;

use super::{check_dims, compute_row};

/// Single-threaded reference multiply: `C = A @ B`.
///
/// The values this produces, including their exact floating-point
/// accumulation order, are the baseline every parallel strategy is
/// validated against.
pub fn multiply_serial(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, _, p) = check_dims(a, b)?;

    let mut c = Matrix::zeros(m, p);
    for i in 0..m {
        compute_row(a.row(i), b, c.row_mut(i));
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_basic_product() {
        // [1,2;3,4] @ [5,6;7,8] = [19,22;43,50]
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = Matrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
        let c = multiply_serial(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_rectangular_product() {
        // 2x3 @ 3x2 -> 2x2
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let b = Matrix::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2);
        let c = multiply_serial(&a, &b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_identity() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3, 3);
        let c = multiply_serial(&a, &Matrix::identity(3)).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert!(matches!(
            multiply_serial(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_single_row() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0], 1, 3);
        let b = Matrix::from_vec(vec![4.0, 5.0, 6.0], 3, 1);
        let c = multiply_serial(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[32.0]);
    }
}
