use std::mem;
use std::thread;

use crate::error::Result;
use crate::matrix::Matrix;

use super::{check_dims, check_thread_count, compute_row};

/// Parallel multiply with contiguous row blocks.
///
/// The `m` output rows are split into `num_threads` blocks of
/// `m / num_threads` rows, the first `m % num_threads` blocks one row
/// larger. The output buffer is carved into disjoint mutable regions
/// before any worker starts, so the partition is fixed at spawn time and
/// no two workers can alias a row. Workers whose block is empty (when
/// `num_threads > m`) finish immediately. All workers are joined before
/// the result is returned.
pub fn multiply_static_rows(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    let (m, _, p) = check_dims(a, b)?;
    check_thread_count(num_threads)?;

    let mut c = Matrix::zeros(m, p);
    let blocks = block_rows(m, num_threads);

    thread::scope(|s| {
        let mut rest = c.as_mut_slice();
        let mut start = 0;
        for &rows in &blocks {
            let (block, tail) = mem::take(&mut rest).split_at_mut(rows * p);
            rest = tail;
            let first_row = start;
            s.spawn(move || {
                for (offset, out_row) in block.chunks_mut(p).enumerate() {
                    compute_row(a.row(first_row + offset), b, out_row);
                }
            });
            start += rows;
        }
    });

    Ok(c)
}

/// Per-worker block sizes for a contiguous split of `m` rows.
///
/// Sizes sum to `m` and differ by at most one row; trailing blocks are
/// empty when `num_threads > m`.
fn block_rows(m: usize, num_threads: usize) -> Vec<usize> {
    let base = m / num_threads;
    let extra = m % num_threads;
    (0..num_threads).map(|t| base + usize::from(t < extra)).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::MatrixError;
    use crate::multiply::multiply_serial;

    fn test_matrices(m: usize, n: usize, p: usize) -> (Matrix, Matrix) {
        let a = Matrix::from_vec((0..m * n).map(|x| (x % 100) as f64 / 10.0).collect(), m, n);
        let b = Matrix::from_vec(
            (0..n * p).map(|x| ((x + 50) % 100) as f64 / 10.0).collect(),
            n,
            p,
        );
        (a, b)
    }

    #[test]
    fn test_block_rows_even_split() {
        assert_eq!(block_rows(12, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_block_rows_remainder_goes_first() {
        assert_eq!(block_rows(10, 3), vec![4, 3, 3]);
        assert_eq!(block_rows(7, 5), vec![2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_block_rows_more_threads_than_rows() {
        assert_eq!(block_rows(2, 5), vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_block_rows_covers_all_rows() {
        for m in [1, 2, 7, 16, 33] {
            for t in [1, 2, 3, 7, 17] {
                let blocks = block_rows(m, t);
                assert_eq!(blocks.len(), t);
                assert_eq!(blocks.iter().sum::<usize>(), m);
                let max = blocks.iter().max().unwrap();
                let min = blocks.iter().min().unwrap();
                assert!(max - min <= 1, "uneven split for m={} t={}", m, t);
            }
        }
    }

    #[test]
    fn test_matches_serial() {
        let (a, b) = test_matrices(16, 12, 9);
        let reference = multiply_serial(&a, &b).unwrap();
        for t in [1, 2, 3, 7, 17] {
            let c = multiply_static_rows(&a, &b, t).unwrap();
            assert_abs_diff_eq!(reference.as_slice(), c.as_slice(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_every_row_written() {
        // All-ones inputs: every output element must equal the inner
        // dimension, so a skipped row would show up as zeros.
        let n = 6;
        let a = Matrix::from_vec(vec![1.0; 5 * n], 5, n);
        let b = Matrix::from_vec(vec![1.0; n * 4], n, 4);
        let c = multiply_static_rows(&a, &b, 3).unwrap();
        assert!(c.as_slice().iter().all(|&v| v == n as f64));
    }

    #[test]
    fn test_single_row_matrix() {
        let (a, b) = test_matrices(1, 4, 4);
        let reference = multiply_serial(&a, &b).unwrap();
        let c = multiply_static_rows(&a, &b, 4).unwrap();
        assert_eq!(reference, c);
    }

    #[test]
    fn test_identity() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3, 3);
        let c = multiply_static_rows(&a, &Matrix::identity(3), 2).unwrap();
        assert_abs_diff_eq!(a.as_slice(), c.as_slice(), epsilon = 1e-10);
    }

    #[test]
    fn test_zero_threads() {
        let (a, b) = test_matrices(4, 4, 4);
        assert!(matches!(
            multiply_static_rows(&a, &b, 0),
            Err(MatrixError::InvalidThreadCount(0))
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert!(matches!(
            multiply_static_rows(&a, &b, 2),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }
}
