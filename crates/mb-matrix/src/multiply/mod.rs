//! Multiplication strategies.
//!
//! All four variants compute `C = A @ B` with the same per-row kernel and
//! the same ascending-`k` accumulation order, so they agree bit-for-bit;
//! they differ only in how output rows are assigned to worker threads.

pub mod cyclic;
pub mod dynamic;
pub mod serial;
pub mod static_rows;

pub use cyclic::multiply_cyclic;
pub use dynamic::multiply_dynamic;
pub use serial::multiply_serial;
pub use static_rows::multiply_static_rows;

use std::fmt;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// The available multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    /// Single-threaded reference implementation.
    Serial,
    /// Contiguous row blocks, fixed before spawn.
    StaticRows,
    /// Round-robin row interleaving, fixed before spawn.
    Cyclic,
    /// Self-scheduling via a shared atomic row cursor.
    Dynamic,
}

impl Approach {
    /// The parallel strategies, in benchmark order.
    pub const PARALLEL: [Approach; 3] = [Approach::StaticRows, Approach::Cyclic, Approach::Dynamic];

    /// Stable label used in metrics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Serial => "serial",
            Approach::StaticRows => "static_rows",
            Approach::Cyclic => "cyclic",
            Approach::Dynamic => "dynamic",
        }
    }

    /// Run this strategy on `a` and `b`. `Serial` ignores `num_threads`.
    pub fn run(&self, a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
        match self {
            Approach::Serial => multiply_serial(a, b),
            Approach::StaticRows => multiply_static_rows(a, b, num_threads),
            Approach::Cyclic => multiply_cyclic(a, b, num_threads),
            Approach::Dynamic => multiply_dynamic(a, b, num_threads),
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks that the inner dimensions agree and returns `(m, n, p)` for an
/// `m x n` times `n x p` product.
pub(crate) fn check_dims(a: &Matrix, b: &Matrix) -> Result<(usize, usize, usize)> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            m: a.rows(),
            k: a.cols(),
            k2: b.rows(),
            n: b.cols(),
        });
    }
    Ok((a.rows(), a.cols(), b.cols()))
}

/// A zero worker count is a caller contract violation.
pub(crate) fn check_thread_count(num_threads: usize) -> Result<()> {
    if num_threads == 0 {
        return Err(MatrixError::InvalidThreadCount(num_threads));
    }
    Ok(())
}

/// Computes one output row: `out[j] = sum_k a_row[k] * b[k][j]`.
///
/// Accumulation runs in ascending `k`, which fixes the floating-point
/// summation order shared by every strategy.
pub(crate) fn compute_row(a_row: &[f64], b: &Matrix, out: &mut [f64]) {
    for (j, out_j) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (k, &a_ik) in a_row.iter().enumerate() {
            sum += a_ik * b.get(k, j);
        }
        *out_j = sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_labels() {
        assert_eq!(Approach::Serial.as_str(), "serial");
        assert_eq!(Approach::StaticRows.as_str(), "static_rows");
        assert_eq!(Approach::Cyclic.as_str(), "cyclic");
        assert_eq!(Approach::Dynamic.as_str(), "dynamic");
        assert_eq!(Approach::Cyclic.to_string(), "cyclic");
    }

    #[test]
    fn test_check_dims_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        match check_dims(&a, &b) {
            Err(MatrixError::DimensionMismatch { m, k, k2, n }) => {
                assert_eq!((m, k, k2, n), (2, 3, 2, 2));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_run_dispatches_all_approaches() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = Matrix::identity(2);
        for approach in [
            Approach::Serial,
            Approach::StaticRows,
            Approach::Cyclic,
            Approach::Dynamic,
        ] {
            let c = approach.run(&a, &b, 2).unwrap();
            assert_eq!(c, a, "{} times identity should reproduce a", approach);
        }
    }

    #[test]
    fn test_compute_row() {
        // [1, 2] times [[5, 6], [7, 8]] -> [19, 22]
        let b = Matrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
        let mut out = vec![0.0; 2];
        compute_row(&[1.0, 2.0], &b, &mut out);
        assert_eq!(out, vec![19.0, 22.0]);
    }
}
