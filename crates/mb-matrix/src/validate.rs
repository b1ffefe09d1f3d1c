use crate::matrix::Matrix;

/// Default maximum allowed elementwise absolute difference when comparing
/// two matrices for equivalence.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Compares `candidate` against `reference` with [`DEFAULT_TOLERANCE`].
pub fn validate(reference: &Matrix, candidate: &Matrix) -> bool {
    validate_with_tolerance(reference, candidate, DEFAULT_TOLERANCE)
}

/// Elementwise comparison within `tolerance`.
///
/// A shape mismatch fails outright. The result is a measured outcome, not
/// an error: differing summation orders can legitimately diverge near the
/// tolerance boundary, so callers report a `false` and carry on.
pub fn validate_with_tolerance(reference: &Matrix, candidate: &Matrix, tolerance: f64) -> bool {
    if reference.rows() != candidate.rows() || reference.cols() != candidate.cols() {
        return false;
    }
    reference
        .as_slice()
        .iter()
        .zip(candidate.as_slice())
        .all(|(r, c)| (r - c).abs() <= tolerance)
}
