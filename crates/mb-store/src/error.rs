use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "matrix file {}: stored dimensions {}x{} do not match expected {}x{}",
        .path.display(), .stored_rows, .stored_cols, .expected_rows, .expected_cols
    )]
    DimensionMismatch {
        path: PathBuf,
        expected_rows: usize,
        expected_cols: usize,
        stored_rows: usize,
        stored_cols: usize,
    },
    #[error("matrix file {}: expected {} bytes, found {}", .path.display(), .expected, .found)]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("matrix error: {0}")]
    Matrix(#[from] mb_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
