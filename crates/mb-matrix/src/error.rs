use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
