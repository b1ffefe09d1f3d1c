//! `mb-matrix` - Dense f64 matrices and row-partitioned parallel multiplication for matbench.
//!
//! This crate provides:
//! - A row-major `Matrix` type over f64
//! - A serial reference multiply and three parallel strategies that split
//!   output rows across a batch of worker threads: contiguous blocks,
//!   round-robin interleaving, and atomic self-scheduling
//! - A tolerance-based result validator

pub mod error;
pub mod matrix;
pub mod multiply;
pub mod validate;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiply::{
    multiply_cyclic, multiply_dynamic, multiply_serial, multiply_static_rows, Approach,
};
pub use validate::{validate, validate_with_tolerance, DEFAULT_TOLERANCE};
