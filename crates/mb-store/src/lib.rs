//! `mb-store` - Matrix persistence, input generation, and metrics logging for matbench.
//!
//! This crate provides:
//! - A fixed binary on-disk format for f64 matrices (`matfile`)
//! - Random input generation with optional seeding (`generate`)
//! - Append-only CSV logging of benchmark timings (`metrics`)

pub mod error;
pub mod generate;
pub mod matfile;
pub mod metrics;

pub use error::{Result, StoreError};
pub use generate::{ensure_matrix_files, random_matrix, random_matrix_seeded};
pub use matfile::{load_matrix, save_matrix};
pub use metrics::{append_metrics, PerformanceMetric, METRICS_HEADER};
