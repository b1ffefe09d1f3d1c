use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mb_matrix::Matrix;

use crate::error::Result;
use crate::matfile::{load_matrix, save_matrix};

/// Uniformly random matrix with values in `[1.0, 100.0)`.
pub fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..rows * cols)
        .map(|_| rng.gen_range(1.0..100.0))
        .collect();
    Matrix::from_vec(data, rows, cols)
}

/// Reproducible variant of [`random_matrix`] driven by a fixed seed.
pub fn random_matrix_seeded(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| rng.gen_range(1.0..100.0))
        .collect();
    Matrix::from_vec(data, rows, cols)
}

/// Load the two square input matrices for a `size` x `size` run,
/// regenerating and saving any file that is missing or unreadable.
pub fn ensure_matrix_files(size: usize, path_a: &Path, path_b: &Path) -> Result<(Matrix, Matrix)> {
    let a = load_or_regenerate(size, path_a)?;
    let b = load_or_regenerate(size, path_b)?;
    Ok((a, b))
}

fn load_or_regenerate(size: usize, path: &Path) -> Result<Matrix> {
    // Any load failure (missing file, wrong dimensions, short payload)
    // is recovered by regenerating the input, not propagated.
    if let Ok(matrix) = load_matrix(path, size, size) {
        return Ok(matrix);
    }
    let matrix = random_matrix(size, size);
    save_matrix(&matrix, path)?;
    Ok(matrix)
}
