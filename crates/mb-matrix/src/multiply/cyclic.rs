use std::thread;

use crate::error::Result;
use crate::matrix::Matrix;

use super::{check_dims, check_thread_count, compute_row};

/// Parallel multiply with round-robin row interleaving.
///
/// Worker `t` owns rows `t, t + num_threads, t + 2 * num_threads, ...`
/// below `m`. The ownership sets are disjoint and cover every row; like
/// the contiguous split, the partition is fixed before any worker starts.
/// Interleaving spreads rows evenly in index space, which matters when
/// per-row cost varies with row index.
pub fn multiply_cyclic(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    let (m, _, p) = check_dims(a, b)?;
    check_thread_count(num_threads)?;

    let mut c = Matrix::zeros(m, p);

    // Deal the output rows round-robin so each worker holds a disjoint
    // set of row slices.
    let mut owned: Vec<Vec<(usize, &mut [f64])>> =
        (0..num_threads).map(|_| Vec::new()).collect();
    for (i, out_row) in c.as_mut_slice().chunks_mut(p).enumerate() {
        owned[i % num_threads].push((i, out_row));
    }

    thread::scope(|s| {
        for rows in owned {
            s.spawn(move || {
                for (i, out_row) in rows {
                    compute_row(a.row(i), b, out_row);
                }
            });
        }
    });

    Ok(c)
}
