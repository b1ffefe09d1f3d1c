use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::error::Result;
use crate::matrix::Matrix;

use super::{check_dims, check_thread_count, compute_row};

/// Parallel multiply with runtime self-scheduling.
///
/// Workers repeatedly claim the next unclaimed output row from one shared
/// atomic cursor and stop once a claim lands past the last row. Unlike the
/// static and cyclic splits, row-to-thread assignment is decided as the
/// run unfolds, so the split adapts to scheduling jitter. The cursor is
/// the only synchronized shared state; each row index is handed out
/// exactly once, so no row is skipped or written twice.
pub fn multiply_dynamic(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    let (m, _, p) = check_dims(a, b)?;
    check_thread_count(num_threads)?;

    let mut c = Matrix::zeros(m, p);
    let cursor = RowCursor::new(m);
    let out = OutputRows::new(&mut c);

    thread::scope(|s| {
        for _ in 0..num_threads {
            let cursor = &cursor;
            let out = &out;
            s.spawn(move || {
                while let Some(i) = cursor.claim() {
                    // SAFETY: the cursor hands out each row index exactly
                    // once, so this thread holds the only live reference
                    // to row i.
                    let out_row = unsafe { out.row_mut(i) };
                    compute_row(a.row(i), b, out_row);
                }
            });
        }
    });

    Ok(c)
}

/// Hands out output-row indices one claim at a time.
struct RowCursor {
    next: AtomicUsize,
    limit: usize,
}

impl RowCursor {
    fn new(limit: usize) -> Self {
        RowCursor {
            next: AtomicUsize::new(0),
            limit,
        }
    }

    /// Claims the next row, or `None` once all rows are taken.
    ///
    /// Relaxed ordering suffices: the claimed index is the only value
    /// communicated here, and the join barrier publishes the row data.
    fn claim(&self) -> Option<usize> {
        let row = self.next.fetch_add(1, Ordering::Relaxed);
        (row < self.limit).then_some(row)
    }
}

/// Shared view of the output buffer that yields one row at a time.
struct OutputRows<'a> {
    ptr: *mut f64,
    rows: usize,
    cols: usize,
    _marker: PhantomData<&'a mut f64>,
}

// Workers only touch rows they have claimed, so concurrent access never
// overlaps.
unsafe impl Send for OutputRows<'_> {}
unsafe impl Sync for OutputRows<'_> {}

impl<'a> OutputRows<'a> {
    fn new(matrix: &'a mut Matrix) -> Self {
        let rows = matrix.rows();
        let cols = matrix.cols();
        OutputRows {
            ptr: matrix.as_mut_slice().as_mut_ptr(),
            rows,
            cols,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// The caller must hold the unique claim for `row`; no other reference
    /// to that row may exist while the returned slice is live.
    #[allow(clippy::mut_from_ref)]
    unsafe fn row_mut(&self, row: usize) -> &mut [f64] {
        debug_assert!(row < self.rows);
        std::slice::from_raw_parts_mut(self.ptr.add(row * self.cols), self.cols)
    }
}
