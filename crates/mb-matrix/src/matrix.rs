use std::fmt;

/// A dense matrix of f64 values in row-major order.
///
/// Element (i, j) lives at `data[i * cols + j]`; the buffer length is
/// always exactly `rows * cols`. Every multiply call produces one fresh
/// output matrix, so there is no shared ownership and no resizing.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match {}x{} (numel={})",
            data.len(),
            rows,
            cols,
            rows * cols
        );
        Matrix { data, rows, cols }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create the `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (i, j). Indices are the caller's contract; checked in
    /// debug builds only.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    /// Store `value` at (i, j). Same index contract as [`Matrix::get`].
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
    }

    /// Row `i` as a slice of `cols` elements.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row `i` as a mutable slice of `cols` elements.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The whole buffer in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl fmt::Display for Matrix {
    /// Renders small matrices in full with 2-decimal cells; larger ones by
    /// dimensions only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix:", self.rows, self.cols)?;
        if self.rows > 10 {
            return writeln!(f, "(too large to display)");
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:8.2} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
