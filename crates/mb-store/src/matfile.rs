use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use memmap2::Mmap;

use mb_matrix::Matrix;

use crate::error::{Result, StoreError};

/// Byte length of the dimension header: two little-endian u64 values.
/// There is no magic number or version field; the layout is fixed.
pub const HEADER_BYTES: usize = 16;

/// Write `matrix` to `path` in the binary matrix format.
///
/// Layout: `rows: u64 LE`, `cols: u64 LE`, then `rows * cols` f64 LE
/// values in row-major order, no padding.
pub fn save_matrix(matrix: &Matrix, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(matrix.rows() as u64).to_le_bytes())?;
    writer.write_all(&(matrix.cols() as u64).to_le_bytes())?;
    for &value in matrix.as_slice() {
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a matrix from `path`, rejecting it if the stored dimensions
/// differ from the expected ones.
///
/// The header is read with buffered I/O, then the file is memory-mapped
/// so the payload can be decoded from one contiguous slice.
pub fn load_matrix(path: &Path, expected_rows: usize, expected_cols: usize) -> Result<Matrix> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(&file);

    let mut buf8 = [0u8; 8];
    reader.read_exact(&mut buf8)?;
    let stored_rows = u64::from_le_bytes(buf8) as usize;
    reader.read_exact(&mut buf8)?;
    let stored_cols = u64::from_le_bytes(buf8) as usize;

    if stored_rows != expected_rows || stored_cols != expected_cols {
        return Err(StoreError::DimensionMismatch {
            path: path.to_path_buf(),
            expected_rows,
            expected_cols,
            stored_rows,
            stored_cols,
        });
    }

    let numel = stored_rows * stored_cols;
    let expected_len = HEADER_BYTES + numel * 8;

    let mmap = unsafe { Mmap::map(&file)? };
    if mmap.len() < expected_len {
        return Err(StoreError::Truncated {
            path: path.to_path_buf(),
            expected: expected_len,
            found: mmap.len(),
        });
    }

    let data: Vec<f64> = mmap[HEADER_BYTES..expected_len]
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();

    Ok(Matrix::from_vec(data, stored_rows, stored_cols))
}
