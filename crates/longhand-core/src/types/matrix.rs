//! Validated matrix construction.

use nalgebra::DMatrix;

use crate::error::{KernelError, KernelResult};

/// Builds a dense matrix from row-major input.
///
/// The input must contain at least one row, every row must be non-empty,
/// and all rows must have the same length. Violations fail with
/// [`KernelError::IncompleteInput`] before any computation runs.
///
/// # Example
///
/// ```rust
/// use longhand_core::matrix_from_rows;
///
/// let m = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!((m.nrows(), m.ncols()), (2, 2));
/// assert_eq!(m[(1, 0)], 3.0);
///
/// assert!(matrix_from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_err());
/// ```
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> KernelResult<DMatrix<f64>> {
    let first = match rows.first() {
        Some(first) => first,
        None => return Err(KernelError::incomplete_input("matrix has no rows")),
    };

    let cols = first.len();
    if cols == 0 {
        return Err(KernelError::incomplete_input("matrix rows are empty"));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(KernelError::incomplete_input(format!(
                "row {} has {} entries, expected {}",
                i + 1,
                row.len(),
                cols
            )));
        }
    }

    Ok(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]))
}
