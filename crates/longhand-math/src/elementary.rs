//! Elementary matrix operations.

use nalgebra::DMatrix;

use longhand_core::{KernelError, KernelResult};

use crate::ensure_square;

fn check_same_shape(a: &DMatrix<f64>, b: &DMatrix<f64>) -> KernelResult<()> {
    if a.nrows() == b.nrows() && a.ncols() == b.ncols() {
        Ok(())
    } else {
        Err(KernelError::dimension_mismatch(
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols(),
        ))
    }
}

/// Entrywise sum of two matrices of the same shape.
pub fn add(a: &DMatrix<f64>, b: &DMatrix<f64>) -> KernelResult<DMatrix<f64>> {
    check_same_shape(a, b)?;
    Ok(a + b)
}

/// Entrywise difference of two matrices of the same shape.
pub fn subtract(a: &DMatrix<f64>, b: &DMatrix<f64>) -> KernelResult<DMatrix<f64>> {
    check_same_shape(a, b)?;
    Ok(a - b)
}

/// Matrix product of an `(m, k)` matrix by a `(k, n)` matrix.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> KernelResult<DMatrix<f64>> {
    if a.ncols() != b.nrows() {
        return Err(KernelError::dimension_mismatch(
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols(),
        ));
    }
    Ok(a * b)
}

/// Transpose of a matrix.
#[must_use]
pub fn transpose(a: &DMatrix<f64>) -> DMatrix<f64> {
    a.transpose()
}

/// Sum of the diagonal entries of a square matrix.
pub fn trace(a: &DMatrix<f64>) -> KernelResult<f64> {
    ensure_square(a)?;
    Ok(a.trace())
}
