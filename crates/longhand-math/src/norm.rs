//! Matrix norms.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use longhand_core::KernelResult;

use crate::ensure_square;

/// The norms the kernel can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormKind {
    /// Square root of the sum of squared entries.
    Frobenius,
    /// Maximum absolute column sum.
    One,
    /// Maximum absolute row sum.
    Infinity,
    /// Largest absolute entry.
    Max,
    /// Largest absolute eigenvalue, estimated by the maximum row sum.
    Spectral,
}

impl std::fmt::Display for NormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Frobenius => "Frobenius",
            Self::One => "1-norm",
            Self::Infinity => "infinity norm",
            Self::Max => "max norm",
            Self::Spectral => "spectral norm",
        };
        write!(f, "{name}")
    }
}

/// A computed norm, flagged when the value is an estimate rather than
/// the exact norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormValue {
    /// Which norm was computed.
    pub kind: NormKind,
    /// The computed value.
    pub value: f64,
    /// True when `value` is an upper-bound estimate.
    pub estimate: bool,
}

fn max_column_abs_sum(m: &DMatrix<f64>) -> f64 {
    (0..m.ncols())
        .map(|j| m.column(j).iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

fn max_row_abs_sum(m: &DMatrix<f64>) -> f64 {
    (0..m.nrows())
        .map(|i| m.row(i).iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Computes a matrix norm.
///
/// [`NormKind::Spectral`] requires a square matrix and reports the maximum
/// row sum as an upper-bound estimate of the spectral radius; the result is
/// flagged with `estimate = true`.
pub fn norm(m: &DMatrix<f64>, kind: NormKind) -> KernelResult<NormValue> {
    let (value, estimate) = match kind {
        NormKind::Frobenius => (m.iter().map(|v| v * v).sum::<f64>().sqrt(), false),
        NormKind::One => (max_column_abs_sum(m), false),
        NormKind::Infinity => (max_row_abs_sum(m), false),
        NormKind::Max => (m.iter().fold(0.0, |acc, v| f64::max(acc, v.abs())), false),
        NormKind::Spectral => {
            ensure_square(m)?;
            (max_row_abs_sum(m), true)
        }
    };
    Ok(NormValue { kind, value, estimate })
}
