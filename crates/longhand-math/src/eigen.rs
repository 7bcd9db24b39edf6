//! Eigenvalues of 2x2 matrices via the characteristic polynomial.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use longhand_core::{Derivation, DerivationStep, KernelError, KernelResult};

use crate::ensure_square;

/// Eigenvalues of a 2x2 real matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EigenPair {
    /// Two real eigenvalues, equal when the discriminant is zero.
    Real {
        /// The larger eigenvalue.
        lambda1: f64,
        /// The smaller eigenvalue.
        lambda2: f64,
    },
    /// A complex conjugate pair `real +- imaginary*i`.
    ComplexConjugate {
        /// Shared real part.
        real: f64,
        /// Imaginary magnitude, non-negative.
        imaginary: f64,
    },
}

/// Eigenvalues of a 2x2 matrix with the worked derivation.
///
/// Larger orders are out of scope and fail with
/// [`KernelError::UnsupportedOrder`]; rectangular input fails with
/// [`KernelError::NotSquare`] first.
pub fn eigenvalues_2x2(m: &DMatrix<f64>) -> KernelResult<Derivation<EigenPair>> {
    ensure_square(m)?;
    if m.nrows() != 2 {
        return Err(KernelError::UnsupportedOrder { n: m.nrows() });
    }

    let trace = m[(0, 0)] + m[(1, 1)];
    let det = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
    let discriminant = trace * trace - 4.0 * det;

    let mut steps = vec![
        DerivationStep::snapshot("Original matrix", m),
        DerivationStep::note(format!(
            "Characteristic polynomial: lambda^2 - ({trace})*lambda + ({det}) = 0"
        )),
        DerivationStep::note(format!(
            "Discriminant: ({trace})^2 - 4({det}) = {discriminant}"
        )),
    ];

    let value = if discriminant < 0.0 {
        let real = trace / 2.0;
        let imaginary = (-discriminant).sqrt() / 2.0;
        steps.push(DerivationStep::note(format!(
            "Negative discriminant: complex pair {real} +- {imaginary}i"
        )));
        EigenPair::ComplexConjugate { real, imaginary }
    } else {
        let sqrt_disc = discriminant.sqrt();
        let lambda1 = (trace + sqrt_disc) / 2.0;
        let lambda2 = (trace - sqrt_disc) / 2.0;
        steps.push(DerivationStep::note(format!(
            "lambda = (({trace}) +- sqrt({discriminant})) / 2"
        )));
        steps.push(DerivationStep::note(format!(
            "lambda1 = {lambda1}, lambda2 = {lambda2}"
        )));
        EigenPair::Real { lambda1, lambda2 }
    };

    Ok(Derivation::new(value, steps))
}
