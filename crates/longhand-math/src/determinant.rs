//! Determinants with worked expansion steps.
//!
//! Sizes 1 through 3 use their closed forms; larger matrices expand
//! cofactors along the first row, reusing the closed forms at the base.
//! Cofactor expansion costs O(n!), so this module is only suitable for
//! the small matrices the derivation output is meant for; use an LU
//! factorization when only the value of a large determinant is needed.

use nalgebra::DMatrix;

use longhand_core::{Derivation, DerivationStep, KernelError, KernelResult};

use crate::ensure_square;

fn two_by_two(m: &DMatrix<f64>) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

fn sarrus(m: &DMatrix<f64>) -> f64 {
    let (a, b, c) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (d, e, f) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (g, h, i) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Minor obtained by deleting row 0 and column `skip_col`.
fn first_row_minor(m: &DMatrix<f64>, skip_col: usize) -> DMatrix<f64> {
    DMatrix::from_fn(m.nrows() - 1, m.ncols() - 1, |i, j| {
        let col = if j < skip_col { j } else { j + 1 };
        m[(i + 1, col)]
    })
}

fn cofactor_expansion(m: &DMatrix<f64>) -> f64 {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => two_by_two(m),
        3 => sarrus(m),
        n => {
            let mut det = 0.0;
            let mut sign = 1.0;
            for j in 0..n {
                det += sign * m[(0, j)] * cofactor_expansion(&first_row_minor(m, j));
                sign = -sign;
            }
            det
        }
    }
}

/// Determinant of a square matrix with the worked expansion.
pub fn determinant(m: &DMatrix<f64>) -> KernelResult<Derivation<f64>> {
    ensure_square(m)?;
    if m.nrows() == 0 {
        return Err(KernelError::incomplete_input("matrix has no entries"));
    }

    let n = m.nrows();
    let mut steps = vec![DerivationStep::snapshot("Original matrix", m)];

    let value = match n {
        1 => {
            steps.push(DerivationStep::note("det [a] = a"));
            m[(0, 0)]
        }
        2 => {
            let value = two_by_two(m);
            steps.push(DerivationStep::note("det = ad - bc"));
            steps.push(DerivationStep::note(format!(
                "det = ({})({}) - ({})({}) = {}",
                m[(0, 0)],
                m[(1, 1)],
                m[(0, 1)],
                m[(1, 0)],
                value
            )));
            value
        }
        3 => {
            let value = sarrus(m);
            steps.push(DerivationStep::note(
                "det = a(ei - fh) - b(di - fg) + c(dh - eg)",
            ));
            steps.push(DerivationStep::note(format!("det = {value}")));
            value
        }
        _ => {
            steps.push(DerivationStep::note(format!(
                "Cofactor expansion along the first row of a {n}x{n} matrix"
            )));
            let value = cofactor_expansion(m);
            steps.push(DerivationStep::note(format!("det = {value}")));
            value
        }
    };

    Ok(Derivation::new(value, steps))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use longhand_core::matrix_from_rows;

    use super::*;

    #[test]
    fn test_one_by_one() {
        let m = matrix_from_rows(&[vec![-7.5]]).unwrap();
        assert_relative_eq!(determinant(&m).unwrap().value, -7.5);
    }

    #[test]
    fn test_two_by_two() {
        let m = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let derivation = determinant(&m).unwrap();

        assert_relative_eq!(derivation.value, -2.0);
        assert!(derivation.steps.iter().any(|s| s.label == "det = ad - bc"));
    }

    #[test]
    fn test_three_by_three() {
        let m = matrix_from_rows(&[
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ])
        .unwrap();

        assert_relative_eq!(determinant(&m).unwrap().value, -306.0);
    }

    #[test]
    fn test_cofactor_expansion() {
        let m = matrix_from_rows(&[
            vec![2.0, 1.0, 0.0, 3.0],
            vec![0.0, 3.0, 1.0, 0.0],
            vec![0.0, 0.0, 4.0, 1.0],
            vec![0.0, 0.0, 0.0, 5.0],
        ])
        .unwrap();
        let derivation = determinant(&m).unwrap();

        assert_relative_eq!(derivation.value, 120.0);
        assert!(derivation
            .steps
            .iter()
            .any(|s| s.label.contains("Cofactor expansion")));
    }

    #[test]
    fn test_identity_and_singular() {
        assert_relative_eq!(determinant(&DMatrix::identity(3, 3)).unwrap().value, 1.0);

        let singular = matrix_from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_relative_eq!(determinant(&singular).unwrap().value, 0.0);
    }

    #[test]
    fn test_rejects_non_square() {
        let rect = DMatrix::zeros(2, 3);
        assert!(matches!(
            determinant(&rect),
            Err(KernelError::NotSquare { .. })
        ));
    }
}
