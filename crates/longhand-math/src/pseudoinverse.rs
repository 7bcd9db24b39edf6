//! Moore-Penrose pseudoinverse via the normal equations.

use nalgebra::DMatrix;

use longhand_core::{Derivation, DerivationStep, KernelError, KernelResult};

use crate::elementary::{multiply, transpose};
use crate::elimination::inverse;

/// Pseudoinverse of a full-rank matrix with the worked derivation.
///
/// Uses `A+ = (A^T A)^-1 A^T` when the matrix has at least as many rows
/// as columns and `A+ = A^T (A A^T)^-1` otherwise. The relevant Gram
/// product must be invertible; when it is not the input is rank
/// deficient and the computation fails with
/// [`KernelError::RankDeficient`]. Covering rank-deficient input would
/// take an SVD, which this module does not provide.
pub fn pseudoinverse(m: &DMatrix<f64>) -> KernelResult<Derivation<DMatrix<f64>>> {
    if m.nrows() == 0 || m.ncols() == 0 {
        return Err(KernelError::incomplete_input("matrix has no entries"));
    }

    let tall = m.nrows() >= m.ncols();
    let product_name = if tall { "A^T A" } else { "A A^T" };

    let mut steps = vec![DerivationStep::snapshot("Original matrix A", m)];
    steps.push(DerivationStep::note(if tall {
        "Using the left inverse formula A+ = (A^T A)^-1 A^T"
    } else {
        "Using the right inverse formula A+ = A^T (A A^T)^-1"
    }));

    let t = transpose(m);
    steps.push(DerivationStep::snapshot("Step 1: A^T", &t));

    let gram = if tall {
        multiply(&t, m)?
    } else {
        multiply(m, &t)?
    };
    steps.push(DerivationStep::snapshot(
        format!("Step 2: {product_name}"),
        &gram,
    ));

    let gram_inverse = match inverse(&gram) {
        Ok(derivation) => derivation.value,
        Err(KernelError::Singular { .. }) => {
            return Err(KernelError::RankDeficient {
                rows: m.nrows(),
                cols: m.ncols(),
                product: product_name.to_string(),
            });
        }
        Err(other) => return Err(other),
    };
    steps.push(DerivationStep::snapshot(
        format!("Step 3: ({product_name})^-1"),
        &gram_inverse,
    ));

    let pinv = if tall {
        multiply(&gram_inverse, &t)?
    } else {
        multiply(&t, &gram_inverse)?
    };
    steps.push(DerivationStep::snapshot("Pseudoinverse A+", &pinv));

    Ok(Derivation::new(pinv, steps))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use longhand_core::matrix_from_rows;

    use super::*;

    fn assert_matrix_eq(actual: &DMatrix<f64>, expected: &DMatrix<f64>) {
        assert_eq!(actual.shape(), expected.shape());
        for i in 0..actual.nrows() {
            for j in 0..actual.ncols() {
                assert_relative_eq!(actual[(i, j)], expected[(i, j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_tall_matrix_left_inverse() {
        let a = matrix_from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let derivation = pseudoinverse(&a).unwrap();

        assert_eq!(derivation.value.shape(), (2, 3));
        let product = &derivation.value * &a;
        assert_matrix_eq(&product, &DMatrix::identity(2, 2));
    }

    #[test]
    fn test_wide_matrix_right_inverse() {
        let a = matrix_from_rows(&[vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]]).unwrap();
        let derivation = pseudoinverse(&a).unwrap();

        assert_eq!(derivation.value.shape(), (3, 2));
        let product = &a * &derivation.value;
        assert_matrix_eq(&product, &DMatrix::identity(2, 2));
    }

    #[test]
    fn test_square_matches_inverse() {
        let a = matrix_from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let pinv = pseudoinverse(&a).unwrap().value;
        let inv = inverse(&a).unwrap().value;

        assert_matrix_eq(&pinv, &inv);
    }

    #[test]
    fn test_rank_deficient_fails() {
        let a = matrix_from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();

        match pseudoinverse(&a) {
            Err(KernelError::RankDeficient { rows, cols, product }) => {
                assert_eq!((rows, cols), (3, 2));
                assert_eq!(product, "A^T A");
            }
            other => panic!("expected RankDeficient, got {other:?}"),
        }
    }

    #[test]
    fn test_steps_narrate_the_formula() {
        let a = matrix_from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let derivation = pseudoinverse(&a).unwrap();
        let labels: Vec<&str> = derivation.steps.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels[0], "Original matrix A");
        assert!(labels[1].contains("left inverse"));
        assert_eq!(labels[2], "Step 1: A^T");
        assert_eq!(labels[3], "Step 2: A^T A");
        assert_eq!(labels[4], "Step 3: (A^T A)^-1");
        assert_eq!(labels.last().copied(), Some("Pseudoinverse A+"));
    }
}
