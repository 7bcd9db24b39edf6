//! End-to-end scenarios following worked textbook examples.
//!
//! Each test mirrors a calculation a student would carry out by hand,
//! checking both the final value and the narrated steps.

use approx::assert_relative_eq;
use longhand_expr::compile;
use longhand_math::prelude::*;
use nalgebra::DMatrix;

fn assert_matrix_eq(actual: &DMatrix<f64>, expected: &DMatrix<f64>, epsilon: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for i in 0..actual.nrows() {
        for j in 0..actual.ncols() {
            assert_relative_eq!(actual[(i, j)], expected[(i, j)], epsilon = epsilon);
        }
    }
}

// =============================================================================
// MATRIX ALGEBRA
// =============================================================================

#[test]
fn scenario_matrix_addition() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = matrix_from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let sum = add(&a, &b).unwrap();
    let expected = matrix_from_rows(&[vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap();

    assert_matrix_eq(&sum, &expected, 1e-15);
}

#[test]
fn scenario_inverse_of_2x2() {
    let a = matrix_from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();

    let derivation = inverse(&a).unwrap();
    let expected = matrix_from_rows(&[vec![0.6, -0.7], vec![-0.2, 0.4]]).unwrap();

    assert_matrix_eq(&derivation.value, &expected, 1e-12);

    // The derivation narrates augmentation, row operations, and readout.
    assert_eq!(derivation.steps[0].label, "Original matrix");
    assert_eq!(derivation.steps[1].label, "Augmented matrix [A | I]");
    assert!(derivation
        .steps
        .iter()
        .any(|s| matches!(s.action, StepAction::Scale { .. })));
    assert!(derivation
        .steps
        .iter()
        .any(|s| matches!(s.action, StepAction::Eliminate { .. })));
    assert_eq!(
        derivation.steps.last().unwrap().label,
        "Inverse read from the right block"
    );

    // Verify A * A^-1 = I.
    let product = multiply(&a, &derivation.value).unwrap();
    assert_matrix_eq(&product, &DMatrix::identity(2, 2), 1e-12);
}

#[test]
fn scenario_singular_matrix_rejected() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();

    let err = inverse(&a).unwrap_err();
    assert!(matches!(err, KernelError::Singular { .. }));
    assert!(err.to_string().contains("singular"));
}

#[test]
fn scenario_determinant_of_2x2() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

    let derivation = determinant(&a).unwrap();

    assert_relative_eq!(derivation.value, -2.0);
    assert!(derivation.steps.iter().any(|s| s.label == "det = ad - bc"));
}

#[test]
fn scenario_rref_solves_a_system() {
    // x + 2y = 5, 3x + 4y = 11 has the solution x = 1, y = 2.
    let system = matrix_from_rows(&[vec![1.0, 2.0, 5.0], vec![3.0, 4.0, 11.0]]).unwrap();

    let derivation = rref(&system).unwrap();

    assert_relative_eq!(derivation.value[(0, 2)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(derivation.value[(1, 2)], 2.0, epsilon = 1e-12);

    // Every row operation carries both snapshots.
    for step in &derivation.steps {
        if step.action != StepAction::Annotation {
            assert!(step.before.is_some());
            assert!(step.after.is_some());
        }
    }
}

#[test]
fn scenario_rank_of_dependent_rows() {
    let a = matrix_from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![3.0, 6.0, 9.0],
    ])
    .unwrap();

    assert_eq!(rank(&a).unwrap().value, 1);
    assert_eq!(row_space_basis(&a).unwrap().value.len(), 1);
}

#[test]
fn scenario_pseudoinverse_of_tall_matrix() {
    let a = matrix_from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();

    let derivation = pseudoinverse(&a).unwrap();
    let product = multiply(&derivation.value, &a).unwrap();

    assert_matrix_eq(&product, &DMatrix::identity(2, 2), 1e-12);
}

#[test]
fn scenario_eigenvalues_of_2x2() {
    let diagonal = matrix_from_rows(&[vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap();
    match eigenvalues_2x2(&diagonal).unwrap().value {
        EigenPair::Real { lambda1, lambda2 } => {
            assert_relative_eq!(lambda1, 3.0);
            assert_relative_eq!(lambda2, 2.0);
        }
        other => panic!("expected real eigenvalues, got {other:?}"),
    }

    let rotation = matrix_from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap();
    match eigenvalues_2x2(&rotation).unwrap().value {
        EigenPair::ComplexConjugate { real, imaginary } => {
            assert_relative_eq!(real, 0.0);
            assert_relative_eq!(imaginary, 1.0);
        }
        other => panic!("expected complex eigenvalues, got {other:?}"),
    }

    let big = DMatrix::identity(4, 4);
    assert!(matches!(
        eigenvalues_2x2(&big),
        Err(KernelError::UnsupportedOrder { n: 4 })
    ));
}

#[test]
fn scenario_norms_of_one_matrix() {
    let a = matrix_from_rows(&[vec![1.0, -2.0], vec![-3.0, 4.0]]).unwrap();

    assert_relative_eq!(norm(&a, NormKind::Frobenius).unwrap().value, 30.0_f64.sqrt());
    assert_relative_eq!(norm(&a, NormKind::One).unwrap().value, 6.0);
    assert_relative_eq!(norm(&a, NormKind::Infinity).unwrap().value, 7.0);
    assert_relative_eq!(norm(&a, NormKind::Max).unwrap().value, 4.0);
    assert!(norm(&a, NormKind::Spectral).unwrap().estimate);
}

// =============================================================================
// ROOT FINDING
// =============================================================================

#[test]
fn scenario_bisection_with_default_settings() {
    // f(x) = x^2 - 4 on [1, 2.5] with the default tolerance of 1e-3.
    let f = |x: f64| x * x - 4.0;

    let solution = bisection(f, 1.0, 2.5, &SolverConfig::default()).unwrap();

    assert!(solution.is_converged());
    assert!(solution.iterations > 1);
    assert!(solution.iterations <= 20);
    assert!((solution.root - 2.0).abs() < 1e-2);

    for (i, record) in solution.trace.iter().enumerate() {
        assert_eq!(record.index as usize, i);
        assert!(record.a < record.b);
        assert_relative_eq!(record.c, (record.a + record.b) / 2.0);
        assert_relative_eq!(record.error, (record.b - record.a) / 2.0);
    }
}

#[test]
fn scenario_newton_from_expression() {
    let program = compile("x^2 - 4").unwrap();
    let derivative = program.symbolic_derivative().unwrap();
    assert_eq!(derivative.source(), "2 * x");

    let config = SolverConfig::default().with_tolerance(1e-10);
    let solution = newton_raphson_program(&program, 3.0, &config).unwrap();

    assert!(solution.is_converged());
    assert_relative_eq!(solution.root, 2.0, epsilon = 1e-9);
    assert!(solution.iterations < 10);
}

#[test]
fn scenario_newton_transcendental_fallback() {
    // No symbolic derivative exists, so the numerical path is used.
    let program = compile("cos(x) - x").unwrap();
    assert!(program.symbolic_derivative().is_none());

    let config = SolverConfig::default().with_tolerance(1e-10);
    let solution = newton_raphson_program(&program, 1.0, &config).unwrap();

    assert!(solution.is_converged());
    assert_relative_eq!(solution.root, 0.739_085_133_2, epsilon = 1e-7);
}

#[test]
fn scenario_secant_on_a_cubic() {
    let f = |x: f64| x * x * x - x - 2.0;
    let config = SolverConfig::default()
        .with_tolerance(1e-10)
        .with_max_iterations(50);

    let solution = secant(f, 1.0, 2.0, &config).unwrap();

    assert!(solution.is_converged());
    assert_relative_eq!(f(solution.root), 0.0, epsilon = 1e-8);
}

#[test]
fn scenario_fixed_point_babylonian() {
    // g(x) = (x + 4/x) / 2 has sqrt(4) = 2 as its fixed point, and the
    // starting guess already sits on it.
    let g = |x: f64| (x + 4.0 / x) / 2.0;

    let solution = fixed_point(g, 2.0, &SolverConfig::default()).unwrap();

    assert!(solution.is_converged());
    assert_eq!(solution.iterations, 1);
    assert_relative_eq!(solution.root, 2.0);
}

#[test]
fn scenario_budget_exhaustion_is_not_an_error() {
    // A drifting map never converges; the best estimate comes back anyway.
    let g = |x: f64| x + 1.0;
    let drifting = fixed_point(g, 0.0, &SolverConfig::default()).unwrap();

    assert_eq!(drifting.status, SolveStatus::MaxIterationsReached);
    assert!(!drifting.is_converged());
    assert_eq!(drifting.trace.len(), 20);

    // Bisection with an unreachable tolerance reports the last midpoint.
    let f = |x: f64| x * x - 2.0;
    let config = SolverConfig::default()
        .with_tolerance(1e-300)
        .with_max_iterations(10);
    let stalled = bisection(f, 1.0, 2.0, &config).unwrap();

    assert_eq!(stalled.status, SolveStatus::MaxIterationsReached);
    assert!((stalled.root - std::f64::consts::SQRT_2).abs() < 1e-2);
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[test]
fn scenario_results_serialize_for_presentation() {
    let f = |x: f64| x * x - 4.0;
    let solution = bisection(f, 1.0, 3.0, &SolverConfig::default()).unwrap();

    let json = serde_json::to_string(&solution).unwrap();
    let back: RootSolution<BisectionRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);

    let a = matrix_from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    let derivation = inverse(&a).unwrap();

    let json = serde_json::to_string(&derivation).unwrap();
    let back: Derivation<DMatrix<f64>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.value, derivation.value);
    assert_eq!(back.steps.len(), derivation.steps.len());
}
