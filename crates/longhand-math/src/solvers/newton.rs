//! Newton-Raphson root-finding.

use log::debug;

use longhand_core::{
    KernelError, KernelResult, NewtonRecord, RootSolution, SolveStatus, SolverConfig,
};
use longhand_expr::Program;

use crate::solvers::{sample, NUMERIC_DERIVATIVE_STEP};

/// Newton-Raphson root-finding with a per-iteration trace.
///
/// Each iteration moves to `x - f(x) / f'(x)`. Converges when either the
/// residual `|f(x)|` or the step size drops below the tolerance; the
/// returned root is the iterate that passed the test and the residual is
/// its function value.
///
/// A derivative magnitude below `1e-10` stops the solve with
/// [`KernelError::ZeroDerivative`] before the division.
///
/// # Example
///
/// ```rust
/// use longhand_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
/// let config = SolverConfig::default().with_tolerance(1e-10);
///
/// let solution = newton_raphson(f, df, 1.5, &config).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton_raphson<F, D>(
    f: F,
    df: D,
    x0: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<NewtonRecord>>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    config.validate()?;

    let mut trace = Vec::new();
    let mut x = x0;

    for index in 0..config.max_iterations {
        let f_x = sample(&f, x)?;
        let df_x = sample(&df, x)?;

        if df_x.abs() < 1e-10 {
            return Err(KernelError::ZeroDerivative {
                x,
                derivative: df_x,
            });
        }

        let x_next = x - f_x / df_x;
        let error = (x_next - x).abs();
        trace.push(NewtonRecord {
            index,
            x,
            f_x,
            df_x,
            x_next,
            error,
        });

        if f_x.abs() < config.tolerance || error < config.tolerance {
            return Ok(RootSolution {
                status: SolveStatus::Converged,
                root: x,
                residual: f_x,
                iterations: index + 1,
                trace,
            });
        }

        x = x_next;
    }

    let residual = sample(&f, x)?;
    debug!(
        "newton-raphson exhausted {} iterations at x = {}",
        config.max_iterations, x
    );

    Ok(RootSolution {
        status: SolveStatus::MaxIterationsReached,
        root: x,
        residual,
        iterations: config.max_iterations,
        trace,
    })
}

/// Newton-Raphson with a central-difference numerical derivative.
///
/// Uses [`NUMERIC_DERIVATIVE_STEP`] as the step size. Useful when no
/// closed-form derivative is available.
pub fn newton_raphson_numerical<F>(
    f: F,
    x0: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<NewtonRecord>>
where
    F: Fn(f64) -> f64,
{
    let h = NUMERIC_DERIVATIVE_STEP;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);
    newton_raphson(&f, df, x0, config)
}

/// Newton-Raphson driven by a compiled expression.
///
/// Differentiates the program symbolically when it falls inside the
/// polynomial-shaped subset, and falls back to the numerical derivative
/// otherwise.
///
/// # Example
///
/// ```rust
/// use longhand_expr::compile;
/// use longhand_math::solvers::{newton_raphson_program, SolverConfig};
///
/// let program = compile("x^2 - 4").unwrap();
/// let config = SolverConfig::default().with_tolerance(1e-10);
///
/// let solution = newton_raphson_program(&program, 3.0, &config).unwrap();
/// assert!((solution.root - 2.0).abs() < 1e-9);
/// ```
pub fn newton_raphson_program(
    program: &Program,
    x0: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<NewtonRecord>> {
    let f = program.as_fn();
    match program.symbolic_derivative() {
        Some(derivative) => {
            debug!("newton-raphson using symbolic derivative f'(x) = {}", derivative);
            let df = move |x: f64| derivative.eval_raw(x);
            newton_raphson(f, df, x0, config)
        }
        None => {
            debug!(
                "newton-raphson falling back to numerical derivative for f(x) = {}",
                program
            );
            newton_raphson_numerical(f, x0, config)
        }
    }
}
