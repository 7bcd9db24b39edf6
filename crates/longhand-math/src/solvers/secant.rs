//! Secant-method root-finding.

use log::debug;

use longhand_core::{
    KernelError, KernelResult, RootSolution, SecantRecord, SolveStatus, SolverConfig,
};

use crate::solvers::sample;

/// Secant-method root-finding with a per-iteration trace.
///
/// Tracks two working points and replaces the older one with the root of
/// the secant line through them. Converges when either the residual at
/// the newer point or the step size drops below the tolerance.
///
/// The two starting guesses must differ. A difference between successive
/// function values below `1e-10` makes the secant flat and stops the
/// solve with [`KernelError::DegenerateSlope`].
///
/// # Example
///
/// ```rust
/// use longhand_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let config = SolverConfig::default().with_tolerance(1e-10);
///
/// let solution = secant(f, 1.0, 2.0, &config).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<SecantRecord>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if x0 == x1 {
        return Err(KernelError::IdenticalGuesses { x: x0 });
    }

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = sample(&f, x_prev)?;
    let mut f_curr = sample(&f, x_curr)?;

    let mut trace = Vec::new();

    for index in 0..config.max_iterations {
        let delta_f = f_curr - f_prev;
        if delta_f.abs() < 1e-10 {
            return Err(KernelError::DegenerateSlope {
                f_x0: f_prev,
                f_x1: f_curr,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / delta_f;
        let error = (x_next - x_curr).abs();
        trace.push(SecantRecord {
            index,
            x0: x_prev,
            x1: x_curr,
            f_x0: f_prev,
            f_x1: f_curr,
            x_next,
            error,
        });

        if f_curr.abs() < config.tolerance || error < config.tolerance {
            return Ok(RootSolution {
                status: SolveStatus::Converged,
                root: x_curr,
                residual: f_curr,
                iterations: index + 1,
                trace,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = sample(&f, x_curr)?;
    }

    debug!(
        "secant exhausted {} iterations at x = {}",
        config.max_iterations, x_curr
    );

    Ok(RootSolution {
        status: SolveStatus::MaxIterationsReached,
        root: x_curr,
        residual: f_curr,
        iterations: config.max_iterations,
        trace,
    })
}
