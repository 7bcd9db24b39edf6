//! Fixed-point iteration.

use log::debug;

use longhand_core::{FixedPointRecord, KernelResult, RootSolution, SolveStatus, SolverConfig};

use crate::solvers::sample;

/// Fixed-point iteration `x = g(x)` with a per-iteration trace.
///
/// Converges when the step size `|g(x) - x|` drops below the tolerance;
/// the returned root is the point the test was evaluated at, and the
/// residual is that step size rather than a function value.
///
/// Convergence requires `g` to be a contraction near the fixed point.
/// When it is not, the iteration wanders until the budget runs out and
/// the best estimate is returned with
/// [`SolveStatus::MaxIterationsReached`].
///
/// # Example
///
/// ```rust
/// use longhand_math::solvers::{fixed_point, SolverConfig};
///
/// // Babylonian iteration for sqrt(2).
/// let g = |x: f64| (x + 2.0 / x) / 2.0;
/// let config = SolverConfig::default().with_tolerance(1e-10);
///
/// let solution = fixed_point(g, 1.0, &config).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<FixedPointRecord>>
where
    G: Fn(f64) -> f64,
{
    config.validate()?;

    let mut trace = Vec::new();
    let mut x = x0;
    let mut last_error = f64::INFINITY;

    for index in 0..config.max_iterations {
        let g_x = sample(&g, x)?;
        let error = (g_x - x).abs();
        trace.push(FixedPointRecord { index, x, g_x, error });

        if error < config.tolerance {
            return Ok(RootSolution {
                status: SolveStatus::Converged,
                root: x,
                residual: error,
                iterations: index + 1,
                trace,
            });
        }

        last_error = error;
        x = g_x;
    }

    debug!(
        "fixed-point exhausted {} iterations at x = {}",
        config.max_iterations, x
    );

    Ok(RootSolution {
        status: SolveStatus::MaxIterationsReached,
        root: x,
        residual: last_error,
        iterations: config.max_iterations,
        trace,
    })
}
