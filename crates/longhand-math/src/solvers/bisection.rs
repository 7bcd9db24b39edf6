//! Bisection root-finding.

use log::debug;

use longhand_core::{
    BisectionRecord, KernelError, KernelResult, RootSolution, SolveStatus, SolverConfig,
};

use crate::solvers::sample;

/// Bisection root-finding with a per-iteration trace.
///
/// Repeatedly halves the bracket and keeps the half whose endpoints
/// straddle the root. Converges when either the midpoint residual or the
/// bracket half-width drops below the tolerance.
///
/// Requires `a < b` and `f(a) * f(b) < 0`: the bracket must strictly
/// straddle the root, so an endpoint that is exactly a root is rejected
/// with [`KernelError::SignConditionViolated`].
///
/// # Example
///
/// ```rust
/// use longhand_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 4.0;
///
/// let solution = bisection(f, 1.0, 3.0, &SolverConfig::default()).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.root - 2.0).abs() < 1e-2);
/// assert_eq!(solution.trace.len() as u32, solution.iterations);
/// ```
pub fn bisection<F>(
    f: F,
    a: f64,
    b: f64,
    config: &SolverConfig,
) -> KernelResult<RootSolution<BisectionRecord>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if a >= b {
        return Err(KernelError::InvalidBracket { a, b });
    }

    let mut lo = a;
    let mut hi = b;
    let mut f_lo = sample(&f, lo)?;
    let mut f_hi = sample(&f, hi)?;

    if f_lo * f_hi >= 0.0 {
        return Err(KernelError::SignConditionViolated {
            a,
            b,
            f_a: f_lo,
            f_b: f_hi,
        });
    }

    let mut trace = Vec::with_capacity(config.max_iterations as usize);
    let mut estimate = (lo + hi) / 2.0;
    let mut residual = f_lo;

    for index in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = sample(&f, mid)?;
        let half_width = (hi - lo) / 2.0;

        trace.push(BisectionRecord {
            index,
            a: lo,
            b: hi,
            c: mid,
            f_a: f_lo,
            f_b: f_hi,
            f_c: f_mid,
            error: half_width,
        });

        if f_mid.abs() < config.tolerance || half_width < config.tolerance {
            return Ok(RootSolution {
                status: SolveStatus::Converged,
                root: mid,
                residual: f_mid,
                iterations: index + 1,
                trace,
            });
        }

        estimate = mid;
        residual = f_mid;

        if f_mid * f_lo < 0.0 {
            hi = mid;
            f_hi = f_mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    debug!(
        "bisection exhausted {} iterations, half-width {:.2e}",
        config.max_iterations,
        (hi - lo) / 2.0
    );

    Ok(RootSolution {
        status: SolveStatus::MaxIterationsReached,
        root: estimate,
        residual,
        iterations: config.max_iterations,
        trace,
    })
}
