//! Iterative root-finding with per-iteration traces.
//!
//! Four classic methods, each returning a
//! [`RootSolution`](longhand_core::RootSolution) whose trace records every
//! iteration:
//!
//! - [`bisection`]: reliable bracketing method, linear convergence
//! - [`newton_raphson`]: quadratic convergence from one guess, needs the
//!   derivative
//! - [`secant`]: superlinear convergence from two guesses, derivative-free
//! - [`fixed_point`]: iterates `x = g(x)` for contraction maps
//!
//! # Choosing a Method
//!
//! | Method | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Sign-changing bracket |
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Fixed-point | Varies | Needs contraction | Iteration map |
//!
//! Running out of iterations is not an error: the solvers return their
//! best estimate with
//! [`SolveStatus::MaxIterationsReached`](longhand_core::SolveStatus).
//! Hard failures such as an invalid bracket or a vanishing derivative are
//! reported as errors.
//!
//! # Example
//!
//! ```rust
//! use longhand_math::solvers::{bisection, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let config = SolverConfig::default()
//!     .with_tolerance(1e-10)
//!     .with_max_iterations(100);
//!
//! let solution = bisection(f, 1.0, 2.0, &config).unwrap();
//! assert!(solution.is_converged());
//! assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod bisection;
mod fixed_point;
mod newton;
mod secant;

pub use bisection::bisection;
pub use fixed_point::fixed_point;
pub use newton::{newton_raphson, newton_raphson_numerical, newton_raphson_program};
pub use secant::secant;

pub use longhand_core::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use longhand_core::{KernelError, KernelResult};

/// Step size for central-difference numerical derivatives.
pub const NUMERIC_DERIVATIVE_STEP: f64 = 1e-5;

/// Evaluates `f` at `x`, rejecting non-finite values.
pub(crate) fn sample<F>(f: &F, x: f64) -> KernelResult<f64>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KernelError::NonFiniteEvaluation { x })
    }
}
