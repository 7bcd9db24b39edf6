//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

/// Shared configuration for the iterative root-finding solvers.
///
/// Display precision is deliberately not part of this type; rounding is a
/// presentation concern and the solvers always work in full `f64` precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Convergence tolerance, must be finite and positive.
    pub tolerance: f64,
    /// Maximum number of iterations, must be at least 1.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with the default tolerance and budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration is usable by a solver.
    pub fn validate(&self) -> KernelResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(KernelError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(KernelError::InvalidIterationBudget);
        }
        Ok(())
    }
}
