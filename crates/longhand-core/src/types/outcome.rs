//! Result containers returned by the numeric routines.

use serde::{Deserialize, Serialize};

/// A computed value together with the worked steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivation<T> {
    /// The final computed value.
    pub value: T,
    /// Worked steps, in the order they were performed.
    pub steps: Vec<super::DerivationStep>,
}

impl<T> Derivation<T> {
    /// Wraps a value with its derivation steps.
    pub fn new(value: T, steps: Vec<super::DerivationStep>) -> Self {
        Self { value, steps }
    }

    /// Transforms the value while keeping the steps.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Derivation<U> {
        Derivation {
            value: f(self.value),
            steps: self.steps,
        }
    }
}

/// How an iterative solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The convergence test passed within the iteration budget.
    Converged,
    /// The budget ran out; the result holds the best estimate so far.
    MaxIterationsReached,
}

impl SolveStatus {
    /// True when the convergence test passed.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::MaxIterationsReached => write!(f, "max iterations reached"),
        }
    }
}

/// Outcome of an iterative root-finding solve.
///
/// Returned for both convergence and budget exhaustion; hard failures such
/// as an invalid bracket or a zero derivative are reported as errors instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootSolution<R> {
    /// Whether the solve converged or ran out of iterations.
    pub status: SolveStatus,
    /// The root estimate.
    pub root: f64,
    /// Function value at the root estimate (step size for fixed-point).
    pub residual: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Per-iteration records, one per iteration performed.
    pub trace: Vec<R>,
}

impl<R> RootSolution<R> {
    /// True when the solve converged within budget.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DerivationStep;

    #[test]
    fn test_map_keeps_steps() {
        let derivation = Derivation::new(6.0_f64, vec![DerivationStep::note("halve")]);
        let mapped = derivation.map(|v| v / 2.0);

        assert_eq!(mapped.value, 3.0);
        assert_eq!(mapped.steps.len(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Converged.to_string(), "converged");
        assert_eq!(
            SolveStatus::MaxIterationsReached.to_string(),
            "max iterations reached"
        );
        assert!(SolveStatus::Converged.is_converged());
        assert!(!SolveStatus::MaxIterationsReached.is_converged());
    }

    #[test]
    fn test_solution_convergence_flag() {
        let solution: RootSolution<crate::types::BisectionRecord> = RootSolution {
            status: SolveStatus::MaxIterationsReached,
            root: 1.5,
            residual: 0.1,
            iterations: 20,
            trace: Vec::new(),
        };

        assert!(!solution.is_converged());
        assert_eq!(solution.iterations, 20);
    }
}
