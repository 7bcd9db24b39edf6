//! Data model for kernel inputs and outcomes.
//!
//! This module provides the shared shapes exchanged between the kernel and
//! its callers:
//!
//! - [`matrix_from_rows`]: validated matrix construction
//! - [`DerivationStep`] / [`StepAction`]: structured worked-solution steps
//! - [`BisectionRecord`], [`NewtonRecord`], [`SecantRecord`], [`FixedPointRecord`]:
//!   per-iteration solver traces behind the [`IterationRecord`] trait
//! - [`SolverConfig`]: tolerance and iteration budget
//! - [`Derivation`] / [`RootSolution`]: value-with-steps and solver outcomes

mod config;
mod matrix;
mod outcome;
mod record;
mod step;

pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use matrix::matrix_from_rows;
pub use outcome::{Derivation, RootSolution, SolveStatus};
pub use record::{
    BisectionRecord, FixedPointRecord, IterationRecord, NewtonRecord, SecantRecord,
};
pub use step::{DerivationStep, StepAction};
