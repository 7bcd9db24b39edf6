//! # Longhand Core
//!
//! Core types and the error model for the Longhand step-by-step math kernel.
//!
//! This crate provides the foundational building blocks used throughout Longhand:
//!
//! - **Matrix construction**: validated construction of [`nalgebra::DMatrix`] values from row input
//! - **Derivation steps**: structured row operations and matrix snapshots for worked solutions
//! - **Iteration records**: per-iteration traces for the root-finding methods
//! - **Configuration**: tolerance and iteration budget for iterative solvers
//! - **Outcomes**: value-plus-steps results and root-finding solutions
//!
//! ## Design Philosophy
//!
//! - **Exactly one outcome**: every operation yields a value or a single structured error
//! - **Structured steps**: derivations carry data, not markup; rendering is the caller's job
//! - **Explicit configuration**: solver knobs travel in a config struct, never in globals
//!
//! ## Example
//!
//! ```rust
//! use longhand_core::prelude::*;
//!
//! let m = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(m.nrows(), 2);
//!
//! let config = SolverConfig::default().with_tolerance(1e-6);
//! assert!(config.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{KernelError, KernelResult};
    pub use crate::types::{
        matrix_from_rows, BisectionRecord, Derivation, DerivationStep, FixedPointRecord,
        IterationRecord, NewtonRecord, RootSolution, SecantRecord, SolveStatus, SolverConfig,
        StepAction, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    };
}

pub use error::{KernelError, KernelResult};
pub use types::{
    matrix_from_rows, BisectionRecord, Derivation, DerivationStep, FixedPointRecord,
    IterationRecord, NewtonRecord, RootSolution, SecantRecord, SolveStatus, SolverConfig,
    StepAction, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
