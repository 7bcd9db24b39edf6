//! # Longhand Math
//!
//! Matrix algebra and root-finding routines that show their work:
//!
//! - **Elementary operations**: addition, subtraction, multiplication,
//!   transpose, trace
//! - **Norms**: Frobenius, induced 1 and infinity, max-entry, and a
//!   spectral estimate
//! - **Gaussian elimination**: row echelon and reduced row echelon forms
//!   with a full row-operation trail, plus inverse, rank, and row space
//! - **Determinant**: closed forms up to 3x3, cofactor expansion beyond
//! - **Pseudoinverse**: Moore-Penrose via the normal equations
//! - **Eigenvalues**: 2x2 characteristic polynomial, real or complex
//! - **Root finding**: bisection, Newton-Raphson, secant, and fixed-point
//!   iteration with per-iteration traces
//!
//! Every matrix routine returns a [`Derivation`](longhand_core::Derivation)
//! pairing the value with the worked steps that produced it; every solver
//! returns a [`RootSolution`](longhand_core::RootSolution) with its
//! iteration trace.
//!
//! ## Design Philosophy
//!
//! - **Steps are the product**: routines narrate each row operation and
//!   intermediate matrix, not just the answer
//! - **Full precision throughout**: rounding is left to presentation
//! - **Budget exhaustion is an outcome**: solvers report their best
//!   estimate instead of failing when iterations run out
//!
//! ## Example
//!
//! ```rust
//! use longhand_math::prelude::*;
//!
//! let m = matrix_from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
//! let derivation = inverse(&m).unwrap();
//! assert!(derivation.steps.len() > 2);
//! assert!((derivation.value[(0, 0)] - 0.6).abs() < 1e-12);
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
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod determinant;
pub mod eigen;
pub mod elementary;
pub mod elimination;
pub mod norm;
pub mod pseudoinverse;
pub mod solvers;

use nalgebra::DMatrix;

use longhand_core::{KernelError, KernelResult};

/// Checks that a matrix is square.
pub(crate) fn ensure_square(m: &DMatrix<f64>) -> KernelResult<()> {
    if m.nrows() == m.ncols() {
        Ok(())
    } else {
        Err(KernelError::NotSquare {
            rows: m.nrows(),
            cols: m.ncols(),
        })
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::determinant::determinant;
    pub use crate::eigen::{eigenvalues_2x2, EigenPair};
    pub use crate::elementary::{add, multiply, subtract, trace, transpose};
    pub use crate::elimination::{
        inverse, rank, reduce, row_space_basis, rref, EliminationMode, PivotPolicy, Reduction,
        ReduceOptions, PIVOT_EPSILON,
    };
    pub use crate::norm::{norm, NormKind, NormValue};
    pub use crate::pseudoinverse::pseudoinverse;
    pub use crate::solvers::{
        bisection, fixed_point, newton_raphson, newton_raphson_numerical, newton_raphson_program,
        secant, NUMERIC_DERIVATIVE_STEP,
    };

    pub use longhand_core::prelude::*;
}
