//! # Longhand
//!
//! Facade crate for the Longhand step-by-step math kernel. It re-exports
//! the member crates so applications can depend on a single package:
//!
//! - [`longhand_core`]: shared data model and the error type
//! - [`longhand_expr`]: the single-variable expression language
//! - [`longhand_math`]: matrix algebra and root-finding routines
//!
//! ## Example
//!
//! ```rust
//! use longhand::prelude::*;
//!
//! let m = matrix_from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
//! let derivation = inverse(&m).unwrap();
//! assert!((derivation.value[(0, 0)] - 0.6).abs() < 1e-12);
//!
//! let f = compile("x^2 - 4").unwrap();
//! let solution = newton_raphson_program(&f, 3.0, &SolverConfig::default()).unwrap();
//! assert!(solution.is_converged());
//! assert!((solution.root - 2.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use longhand_core;
pub use longhand_expr;
pub use longhand_math;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use longhand_expr::prelude::*;
    pub use longhand_math::prelude::*;
}
