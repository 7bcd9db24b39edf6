//! Per-iteration records produced by the root-finding solvers.
//!
//! Every solver appends one record per iteration to its trace, capturing the
//! full working state of that iteration. Records are plain data so callers
//! can tabulate, serialize, or replay them.

use serde::{Deserialize, Serialize};

/// Common accessors shared by all iteration records.
pub trait IterationRecord {
    /// Zero-based iteration index.
    fn index(&self) -> u32;
    /// Error estimate used by the convergence test for this iteration.
    fn error(&self) -> f64;
}

/// One bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionRecord {
    /// Zero-based iteration index.
    pub index: u32,
    /// Lower bracket endpoint at the start of the iteration.
    pub a: f64,
    /// Upper bracket endpoint at the start of the iteration.
    pub b: f64,
    /// Midpoint of the bracket.
    pub c: f64,
    /// Function value at `a`.
    pub f_a: f64,
    /// Function value at `b`.
    pub f_b: f64,
    /// Function value at `c`.
    pub f_c: f64,
    /// Half-width of the bracket, `(b - a) / 2`.
    pub error: f64,
}

/// One Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonRecord {
    /// Zero-based iteration index.
    pub index: u32,
    /// Current estimate.
    pub x: f64,
    /// Function value at `x`.
    pub f_x: f64,
    /// Derivative value at `x`.
    pub df_x: f64,
    /// Updated estimate, `x - f(x) / f'(x)`.
    pub x_next: f64,
    /// Step size, `|x_next - x|`.
    pub error: f64,
}

/// One secant iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecantRecord {
    /// Zero-based iteration index.
    pub index: u32,
    /// Older of the two working points.
    pub x0: f64,
    /// Newer of the two working points.
    pub x1: f64,
    /// Function value at `x0`.
    pub f_x0: f64,
    /// Function value at `x1`.
    pub f_x1: f64,
    /// Updated estimate from the secant line through the two points.
    pub x_next: f64,
    /// Step size, `|x_next - x1|`.
    pub error: f64,
}

/// One fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPointRecord {
    /// Zero-based iteration index.
    pub index: u32,
    /// Current estimate.
    pub x: f64,
    /// Value of the iteration map at `x`.
    pub g_x: f64,
    /// Step size, `|g(x) - x|`.
    pub error: f64,
}

impl IterationRecord for BisectionRecord {
    fn index(&self) -> u32 {
        self.index
    }

    fn error(&self) -> f64 {
        self.error
    }
}

impl IterationRecord for NewtonRecord {
    fn index(&self) -> u32 {
        self.index
    }

    fn error(&self) -> f64 {
        self.error
    }
}

impl IterationRecord for SecantRecord {
    fn index(&self) -> u32 {
        self.index
    }

    fn error(&self) -> f64 {
        self.error
    }
}

impl IterationRecord for FixedPointRecord {
    fn index(&self) -> u32 {
        self.index
    }

    fn error(&self) -> f64 {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_accessors() {
        let record = BisectionRecord {
            index: 3,
            a: 1.0,
            b: 2.0,
            c: 1.5,
            f_a: -1.0,
            f_b: 1.0,
            f_c: 0.25,
            error: 0.5,
        };

        assert_eq!(record.index(), 3);
        assert_eq!(record.error(), 0.5);
    }

    #[test]
    fn test_records_serialize() {
        let record = NewtonRecord {
            index: 0,
            x: 2.0,
            f_x: 1.0,
            df_x: 4.0,
            x_next: 1.75,
            error: 0.25,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: NewtonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
