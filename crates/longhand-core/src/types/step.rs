//! Derivation step records.
//!
//! Matrix routines narrate their work as a sequence of steps. Each step
//! carries a human-readable label, a structured [`StepAction`], and optional
//! matrix snapshots taken before and after the action was applied.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Structured description of what a derivation step did.
///
/// Row indices are zero-based; rendered labels use one-based row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepAction {
    /// Two rows were exchanged.
    Swap {
        /// First row index.
        a: usize,
        /// Second row index.
        b: usize,
    },
    /// A row was divided by a scalar.
    Scale {
        /// Row index.
        row: usize,
        /// Divisor applied to the row.
        divisor: f64,
    },
    /// A multiple of one row was subtracted from another.
    Eliminate {
        /// Row being modified.
        target: usize,
        /// Row supplying the multiple.
        source: usize,
        /// Multiplier on the source row.
        factor: f64,
    },
    /// A narrative step with no row operation attached.
    Annotation,
}

impl StepAction {
    fn describe(&self) -> Option<String> {
        match self {
            Self::Swap { a, b } => Some(format!("R{} <-> R{}", a + 1, b + 1)),
            Self::Scale { row, divisor } => {
                Some(format!("R{r} -> R{r} / {divisor}", r = row + 1))
            }
            Self::Eliminate {
                target,
                source,
                factor,
            } => Some(format!(
                "R{t} -> R{t} - ({factor}) R{s}",
                t = target + 1,
                s = source + 1
            )),
            Self::Annotation => None,
        }
    }
}

/// One step of a worked derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Human-readable description of the step.
    pub label: String,
    /// Structured action, [`StepAction::Annotation`] for narrative steps.
    pub action: StepAction,
    /// Matrix state before the action, if the step records one.
    pub before: Option<DMatrix<f64>>,
    /// Matrix state after the action, if the step records one.
    pub after: Option<DMatrix<f64>>,
}

impl DerivationStep {
    /// Narrative step without matrix snapshots.
    pub fn note(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: StepAction::Annotation,
            before: None,
            after: None,
        }
    }

    /// Narrative step capturing the current matrix state.
    pub fn snapshot(label: impl Into<String>, matrix: &DMatrix<f64>) -> Self {
        Self {
            label: label.into(),
            action: StepAction::Annotation,
            before: None,
            after: Some(matrix.clone()),
        }
    }

    /// Row-operation step with before and after snapshots.
    ///
    /// The label is rendered from the action, so callers only supply the
    /// structured description.
    pub fn row_op(action: StepAction, before: &DMatrix<f64>, after: &DMatrix<f64>) -> Self {
        let label = action
            .describe()
            .unwrap_or_else(|| String::from("(no-op)"));
        Self {
            label,
            action,
            before: Some(before.clone()),
            after: Some(after.clone()),
        }
    }
}

impl std::fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_label_is_one_based() {
        let action = StepAction::Swap { a: 0, b: 2 };
        assert_eq!(action.describe().unwrap(), "R1 <-> R3");
    }

    #[test]
    fn test_scale_label() {
        let action = StepAction::Scale {
            row: 1,
            divisor: 4.0,
        };
        assert_eq!(action.describe().unwrap(), "R2 -> R2 / 4");
    }

    #[test]
    fn test_eliminate_label() {
        let action = StepAction::Eliminate {
            target: 1,
            source: 0,
            factor: 2.5,
        };
        assert_eq!(action.describe().unwrap(), "R2 -> R2 - (2.5) R1");
    }

    #[test]
    fn test_note_has_no_snapshots() {
        let step = DerivationStep::note("Original matrix");
        assert_eq!(step.action, StepAction::Annotation);
        assert!(step.before.is_none());
        assert!(step.after.is_none());
    }

    #[test]
    fn test_row_op_keeps_both_snapshots() {
        let before = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let after = DMatrix::from_row_slice(2, 2, &[3.0, 4.0, 1.0, 2.0]);
        let step = DerivationStep::row_op(StepAction::Swap { a: 0, b: 1 }, &before, &after);

        assert_eq!(step.label, "R1 <-> R2");
        assert_eq!(step.before.as_ref().unwrap(), &before);
        assert_eq!(step.after.as_ref().unwrap(), &after);
        assert_eq!(step.to_string(), "R1 <-> R2");
    }
}
