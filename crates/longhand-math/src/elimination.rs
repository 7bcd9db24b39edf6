//! Gaussian elimination with a recorded row-operation trail.
//!
//! One engine, [`reduce`], drives row echelon and reduced row echelon
//! forms, matrix inversion by augmentation, rank, and row space. Every
//! row operation it performs is captured as a
//! [`DerivationStep`](longhand_core::DerivationStep) with before and
//! after snapshots.

use log::debug;
use nalgebra::{DMatrix, RowDVector};
use serde::{Deserialize, Serialize};

use longhand_core::{Derivation, DerivationStep, KernelError, KernelResult, StepAction};

use crate::ensure_square;

/// Pivots with magnitude below this threshold are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Which normal form elimination drives toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationMode {
    /// Clear below each pivot only; pivots keep their magnitudes.
    RowEchelon,
    /// Normalize each pivot to 1 and clear above and below.
    Rref,
}

/// What to do when a pivot column has no usable pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotPolicy {
    /// Move on to the next column; the column simply has no pivot.
    SkipColumn,
    /// Fail with [`KernelError::Singular`]; used when inverting.
    FailSingular,
}

/// Options for the elimination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceOptions {
    /// Trailing columns excluded from pivot selection, as in `[A | I]`.
    pub augmented_cols: usize,
    /// Target normal form.
    pub mode: EliminationMode,
    /// Behavior on a dead pivot column.
    pub pivot_policy: PivotPolicy,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            augmented_cols: 0,
            mode: EliminationMode::Rref,
            pivot_policy: PivotPolicy::SkipColumn,
        }
    }
}

impl ReduceOptions {
    /// Excludes the trailing `augmented_cols` columns from pivot selection.
    #[must_use]
    pub fn with_augmented_cols(mut self, augmented_cols: usize) -> Self {
        self.augmented_cols = augmented_cols;
        self
    }

    /// Sets the target normal form.
    #[must_use]
    pub fn with_mode(mut self, mode: EliminationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the dead-column behavior.
    #[must_use]
    pub fn with_pivot_policy(mut self, pivot_policy: PivotPolicy) -> Self {
        self.pivot_policy = pivot_policy;
        self
    }
}

/// Outcome of running the elimination engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    /// The reduced matrix, including any augmented columns.
    pub matrix: DMatrix<f64>,
    /// Number of pivots found.
    pub rank: usize,
    /// Columns that received a pivot, in elimination order.
    pub pivot_cols: Vec<usize>,
    /// Row operations performed, in order.
    pub steps: Vec<DerivationStep>,
}

/// Runs Gaussian elimination with partial pivoting.
///
/// For each coefficient column the engine selects the largest-magnitude
/// candidate at or below the pivot cursor. A column whose best candidate
/// is below [`PIVOT_EPSILON`] either stalls the elimination
/// ([`PivotPolicy::FailSingular`]) or is skipped
/// ([`PivotPolicy::SkipColumn`]).
pub fn reduce(m: &DMatrix<f64>, options: &ReduceOptions) -> KernelResult<Reduction> {
    if m.nrows() == 0 || m.ncols() == 0 {
        return Err(KernelError::incomplete_input("matrix has no entries"));
    }
    if options.augmented_cols >= m.ncols() {
        return Err(KernelError::incomplete_input(format!(
            "augmented block of {} columns leaves no coefficient columns in a {}-column matrix",
            options.augmented_cols,
            m.ncols()
        )));
    }

    let mut work = m.clone();
    let mut steps = Vec::new();
    let mut pivot_cols = Vec::new();
    let coefficient_cols = m.ncols() - options.augmented_cols;
    let mut pivot_row = 0;

    for col in 0..coefficient_cols {
        if pivot_row == work.nrows() {
            break;
        }

        // Partial pivoting: largest magnitude at or below the cursor.
        let mut best = pivot_row;
        for row in pivot_row + 1..work.nrows() {
            if work[(row, col)].abs() > work[(best, col)].abs() {
                best = row;
            }
        }

        let candidate = work[(best, col)];
        if candidate.abs() < PIVOT_EPSILON {
            match options.pivot_policy {
                PivotPolicy::FailSingular => {
                    debug!(
                        "elimination stalled at column {} with pivot {:.2e}",
                        col, candidate
                    );
                    return Err(KernelError::singular(col, candidate));
                }
                PivotPolicy::SkipColumn => continue,
            }
        }

        if best != pivot_row {
            let before = work.clone();
            work.swap_rows(pivot_row, best);
            steps.push(DerivationStep::row_op(
                StepAction::Swap { a: pivot_row, b: best },
                &before,
                &work,
            ));
        }

        let pivot = work[(pivot_row, col)];
        if options.mode == EliminationMode::Rref && pivot != 1.0 {
            let before = work.clone();
            for j in 0..work.ncols() {
                work[(pivot_row, j)] /= pivot;
            }
            steps.push(DerivationStep::row_op(
                StepAction::Scale {
                    row: pivot_row,
                    divisor: pivot,
                },
                &before,
                &work,
            ));
        }

        for target in 0..work.nrows() {
            if target == pivot_row {
                continue;
            }
            if options.mode == EliminationMode::RowEchelon && target < pivot_row {
                continue;
            }

            let factor = work[(target, col)] / work[(pivot_row, col)];
            if factor.abs() < PIVOT_EPSILON {
                continue;
            }

            let before = work.clone();
            for j in 0..work.ncols() {
                work[(target, j)] -= factor * work[(pivot_row, j)];
            }
            work[(target, col)] = 0.0;
            steps.push(DerivationStep::row_op(
                StepAction::Eliminate {
                    target,
                    source: pivot_row,
                    factor,
                },
                &before,
                &work,
            ));
        }

        pivot_cols.push(col);
        pivot_row += 1;
    }

    let rank = pivot_cols.len();
    debug!(
        "reduced {}x{} matrix: rank {}, {} steps",
        m.nrows(),
        m.ncols(),
        rank,
        steps.len()
    );

    Ok(Reduction {
        matrix: work,
        rank,
        pivot_cols,
        steps,
    })
}

/// Reduced row echelon form with the full derivation.
pub fn rref(m: &DMatrix<f64>) -> KernelResult<Derivation<DMatrix<f64>>> {
    let mut steps = vec![DerivationStep::snapshot("Original matrix", m)];
    let reduction = reduce(m, &ReduceOptions::default())?;
    steps.extend(reduction.steps);
    steps.push(DerivationStep::snapshot(
        "Reduced row echelon form",
        &reduction.matrix,
    ));
    Ok(Derivation::new(reduction.matrix, steps))
}

/// Inverse of a square matrix by reducing `[A | I]` to `[I | A^-1]`.
///
/// Fails with [`KernelError::Singular`] when a pivot column dies, and
/// with [`KernelError::NotSquare`] for rectangular input.
pub fn inverse(m: &DMatrix<f64>) -> KernelResult<Derivation<DMatrix<f64>>> {
    ensure_square(m)?;
    let n = m.nrows();

    let mut augmented = DMatrix::zeros(n, 2 * n);
    augmented.view_mut((0, 0), (n, n)).copy_from(m);
    for i in 0..n {
        augmented[(i, n + i)] = 1.0;
    }

    let mut steps = vec![
        DerivationStep::snapshot("Original matrix", m),
        DerivationStep::snapshot("Augmented matrix [A | I]", &augmented),
    ];

    let options = ReduceOptions::default()
        .with_augmented_cols(n)
        .with_pivot_policy(PivotPolicy::FailSingular);
    let reduction = reduce(&augmented, &options)?;
    steps.extend(reduction.steps);

    let inv = reduction.matrix.view((0, n), (n, n)).into_owned();
    steps.push(DerivationStep::snapshot(
        "Inverse read from the right block",
        &inv,
    ));

    Ok(Derivation::new(inv, steps))
}

/// Rank as the number of pivot rows in the reduced form.
pub fn rank(m: &DMatrix<f64>) -> KernelResult<Derivation<usize>> {
    let mut steps = vec![DerivationStep::snapshot("Original matrix", m)];
    let reduction = reduce(m, &ReduceOptions::default())?;
    steps.extend(reduction.steps);
    steps.push(DerivationStep::snapshot(
        format!("Reduced form with {} pivot rows", reduction.rank),
        &reduction.matrix,
    ));
    Ok(Derivation::new(reduction.rank, steps))
}

/// Basis for the row space: the nonzero rows of the reduced form.
pub fn row_space_basis(m: &DMatrix<f64>) -> KernelResult<Derivation<Vec<RowDVector<f64>>>> {
    let mut steps = vec![DerivationStep::snapshot("Original matrix", m)];
    let reduction = reduce(m, &ReduceOptions::default())?;
    steps.extend(reduction.steps);

    let basis: Vec<RowDVector<f64>> = (0..reduction.matrix.nrows())
        .map(|i| reduction.matrix.row(i).into_owned())
        .filter(|row| row.iter().any(|v| v.abs() > PIVOT_EPSILON))
        .collect();

    steps.push(DerivationStep::note(format!(
        "The {} nonzero rows of the reduced form span the row space",
        basis.len()
    )));
    Ok(Derivation::new(basis, steps))
}
