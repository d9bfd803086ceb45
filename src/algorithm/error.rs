//! # Error reporting while solving
//!
//! Everything that can stop the simplex method from reaching an optimum. These errors never reach
//! a caller of the solver directly; they are folded into an `LpResult` at a single place, see
//! `LpResult::failed`.
use std::error::Error;
use std::fmt;

use crate::data::linear_program::elements::SolutionStatus;

/// Reasons why solving did not end in an optimal tableau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The objective function or the list of constraints is empty.
    EmptyProblem,
    /// The initial basic solution has a negative value.
    NoInitialBasis,
    /// A column improves the objective while no row limits how far.
    ///
    /// Contains the index of that column.
    Unbounded(usize),
    /// The configured maximum number of pivots was reached before optimality.
    IterationLimit {
        /// The cap that was reached.
        max_iterations: usize,
    },
    /// The pivot element is (close to) zero.
    InvalidPivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// The tableau is not optimal, but the pivot rule found no column to bring into the basis.
    NoEnteringColumn,
    /// A history entry was requested that doesn't exist.
    IterationOutOfRange {
        /// Requested entry.
        index: usize,
        /// Number of entries in the history.
        len: usize,
    },
    /// The problem data doesn't fit together.
    ///
    /// The contained `String` is a message for the end user.
    Inconsistent(String),
}

impl SolveError {
    /// How this error is reported to the user.
    pub fn status(&self) -> SolutionStatus {
        match self {
            SolveError::NoInitialBasis => SolutionStatus::Infeasible,
            SolveError::Unbounded(_) => SolutionStatus::Unbounded,
            _ => SolutionStatus::Error,
        }
    }

    /// Message that accompanies the status.
    ///
    /// Failures that are not part of the normal outcomes of the simplex method are prefixed, so
    /// that they can be told apart from those.
    pub fn message(&self) -> String {
        match self {
            SolveError::EmptyProblem
            | SolveError::NoInitialBasis
            | SolveError::Unbounded(_)
            | SolveError::IterationLimit { .. } => self.to_string(),
            _ => format!("Solver error: {}", self),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::EmptyProblem => f.write_str("Empty objective function or constraints"),
            SolveError::NoInitialBasis => f.write_str("No initial BFS found"),
            SolveError::Unbounded(column) => write!(
                f, "Problem is unbounded: x{} can increase without limit", column + 1,
            ),
            SolveError::IterationLimit { .. } => f.write_str("Max iterations exceeded"),
            SolveError::InvalidPivot { row, column } => write!(
                f, "Invalid pivot element at row {}, column {}", row, column,
            ),
            SolveError::NoEnteringColumn => f.write_str(
                "Tableau is not optimal, but no entering variable was selected",
            ),
            SolveError::IterationOutOfRange { index, len } => write!(
                f, "Iteration {} requested, but only {} are available", index, len,
            ),
            SolveError::Inconsistent(description) => f.write_str(description),
        }
    }
}

impl Error for SolveError {}
