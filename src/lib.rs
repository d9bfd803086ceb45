//! # A linear program solver
//!
//! Linear programs are solved using the two phase primal Simplex Method on a dense tableau. Every
//! tableau the method passes through is kept, such that the steps towards an optimum can be shown
//! afterwards.
//!
//! ```
//! use simplex_lp::algorithm::solver::LpSolver;
//! use simplex_lp::data::linear_program::elements::{ConstraintType, OptimizationType, SolutionStatus};
//! use simplex_lp::data::linear_program::problem::{Constraint, LinearProgram};
//!
//! let problem = LinearProgram::new(
//!     OptimizationType::Maximize,
//!     vec![3f64, 2f64],
//!     vec![
//!         Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 4f64),
//!         Constraint::new(vec![2f64, 1f64], ConstraintType::Less, 5f64),
//!     ],
//! ).unwrap();
//!
//! let solver: LpSolver = LpSolver::default();
//! let result = solver.solve(&problem);
//! assert_eq!(result.status(), SolutionStatus::Optimal);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
