//! # Finding an initial basis
//!
//! Computing a basic feasible solution: the first phase of the two phase method.
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::BasicFeasibleSolution;

/// Computing a basic solution to start the simplex method from.
///
/// This can happen either using the simplex method on an auxiliary problem, or some more
/// specialized method.
pub trait BasisFinder {
    /// Compute a basic solution.
    ///
    /// # Arguments
    ///
    /// * `standard_form`: Problem with equality constraints and non-negative right-hand sides only.
    ///
    /// # Return value
    ///
    /// A basic solution with a basic variable for every constraint. Whether it is feasible should be
    /// checked by the caller.
    ///
    /// # Errors
    ///
    /// When the problem is shaped such that this method can't produce a basis for it.
    fn find_initial_bfs<F: Float>(
        &self,
        standard_form: &LinearProgram<F>,
    ) -> Result<BasicFeasibleSolution<F>, SolveError>;
}

/// A full basis is assumed to be present in the problem.
///
/// If the problem is of type `Ax <= b`, all (positive) slacks can be used as a basic feasible
/// solution (that is, `x = 0` is feasible). The slacks are the last `m` columns of the standard
/// form, so those are taken as the basis and the right-hand side gives their values.
///
/// # Note
///
/// No artificial variables are introduced. When a `>=` or `=` constraint means that the last `m`
/// columns do not form an identity matrix, the resulting tableau is not canonical and the simplex
/// method can't be trusted on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlackBasisFinder;

impl BasisFinder for SlackBasisFinder {
    fn find_initial_bfs<F: Float>(
        &self,
        standard_form: &LinearProgram<F>,
    ) -> Result<BasicFeasibleSolution<F>, SolveError> {
        let nr_rows = standard_form.nr_constraints();
        let nr_columns = standard_form.nr_variables();
        if nr_rows > nr_columns {
            return Err(SolveError::Inconsistent(format!(
                "No basis of slacks: {} constraints, but only {} variables", nr_rows, nr_columns,
            )));
        }

        let basis_indices = (nr_columns - nr_rows..nr_columns).collect::<Vec<_>>();
        let basic_values = standard_form.constraints().iter()
            .map(|constraint| *constraint.free_value())
            .collect();

        Ok(BasicFeasibleSolution::new(basis_indices, basic_values, nr_columns))
    }
}
