//! # Algorithms
//!
//! Solving linear programs with the two phase simplex method. The entry point is
//! `solver::LpSolver`, which always produces an `LpResult`.
use std::fmt::{self, Display, Formatter};

use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::tableau::{SimplexTable, Tableau};
use crate::data::linear_program::elements::{OptimizationType, SolutionStatus};

pub mod error;
pub mod solver;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum, unless something went
/// wrong while solving.
///
/// The value and the solution are only present for an optimal result. The final tableau is present
/// whenever one was built, also when solving failed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct LpResult<F = f64> {
    status: SolutionStatus,
    optimal_value: Option<F>,
    solution: Option<Vec<F>>,
    table: Option<SimplexTable<F>>,
    error_message: Option<String>,
}

impl<F: Float> LpResult<F> {
    /// Read value and solution from an optimal tableau.
    pub fn optimal(table: SimplexTable<F>) -> Self {
        debug_assert!(table.is_optimal());

        Self {
            status: SolutionStatus::Optimal,
            optimal_value: Some(table.get_objective_value()),
            solution: Some(table.get_solution_vector()),
            table: Some(table),
            error_message: None,
        }
    }

    /// Report a failure.
    ///
    /// This is the only place where a `SolveError` is turned into a status and a message.
    ///
    /// # Arguments
    ///
    /// * `error`: Reason why no optimum was reached.
    /// * `table`: Tableau in the state it was left in, if one was built.
    pub fn failed(error: SolveError, table: Option<SimplexTable<F>>) -> Self {
        Self {
            status: error.status(),
            optimal_value: None,
            solution: None,
            table,
            error_message: Some(error.message()),
        }
    }

    /// Express the result in terms of the problem before it was brought into standard form.
    ///
    /// Slack variables are removed from the solution and a minimization problem gets its objective
    /// value back with the original sign. The tableau is kept as is.
    pub(crate) fn into_original_space(
        mut self,
        nr_variables: usize,
        optimization_type: OptimizationType,
    ) -> Self {
        if let Some(solution) = &mut self.solution {
            solution.truncate(nr_variables);
        }
        if optimization_type == OptimizationType::Minimize {
            self.optimal_value = self.optimal_value.map(|value| -value);
        }

        self
    }
}

impl<F> LpResult<F> {
    #[allow(missing_docs)]
    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    /// Objective value, if optimal.
    pub fn optimal_value(&self) -> Option<F> where F: Copy {
        self.optimal_value
    }

    /// Value of every variable, if optimal.
    pub fn solution(&self) -> Option<&[F]> {
        self.solution.as_deref()
    }

    /// The final tableau, including its history.
    pub fn table(&self) -> Option<&SimplexTable<F>> {
        self.table.as_ref()
    }

    /// Why no optimum was found.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

impl<F: Float + Display> Display for LpResult<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Status: {}", self.status.to_string().to_uppercase())?;
        match self.optimal_value {
            Some(value) => writeln!(f, "Optimal value: {:.6}", value)?,
            None => writeln!(f, "Optimal value: —")?,
        }
        if let Some(solution) = &self.solution {
            for (j, value) in solution.iter().enumerate() {
                writeln!(f, "x_{} = {:.6}", j + 1, value)?;
            }
        }
        if let Some(message) = &self.error_message {
            writeln!(f, "{}", message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::SolveError;
    use crate::algorithm::LpResult;
    use crate::algorithm::two_phase::tableau::SimplexTable;
    use crate::data::linear_program::elements::{ConstraintType, OptimizationType, SolutionStatus};
    use crate::data::linear_program::problem::{Constraint, LinearProgram};
    use crate::data::linear_program::solution::BasicFeasibleSolution;

    /// Already optimal: maximize -x1 s.t. x1 + x2 = 3 with x2 basic.
    fn optimal_table() -> SimplexTable {
        let problem = LinearProgram::new(
            OptimizationType::Maximize,
            vec![-1f64, 0f64],
            vec![Constraint::new(vec![1f64, 1f64], ConstraintType::Equal, 3f64)],
        ).unwrap();
        let bfs = BasicFeasibleSolution::new(vec![1], vec![3f64], 2);

        SimplexTable::new(&problem, &bfs, 1e-10).unwrap()
    }

    #[test]
    fn optimal() {
        let result = LpResult::optimal(optimal_table());
        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_eq!(result.optimal_value(), Some(0f64));
        assert_eq!(result.solution(), Some(&[0f64, 3f64][..]));
        assert!(result.table().is_some());
        assert!(result.error_message().is_none());
    }

    #[test]
    fn failed() {
        let result = LpResult::<f64>::failed(SolveError::NoInitialBasis, None);
        assert_eq!(result.status(), SolutionStatus::Infeasible);
        assert_eq!(result.error_message(), Some("No initial BFS found"));
        assert!(result.optimal_value().is_none());
        assert!(result.solution().is_none());
        assert!(result.table().is_none());

        let result = LpResult::failed(SolveError::Unbounded(0), Some(optimal_table()));
        assert_eq!(result.status(), SolutionStatus::Unbounded);
        assert!(result.table().is_some());
    }

    #[test]
    fn into_original_space() {
        let result = LpResult::optimal(optimal_table())
            .into_original_space(1, OptimizationType::Minimize);
        assert_eq!(result.solution(), Some(&[0f64][..]));
        assert_eq!(result.optimal_value(), Some(-0f64));

        let failed = LpResult::<f64>::failed(SolveError::EmptyProblem, None)
            .into_original_space(1, OptimizationType::Minimize);
        assert!(failed.solution().is_none());
        assert!(failed.optimal_value().is_none());
    }

    #[test]
    fn display() {
        let text = LpResult::optimal(optimal_table()).to_string();
        assert_eq!(text, "Status: OPTIMAL\nOptimal value: 0.000000\nx_1 = 0.000000\nx_2 = 3.000000\n");

        let text = LpResult::<f64>::failed(SolveError::EmptyProblem, None).to_string();
        assert_eq!(text, "Status: ERROR\nOptimal value: —\nEmpty objective function or constraints\n");
    }
}
