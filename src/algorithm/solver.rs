//! # Solving linear programs
//!
//! The façade that takes a problem as stated, runs both phases and never fails: every outcome is
//! an `LpResult`.
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::LpResult;
use crate::algorithm::two_phase::phase_one::{BasisFinder, SlackBasisFinder};
use crate::algorithm::two_phase::phase_two::{Simplex, SimplexDriver};
use crate::data::linear_program::problem::LinearProgram;

/// Solves linear programs by bringing them into standard form, finding a basis with `B` and
/// pivoting with `D`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LpSolver<B = SlackBasisFinder, D = Simplex> {
    basis_finder: B,
    driver: D,
}

impl<B: BasisFinder, D> LpSolver<B, D> {
    /// Create a solver from its two phases.
    pub fn new(basis_finder: B, driver: D) -> Self {
        Self { basis_finder, driver }
    }

    /// Solve a linear program.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem as stated, in any optimization direction and with any constraint types.
    ///
    /// # Return value
    ///
    /// The solution is expressed in the variables of `problem`, slacks are not included. The
    /// attached tableau is that of the standard form.
    pub fn solve<F: Float>(&self, problem: &LinearProgram<F>) -> LpResult<F>
    where
        D: SimplexDriver<F>,
    {
        if problem.is_empty() {
            return LpResult::failed(SolveError::EmptyProblem, None);
        }

        let standard_form = problem.to_standard_form();
        log::debug!(
            "Standard form has {} variables, of which {} slacks",
            standard_form.nr_variables(), standard_form.nr_variables() - problem.nr_variables(),
        );

        let bfs = match self.basis_finder.find_initial_bfs(&standard_form) {
            Ok(bfs) => bfs,
            Err(error) => return LpResult::failed(error, None),
        };
        if !bfs.is_feasible() {
            return LpResult::failed(SolveError::NoInitialBasis, None);
        }

        self.driver.solve_from_bfs(&standard_form, &bfs)
            .into_original_space(problem.nr_variables(), problem.optimization_type())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use num_traits::Float;

    use crate::algorithm::error::SolveError;
    use crate::algorithm::solver::LpSolver;
    use crate::algorithm::two_phase::phase_one::{BasisFinder, SlackBasisFinder};
    use crate::algorithm::two_phase::phase_two::Simplex;
    use crate::algorithm::two_phase::strategy::pivot_rule::Bland;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::{ConstraintType, OptimizationType, SolutionStatus};
    use crate::data::linear_program::problem::{Constraint, LinearProgram};
    use crate::data::linear_program::solution::BasicFeasibleSolution;

    fn problem(
        optimization_type: OptimizationType,
        objective: Vec<f64>,
        rows: Vec<(Vec<f64>, ConstraintType, f64)>,
    ) -> LinearProgram {
        let constraints = rows.into_iter()
            .map(|(coefficients, constraint_type, b)| Constraint::new(coefficients, constraint_type, b))
            .collect();
        LinearProgram::new(optimization_type, objective, constraints).unwrap()
    }

    fn scenario_1() -> LinearProgram {
        problem(
            OptimizationType::Maximize,
            vec![3f64, 2f64],
            vec![
                (vec![1f64, 1f64], ConstraintType::Less, 4f64),
                (vec![2f64, 1f64], ConstraintType::Less, 5f64),
            ],
        )
    }

    #[test]
    fn maximize() {
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&scenario_1());

        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(result.optimal_value().unwrap(), 9f64, epsilon = 1e-6);
        let solution = result.solution().unwrap();
        assert_eq!(solution.len(), 2);
        assert_abs_diff_eq!(solution[0], 1f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution[1], 3f64, epsilon = 1e-6);
        // The tableau includes the slacks
        assert_eq!(result.table().unwrap().nr_columns(), 4);
    }

    #[test]
    fn unbounded() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![1f64, 1f64],
            vec![(vec![-1f64, 1f64], ConstraintType::Less, 1f64)],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Unbounded);
        assert!(result.error_message().unwrap().contains("unbounded"));
        assert!(result.table().is_some());
    }

    #[test]
    fn empty() {
        let problem = LinearProgram::<f64>::new(OptimizationType::Maximize, vec![], vec![]).unwrap();
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Error);
        assert!(result.error_message().unwrap().contains("Empty"));
        assert!(result.table().is_none());

        let no_constraints = LinearProgram::new(OptimizationType::Maximize, vec![1f64], vec![]).unwrap();
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&no_constraints);
        assert_eq!(result.status(), SolutionStatus::Error);
    }

    #[test]
    fn minimize() {
        let problem = problem(
            OptimizationType::Minimize,
            vec![-3f64, -2f64],
            vec![
                (vec![1f64, 1f64], ConstraintType::Less, 4f64),
                (vec![2f64, 1f64], ConstraintType::Less, 5f64),
            ],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(result.optimal_value().unwrap(), -9f64, epsilon = 1e-6);
        assert_abs_diff_eq!(problem.evaluate(result.solution().unwrap()), -9f64, epsilon = 1e-6);
    }

    #[test]
    fn negative_right_hand_side() {
        // -x1 - x2 >= -4 is x1 + x2 <= 4
        let problem = problem(
            OptimizationType::Maximize,
            vec![3f64, 2f64],
            vec![
                (vec![-1f64, -1f64], ConstraintType::Greater, -4f64),
                (vec![2f64, 1f64], ConstraintType::Less, 5f64),
            ],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(result.optimal_value().unwrap(), 9f64, epsilon = 1e-6);
        assert!(problem.is_satisfied_by(result.solution().unwrap(), 1e-6));
    }

    #[test]
    fn re_solve_gives_the_same_result() {
        let solver = LpSolver::<SlackBasisFinder, Simplex>::default();
        let problem = scenario_1();

        let first = solver.solve(&problem);
        let second = solver.solve(&problem);
        assert_eq!(first.status(), second.status());
        assert_abs_diff_eq!(first.optimal_value().unwrap(), second.optimal_value().unwrap(), epsilon = 1e-6);
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn configured_driver() {
        let solver = LpSolver::new(SlackBasisFinder, Simplex::new().with_max_iterations(1));
        let result = solver.solve(&scenario_1());
        assert_eq!(result.status(), SolutionStatus::Error);
        assert_eq!(result.error_message(), Some("Max iterations exceeded"));

        let solver = LpSolver::new(SlackBasisFinder, Simplex::new().with_pivot_rule::<Bland>());
        let result = solver.solve(&scenario_1());
        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(result.optimal_value().unwrap(), 9f64, epsilon = 1e-6);
    }

    #[test]
    fn degenerate() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![1f64, 1f64],
            vec![
                (vec![1f64, 0f64], ConstraintType::Less, 2f64),
                (vec![0f64, 1f64], ConstraintType::Less, 2f64),
                (vec![1f64, 1f64], ConstraintType::Less, 2f64),
            ],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(result.optimal_value().unwrap(), 2f64, epsilon = 1e-6);
        assert!(problem.is_satisfied_by(result.solution().unwrap(), 1e-6));
    }

    #[test]
    fn mixed_constraints_without_slack_basis() {
        // The slack of the >= row has coefficient -1 and the = row has no slack, so the last
        // columns of the standard form are no identity matrix
        let problem = problem(
            OptimizationType::Maximize,
            vec![1f64, 2f64],
            vec![
                (vec![1f64, 1f64], ConstraintType::Less, 5f64),
                (vec![1f64, 1f64], ConstraintType::Greater, 2f64),
                (vec![2f64, 1f64], ConstraintType::Equal, 6f64),
            ],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        let table = result.table().unwrap();
        assert!(!table.is_canonical());
        assert_ne!(result.status(), SolutionStatus::Infeasible);
    }

    #[test]
    fn more_equalities_than_variables() {
        let problem = problem(
            OptimizationType::Maximize,
            vec![1f64],
            vec![
                (vec![1f64], ConstraintType::Equal, 1f64),
                (vec![2f64], ConstraintType::Equal, 2f64),
            ],
        );
        let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

        assert_eq!(result.status(), SolutionStatus::Error);
        assert!(result.error_message().unwrap().starts_with("Solver error: "));
        assert!(result.optimal_value().is_none());
        assert!(result.table().is_none());
    }

    /// Takes the slacks as basis, with the values of the right-hand side negated.
    struct NegatedSlackBasis;
    impl BasisFinder for NegatedSlackBasis {
        fn find_initial_bfs<F: Float>(
            &self,
            standard_form: &LinearProgram<F>,
        ) -> Result<BasicFeasibleSolution<F>, SolveError> {
            let bfs = SlackBasisFinder.find_initial_bfs(standard_form)?;
            let values = bfs.basic_values().iter().map(|&value| -value).collect();
            Ok(BasicFeasibleSolution::new(bfs.basis_indices().to_vec(), values, standard_form.nr_variables()))
        }
    }

    #[test]
    fn infeasible_initial_basis() {
        let solver = LpSolver::new(NegatedSlackBasis, Simplex::new());
        let result = solver.solve(&scenario_1());

        assert_eq!(result.status(), SolutionStatus::Infeasible);
        assert_eq!(result.error_message(), Some("No initial BFS found"));
        assert!(result.solution().is_none());
        assert!(result.table().is_none());
    }
}
