//! Production planning problem with only `<=` constraints.
//!
//! Maximize 3x1 + 5x2 subject to x1 <= 4, 2x2 <= 12 and 3x1 + 2x2 <= 18. The optimum is at
//! (2, 6) with value 36.
use approx::assert_abs_diff_eq;

use crate::algorithm::solver::LpSolver;
use crate::algorithm::two_phase::phase_one::{BasisFinder, SlackBasisFinder};
use crate::algorithm::two_phase::phase_two::Simplex;
use crate::algorithm::two_phase::tableau::{SimplexTable, Tableau};
use crate::algorithm::two_phase::tableau::snapshot::Cell;
use crate::data::linear_program::elements::{ConstraintType, OptimizationType, SolutionStatus};
use crate::data::linear_program::problem::{Constraint, LinearProgram};
use crate::data::linear_program::solution::BasicFeasibleSolution;
use crate::io::parse;

#[test]
fn conversion_pipeline() {
    // Text
    let linear_program_computed = parse::<f64>(PROBLEM_TEXT).unwrap();
    assert_eq!(linear_program_computed, linear_program());

    // Standard form
    let standard_form_computed = linear_program_computed.to_standard_form();
    assert_eq!(standard_form_computed, standard_form());
    assert!(standard_form_computed.is_standard_form());

    // Basic feasible solution
    let bfs_computed = SlackBasisFinder.find_initial_bfs(&standard_form_computed).unwrap();
    assert_eq!(bfs_computed, initial_bfs());

    // Tableau
    let mut tableau = SimplexTable::new(&standard_form_computed, &bfs_computed, 1e-10).unwrap();
    assert_eq!(tableau, initial_tableau());
    assert!(tableau.is_canonical());

    // x2 enters, the second row limits it to 6
    assert_eq!(tableau.get_entering_variable(), Some(1));
    assert_eq!(tableau.get_leaving_variable(1), Some(1));
    tableau.pivot(1, 1).unwrap();
    assert_abs_diff_eq!(tableau.get_objective_value(), 30f64);

    // x1 enters, the third row limits it to 2
    assert_eq!(tableau.get_entering_variable(), Some(0));
    assert_eq!(tableau.get_leaving_variable(0), Some(2));
    tableau.pivot(2, 0).unwrap();

    assert!(tableau.is_optimal());
    assert!(tableau.is_canonical());
    assert_eq!(tableau.basis(), &[2, 1, 0]);
    assert_abs_diff_eq!(tableau.get_objective_value(), 36f64);
    let solution = tableau.get_solution_vector();
    for (computed, expected) in solution.iter().zip([2f64, 6f64, 2f64, 0f64, 0f64]) {
        assert_abs_diff_eq!(*computed, expected, epsilon = 1e-9);
    }
}

#[test]
fn history() {
    let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&linear_program());
    assert_eq!(result.status(), SolutionStatus::Optimal);

    let table = result.table().unwrap();
    let history = table.get_full_history();
    assert_eq!(history.len(), 3);

    // Initial: slacks in the basis, ratios for x2
    let initial = &history[0];
    assert_eq!(initial.rows()[0][0], Cell::Label("x3".to_string()));
    assert_eq!(initial.rows()[0][8], Cell::Empty);
    assert_eq!(initial.rows()[1][8], Cell::Value(6f64));
    assert_eq!(initial.rows()[2][8], Cell::Value(9f64));
    let reduced_costs = initial.reduced_cost_row().unwrap();
    assert_eq!(reduced_costs[0], Cell::Label("Δ".to_string()));
    assert_eq!(reduced_costs[2], Cell::Value(0f64));
    assert_eq!(reduced_costs[4], Cell::Value(5f64));

    // After the first pivot, x2 is basic in the second row
    assert_eq!(history[1].rows()[1][0], Cell::Label("x2".to_string()));
    assert_eq!(history[1].rows()[1][1], Cell::Value(5f64));

    // Final
    let last = table.get_table();
    assert_eq!(last, &history[2]);
    assert_eq!(last.rows()[2][0], Cell::Label("x1".to_string()));
    let objective = last.reduced_cost_row().unwrap()[2].value().unwrap();
    assert_abs_diff_eq!(objective, 36f64, epsilon = 1e-9);
}

#[test]
fn solve() {
    let problem = linear_program();
    let result = LpSolver::<SlackBasisFinder, Simplex>::default().solve(&problem);

    assert_eq!(result.status(), SolutionStatus::Optimal);
    let solution = result.solution().unwrap();
    assert_eq!(solution.len(), 2);
    assert!(problem.is_satisfied_by(solution, 1e-6));
    assert_abs_diff_eq!(result.optimal_value().unwrap(), problem.evaluate(solution), epsilon = 1e-6);
    assert_abs_diff_eq!(result.optimal_value().unwrap(), 36f64, epsilon = 1e-6);
}

const PROBLEM_TEXT: &str = "\
# Production planning
maximize: 3 5
1 0 <= 4
0 2 <= 12
3 2 <= 18
";

/// The problem as described by `PROBLEM_TEXT`.
pub fn linear_program() -> LinearProgram {
    LinearProgram::new(
        OptimizationType::Maximize,
        vec![3f64, 5f64],
        vec![
            Constraint::new(vec![1f64, 0f64], ConstraintType::Less, 4f64),
            Constraint::new(vec![0f64, 2f64], ConstraintType::Less, 12f64),
            Constraint::new(vec![3f64, 2f64], ConstraintType::Less, 18f64),
        ],
    ).unwrap()
}

/// One slack for every constraint.
pub fn standard_form() -> LinearProgram {
    LinearProgram::new(
        OptimizationType::Maximize,
        vec![3f64, 5f64, 0f64, 0f64, 0f64],
        vec![
            Constraint::new(vec![1f64, 0f64, 1f64, 0f64, 0f64], ConstraintType::Equal, 4f64),
            Constraint::new(vec![0f64, 2f64, 0f64, 1f64, 0f64], ConstraintType::Equal, 12f64),
            Constraint::new(vec![3f64, 2f64, 0f64, 0f64, 1f64], ConstraintType::Equal, 18f64),
        ],
    ).unwrap()
}

/// All slacks basic.
pub fn initial_bfs() -> BasicFeasibleSolution {
    BasicFeasibleSolution::new(vec![2, 3, 4], vec![4f64, 12f64, 18f64], 5)
}

/// Tableau before the first pivot.
pub fn initial_tableau() -> SimplexTable {
    SimplexTable::new(&standard_form(), &initial_bfs(), 1e-10).unwrap()
}
