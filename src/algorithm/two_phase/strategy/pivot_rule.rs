//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use num_traits::Float;

use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. Unless a rule says otherwise, this
/// is the row chosen by the minimum ratio test of the tableau.
pub trait PivotRule {
    /// Create a new instance, once for every problem that is solved.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column with a positive reduced cost, or `None` if there is no such column.
    fn select_primal_pivot_column<F: Float, T: Tableau<F>>(&mut self, tableau: &T) -> Option<usize>;

    /// Row selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A row limiting the increase of the entering column, or `None` if the increase is unbounded.
    fn select_primal_pivot_row<F: Float, T: Tableau<F>>(
        &mut self,
        tableau: &T,
        column: usize,
    ) -> Option<usize> {
        tableau.get_leaving_variable(column)
    }
}

/// Pivot on the column with the largest positive reduced cost (Dantzig's rule).
///
/// Ties go to the lowest index. This rule can cycle on degenerate problems.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float, T: Tableau<F>>(&mut self, tableau: &T) -> Option<usize> {
        tableau.get_entering_variable()
    }
}

/// Simply pivot on the first column which has a positive reduced cost.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float, T: Tableau<F>>(&mut self, tableau: &T) -> Option<usize> {
        first_profitable(tableau)
    }
}

/// Bland's anti cycling rule.
///
/// The entering column is the profitable column with the lowest index. When several rows attain the
/// minimum ratio, the row whose basic variable has the lowest index leaves. With this rule the
/// simplex method always terminates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bland;
impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float, T: Tableau<F>>(&mut self, tableau: &T) -> Option<usize> {
        first_profitable(tableau)
    }

    fn select_primal_pivot_row<F: Float, T: Tableau<F>>(
        &mut self,
        tableau: &T,
        column: usize,
    ) -> Option<usize> {
        let epsilon = tableau.epsilon();

        // (chosen row, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for row in 0..tableau.nr_rows() {
            let xij = tableau.element(row, column);
            if xij > epsilon {
                let ratio = tableau.constraint_value(row) / xij;
                let leaving_column = tableau.basis()[row];
                if let Some((min_row, min_ratio, min_leaving_column)) = &mut min_values {
                    if (ratio - *min_ratio).abs() <= epsilon {
                        if leaving_column < *min_leaving_column {
                            *min_row = row;
                            *min_leaving_column = leaving_column;
                        }
                    } else if ratio < *min_ratio {
                        *min_row = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column));
                }
            }
        }

        min_values.map(|(min_row, _, _)| min_row)
    }
}

fn first_profitable<F: Float, T: Tableau<F>>(tableau: &T) -> Option<usize> {
    let epsilon = tableau.epsilon();
    (0..tableau.nr_columns()).find(|&j| tableau.reduced_cost(j) > epsilon)
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, FirstProfitable, LargestCoefficient, PivotRule};
    use crate::algorithm::two_phase::tableau::SimplexTable;
    use crate::data::linear_program::elements::{ConstraintType, OptimizationType};
    use crate::data::linear_program::problem::{Constraint, LinearProgram};
    use crate::data::linear_program::solution::BasicFeasibleSolution;

    /// Rows are ordered such that the basic variable of the first row has the highest index.
    fn table() -> SimplexTable {
        let problem = LinearProgram::new(
            OptimizationType::Maximize,
            vec![1f64, 3f64, 0f64, 0f64],
            vec![
                Constraint::new(vec![1f64, 1f64, 0f64, 1f64], ConstraintType::Equal, 2f64),
                Constraint::new(vec![1f64, 1f64, 1f64, 0f64], ConstraintType::Equal, 2f64),
            ],
        ).unwrap();
        let bfs = BasicFeasibleSolution::new(vec![3, 2], vec![2f64, 2f64], 4);

        SimplexTable::new(&problem, &bfs, 1e-10).unwrap()
    }

    #[test]
    fn largest_coefficient() {
        let table = table();
        let mut rule = LargestCoefficient::new();
        assert_eq!(rule.select_primal_pivot_column(&table), Some(1));
        // Tie on the ratio, lowest row wins
        assert_eq!(rule.select_primal_pivot_row(&table, 1), Some(0));
    }

    #[test]
    fn first_profitable() {
        let table = table();
        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_primal_pivot_column(&table), Some(0));
        assert_eq!(rule.select_primal_pivot_row(&table, 0), Some(0));
    }

    #[test]
    fn bland() {
        let table = table();
        let mut rule = Bland::new();
        assert_eq!(rule.select_primal_pivot_column(&table), Some(0));
        // Tie on the ratio, the row with basic variable x3 wins over the one with x4
        assert_eq!(rule.select_primal_pivot_row(&table, 0), Some(1));
        // Only the second row has a positive entry
        assert_eq!(rule.select_primal_pivot_row(&table, 2), Some(1));
    }
}
