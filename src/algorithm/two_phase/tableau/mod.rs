//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau keeps a history of snapshots, one for every state it has been in.
use std::fmt::{self, Display, Formatter};

use ndarray::{Array1, Array2};
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::tableau::snapshot::{Cell, Snapshot};
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::BasicFeasibleSolution;

pub mod snapshot;

/// Capabilities of a simplex tableau, as used by the simplex method and the pivot rules.
///
/// The provided methods implement the textbook rules: the most positive reduced cost enters, the
/// minimum ratio leaves, ties go to the lowest index.
pub trait Tableau<F: Float> {
    /// Number of constraint rows.
    fn nr_rows(&self) -> usize;

    /// Number of variables.
    fn nr_columns(&self) -> usize;

    /// Values with an absolute value below this are treated as zero.
    fn epsilon(&self) -> F;

    /// Index of the basic variable for each row.
    fn basis(&self) -> &[usize];

    /// Entry of the constraint matrix with respect to the current basis.
    fn element(&self, row: usize, column: usize) -> F;

    /// Value of the basic variable of a row.
    fn constraint_value(&self, row: usize) -> F;

    /// Reduced cost `c_j - z_j` of a column.
    ///
    /// # Arguments
    ///
    /// * `column`: Column index in range `0` until `self.nr_columns()`.
    fn reduced_cost(&self, column: usize) -> F;

    /// Replace the basic variable of `leaving_row` by `entering_column`.
    ///
    /// # Errors
    ///
    /// If either index is out of range or the pivot element is too close to zero. The tableau is not
    /// modified in that case.
    fn pivot(&mut self, leaving_row: usize, entering_column: usize) -> Result<(), SolveError>;

    /// Current solution, with a value for every variable.
    fn get_solution_vector(&self) -> Vec<F>;

    /// Current value of the objective function.
    fn get_objective_value(&self) -> F;

    /// Every state this tableau has been in, oldest first.
    fn get_full_history(&self) -> &[Snapshot<F>];

    /// Reduced costs of all columns.
    fn reduced_costs(&self) -> Vec<F> {
        (0..self.nr_columns()).map(|j| self.reduced_cost(j)).collect()
    }

    /// Whether no column can improve the objective value.
    fn is_optimal(&self) -> bool {
        let epsilon = self.epsilon();
        (0..self.nr_columns()).all(|j| self.reduced_cost(j) <= epsilon)
    }

    /// Column with the largest positive reduced cost.
    ///
    /// # Return value
    ///
    /// The first such column when several share the largest value, `None` if the tableau is
    /// optimal.
    fn get_entering_variable(&self) -> Option<usize> {
        let epsilon = self.epsilon();
        let mut best: Option<(usize, F)> = None;
        for (j, cost) in (0..self.nr_columns()).map(|j| (j, self.reduced_cost(j))) {
            if cost > epsilon && best.is_none_or(|(_, best_cost)| cost > best_cost) {
                best = Some((j, cost));
            }
        }

        best.map(|(j, _)| j)
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the constraint value and a positive entry in
    /// the column. Ties go to the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `entering_column`: Column that will enter the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the objective can increase without bound along
    /// this column.
    ///
    /// # Panics
    ///
    /// When `entering_column` is not a column of the tableau.
    fn get_leaving_variable(&self, entering_column: usize) -> Option<usize> {
        assert!(entering_column < self.nr_columns());

        let epsilon = self.epsilon();
        let mut best: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let element = self.element(row, entering_column);
            if element > epsilon {
                let ratio = self.constraint_value(row) / element;
                if best.is_none_or(|(_, best_ratio)| ratio < best_ratio) {
                    best = Some((row, ratio));
                }
            }
        }

        best.map(|(row, _)| row)
    }
}

/// Dense simplex tableau over a problem in standard form.
///
/// Owns the matrix `A`, the right-hand side `b`, the costs `c` and the basis with respect to the
/// current basis. Every basis column of `A` is a unit vector in its row, as long as the initial
/// basis had that property (see `is_canonical`).
#[derive(Clone, Debug, PartialEq)]
pub struct SimplexTable<F = f64> {
    /// Constraint matrix of size `m x n`.
    a: Array2<F>,
    /// Value of the basic variables, size `m`.
    b: Array1<F>,
    /// Costs of the standard form problem, size `n`. Never changes.
    c: Array1<F>,
    /// Basic variable for every row.
    basis: Vec<usize>,

    epsilon: F,
    /// Whether all snapshots are kept, or only the first and last.
    record_history: bool,
    history: Vec<Snapshot<F>>,
    nr_pivots: usize,
}

impl<F: Float> SimplexTable<F> {
    /// Create a tableau for a problem in standard form, starting at a basic solution.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem in standard form, `Ax = b`.
    /// * `initial`: Basic solution with a basic variable for every row of `problem`.
    /// * `epsilon`: Zero tolerance for reduced costs and pivot elements.
    ///
    /// # Errors
    ///
    /// When the basis doesn't have a variable for every row, or refers to a variable that doesn't
    /// exist.
    pub fn new(
        problem: &LinearProgram<F>,
        initial: &BasicFeasibleSolution<F>,
        epsilon: F,
    ) -> Result<Self, SolveError> {
        if initial.nr_rows() != problem.nr_constraints() {
            return Err(SolveError::Inconsistent(format!(
                "Basis has {} variables for {} constraints", initial.nr_rows(), problem.nr_constraints(),
            )));
        }
        if problem.objective().len() != problem.nr_variables() {
            return Err(SolveError::Inconsistent(format!(
                "Objective function has {} coefficients for {} variables",
                problem.objective().len(), problem.nr_variables(),
            )));
        }
        if let Some(&index) = initial.basis_indices().iter().find(|&&j| j >= problem.nr_variables()) {
            return Err(SolveError::Inconsistent(format!(
                "Basis variable x{} does not exist, there are {} variables",
                index + 1, problem.nr_variables(),
            )));
        }

        let mut table = Self {
            a: problem.constraint_matrix(),
            b: problem.right_hand_side(),
            c: problem.objective().iter().copied().collect(),
            basis: initial.basis_indices().to_vec(),
            epsilon,
            record_history: true,
            history: Vec::new(),
            nr_pivots: 0,
        };
        if !table.is_canonical() {
            log::warn!("Initial basis {:?} does not form an identity matrix", table.basis);
        }
        let first = table.snapshot();
        table.history.push(first);

        Ok(table)
    }

    /// Keep only the initial and the latest snapshot when `record` is false.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Whether every basis column is a unit vector in its own row.
    ///
    /// Compares within the square root of the zero tolerance, to allow for accumulated rounding.
    pub fn is_canonical(&self) -> bool {
        let tolerance = self.epsilon.sqrt();
        self.basis.iter().enumerate().all(|(row, &column)| {
            (0..self.nr_rows()).all(|i| {
                let expected = if i == row { F::one() } else { F::zero() };
                (self.a[[i, column]] - expected).abs() <= tolerance
            })
        })
    }

    /// The most recent snapshot.
    pub fn get_table(&self) -> &Snapshot<F> {
        // There is always at least the initial snapshot
        &self.history[self.history.len() - 1]
    }

    /// A snapshot from the history.
    ///
    /// # Arguments
    ///
    /// * `index`: `0` is the initial tableau.
    ///
    /// # Errors
    ///
    /// If the index is not in range `0` until the length of the history.
    pub fn display_iteration(&self, index: usize) -> Result<&Snapshot<F>, SolveError> {
        self.history.get(index)
            .ok_or(SolveError::IterationOutOfRange { index, len: self.history.len() })
    }

    /// Number of pivots that were performed.
    pub fn iteration_count(&self) -> usize {
        self.nr_pivots
    }

    /// Costs of the basic variables, `c_B`.
    fn basic_costs(&self) -> impl Iterator<Item = F> + '_ {
        self.basis.iter().map(|&j| self.c[j])
    }

    /// Copy the current state into a snapshot.
    ///
    /// The ratio column is filled for the column the default rule would choose next.
    fn snapshot(&self) -> Snapshot<F> {
        let headers = ["Basis".to_string(), "C_B".to_string(), "B".to_string()].into_iter()
            .chain((0..self.nr_columns()).map(|j| format!("x{}", j + 1)))
            .chain(Some("Q".to_string()))
            .collect();

        let entering = self.get_entering_variable();
        let mut rows = (0..self.nr_rows())
            .map(|i| {
                let ratio = match entering {
                    Some(j) if self.a[[i, j]] > self.epsilon => Cell::Value(self.b[i] / self.a[[i, j]]),
                    _ => Cell::Empty,
                };

                [
                    Cell::Label(format!("x{}", self.basis[i] + 1)),
                    Cell::Value(self.c[self.basis[i]]),
                    Cell::Value(self.b[i]),
                ].into_iter()
                    .chain(self.a.row(i).iter().map(|&value| Cell::Value(value)))
                    .chain(Some(ratio))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        rows.push(
            [Cell::Label("Δ".to_string()), Cell::Empty, Cell::Value(self.get_objective_value())].into_iter()
                .chain(self.reduced_costs().into_iter().map(Cell::Value))
                .chain(Some(Cell::Empty))
                .collect()
        );

        Snapshot::new(headers, rows)
    }

    fn record_snapshot(&mut self) {
        let snapshot = self.snapshot();
        if self.record_history || self.history.len() < 2 {
            self.history.push(snapshot);
        } else {
            let last = self.history.len() - 1;
            self.history[last] = snapshot;
        }
    }
}

impl<F: Float> Tableau<F> for SimplexTable<F> {
    fn nr_rows(&self) -> usize {
        self.a.nrows()
    }

    fn nr_columns(&self) -> usize {
        self.a.ncols()
    }

    fn epsilon(&self) -> F {
        self.epsilon
    }

    fn basis(&self) -> &[usize] {
        &self.basis
    }

    fn element(&self, row: usize, column: usize) -> F {
        self.a[[row, column]]
    }

    fn constraint_value(&self, row: usize) -> F {
        self.b[row]
    }

    fn reduced_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        let z = self.basic_costs()
            .zip(self.a.column(column))
            .fold(F::zero(), |total, (cost, &value)| total + cost * value);
        self.c[column] - z
    }

    /// Every row other than the pivot row is updated as
    /// `a'_ij = (a_ij * p - a_i,entering * a_leaving,j) / p`, the pivot row is divided by `p`.
    fn pivot(&mut self, leaving_row: usize, entering_column: usize) -> Result<(), SolveError> {
        if leaving_row >= self.nr_rows() || entering_column >= self.nr_columns() {
            return Err(SolveError::InvalidPivot { row: leaving_row, column: entering_column });
        }

        let p = self.a[[leaving_row, entering_column]];
        if p.abs() < self.epsilon {
            return Err(SolveError::InvalidPivot { row: leaving_row, column: entering_column });
        }

        for i in (0..self.nr_rows()).filter(|&i| i != leaving_row) {
            let factor = self.a[[i, entering_column]];
            for j in 0..self.nr_columns() {
                let value = (self.a[[i, j]] * p - factor * self.a[[leaving_row, j]]) / p;
                self.a[[i, j]] = value;
            }
            self.b[i] = (self.b[i] * p - factor * self.b[leaving_row]) / p;
        }
        self.a.row_mut(leaving_row).mapv_inplace(|value| value / p);
        self.b[leaving_row] = self.b[leaving_row] / p;

        log::debug!(
            "Pivot on ({}, {}) with element {}: x{} leaves, x{} enters",
            leaving_row, entering_column, p.to_f64().unwrap_or(f64::NAN),
            self.basis[leaving_row] + 1, entering_column + 1,
        );
        self.basis[leaving_row] = entering_column;
        self.nr_pivots += 1;
        self.record_snapshot();

        Ok(())
    }

    fn get_solution_vector(&self) -> Vec<F> {
        let n = self.nr_columns();
        let mut solution = vec![F::zero(); n];
        for (&column, &value) in self.basis.iter().zip(self.b.iter()) {
            if column < n {
                solution[column] = value;
            }
        }

        solution
    }

    fn get_objective_value(&self) -> F {
        self.basic_costs()
            .zip(self.b.iter())
            .fold(F::zero(), |total, (cost, &value)| total + cost * value)
    }

    fn get_full_history(&self) -> &[Snapshot<F>] {
        &self.history
    }
}

impl<F: Float + Display> Display for SimplexTable<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "=== Tableau after {} pivots ===", self.nr_pivots)?;
        self.get_table().fmt(f)
    }
}
