//! # Iterating to an optimum
//!
//! Starting from a basic feasible solution, the primal simplex method pivots until no column can
//! improve the objective value anymore.
use std::fmt::Display;
use std::marker::PhantomData;

use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::LpResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::two_phase::tableau::{SimplexTable, Tableau};
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::BasicFeasibleSolution;

/// Settings of the simplex method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexConfig<F = f64> {
    /// Number of pivots after which the method gives up.
    pub max_iterations: usize,
    /// Values with an absolute value below this are treated as zero.
    pub epsilon: F,
    /// Whether every intermediate tableau is kept, or only the first and the last.
    pub record_history: bool,
}

impl<F: Float> Default for SimplexConfig<F> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: F::from(1e-10).unwrap_or_else(F::epsilon),
            record_history: true,
        }
    }
}

/// Solving a problem in standard form, given a basis to start from.
pub trait SimplexDriver<F: Float> {
    /// Run the simplex method.
    ///
    /// # Arguments
    ///
    /// * `standard_form`: Problem with equality constraints only.
    /// * `initial`: Feasible basis to start from, a basic variable for every constraint.
    ///
    /// # Return value
    ///
    /// The outcome, with the final tableau attached whenever one could be built.
    fn solve_from_bfs(
        &self,
        standard_form: &LinearProgram<F>,
        initial: &BasicFeasibleSolution<F>,
    ) -> LpResult<F>;
}

/// The primal simplex method on a dense tableau.
///
/// The pivot rule `PR` decides which columns enter and which rows leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex<F = f64, PR = LargestCoefficient> {
    config: SimplexConfig<F>,
    rule: PhantomData<PR>,
}

impl<F: Float> Simplex<F> {
    /// Default settings, with the largest reduced cost entering.
    pub fn new() -> Self {
        Self::with_config(SimplexConfig::default())
    }
}

impl<F: Float, PR: PivotRule> Default for Simplex<F, PR> {
    fn default() -> Self {
        Self::with_config(SimplexConfig::default())
    }
}

impl<F: Float, PR: PivotRule> Simplex<F, PR> {
    #[allow(missing_docs)]
    pub fn with_config(config: SimplexConfig<F>) -> Self {
        Self { config, rule: PhantomData }
    }

    /// Use a different pivot rule, keeping the settings.
    pub fn with_pivot_rule<R: PivotRule>(self) -> Simplex<F, R> {
        Simplex::with_config(self.config)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Whether all intermediate tableaus should be kept.
    #[must_use]
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.config.record_history = record_history;
        self
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SimplexConfig<F> {
        &self.config
    }
}

impl<F: Float + Display, PR: PivotRule> Simplex<F, PR> {
    /// Pivot until the tableau is optimal.
    ///
    /// While calling this method, the tableau should be in a basic feasible solution state: every
    /// basis column is a unit vector and all constraint values are non-negative.
    ///
    /// # Errors
    ///
    /// When the problem is unbounded, the iteration limit is reached or a pivot fails. The tableau
    /// is left in the state it reached.
    fn primal(&self, tableau: &mut SimplexTable<F>) -> Result<(), SolveError> {
        let mut rule = PR::new();
        let mut nr_iterations = 0;
        while !tableau.is_optimal() {
            if nr_iterations >= self.config.max_iterations {
                return Err(SolveError::IterationLimit { max_iterations: self.config.max_iterations });
            }

            // Can only happen with a rule that disagrees with the optimality test
            let column = rule.select_primal_pivot_column(tableau)
                .ok_or(SolveError::NoEnteringColumn)?;
            let row = rule.select_primal_pivot_row(tableau, column)
                .ok_or(SolveError::Unbounded(column))?;
            tableau.pivot(row, column)?;
            nr_iterations += 1;

            log::debug!("Iteration {}: objective value {}", nr_iterations, tableau.get_objective_value());
            log::trace!("\n{}", tableau.get_table());
        }

        Ok(())
    }
}

impl<F: Float + Display, PR: PivotRule> SimplexDriver<F> for Simplex<F, PR> {
    fn solve_from_bfs(
        &self,
        standard_form: &LinearProgram<F>,
        initial: &BasicFeasibleSolution<F>,
    ) -> LpResult<F> {
        let mut tableau = match SimplexTable::new(standard_form, initial, self.config.epsilon) {
            Ok(tableau) => tableau.with_history(self.config.record_history),
            Err(error) => return LpResult::failed(error, None),
        };

        match self.primal(&mut tableau) {
            Ok(()) => {
                log::info!(
                    "Optimal after {} pivots, objective value {}",
                    tableau.iteration_count(), tableau.get_objective_value(),
                );
                LpResult::optimal(tableau)
            },
            Err(error) => {
                log::info!("Stopped after {} pivots: {}", tableau.iteration_count(), error);
                LpResult::failed(error, Some(tableau))
            },
        }
    }
}
