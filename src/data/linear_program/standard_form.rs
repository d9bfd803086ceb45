//! # Conversion to standard form
//!
//! The simplex method only ever maximizes `c^T x` subject to `Ax = b`, `x >= 0` with `b >= 0`. A
//! `LinearProgram` in any other shape is rewritten by negating costs, flipping rows with a negative
//! right-hand side and appending one slack column for every inequality.
use std::iter::repeat_n;

use enum_map::EnumMap;
use num_traits::Float;

use crate::data::linear_program::elements::{ConstraintType, OptimizationType};
use crate::data::linear_program::problem::{Constraint, LinearProgram};

impl<F: Float> LinearProgram<F> {
    /// Rewrite this problem in standard form.
    ///
    /// The original problem is left untouched. Slack columns are appended after the original
    /// variables, in the order of the constraints that need them.
    ///
    /// # Return value
    ///
    /// A maximization problem with only equality constraints, non-negative right-hand sides and
    /// `self.nr_variables()` plus the number of inequalities as the number of variables.
    ///
    /// # Note
    ///
    /// Callers should reject empty problems before calling this method; it will happily produce an
    /// empty standard form.
    pub fn to_standard_form(&self) -> LinearProgram<F> {
        let mut objective = self.objective().to_vec();
        if self.optimization_type() == OptimizationType::Minimize {
            objective.iter_mut().for_each(|cost| *cost = -*cost);
        }

        let mut type_counts = EnumMap::<ConstraintType, usize>::default();
        for constraint in self.constraints() {
            type_counts[constraint.constraint_type()] += 1;
        }
        let nr_slacks = type_counts[ConstraintType::Less] + type_counts[ConstraintType::Greater];
        log::debug!(
            "Standard form: {} <=, {} >= and {} = constraints, {} slack columns",
            type_counts[ConstraintType::Less],
            type_counts[ConstraintType::Greater],
            type_counts[ConstraintType::Equal],
            nr_slacks,
        );

        let mut next_slack = 0;
        let constraints = self.constraints().iter()
            .map(|constraint| {
                let (mut coefficients, constraint_type, free_value) = non_negative_rhs(constraint);

                let mut slacks = vec![F::zero(); nr_slacks];
                if let Some(coefficient) = constraint_type.slack_coefficient() {
                    slacks[next_slack] = coefficient;
                    next_slack += 1;
                }
                coefficients.extend(slacks);

                Constraint::new(coefficients, ConstraintType::Equal, free_value)
            })
            .collect();
        debug_assert_eq!(next_slack, nr_slacks);

        objective.extend(repeat_n(F::zero(), nr_slacks));

        Self::from_parts(
            OptimizationType::Maximize,
            objective,
            constraints,
            self.nr_variables() + nr_slacks,
        )
    }

    /// Whether this problem already has the shape produced by `to_standard_form`.
    pub fn is_standard_form(&self) -> bool {
        self.optimization_type() == OptimizationType::Maximize
            && self.constraints().iter().all(|constraint| {
                constraint.constraint_type() == ConstraintType::Equal
                    && *constraint.free_value() >= F::zero()
            })
    }
}

/// Multiply a row with `-1` if its right-hand side is negative.
fn non_negative_rhs<F: Float>(constraint: &Constraint<F>) -> (Vec<F>, ConstraintType, F) {
    let free_value = *constraint.free_value();
    if free_value < F::zero() {
        (
            constraint.coefficients().iter().map(|&a| -a).collect(),
            constraint.constraint_type().flipped(),
            -free_value,
        )
    } else {
        (constraint.coefficients().to_vec(), constraint.constraint_type(), free_value)
    }
}
