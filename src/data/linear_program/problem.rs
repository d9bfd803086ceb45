//! # Linear programs as they are stated
//!
//! A `LinearProgram` is the value that is handed to the solver: a direction of optimization, a cost
//! vector and a list of constraints over non-negative variables. It is immutable once built.
use std::error::Error;
use std::fmt;

use itertools::Itertools;
use ndarray::{Array1, Array2};
use num_traits::Float;

use crate::data::linear_program::elements::{ConstraintType, OptimizationType};

/// A single linear constraint `<a, x> OP b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F = f64> {
    coefficients: Vec<F>,
    constraint_type: ConstraintType,
    /// Right-hand side `b`.
    free_value: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One coefficient per variable of the problem this constraint will be part
    /// of.
    /// * `constraint_type`: Relation between the left- and right-hand side.
    /// * `free_value`: The right-hand side.
    pub fn new(coefficients: Vec<F>, constraint_type: ConstraintType, free_value: F) -> Self {
        Self { coefficients, constraint_type, free_value }
    }

    #[allow(missing_docs)]
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    #[allow(missing_docs)]
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    #[allow(missing_docs)]
    pub fn free_value(&self) -> &F {
        &self.free_value
    }
}

/// A linear program over non-negative variables.
///
/// Every constraint has exactly `nr_variables` coefficients, as does the objective function. This
/// is checked on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F = f64> {
    optimization_type: OptimizationType,
    objective: Vec<F>,
    constraints: Vec<Constraint<F>>,
    nr_variables: usize,
}

impl<F> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// The number of variables is taken to be the length of the objective function.
    ///
    /// # Errors
    ///
    /// When the length of the coefficients of a constraint differs from that of the objective
    /// function.
    pub fn new(
        optimization_type: OptimizationType,
        objective: Vec<F>,
        constraints: Vec<Constraint<F>>,
    ) -> Result<Self, InconsistencyError> {
        let nr_variables = objective.len();
        Self::with_nr_variables(optimization_type, objective, constraints, nr_variables)
    }

    /// Create a new linear program with an explicit variable count.
    ///
    /// Exists for problems that have constraints but an empty objective function (and for which the
    /// solver should report that, rather than the constructor).
    ///
    /// # Errors
    ///
    /// When the objective function or any constraint doesn't have `nr_variables` coefficients. An
    /// empty objective function is accepted.
    pub fn with_nr_variables(
        optimization_type: OptimizationType,
        objective: Vec<F>,
        constraints: Vec<Constraint<F>>,
        nr_variables: usize,
    ) -> Result<Self, InconsistencyError> {
        if !objective.is_empty() && objective.len() != nr_variables {
            return Err(InconsistencyError::new(format!(
                "Objective function has {} coefficients, expected {}",
                objective.len(), nr_variables,
            )));
        }
        if let Some((index, constraint)) = constraints.iter()
            .find_position(|constraint| constraint.coefficients.len() != nr_variables) {
            return Err(InconsistencyError::new(format!(
                "Constraint {} has {} coefficients, expected {}",
                index + 1, constraint.coefficients.len(), nr_variables,
            )));
        }

        Ok(Self { optimization_type, objective, constraints, nr_variables })
    }

    /// Assemble a problem that is consistent by construction.
    pub(crate) fn from_parts(
        optimization_type: OptimizationType,
        objective: Vec<F>,
        constraints: Vec<Constraint<F>>,
        nr_variables: usize,
    ) -> Self {
        debug_assert!(constraints.iter().all(|constraint| constraint.coefficients.len() == nr_variables));

        Self { optimization_type, objective, constraints, nr_variables }
    }

    #[allow(missing_docs)]
    pub fn optimization_type(&self) -> OptimizationType {
        self.optimization_type
    }

    /// Cost coefficients, one per variable.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    #[allow(missing_docs)]
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    #[allow(missing_docs)]
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Whether there is nothing to optimize or nothing to optimize over.
    pub fn is_empty(&self) -> bool {
        self.objective.is_empty() || self.constraints.is_empty()
    }
}

impl<F: Float> LinearProgram<F> {
    /// The constraint matrix `A`, with a row for each constraint and a column for each variable.
    pub fn constraint_matrix(&self) -> Array2<F> {
        Array2::from_shape_fn(
            (self.nr_constraints(), self.nr_variables),
            |(i, j)| self.constraints[i].coefficients[j],
        )
    }

    /// The right-hand side `b`.
    pub fn right_hand_side(&self) -> Array1<F> {
        self.constraints.iter().map(|constraint| constraint.free_value).collect()
    }

    /// Value of the objective function at a point.
    ///
    /// # Arguments
    ///
    /// * `point`: Value for each variable, in order.
    ///
    /// # Panics
    ///
    /// When `point` doesn't have a value for every variable.
    pub fn evaluate(&self, point: &[F]) -> F {
        assert_eq!(
            point.len(), self.nr_variables,
            "point of length {} for {} variables", point.len(), self.nr_variables,
        );

        inner_product(&self.objective, point)
    }

    /// Whether a point satisfies all constraints and the non-negativity bounds.
    ///
    /// # Arguments
    ///
    /// * `point`: Value for each variable, in order.
    /// * `tolerance`: How much each (in)equality may be violated.
    pub fn is_satisfied_by(&self, point: &[F], tolerance: F) -> bool {
        if point.len() != self.nr_variables || point.iter().any(|&x| x < -tolerance) {
            return false;
        }

        self.constraints.iter().all(|constraint| {
            let lhs = inner_product(&constraint.coefficients, point);
            let b = constraint.free_value;
            match constraint.constraint_type {
                ConstraintType::Less => lhs <= b + tolerance,
                ConstraintType::Greater => lhs >= b - tolerance,
                ConstraintType::Equal => (lhs - b).abs() <= tolerance,
            }
        })
    }
}

fn inner_product<F: Float>(left: &[F], right: &[F]) -> F {
    left.iter().zip(right).fold(F::zero(), |total, (&a, &b)| total + a * b)
}

/// An `InconsistencyError` is returned when a linear program is inconsistently represented.
///
/// This error is not returned when the linear program is infeasible or unbounded. It is meant only
/// for descriptions of linear programs, and should not be used once solving has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl fmt::Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ProgramError: {}", self.description)
    }
}

impl Error for InconsistencyError {}
