//! # Representation of basic solutions
//!
//! A basic solution is described by one basic variable per constraint row, together with the value
//! each of those variables takes. All other variables are zero.
use num_traits::Float;

/// A basic solution to a problem in standard form.
///
/// Should represent a solution that is feasible; whether it actually is can be checked with
/// `is_feasible`.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicFeasibleSolution<F = f64> {
    /// Index of the basic variable for each row, all distinct.
    basis_indices: Vec<usize>,
    /// Value of the basic variable for each row, parallel to `basis_indices`.
    basic_values: Vec<F>,
    /// Value of every variable of the problem; the basic values scattered into zeros.
    full_solution: Vec<F>,
}

impl<F: Float> BasicFeasibleSolution<F> {
    /// Create a new `BasicFeasibleSolution` instance.
    ///
    /// # Arguments
    ///
    /// * `basis_indices`: Basic variable for each row, each in range `0` until `nr_variables`.
    /// * `basic_values`: Value of the basic variable in each row.
    /// * `nr_variables`: Length of the dense solution vector.
    ///
    /// # Panics
    ///
    /// When there isn't exactly one value for every basic variable, or when a basic variable is
    /// out of range.
    pub fn new(basis_indices: Vec<usize>, basic_values: Vec<F>, nr_variables: usize) -> Self {
        assert_eq!(
            basis_indices.len(), basic_values.len(),
            "{} basic variables, but {} values", basis_indices.len(), basic_values.len(),
        );
        assert!(
            basis_indices.iter().all(|&index| index < nr_variables),
            "basic variable out of range for {} variables", nr_variables,
        );

        let mut full_solution = vec![F::zero(); nr_variables];
        for (&index, &value) in basis_indices.iter().zip(&basic_values) {
            full_solution[index] = value;
        }

        Self { basis_indices, basic_values, full_solution }
    }

    /// Whether all basic variables are non-negative.
    ///
    /// Vacuously true when there are no rows.
    pub fn is_feasible(&self) -> bool {
        self.basic_values.iter().all(|&value| value >= F::zero())
    }
}

impl<F> BasicFeasibleSolution<F> {
    #[allow(missing_docs)]
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    #[allow(missing_docs)]
    pub fn basic_values(&self) -> &[F] {
        &self.basic_values
    }

    #[allow(missing_docs)]
    pub fn full_solution(&self) -> &[F] {
        &self.full_solution
    }

    /// Number of constraint rows this solution has a basic variable for.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }
}
