//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented in two phases: first a basic feasible solution is found (see
//! `phase_one`), after which the primal simplex method pivots towards an optimum (see
//! `phase_two`).
//!
//! Problems are expected in standard form: maximization, equality constraints and non-negative
//! right-hand sides. See `LinearProgram::to_standard_form`.
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;
