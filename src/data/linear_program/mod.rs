//! # Representing linear programs
//!
//! This module contains the representation of linear programs as they are stated by a user, the
//! rewrite of such a program into standard form (equality constraints only) and the basic
//! solutions the simplex method moves between.
pub mod elements;
pub mod problem;
pub mod solution;
pub mod standard_form;
