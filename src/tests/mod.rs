//! # Integration tests that require a look inside the crate.
//!
//! Every problem is followed through the whole pipeline, and compared with a hand computed
//! expectation at every stage.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_TEXT`
//! * `fn linear_program()`
//! * `fn standard_form()`
//! * `fn initial_bfs()`
//! * `fn initial_tableau()`
pub mod problem_1;
