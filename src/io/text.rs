//! # Plain text problem files
//!
//! A problem is written the way it is typed into a form: the direction of optimization followed
//! by the objective coefficients on the first line, and a constraint on every following line.
//!
//! ```text
//! # Everything after a hash is ignored
//! maximize: 3 2
//! 1 1 <= 4
//! 2 1 <= 5
//! ```
use std::str::FromStr;

use num_traits::Float;

use crate::data::linear_program::elements::{ConstraintType, OptimizationType};
use crate::data::linear_program::problem::{Constraint, LinearProgram};
use crate::io::error::{FileLocation, ImportError, ParseError};

/// Character that starts a comment.
const COMMENT: char = '#';

/// Parse a problem from text.
///
/// # Arguments
///
/// * `program`: Contents of a problem file.
///
/// # Errors
///
/// A `ParseError` when the text can't be read, and an `InconsistencyError` (wrapped in an
/// `ImportError`) when a constraint doesn't have a coefficient for every variable.
pub fn parse<F: Float + FromStr>(program: &str) -> Result<LinearProgram<F>, ImportError> {
    let mut lines = significant_lines(program);

    let header = lines.next().ok_or_else(|| ParseError::new("No objective function found"))?;
    let (optimization_type, objective) = parse_objective(header)
        .map_err(|error| ParseError::with_cause("Could not read the objective function", error))?;

    let constraints = lines.enumerate()
        .map(|(index, line)| parse_constraint(line).map_err(|error| {
            ParseError::with_cause(format!("Could not read constraint {}", index + 1), error)
        }))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} variables and {} constraints", objective.len(), constraints.len());

    LinearProgram::new(optimization_type, objective, constraints).map_err(ImportError::from)
}

/// Lines with content, numbered as in the file and with comments removed.
fn significant_lines(program: &str) -> impl Iterator<Item = FileLocation<'_>> {
    program.lines()
        .enumerate()
        .map(|(index, line)| {
            let content = match line.find(COMMENT) {
                Some(start) => &line[..start],
                None => line,
            };
            (index as u64 + 1, content.trim())
        })
        .filter(|(_, content)| !content.is_empty())
}

/// Read the first line, like `maximize 3 2` or `min: 1 -1`.
fn parse_objective<F: Float + FromStr>(
    file_location: FileLocation,
) -> Result<(OptimizationType, Vec<F>), ParseError> {
    let (_, line) = file_location;
    let (keyword, rest) = match line.find(|c: char| c.is_whitespace() || c == ':') {
        Some(end) => line.split_at(end),
        None => (line, ""),
    };

    let optimization_type = keyword.parse::<OptimizationType>()
        .map_err(|message| ParseError::with_file_location(message, file_location))?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let objective = rest.split_whitespace()
        .enumerate()
        .map(|(j, text)| parse_coefficient(text, &format!("a{}", j + 1), file_location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((optimization_type, objective))
}

/// Read a constraint line, like `2 1 <= 5`.
fn parse_constraint<F: Float + FromStr>(file_location: FileLocation) -> Result<Constraint<F>, ParseError> {
    let (_, line) = file_location;
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    let operator_position = tokens.iter()
        .position(|token| token.parse::<ConstraintType>().is_ok())
        .ok_or_else(|| ParseError::with_file_location(
            "Missing constraint operator, expected one of \"<=\", \">=\" or \"=\"",
            file_location,
        ))?;
    let constraint_type = tokens[operator_position].parse::<ConstraintType>()
        .map_err(|message| ParseError::with_file_location(message, file_location))?;

    let free_value = match &tokens[operator_position + 1..] {
        [value] => parse_coefficient(value, "free value", file_location)?,
        [] => return Err(ParseError::with_file_location("Missing right-hand side", file_location)),
        _ => return Err(ParseError::with_file_location(
            "Expected a single value after the constraint operator",
            file_location,
        )),
    };
    let coefficients = tokens[..operator_position].iter()
        .enumerate()
        .map(|(j, text)| parse_coefficient(text, &format!("x_{}", j + 1), file_location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Constraint::new(coefficients, constraint_type, free_value))
}

fn parse_coefficient<F: Float + FromStr>(
    text: &str,
    field_name: &str,
    file_location: FileLocation,
) -> Result<F, ParseError> {
    match text.parse::<F>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::with_file_location(
            format!("Invalid coefficient {}", field_name),
            file_location,
        )),
    }
}
