//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use enum_map::Enum;
use num_traits::{One, Zero};

/// A `ConstraintType` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Less,
    Greater,
    Equal,
}

impl ConstraintType {
    /// The relation that holds after multiplying both sides with `-1`.
    ///
    /// `<=` and `>=` swap, an equality stays an equality.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Less => ConstraintType::Greater,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Equal => ConstraintType::Equal,
        }
    }

    /// Coefficient of the slack variable that turns this relation into an equality.
    ///
    /// # Return value
    ///
    /// `1` for `<=`, `-1` for `>=` and `None` for an equality, which needs no slack.
    pub fn slack_coefficient<F: One + Zero + Neg<Output = F>>(self) -> Option<F> {
        match self {
            ConstraintType::Less => Some(F::one()),
            ConstraintType::Greater => Some(-F::one()),
            ConstraintType::Equal => None,
        }
    }

    /// Whether a slack variable is needed for this relation.
    pub fn needs_slack(self) -> bool {
        !matches!(self, ConstraintType::Equal)
    }
}

/// Operators are read as they are typed by a user, surrounding whitespace is ignored.
impl FromStr for ConstraintType {
    type Err = String;

    fn from_str(operator: &str) -> Result<Self, Self::Err> {
        match operator.trim() {
            "<=" => Ok(ConstraintType::Less),
            ">=" => Ok(ConstraintType::Greater),
            "=" => Ok(ConstraintType::Equal),
            other => Err(format!("Unknown constraint operator \"{}\"", other)),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Less => "<=",
            ConstraintType::Greater => ">=",
            ConstraintType::Equal => "=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OptimizationType {
    #[default]
    Maximize,
    Minimize,
}

impl FromStr for OptimizationType {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "maximize" | "max" => Ok(OptimizationType::Maximize),
            "minimize" | "min" => Ok(OptimizationType::Minimize),
            other => Err(format!("Unknown optimization direction \"{}\"", other)),
        }
    }
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OptimizationType::Maximize => "Maximize",
            OptimizationType::Minimize => "Minimize",
        })
    }
}

/// After solving, a problem is either optimal, infeasible or unbounded. Anything that went wrong
/// along the way is an error.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SolutionStatus::Optimal => "optimal",
            SolutionStatus::Infeasible => "infeasible",
            SolutionStatus::Unbounded => "unbounded",
            SolutionStatus::Error => "error",
        })
    }
}
