//! # Frozen copies of a tableau
//!
//! Every state a `SimplexTable` passes through is recorded as a `Snapshot`: header labels and rows
//! of cells, ready to be shown to a user. Snapshots never share data with the live tableau.
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use num_traits::Float;

/// Number of decimal places used when rendering values.
pub const DECIMAL_PLACES: usize = 4;

/// A single entry of a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell<F> {
    /// Text, like the name of a basic variable.
    Label(String),
    /// A number from the tableau.
    Value(F),
    /// Nothing to show, like a ratio for a row that doesn't limit the entering column.
    Empty,
}

impl<F: Copy> Cell<F> {
    /// The number in this cell, if any.
    pub fn value(&self) -> Option<F> {
        match self {
            Cell::Value(value) => Some(*value),
            _ => None,
        }
    }
}

impl<F: Float + Display> Display for Cell<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cell::Label(text) => f.write_str(text),
            // Avoid printing "-0.0000"
            Cell::Value(value) if value.abs() < F::from(0.5e-4).unwrap_or_else(F::epsilon) => {
                write!(f, "{:.*}", DECIMAL_PLACES, F::zero())
            },
            Cell::Value(value) => write!(f, "{:.*}", DECIMAL_PLACES, value),
            Cell::Empty => Ok(()),
        }
    }
}

/// A tableau at one moment during the simplex method.
///
/// Headers are `Basis`, `C_B`, `B`, one label per variable and `Q`. There is one row per constraint
/// and a final row holding the objective value and the reduced costs `c_j - z_j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F> {
    headers: Vec<String>,
    rows: Vec<Vec<Cell<F>>>,
}

impl<F> Snapshot<F> {
    /// Create a new snapshot.
    ///
    /// # Panics
    ///
    /// When a row doesn't have exactly one cell for every header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell<F>>>) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == headers.len()),
            "every row needs {} cells", headers.len(),
        );

        Self { headers, rows }
    }

    #[allow(missing_docs)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows, the reduced cost row last.
    pub fn rows(&self) -> &[Vec<Cell<F>>] {
        &self.rows
    }

    /// Rows that correspond to a constraint.
    pub fn constraint_rows(&self) -> &[Vec<Cell<F>>] {
        match self.rows.split_last() {
            Some((_, constraint_rows)) => constraint_rows,
            None => &[],
        }
    }

    /// The row with the objective value and the reduced costs.
    pub fn reduced_cost_row(&self) -> Option<&[Cell<F>]> {
        self.rows.last().map(Vec::as_slice)
    }
}

impl<F: Float + Display> Display for Snapshot<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let cells = self.rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let widths = self.headers.iter().enumerate()
            .map(|(j, header)| {
                cells.iter()
                    .map(|row| row[j].chars().count())
                    .chain(Some(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        write_line(f, self.headers.iter(), &widths)?;
        let total_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total_width))?;
        for (i, row) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                writeln!(f, "{}", "-".repeat(total_width))?;
            }
            write_line(f, row.iter(), &widths)?;
        }

        Ok(())
    }
}

/// Write texts right-aligned in their columns.
fn write_line<'a>(
    f: &mut Formatter,
    texts: impl Iterator<Item = &'a String>,
    widths: &[usize],
) -> fmt::Result {
    let padded = texts.zip(widths)
        .map(|(text, &width)| format!("{:>width$}", text, width = width))
        .join(" | ");
    writeln!(f, "{}", padded)
}
