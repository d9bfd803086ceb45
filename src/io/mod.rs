//! # Reading of linear programs
//!
//! This module provides read functionality for linear program files.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use num_traits::Float;

use crate::data::linear_program::problem::LinearProgram;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// Currently only supports the plain text format, see the `text` module. Files should have the
/// `lp` or `txt` extension.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import<F: Float + FromStr>(file_path: &Path) -> Result<LinearProgram<F>, ImportError> {
    // Choose the right parser before reading
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("lp" | "txt") => (),
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }

    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;
    log::info!("Read problem file {:?}", file_path);

    parse(&program)
}

/// Parse a problem from text in the plain text format.
///
/// # Errors
///
/// See `text::parse`.
pub fn parse<F: Float + FromStr>(program: &str) -> Result<LinearProgram<F>, ImportError> {
    text::parse(program)
}
