//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt::{self, Display};
use std::io;

use crate::data::linear_program::problem::InconsistencyError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// There is a logical inconsistency in the linear program described by a file.
    ///
    /// For example, a constraint might have more coefficients than there are variables.
    LinearProgram(InconsistencyError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => message.fmt(f),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::LinearProgram(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::LinearProgram(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<InconsistencyError> for ImportError {
    fn from(error: InconsistencyError) -> Self {
        ImportError::LinearProgram(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(u64, String),
    Nested(Box<ParseError>),
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    #[allow(missing_docs)]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number and contents of the line that caused this error, searching through the chain.
    pub fn file_location(&self) -> Option<(u64, &str)> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, line)) => Some((*line_number, line.as_str())),
            Some(ParseErrorSource::Nested(error)) => error.file_location(),
            None => None,
        }
    }

    /// Get all descriptions in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(ParseErrorSource::Nested(error)) => {
                descriptions.append(&mut error.chain_description());
            },
            None => (),
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{ImportError, ParseError};

    #[test]
    fn chain() {
        let cause = ParseError::with_file_location("Invalid coefficient x_2", (3, "1 a <= 4"));
        let error = ParseError::with_cause("Could not read constraint 2", cause);

        assert_eq!(error.file_location(), Some((3, "1 a <= 4")));
        assert_eq!(
            error.to_string(),
            "ParseError: Could not read constraint 2\nInvalid coefficient x_2\n\tCaused at line\t3:\t1 a <= 4",
        );
        assert!(error.source().is_some());
        assert!(ParseError::new("Empty file").source().is_none());
    }

    #[test]
    fn import_wraps_parse() {
        let error = ImportError::from(ParseError::new("Empty file"));
        assert_eq!(error.to_string(), "ParseError: Empty file");
        assert!(error.source().is_some());
    }
}
