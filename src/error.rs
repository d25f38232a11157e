//! Error types for the inigen CLI.
//!
//! Every variant renders as the exact line printed to stdout before exiting.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generator runs.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No JSON argument was given.
    #[error("Missing command line argument")]
    Usage,

    /// The argument is not JSON, or not shaped like a spec.
    #[error("Invalid JSON argument: {0}")]
    Parse(#[source] serde_json::Error),

    /// A required key is absent, null, or empty.
    #[error("{}", .0.message())]
    MissingField(RequiredField),

    /// The operator's terminal could not be read from or written to.
    #[error("Read input error!")]
    Input(#[source] std::io::Error),

    /// The INI file could not be written.
    #[error("Write file error!")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Keys the spec must define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    File,
    Input,
}

impl RequiredField {
    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::File => "INI file parameter not defined",
            RequiredField::Input => "INI file input parameter not defined",
        }
    }
}

impl GeneratorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeneratorError::Usage
            | GeneratorError::Parse(_)
            | GeneratorError::MissingField(_)
            | GeneratorError::Input(_) => exit_codes::USER_ERROR,
            GeneratorError::Write { .. } => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn usage_error_has_correct_exit_code_and_message() {
        let err = GeneratorError::Usage;
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "Missing command line argument");
    }

    #[test]
    fn missing_field_messages_are_exact() {
        let err = GeneratorError::MissingField(RequiredField::File);
        assert_eq!(err.to_string(), "INI file parameter not defined");
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);

        let err = GeneratorError::MissingField(RequiredField::Input);
        assert_eq!(err.to_string(), "INI file input parameter not defined");
    }

    #[test]
    fn parse_error_includes_details() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GeneratorError::Parse(source);
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().starts_with("Invalid JSON argument: "));
    }

    #[test]
    fn write_error_has_write_exit_code() {
        let err = GeneratorError::Write {
            path: PathBuf::from("conf/app.ini"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
        assert_eq!(err.to_string(), "Write file error!");
    }

    #[test]
    fn input_error_is_a_user_error() {
        let err = GeneratorError::Input(io::Error::other("closed"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "Read input error!");
    }
}
