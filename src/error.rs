//! Error types for notes-mcp.
//!
//! Configuration errors are fatal at startup. Tool errors are recovered
//! at the dispatch boundary and surfaced as `is_error` responses; they
//! never cross into the transport as a Rust error.

use std::path::PathBuf;

use thiserror::Error;

use crate::calc::EvalError;
use crate::notes::NoteError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors a tool invocation can fail with.
///
/// Every variant renders to the message shown in the `is_error`
/// response; the dispatcher guarantees none of them propagate further.
#[derive(Error, Debug, PartialEq)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The name that failed to resolve.
        name: String,
    },

    /// A required argument was absent.
    #[error("Missing required parameter: {parameter}")]
    MissingParameter {
        /// Name of the absent parameter.
        parameter: &'static str,
    },

    /// An argument had the wrong coarse type.
    #[error("Invalid type for parameter {parameter}: expected {expected}")]
    InvalidParameterType {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The expected coarse type (`string` or `number`).
        expected: &'static str,
    },

    /// An argument was present and well-typed but had a disallowed value.
    #[error("Invalid value for parameter {parameter}: {message}")]
    InvalidParameterValue {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A note store operation failed.
    #[error(transparent)]
    Note(#[from] NoteError),

    /// Expression evaluation failed.
    #[error("Calculation error: {0}")]
    Evaluation(#[from] EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let error = ToolError::UnknownTool {
            name: "nonexistent_tool".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown tool: nonexistent_tool");
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let error = ToolError::MissingParameter { parameter: "title" };
        assert_eq!(error.to_string(), "Missing required parameter: title");
    }

    #[test]
    fn note_error_passes_through_unchanged() {
        let error = ToolError::from(NoteError::NotFound {
            id: "999".to_string(),
        });
        assert_eq!(error.to_string(), "Note with ID 999 not found");
    }

    #[test]
    fn evaluation_error_is_prefixed() {
        let error = ToolError::from(EvalError::DivisionByZero);
        assert_eq!(error.to_string(), "Calculation error: division by zero");
    }
}
