//! Error types for the absence cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during cost estimation.

use thiserror::Error;

/// The main error type for the absence cost engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use absence_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "absence_percent".to_string(),
///     constraint: "must be between 0 and 100".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for field 'absence_percent': must be between 0 and 100"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A scenario field violated one of its preconditions.
    ///
    /// Estimation never proceeds on invalid input; a silently wrong cost
    /// figure is worse than a visible rejection.
    #[error("Invalid input for field '{field}': {constraint}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// The constraint that was violated.
        constraint: String,
    },

    /// Mutually exclusive scenario options were supplied together.
    #[error("Conflicting configuration: {message}")]
    ConfigurationConflict {
        /// A description of the conflict.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_constraint() {
        let error = EngineError::InvalidInput {
            field: "employee_count".to_string(),
            constraint: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'employee_count': must be at least 1"
        );
    }

    #[test]
    fn test_configuration_conflict_displays_message() {
        let error = EngineError::ConfigurationConflict {
            message: "both scaling modes supplied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Conflicting configuration: both scaling modes supplied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "test".to_string(),
                constraint: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
