//! Error types for the severance settlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading statutory
//! configuration, validating termination inputs, or generating explanations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the severance settlement engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use termination_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// The resignation date precedes the admission date.
    #[error("Resignation date {resignation} precedes admission date {admission}")]
    InvalidDateRange {
        /// The contract admission date.
        admission: NaiveDate,
        /// The offending resignation date.
        resignation: NaiveDate,
    },

    /// A monetary input was negative.
    #[error("Invalid amount for '{field}': {value} is negative")]
    InvalidAmount {
        /// The name of the offending field.
        field: String,
        /// The negative value that was supplied.
        value: Decimal,
    },

    /// The explanation generator could not produce a narrative.
    #[error("Explanation generation failed: {message}")]
    ExplanationFailed {
        /// A description of the generation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
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
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            admission: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            resignation: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Resignation date 2024-05-01 precedes admission date 2024-06-01"
        );
    }

    #[test]
    fn test_invalid_amount_displays_field_and_value() {
        let error = EngineError::InvalidAmount {
            field: "salary".to_string(),
            value: Decimal::from_str("-100.00").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'salary': -100.00 is negative"
        );
    }

    #[test]
    fn test_explanation_failed_displays_message() {
        let error = EngineError::ExplanationFailed {
            message: "generator timed out".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Explanation generation failed: generator timed out"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
