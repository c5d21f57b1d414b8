//! Error types for the Business Valuation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a valuation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Business Valuation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use valuation_engine::error::EngineError;
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

    /// A multiplier table entry failed load-time validation.
    #[error("Invalid multiplier range for code '{code}': {message}")]
    InvalidMultiplierRange {
        /// The NAICS code of the offending table entry.
        code: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A value-driver dimension was not graded.
    #[error("Missing value-driver dimension: {dimension}")]
    MissingDimension {
        /// The dimension that was not supplied.
        dimension: String,
    },

    /// A supplied dimension name is not one of the ten value drivers.
    #[error("Unknown value-driver dimension: {dimension}")]
    UnknownDimension {
        /// The unrecognized dimension name.
        dimension: String,
    },

    /// A grade string was not one of the allowed letters.
    #[error("Invalid grade '{value}' for dimension '{dimension}': expected one of A, B, C, D, F")]
    InvalidGrade {
        /// The dimension the grade was supplied for.
        dimension: String,
        /// The rejected grade string.
        value: String,
    },

    /// A financial input exceeds the storage-safe magnitude bound.
    #[error("Financial field '{field}' magnitude {value} exceeds the 999999999 bound")]
    NumericOverflow {
        /// The offending field name.
        field: String,
        /// The rejected value.
        value: Decimal,
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
    fn test_invalid_multiplier_range_displays_code_and_message() {
        let error = EngineError::InvalidMultiplierRange {
            code: "238160".to_string(),
            message: "min exceeds avg".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid multiplier range for code '238160': min exceeds avg"
        );
    }

    #[test]
    fn test_missing_dimension_displays_dimension() {
        let error = EngineError::MissingDimension {
            dimension: "owner_dependency".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing value-driver dimension: owner_dependency"
        );
    }

    #[test]
    fn test_unknown_dimension_displays_dimension() {
        let error = EngineError::UnknownDimension {
            dimension: "brand_equity".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown value-driver dimension: brand_equity"
        );
    }

    #[test]
    fn test_invalid_grade_displays_dimension_and_value() {
        let error = EngineError::InvalidGrade {
            dimension: "management_team".to_string(),
            value: "E".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid grade 'E' for dimension 'management_team': expected one of A, B, C, D, F"
        );
    }

    #[test]
    fn test_numeric_overflow_displays_field_and_value() {
        let error = EngineError::NumericOverflow {
            field: "net_income".to_string(),
            value: Decimal::from_str("1000000000").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Financial field 'net_income' magnitude 1000000000 exceeds the 999999999 bound"
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
