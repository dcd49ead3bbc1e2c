//! Error types for building search and filter predicates

use std::fmt;

/// Errors that can occur while turning client input into predicates
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Operator token is not supported by the field's operator set
    InvalidOperator {
        field: String,
        operator: String,
        supported: Vec<String>,
    },
    /// Raw value could not be parsed into the operator set's value type
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// Term references a field the result shape does not declare
    UnknownField { field: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidOperator {
                field,
                operator,
                supported,
            } => {
                write!(
                    f,
                    "Invalid operator '{}' for field '{}'. Supported: {}",
                    operator,
                    field,
                    supported.join(", ")
                )
            }
            QueryError::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': expected {}",
                    value, field, expected
                )
            }
            QueryError::UnknownField { field } => {
                write!(f, "Unknown field '{}'", field)
            }
        }
    }
}

impl std::error::Error for QueryError {}
