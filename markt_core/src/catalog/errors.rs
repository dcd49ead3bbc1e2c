//! Error surface of the listing service

use serde::Serialize;
use std::fmt;

use crate::query::{QueryError, ValidationError};

/// HTTP-style status of an API error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    BadRequest,
    NotFound,
}

impl ApiStatus {
    pub fn code(&self) -> u16 {
        match self {
            ApiStatus::BadRequest => 400,
            ApiStatus::NotFound => 404,
        }
    }
}

/// Error returned to clients as `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: ApiStatus,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::BadRequest,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::NotFound,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status.code())
    }
}

impl std::error::Error for ApiError {}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        ApiError::bad_request(error.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::bad_request(error.message)
    }
}
