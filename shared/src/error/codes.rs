//! Unified error codes for the catalog admin
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Component and field errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 6xxx: Component ====================
    /// Component not found
    ComponentNotFound = 6001,
    /// Component type cannot change after creation
    ComponentTypeImmutable = 6002,
    /// Dynamic field key collides with the static catalog
    FieldKeyReserved = 6101,
    /// Dynamic field key already present on the component
    FieldKeyExists = 6102,
    /// Spec scraping failed for the given URL
    ScrapeFailed = 6201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Component
            ErrorCode::ComponentNotFound => "Component not found",
            ErrorCode::ComponentTypeImmutable => "Component type cannot be changed",
            ErrorCode::FieldKeyReserved => "Field key is reserved by the component type",
            ErrorCode::FieldKeyExists => "Field key already exists",
            ErrorCode::ScrapeFailed => "Failed to fetch specs from URL",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            6001 => Ok(ErrorCode::ComponentNotFound),
            6002 => Ok(ErrorCode::ComponentTypeImmutable),
            6101 => Ok(ErrorCode::FieldKeyReserved),
            6102 => Ok(ErrorCode::FieldKeyExists),
            6201 => Ok(ErrorCode::ScrapeFailed),

            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ComponentNotFound.code(), 6001);
        assert_eq!(ErrorCode::FieldKeyReserved.code(), 6101);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(6201), Ok(ErrorCode::ScrapeFailed));
        assert_eq!(ErrorCode::try_from(3), Ok(ErrorCode::NotFound));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        for unused in [1, 4, 9003, 9004, 9005] {
            assert!(ErrorCode::try_from(unused).is_err());
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::FieldKeyExists).unwrap();
        assert_eq!(json, "6102");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("1234");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ComponentTypeImmutable.to_string(), "6002");
    }
}
