//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::ComponentNotFound => StatusCode::NOT_FOUND,

            Self::FieldKeyExists => StatusCode::CONFLICT,

            Self::ComponentTypeImmutable | Self::ScrapeFailed => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::FieldKeyReserved => StatusCode::BAD_REQUEST,
        }
    }
}
