//! Shared types for the Xorig catalog admin
//!
//! Domain models, the dynamic field engine, and the unified error type used
//! by the client and the mock backend.

pub mod error;
pub mod fields;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
