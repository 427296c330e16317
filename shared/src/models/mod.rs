//! Data models
//!
//! Wire types for the component catalog REST contract, plus the static
//! per-type field catalog.

pub mod component;
pub mod component_type;
pub mod extra_spec;
pub mod query;
pub mod scrape;
pub mod serde_helpers;
pub mod static_fields;

// Re-exports
pub use component::*;
pub use component_type::*;
pub use extra_spec::*;
pub use query::*;
pub use scrape::*;
pub use static_fields::*;
