//! Xorig Client - REST client and edit session for the component catalog
//!
//! Provides HTTP calls to the catalog backend and the in-memory edit flow
//! that drives the dynamic field engine.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod http;

pub use api::ComponentApi;
pub use config::ClientConfig;
pub use editor::{AddFieldDialog, EditSession, Notification, NotificationKind, SessionMode};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
