//! Edit flow for a single component
//!
//! Holds the in-memory draft, the add-field dialog and pending user
//! notifications. Every backend failure is absorbed here: the draft is never
//! discarded because a call failed.

mod add_field;
mod notify;
mod session;

pub use add_field::{AddFieldDialog, NewField};
pub use notify::{Notification, NotificationKind};
pub use session::{EditSession, ExtraSpecColumn, SessionMode};
