//! Add-field dialog
//!
//! `Closed` → `Open` → (submit with a usable name) → field appended → `Closed`.
//! Cancel returns to `Closed` without touching any field list.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::fields::{CategorizedFields, FieldType, Section, TypedField, is_reserved, normalize_key};
use shared::models::{ComponentType, is_static_key};

/// In-progress input of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewField {
    pub section: Section,
    /// Raw name as typed; normalized only on submit
    pub name: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddFieldDialog {
    #[default]
    Closed,
    Open(NewField),
}

impl AddFieldDialog {
    /// Open for `section` with an empty string-typed draft
    pub fn open(&mut self, section: Section) {
        *self = Self::Open(NewField {
            section,
            name: String::new(),
            field_type: FieldType::String,
        });
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Self::Open(draft) = self {
            draft.name = name.into();
        }
    }

    pub fn set_type(&mut self, field_type: FieldType) {
        if let Self::Open(draft) = self {
            draft.field_type = field_type;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Append the drafted field to `fields`
    ///
    /// Returns the new key and closes the dialog. A blank name is a no-op
    /// (`Ok(None)`, dialog stays open). A key taken by the static catalog, a
    /// reserved key, or an existing dynamic field is rejected and the dialog
    /// stays open.
    pub fn submit(
        &mut self,
        component_type: ComponentType,
        fields: &mut CategorizedFields,
    ) -> AppResult<Option<String>> {
        let Self::Open(draft) = self else {
            return Ok(None);
        };
        if draft.name.trim().is_empty() {
            return Ok(None);
        }

        let key = normalize_key(&draft.name);
        if is_static_key(component_type, &key) || is_reserved(&key) {
            return Err(AppError::new(ErrorCode::FieldKeyReserved).with_detail("key", key));
        }
        if fields.contains_key(&key) {
            return Err(AppError::new(ErrorCode::FieldKeyExists).with_detail("key", key));
        }

        let field = TypedField::new(&draft.name, draft.field_type);
        tracing::debug!(key = %field.key, section = %draft.section, "Dynamic field added");
        fields.list_mut(draft.section).push(field);
        *self = Self::Closed;
        Ok(Some(key))
    }
}
