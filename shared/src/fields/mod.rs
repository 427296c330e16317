//! Dynamic field engine
//!
//! Open-ended typed attributes layered on the fixed component schema:
//! - [`value`]: typed field records and their three representations
//! - [`coerce`]: total input coercion
//! - [`categorize`]: keyword heuristic for untagged fields
//! - [`decompose`]: stored record → categorized field lists
//! - [`recompose`]: edit draft → POST/PATCH payload

pub mod categorize;
pub mod coerce;
pub mod decompose;
pub mod draft;
pub mod envelope;
pub mod recompose;
pub mod value;

pub use categorize::{categorize, resolve_section};
pub use decompose::{Decomposition, decompose};
pub use draft::{ComponentDraft, CoreField, CoreFields};
pub use recompose::recompose;
pub use value::{FieldInput, FieldType, FieldValue, Section, TypedField, label_for, normalize_key};

use crate::models::ComponentRecord;
use serde::{Deserialize, Serialize};

/// Keys that are never dynamic fields (compared case-insensitively)
pub const RESERVED_KEYS: &[&str] = &[
    "id",
    "component_id",
    "componentid",
    "created_at",
    "updated_at",
    "createdat",
    "updatedat",
    "extra_specs",
];

pub fn is_reserved(key: &str) -> bool {
    let key = key.to_lowercase();
    RESERVED_KEYS.contains(&key.as_str())
}

/// Where a record keeps its dynamic fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageShape {
    /// `core_custom_data` and `data`/`tech_specs` maps on the type sub-record
    #[default]
    Separated,
    /// `_dynamic_` envelopes inside `specs`
    Legacy,
}

impl StorageShape {
    /// Legacy when `specs` holds any dynamic envelope
    pub fn detect(record: &ComponentRecord) -> Self {
        if record
            .specs
            .keys()
            .any(|k| k.starts_with(envelope::DYNAMIC_PREFIX))
        {
            Self::Legacy
        } else {
            Self::Separated
        }
    }
}

/// Dynamic fields split into the two buckets, each in insertion order
///
/// A key appears at most once across both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedFields {
    pub core_identity: Vec<TypedField>,
    pub technical_specs: Vec<TypedField>,
}

impl CategorizedFields {
    pub fn list(&self, section: Section) -> &[TypedField] {
        match section {
            Section::CoreIdentity => &self.core_identity,
            Section::TechnicalSpecs => &self.technical_specs,
        }
    }

    pub fn list_mut(&mut self, section: Section) -> &mut Vec<TypedField> {
        match section {
            Section::CoreIdentity => &mut self.core_identity,
            Section::TechnicalSpecs => &mut self.technical_specs,
        }
    }

    /// Insert or replace by key
    ///
    /// A field already in `section` is replaced in place; one in the other
    /// bucket moves to the end of `section`.
    pub fn upsert(&mut self, section: Section, field: TypedField) {
        let list = self.list_mut(section);
        if let Some(slot) = list.iter_mut().find(|f| f.key == field.key) {
            *slot = field;
            return;
        }
        self.remove(&field.key);
        self.list_mut(section).push(field);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<(Section, &TypedField)> {
        self.iter().find(|(_, f)| f.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TypedField> {
        self.core_identity
            .iter_mut()
            .chain(self.technical_specs.iter_mut())
            .find(|f| f.key == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<(Section, TypedField)> {
        for section in [Section::CoreIdentity, Section::TechnicalSpecs] {
            let list = self.list_mut(section);
            if let Some(pos) = list.iter().position(|f| f.key == key) {
                return Some((section, list.remove(pos)));
            }
        }
        None
    }

    /// Core identity fields first, then technical ones
    pub fn iter(&self) -> impl Iterator<Item = (Section, &TypedField)> {
        self.core_identity
            .iter()
            .map(|f| (Section::CoreIdentity, f))
            .chain(
                self.technical_specs
                    .iter()
                    .map(|f| (Section::TechnicalSpecs, f)),
            )
    }

    pub fn len(&self) -> usize {
        self.core_identity.len() + self.technical_specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(key: &str) -> TypedField {
        TypedField::new(key, FieldType::String)
    }

    #[test]
    fn test_reserved_keys_case_insensitive() {
        assert!(is_reserved("id"));
        assert!(is_reserved("updatedAt"));
        assert!(is_reserved("Component_ID"));
        assert!(is_reserved("extra_specs"));
        assert!(!is_reserved("identifier"));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut fields = CategorizedFields::default();
        fields.upsert(Section::CoreIdentity, field("a"));
        fields.upsert(Section::CoreIdentity, field("b"));
        let mut replaced = field("a");
        replaced.value = FieldValue::Text("x".into());
        fields.upsert(Section::CoreIdentity, replaced);

        let keys: Vec<_> = fields.core_identity.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(fields.core_identity[0].value, FieldValue::Text("x".into()));
    }

    #[test]
    fn test_upsert_moves_between_sections() {
        let mut fields = CategorizedFields::default();
        fields.upsert(Section::CoreIdentity, field("fan_count"));
        fields.upsert(Section::TechnicalSpecs, field("fan_count"));
        assert!(fields.core_identity.is_empty());
        assert_eq!(fields.technical_specs.len(), 1);
        assert_eq!(fields.get("fan_count").unwrap().0, Section::TechnicalSpecs);
    }

    #[test]
    fn test_remove() {
        let mut fields = CategorizedFields::default();
        fields.upsert(Section::TechnicalSpecs, field("rgb"));
        assert_eq!(fields.remove("rgb").unwrap().0, Section::TechnicalSpecs);
        assert!(fields.remove("rgb").is_none());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_detect_storage_shape() {
        let mut record: ComponentRecord = serde_json::from_value(json!({
            "type": "MOUSE",
            "specs": { "extra_specs": [] }
        }))
        .unwrap();
        assert_eq!(StorageShape::detect(&record), StorageShape::Separated);

        record
            .specs
            .insert("_dynamic_rgb".into(), json!({ "v": true }));
        assert_eq!(StorageShape::detect(&record), StorageShape::Legacy);
    }
}
