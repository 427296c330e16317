//! Typed field values

use super::coerce::{coerce_boolean, coerce_integer, join_list, split_list};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Primitive type of a dynamic field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Integer,
    Boolean,
    /// List of strings, edited as one comma-delimited string
    Array,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [Self::String, Self::Integer, Self::Boolean, Self::Array];

    /// Value a freshly added field starts with
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::String | Self::Array => FieldValue::Text(String::new()),
            Self::Integer => FieldValue::Number(Number::from(0)),
            Self::Boolean => FieldValue::Bool(false),
        }
    }
}

/// Bucket a dynamic field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    CoreIdentity,
    TechnicalSpecs,
}

impl Section {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CoreIdentity => "core_identity",
            Self::TechnicalSpecs => "technical_specs",
        }
    }

    /// Parse a stored section tag; anything but the two valid tags is None
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "core_identity" => Some(Self::CoreIdentity),
            "technical_specs" => Some(Self::TechnicalSpecs),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory (display) value of a field while it is being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(Number),
    /// Text, or a comma-delimited list for array fields
    Text(String),
}

impl FieldValue {
    /// Text shown in a text control
    pub fn display_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Raw input from an edit control
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Text box contents
    Text(String),
    /// Toggle state
    Checked(bool),
}

/// A dynamic, user-defined attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedField {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: FieldValue,
}

impl TypedField {
    /// New field with a normalized key and the type's default value
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            key: normalize_key(name),
            field_type,
            value: field_type.default_value(),
        }
    }

    /// Field loaded from a stored JSON value, type inferred from the value
    pub fn from_stored(key: impl Into<String>, stored: &Value) -> Self {
        let (field_type, value) = match stored {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(value_text).collect();
                (FieldType::Array, FieldValue::Text(join_list(&parts)))
            }
            Value::Bool(b) => (FieldType::Boolean, FieldValue::Bool(*b)),
            Value::String(s) if s == "true" || s == "false" => {
                (FieldType::Boolean, FieldValue::Bool(s == "true"))
            }
            Value::Number(n) => (FieldType::Integer, FieldValue::Number(n.clone())),
            other => (FieldType::String, FieldValue::Text(value_text(other))),
        };
        Self {
            key: key.into(),
            field_type,
            value,
        }
    }

    /// Apply raw input, coercing it to the field's type
    pub fn set_input(&mut self, input: FieldInput) {
        self.value = match (self.field_type, input) {
            (FieldType::Boolean, FieldInput::Checked(b)) => FieldValue::Bool(b),
            (FieldType::Boolean, FieldInput::Text(s)) => FieldValue::Bool(coerce_boolean(&s)),
            (FieldType::Integer, FieldInput::Text(s)) => {
                FieldValue::Number(Number::from(coerce_integer(&s)))
            }
            (FieldType::Integer, FieldInput::Checked(b)) => {
                FieldValue::Number(Number::from(i64::from(b)))
            }
            (FieldType::String | FieldType::Array, FieldInput::Text(s)) => FieldValue::Text(s),
            (FieldType::String | FieldType::Array, FieldInput::Checked(b)) => {
                FieldValue::Text(b.to_string())
            }
        };
    }

    /// Storage-safe JSON value
    pub fn to_stored(&self) -> Value {
        match (self.field_type, &self.value) {
            (FieldType::String, v) => Value::String(v.display_text()),
            (FieldType::Integer, FieldValue::Number(n)) => Value::Number(n.clone()),
            (FieldType::Integer, v) => Value::from(coerce_integer(&v.display_text())),
            (FieldType::Boolean, FieldValue::Bool(b)) => Value::Bool(*b),
            (FieldType::Boolean, v) => Value::Bool(coerce_boolean(&v.display_text())),
            (FieldType::Array, v) => split_list(&v.display_text())
                .into_iter()
                .map(Value::String)
                .collect(),
        }
    }

    pub fn label(&self) -> String {
        label_for(&self.key)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalize a user-typed field name: trimmed, lowercase, whitespace runs → `_`
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Display label for a key (`max_fan_size` → `Max Fan Size`)
pub fn label_for(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
