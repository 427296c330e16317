//! Extra spec rows (free-text review/source pairs)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-text review/source pair stored under `specs.extra_specs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSpec {
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub source: String,
}

impl ExtraSpec {
    /// Key of the row list inside `specs`
    pub const SPECS_KEY: &'static str = "extra_specs";

    pub fn new(review: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            review: review.into(),
            source: source.into(),
        }
    }

    /// A row with neither a review nor a source
    pub fn is_blank(&self) -> bool {
        self.review.is_empty() && self.source.is_empty()
    }

    /// Read rows from the stored `extra_specs` value, skipping malformed and blank rows
    pub fn parse_list(raw: Option<&Value>) -> Vec<ExtraSpec> {
        let Some(Value::Array(items)) = raw else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| {
                let obj = item.as_object()?;
                let text = |k: &str| obj.get(k).and_then(Value::as_str).unwrap_or_default();
                Some(ExtraSpec::new(text("review"), text("source")))
            })
            .filter(|row| !row.is_blank())
            .collect()
    }
}

/// Keep only rows with a non-empty review or source
pub fn filter_extra_specs(rows: &[ExtraSpec]) -> Vec<ExtraSpec> {
    rows.iter().filter(|r| !r.is_blank()).cloned().collect()
}
