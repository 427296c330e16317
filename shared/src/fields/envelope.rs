//! Provenance envelope for dynamic fields in the legacy `specs` shape
//!
//! ```json
//! "_dynamic_<key>": {
//!   "v": <value>,
//!   "source_id": "manual",
//!   "confidence": 1.0,
//!   "updated_at": "2024-05-01T10:00:00.000Z",
//!   "section": "core_identity"
//! }
//! ```

use super::value::Section;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key prefix marking a dynamic field inside `specs`
pub const DYNAMIC_PREFIX: &str = "_dynamic_";

/// Provenance tag written for every manual edit
pub const MANUAL_SOURCE: &str = "manual";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEnvelope {
    pub v: Value,
    pub source_id: String,
    pub confidence: f64,
    pub updated_at: String,
    pub section: Section,
}

impl FieldEnvelope {
    /// Fresh metadata for a manually edited value
    pub fn manual(v: Value, section: Section, now: DateTime<Utc>) -> Self {
        Self {
            v,
            source_id: MANUAL_SOURCE.to_string(),
            confidence: 1.0,
            updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            section,
        }
    }

    pub fn into_value(self) -> Value {
        serde_json::json!({
            "v": self.v,
            "source_id": self.source_id,
            "confidence": self.confidence,
            "updated_at": self.updated_at,
            "section": self.section.as_str(),
        })
    }
}

/// Storage key of a dynamic field
pub fn dynamic_key(key: &str) -> String {
    format!("{}{}", DYNAMIC_PREFIX, key)
}

/// Inner value and section tag of a stored entry
///
/// Objects carrying a `v` key are envelopes; anything else is a bare value.
/// Metadata other than the section tag is discarded.
pub fn unwrap_envelope(stored: &Value) -> (&Value, Option<Section>) {
    match stored {
        Value::Object(obj) if obj.contains_key("v") => {
            let section = obj
                .get("section")
                .and_then(Value::as_str)
                .and_then(Section::parse);
            (&obj["v"], section)
        }
        other => (other, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_manual_envelope_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let env = FieldEnvelope::manual(json!(750), Section::TechnicalSpecs, now);
        assert_eq!(
            env.into_value(),
            json!({
                "v": 750,
                "source_id": "manual",
                "confidence": 1.0,
                "updated_at": "2024-05-01T10:00:00.000Z",
                "section": "technical_specs"
            })
        );
    }

    #[test]
    fn test_unwrap_envelope() {
        let stored = json!({ "v": "Black", "source_id": "scraper", "section": "core_identity" });
        let (v, section) = unwrap_envelope(&stored);
        assert_eq!(v, &json!("Black"));
        assert_eq!(section, Some(Section::CoreIdentity));

        let stored = json!({ "v": 3, "section": "misc" });
        assert_eq!(unwrap_envelope(&stored).1, None);

        let bare = json!("plain");
        assert_eq!(unwrap_envelope(&bare), (&json!("plain"), None));
    }

    #[test]
    fn test_dynamic_key() {
        assert_eq!(dynamic_key("max_fan_size"), "_dynamic_max_fan_size");
    }
}
