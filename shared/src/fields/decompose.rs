//! Load-time decomposition
//!
//! Two adapters read the two storage shapes into the same intermediate
//! lists. Both always run; a key present in both resolves to the legacy
//! entry.

use super::categorize::resolve_section;
use super::envelope::{DYNAMIC_PREFIX, unwrap_envelope};
use super::value::{Section, TypedField};
use super::{CategorizedFields, StorageShape, is_reserved};
use crate::models::{ComponentRecord, ComponentType, ExtraSpec, is_static_key};
use serde_json::{Map, Value};

/// Sub-record map holding identity-like dynamic fields
pub const CORE_CUSTOM_DATA: &str = "core_custom_data";
/// Sub-record maps holding technical dynamic fields
pub const TECH_DATA_KEYS: [&str; 2] = ["data", "tech_specs"];

/// Everything the edit surface needs from a stored record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    pub fields: CategorizedFields,
    /// Static catalog values found on the record
    pub static_values: Map<String, Value>,
    pub extra_specs: Vec<ExtraSpec>,
    pub shape: StorageShape,
}

struct Collector {
    component_type: ComponentType,
    fields: CategorizedFields,
    static_values: Map<String, Value>,
}

impl Collector {
    /// Keys that can never be dynamic fields
    fn is_excluded(&self, key: &str) -> bool {
        key.is_empty() || is_reserved(key)
    }

    /// Route a static key to the static values; true when consumed
    fn take_static(&mut self, key: &str, value: &Value) -> bool {
        if !is_static_key(self.component_type, key) {
            return false;
        }
        if !value.is_null() {
            self.static_values
                .entry(key.to_string())
                .or_insert_with(|| value.clone());
        }
        true
    }

    fn add(&mut self, section: Section, key: &str, value: &Value) {
        if value.is_null() || self.is_excluded(key) || self.take_static(key, value) {
            return;
        }
        self.fields
            .upsert(section, TypedField::from_stored(key, value));
    }

    /// `core_custom_data` / `data` / `tech_specs` maps on the type sub-record
    fn separated(&mut self, sub: &Map<String, Value>) {
        // direct columns win over copies inside the dynamic maps
        for (key, value) in sub {
            if is_static_key(self.component_type, key) && !value.is_null() {
                self.static_values.insert(key.clone(), value.clone());
            }
        }

        for (key, value) in sub {
            let section = if key == CORE_CUSTOM_DATA {
                Some(Section::CoreIdentity)
            } else if TECH_DATA_KEYS.contains(&key.as_str()) {
                Some(Section::TechnicalSpecs)
            } else {
                None
            };

            match (section, value) {
                (Some(section), Value::Object(map)) => {
                    for (k, v) in map {
                        self.add(section, k, v);
                    }
                }
                (Some(_), _) => {}
                // stray column on the sub-record
                (None, v) => {
                    if !is_static_key(self.component_type, key) {
                        self.add(Section::TechnicalSpecs, key, v);
                    }
                }
            }
        }
    }

    /// `_dynamic_` envelopes and loose keys inside `specs`
    fn legacy(&mut self, specs: &Map<String, Value>) {
        for (raw_key, stored) in specs {
            if raw_key == ExtraSpec::SPECS_KEY {
                continue;
            }
            let key = raw_key.strip_prefix(DYNAMIC_PREFIX).unwrap_or(raw_key);
            let (value, tag) = unwrap_envelope(stored);
            if value.is_null() || self.is_excluded(key) || self.take_static(key, value) {
                continue;
            }
            let section = resolve_section(tag, key);
            self.fields
                .upsert(section, TypedField::from_stored(key, value));
        }
    }
}

/// Split a stored record into static values and categorized dynamic fields
pub fn decompose(record: &ComponentRecord) -> Decomposition {
    let mut collector = Collector {
        component_type: record.component_type,
        fields: CategorizedFields::default(),
        static_values: Map::new(),
    };

    if let Some(sub) = record.type_record() {
        collector.separated(sub);
    }
    collector.legacy(&record.specs);

    let shape = StorageShape::detect(record);
    let extra_specs = ExtraSpec::parse_list(record.specs.get(ExtraSpec::SPECS_KEY));

    tracing::debug!(
        id = record.id.as_deref().unwrap_or("-"),
        shape = ?shape,
        core = collector.fields.core_identity.len(),
        technical = collector.fields.technical_specs.len(),
        statics = collector.static_values.len(),
        "Component decomposed"
    );

    Decomposition {
        fields: collector.fields,
        static_values: collector.static_values,
        extra_specs,
        shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::value::{FieldType, FieldValue};
    use crate::models::static_fields;
    use serde_json::json;

    fn record(value: Value) -> ComponentRecord {
        serde_json::from_value(value).unwrap()
    }

    fn keys(fields: &[TypedField]) -> Vec<&str> {
        fields.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn test_separated_shape() {
        let r = record(json!({
            "id": "c-1",
            "type": "GRAPHICS_CARD",
            "graphics_card": {
                "id": "sub-1",
                "chipset": "RTX 4070",
                "vram_gb": 12,
                "core_custom_data": { "brand_color": "Black", "warranty": "3 years" },
                "data": { "rgb": "true", "display_outputs": ["HDMI 2.1", "DP 1.4a"] },
                "component_id": "c-1"
            }
        }));
        let d = decompose(&r);

        assert_eq!(d.shape, StorageShape::Separated);
        assert_eq!(keys(&d.fields.core_identity), vec!["brand_color", "warranty"]);
        assert_eq!(keys(&d.fields.technical_specs), vec!["rgb", "display_outputs"]);
        assert_eq!(d.static_values.get("chipset"), Some(&json!("RTX 4070")));
        assert_eq!(d.static_values.get("vram_gb"), Some(&json!(12)));

        let rgb = &d.fields.technical_specs[0];
        assert_eq!(rgb.field_type, FieldType::Boolean);
        assert_eq!(rgb.value, FieldValue::Bool(true));
        let outputs = &d.fields.technical_specs[1];
        assert_eq!(outputs.field_type, FieldType::Array);
        assert_eq!(outputs.value, FieldValue::Text("HDMI 2.1, DP 1.4a".into()));
    }

    #[test]
    fn test_static_keys_in_dynamic_maps_fold_into_statics() {
        let r = record(json!({
            "type": "PROCESSOR",
            "processor": {
                "socket": "AM5",
                "data": { "socket": "LGA1700", "cores": 8, "l3_cache": "32 MB" }
            }
        }));
        let d = decompose(&r);
        assert_eq!(d.static_values.get("socket"), Some(&json!("AM5")));
        assert_eq!(d.static_values.get("cores"), Some(&json!(8)));
        assert_eq!(keys(&d.fields.technical_specs), vec!["l3_cache"]);
    }

    #[test]
    fn test_stray_sub_record_keys_are_technical() {
        let r = record(json!({
            "type": "MOUSE",
            "mouse": { "dpi": 16000, "polling_rate": 1000, "created_at": "x" }
        }));
        let d = decompose(&r);
        assert_eq!(keys(&d.fields.technical_specs), vec!["polling_rate"]);
        assert!(d.fields.core_identity.is_empty());
    }

    #[test]
    fn test_legacy_shape_with_tags_and_heuristic() {
        let r = record(json!({
            "type": "CPU_COOLER",
            "specs": {
                "extra_specs": [{ "review": "Quiet", "source": "" }],
                "_dynamic_max_fan_size": {
                    "v": 140, "source_id": "manual", "confidence": 1.0,
                    "updated_at": "2024-05-01T10:00:00.000Z", "section": "technical_specs"
                },
                "_dynamic_wattage": { "v": 5, "source_id": "scraper" },
                "_dynamic_brand_color": { "v": "White" },
                "_dynamic_height_mm": { "v": 155, "section": "technical_specs" },
                "updatedAt": "2024-05-01"
            }
        }));
        let d = decompose(&r);

        assert_eq!(d.shape, StorageShape::Legacy);
        assert_eq!(keys(&d.fields.technical_specs), vec!["max_fan_size", "wattage"]);
        assert_eq!(keys(&d.fields.core_identity), vec!["brand_color"]);
        assert_eq!(d.static_values.get("height_mm"), Some(&json!(155)));
        assert_eq!(d.extra_specs, vec![ExtraSpec::new("Quiet", "")]);
    }

    #[test]
    fn test_loose_specs_keys_run_through_heuristic() {
        let r = record(json!({
            "type": "RAM",
            "specs": {
                "_dynamic_warranty_years": { "v": 5 },
                "heat_spreader_color": "Silver",
                "voltage": "1.35V",
                "capacity_gb": 32
            }
        }));
        let d = decompose(&r);
        assert_eq!(keys(&d.fields.core_identity), vec!["warranty_years", "heat_spreader_color"]);
        assert_eq!(keys(&d.fields.technical_specs), vec!["voltage"]);
        assert_eq!(d.static_values.get("capacity_gb"), Some(&json!(32)));
    }

    #[test]
    fn test_legacy_entry_wins_on_collision() {
        let r = record(json!({
            "type": "MONITOR",
            "monitor": { "core_custom_data": { "hdr_tier": "HDR400" } },
            "specs": {
                "_dynamic_hdr_tier": { "v": "HDR600", "section": "technical_specs" }
            }
        }));
        let d = decompose(&r);
        assert!(d.fields.core_identity.is_empty());
        assert_eq!(d.fields.technical_specs.len(), 1);
        assert_eq!(
            d.fields.technical_specs[0].value,
            FieldValue::Text("HDR600".into())
        );
    }

    #[test]
    fn test_dynamic_keys_disjoint_from_static_catalog() {
        for t in ComponentType::ALL {
            let mut sub = Map::new();
            let mut specs = Map::new();
            let mut data = Map::new();
            for def in static_fields(t) {
                sub.insert(def.key.to_string(), json!("x"));
                data.insert(def.key.to_string(), json!("y"));
                specs.insert(format!("_dynamic_{}", def.key), json!({ "v": "z" }));
                specs.insert(def.key.to_string(), json!("w"));
            }
            data.insert("custom".into(), json!(1));
            sub.insert("data".into(), Value::Object(data));

            let mut raw = json!({ "type": t, "specs": specs });
            raw[t.record_key()] = Value::Object(sub);
            let d = decompose(&record(raw));

            for (_, f) in d.fields.iter() {
                assert!(!is_static_key(t, &f.key), "{} leaked for {}", f.key, t);
            }
            assert_eq!(d.fields.len(), 1);
            for def in static_fields(t) {
                assert_eq!(d.static_values.get(def.key), Some(&json!("x")));
            }
        }
    }
}
