//! Save-time recomposition
//!
//! The whole dynamic field set is rebuilt on every save. Provenance metadata
//! is always fresh; nothing from the loaded envelopes survives.

use super::draft::{ComponentDraft, CoreField};
use super::envelope::{FieldEnvelope, dynamic_key};
use super::value::Section;
use super::StorageShape;
use crate::models::serde_helpers::{decimal_to_number, parse_decimal_prefix};
use crate::models::{
    ComponentPayload, ExtraSpec, StaticFieldDef, StaticFieldKind, filter_extra_specs,
    static_fields,
};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

/// Coerce a static value for storage
///
/// A cleared or unparseable value becomes `null` so the backend drops the
/// stored column instead of keeping the previous value.
fn static_value(def: &StaticFieldDef, value: &Value) -> Value {
    match (def.kind, value) {
        (StaticFieldKind::Number, Value::String(s)) => parse_decimal_prefix(s)
            .and_then(decimal_to_number)
            .map_or(Value::Null, Value::Number),
        (_, Value::String(s)) if s.trim().is_empty() => Value::Null,
        (_, v) => v.clone(),
    }
}

/// Static values held by the draft, restricted to the type's catalog, in
/// catalog order
fn static_payload(draft: &ComponentDraft) -> Map<String, Value> {
    static_fields(draft.component_type)
        .iter()
        .filter_map(|def| {
            let value = draft.static_values.get(def.key)?;
            Some((def.key.to_string(), static_value(def, value)))
        })
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn extra_spec_rows(rows: &[ExtraSpec]) -> Value {
    filter_extra_specs(rows)
        .into_iter()
        .map(|row| json!({ "review": row.review, "source": row.source }))
        .collect()
}

/// Build the POST/PATCH body for `draft` in the given storage shape
pub fn recompose(draft: &ComponentDraft, shape: StorageShape, now: DateTime<Utc>) -> ComponentPayload {
    let statics = static_payload(draft);

    let mut specs = Map::new();
    specs.insert(
        ExtraSpec::SPECS_KEY.to_string(),
        extra_spec_rows(&draft.extra_specs),
    );

    let (core_custom_data, tech_specs, compat_specs) = match shape {
        StorageShape::Separated => {
            let mut core = Map::new();
            let mut tech = Map::new();
            for (section, field) in draft.fields.iter() {
                let target = match section {
                    Section::CoreIdentity => &mut core,
                    Section::TechnicalSpecs => &mut tech,
                };
                target.insert(field.key.clone(), field.to_stored());
            }
            tech.extend(statics);
            (Some(core), Some(tech), Map::new())
        }
        StorageShape::Legacy => {
            for (section, field) in draft.fields.iter() {
                let envelope = FieldEnvelope::manual(field.to_stored(), section, now);
                specs.insert(dynamic_key(&field.key), envelope.into_value());
            }
            // every dynamic field now lives in an envelope; empty the
            // separated maps so nothing stale is decomposed next load
            (Some(Map::new()), Some(Map::new()), statics)
        }
    };

    let core = &draft.core;
    let payload = ComponentPayload {
        component_type: draft.component_type,
        manufacturer: core.manufacturer.clone(),
        vendor: non_empty(&core.vendor),
        model_name: core.model_name.clone(),
        model_number: core.model_number.clone(),
        product_page_url: core.product_page_url.clone(),
        image_url: non_empty(&core.image_url),
        price: core.price_value(CoreField::Price),
        discounted_price: core.price_value(CoreField::DiscountedPrice),
        tracked_price: core.price_value(CoreField::TrackedPrice),
        core_custom_data,
        tech_specs,
        specs,
        compat_specs,
    };

    tracing::debug!(
        component_type = %draft.component_type,
        shape = ?shape,
        dynamic = draft.fields.len(),
        statics = payload
            .tech_specs
            .as_ref()
            .map_or(payload.compat_specs.len(), Map::len),
        "Payload recomposed"
    );
    payload
}
