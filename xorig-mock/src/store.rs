//! In-memory component store
//!
//! Records are kept loosely typed, the way a document backend would hold
//! them: top-level columns plus the type-specific sub-record. Insertion
//! order is preserved so equal sort keys list deterministically.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::serde_helpers::{decimal_from_number, parse_decimal_prefix};
use shared::models::{
    ComponentListQuery, ComponentPayload, ComponentType, PageMeta, SortDir, SortKey,
    is_static_key,
};
use std::cmp::Ordering;
use tokio::sync::RwLock;

/// Keys clients may send but never overwrite
const SERVER_MANAGED: &[&str] = &["id", "createdAt", "updatedAt", "created_at", "updated_at"];

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// One stored component
#[derive(Debug, Clone)]
pub struct StoredComponent {
    pub id: String,
    pub component_type: ComponentType,
    columns: Map<String, Value>,
    sub_record: Map<String, Value>,
}

impl StoredComponent {
    fn new(component_type: ComponentType, now: DateTime<Utc>) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let stamp = timestamp(now);

        let mut columns = Map::new();
        columns.insert("id".into(), json!(id));
        columns.insert("type".into(), json!(component_type));
        columns.insert("specs".into(), json!({}));
        columns.insert("offers".into(), json!([]));
        columns.insert("createdAt".into(), json!(stamp));
        columns.insert("updatedAt".into(), json!(stamp));

        let mut sub_record = Map::new();
        sub_record.insert("id".into(), json!(uuid::Uuid::new_v4().to_string()));
        sub_record.insert("component_id".into(), json!(id));
        sub_record.insert("core_custom_data".into(), json!({}));
        sub_record.insert("data".into(), json!({}));

        Self {
            id,
            component_type,
            columns,
            sub_record,
        }
    }

    /// Static column write; `null` clears the column
    fn set_static(&mut self, key: String, value: Value) {
        if value.is_null() {
            self.sub_record.remove(&key);
        } else {
            self.sub_record.insert(key, value);
        }
    }

    /// Merge a request body; only keys present in `body` change
    fn apply(&mut self, body: Map<String, Value>, now: DateTime<Utc>) -> AppResult<()> {
        if let Some(requested) = body.get("type")
            && requested != &json!(self.component_type)
        {
            return Err(AppError::new(ErrorCode::ComponentTypeImmutable)
                .with_detail("type", self.component_type.as_str()));
        }

        for (key, value) in body {
            match key.as_str() {
                k if SERVER_MANAGED.contains(&k) || k == "type" => {}
                "core_custom_data" => {
                    self.sub_record
                        .insert(key, Value::Object(into_object(value)));
                }
                "tech_specs" | "data" => {
                    let mut data = Map::new();
                    for (k, v) in into_object(value) {
                        if is_static_key(self.component_type, &k) {
                            self.set_static(k, v);
                        } else {
                            data.insert(k, v);
                        }
                    }
                    self.sub_record.insert("data".into(), Value::Object(data));
                }
                "compat_specs" => {
                    for (k, v) in into_object(value) {
                        self.set_static(k, v);
                    }
                }
                "specs" => {
                    self.columns.insert(key, Value::Object(into_object(value)));
                }
                _ => {
                    self.columns.insert(key, value);
                }
            }
        }

        self.columns
            .insert("updatedAt".into(), json!(timestamp(now)));
        Ok(())
    }

    /// Record as served by `GET /components/{id}`
    pub fn to_value(&self) -> Value {
        let mut record = self.columns.clone();
        record.insert(
            self.component_type.record_key(),
            Value::Object(self.sub_record.clone()),
        );
        Value::Object(record)
    }

    fn text(&self, key: &str) -> String {
        self.columns
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase()
    }

    fn price(&self) -> Option<Decimal> {
        match self.columns.get("price") {
            Some(Value::Number(n)) => decimal_from_number(n),
            Some(Value::String(s)) => parse_decimal_prefix(s),
            _ => None,
        }
    }

    fn matches(&self, component_type: Option<ComponentType>, search: Option<&str>) -> bool {
        if component_type.is_some_and(|t| t != self.component_type) {
            return false;
        }
        match search {
            Some(needle) => ["manufacturer", "model_name", "model_number"]
                .iter()
                .any(|k| self.text(k).contains(needle)),
            None => true,
        }
    }

    fn compare(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Price => self.price().cmp(&other.price()),
            SortKey::Manufacturer => self.text("manufacturer").cmp(&other.text("manufacturer")),
            SortKey::ModelName => self.text("model_name").cmp(&other.text("model_name")),
            // RFC 3339 with fixed precision sorts lexicographically
            SortKey::UpdatedAt => {
                let a = self.columns.get("updatedAt").and_then(Value::as_str);
                let b = other.columns.get("updatedAt").and_then(Value::as_str);
                a.cmp(&b)
            }
        }
    }
}

/// All components, behind one lock
#[derive(Debug, Default)]
pub struct ComponentStore {
    records: RwLock<Vec<StoredComponent>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered, sorted page as `{ data, meta }`
    pub async fn list(&self, query: &ComponentListQuery) -> Value {
        let records = self.records.read().await;
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut hits: Vec<&StoredComponent> = records
            .iter()
            .filter(|r| r.matches(query.component_type, search.as_deref()))
            .collect();
        hits.sort_by(|a, b| {
            let ord = a.compare(b, query.sort_key);
            match query.sort_dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });

        let page = query.page.max(1);
        let limit = query.limit.max(1);
        let meta = PageMeta::new(hits.len() as u64, page, limit);
        let data: Vec<Value> = hits
            .into_iter()
            .skip((page as usize - 1) * limit as usize)
            .take(limit as usize)
            .map(StoredComponent::to_value)
            .collect();

        json!({ "data": data, "meta": meta })
    }

    pub async fn get(&self, id: &str) -> AppResult<Value> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id == id)
            .map(StoredComponent::to_value)
            .ok_or_else(|| AppError::component_not_found(id))
    }

    /// Validate and store a new component
    pub async fn create(&self, body: Map<String, Value>) -> AppResult<Value> {
        let payload: ComponentPayload = serde_json::from_value(Value::Object(body.clone()))
            .map_err(|e| AppError::validation(format!("Invalid component payload: {}", e)))?;
        for (key, label, value) in [
            ("manufacturer", "Manufacturer", &payload.manufacturer),
            ("model_name", "Model Name", &payload.model_name),
            ("model_number", "Model Number", &payload.model_number),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::required(key, label));
            }
        }

        let now = Utc::now();
        let mut record = StoredComponent::new(payload.component_type, now);
        record.apply(body, now)?;
        let value = record.to_value();

        tracing::info!(id = %record.id, component_type = %record.component_type, "Component created");
        self.records.write().await.push(record);
        Ok(value)
    }

    /// Merge `body` into an existing component
    pub async fn update(&self, id: &str, body: Map<String, Value>) -> AppResult<Value> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::component_not_found(id))?;

        let mut updated = slot.clone();
        updated.apply(body, Utc::now())?;
        *slot = updated;

        tracing::info!(id, "Component updated");
        Ok(slot.to_value())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::component_not_found(id))?;
        records.remove(pos);
        tracing::info!(id, "Component deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
