//! In-memory edit draft of one component

use super::{CategorizedFields, StorageShape, decompose};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::serde_helpers::parse_decimal_prefix;
use crate::models::{ComponentPayload, ComponentRecord, ComponentType, ExtraSpec, is_static_key};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed attribute of a component record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreField {
    Manufacturer,
    Vendor,
    ModelName,
    ModelNumber,
    ProductPageUrl,
    ImageUrl,
    Price,
    DiscountedPrice,
    TrackedPrice,
}

impl CoreField {
    /// Fields that must be non-blank before a save, in check order
    pub const REQUIRED: [CoreField; 3] = [Self::Manufacturer, Self::ModelName, Self::ModelNumber];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Vendor => "vendor",
            Self::ModelName => "model_name",
            Self::ModelNumber => "model_number",
            Self::ProductPageUrl => "product_page_url",
            Self::ImageUrl => "image_url",
            Self::Price => "price",
            Self::DiscountedPrice => "discounted_price",
            Self::TrackedPrice => "tracked_price",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Manufacturer => "Manufacturer",
            Self::Vendor => "Vendor",
            Self::ModelName => "Model Name",
            Self::ModelNumber => "Model Number",
            Self::ProductPageUrl => "Product Page URL",
            Self::ImageUrl => "Image URL",
            Self::Price => "Price",
            Self::DiscountedPrice => "Discounted Price",
            Self::TrackedPrice => "Tracked Price",
        }
    }
}

/// Fixed attributes as edited (raw text, prices included)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreFields {
    pub manufacturer: String,
    pub vendor: String,
    pub model_name: String,
    pub model_number: String,
    pub product_page_url: String,
    pub image_url: String,
    pub price: String,
    pub discounted_price: String,
    pub tracked_price: String,
}

fn price_text(price: Option<Decimal>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

impl CoreFields {
    pub fn from_record(record: &ComponentRecord) -> Self {
        Self {
            manufacturer: record.manufacturer.clone(),
            vendor: record.vendor.clone().unwrap_or_default(),
            model_name: record.model_name.clone(),
            model_number: record.model_number.clone(),
            product_page_url: record.product_page_url.clone().unwrap_or_default(),
            image_url: record.image_url.clone().unwrap_or_default(),
            price: price_text(record.price),
            discounted_price: price_text(record.discounted_price),
            tracked_price: price_text(record.tracked_price),
        }
    }

    pub fn get(&self, field: CoreField) -> &str {
        match field {
            CoreField::Manufacturer => &self.manufacturer,
            CoreField::Vendor => &self.vendor,
            CoreField::ModelName => &self.model_name,
            CoreField::ModelNumber => &self.model_number,
            CoreField::ProductPageUrl => &self.product_page_url,
            CoreField::ImageUrl => &self.image_url,
            CoreField::Price => &self.price,
            CoreField::DiscountedPrice => &self.discounted_price,
            CoreField::TrackedPrice => &self.tracked_price,
        }
    }

    pub fn set(&mut self, field: CoreField, value: impl Into<String>) {
        let slot = match field {
            CoreField::Manufacturer => &mut self.manufacturer,
            CoreField::Vendor => &mut self.vendor,
            CoreField::ModelName => &mut self.model_name,
            CoreField::ModelNumber => &mut self.model_number,
            CoreField::ProductPageUrl => &mut self.product_page_url,
            CoreField::ImageUrl => &mut self.image_url,
            CoreField::Price => &mut self.price,
            CoreField::DiscountedPrice => &mut self.discounted_price,
            CoreField::TrackedPrice => &mut self.tracked_price,
        };
        *slot = value.into();
    }

    /// Price for transmission: parseFloat of the raw text, `None` when blank
    /// or non-numeric
    pub fn price_value(&self, field: CoreField) -> Option<Decimal> {
        parse_decimal_prefix(self.get(field))
    }

    /// First required field left blank
    pub fn validate(&self) -> AppResult<()> {
        for field in CoreField::REQUIRED {
            if self.get(field).trim().is_empty() {
                return Err(AppError::required(field.key(), field.label()));
            }
        }
        Ok(())
    }
}

/// Everything an edit surface holds for one component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDraft {
    /// None until the record is created
    pub id: Option<String>,
    pub component_type: ComponentType,
    pub core: CoreFields,
    /// Values of the static catalog, keyed by catalog key
    pub static_values: Map<String, Value>,
    pub fields: CategorizedFields,
    pub extra_specs: Vec<ExtraSpec>,
    /// Shape the draft is saved back in
    pub shape: StorageShape,
}

impl ComponentDraft {
    /// Empty draft for the creation form
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            id: None,
            component_type,
            core: CoreFields::default(),
            static_values: Map::new(),
            fields: CategorizedFields::default(),
            extra_specs: Vec::new(),
            shape: StorageShape::Separated,
        }
    }

    /// Draft decomposed from a loaded record
    pub fn from_record(record: &ComponentRecord) -> Self {
        let parts = decompose(record);
        Self {
            id: record.id.clone(),
            component_type: record.component_type,
            core: CoreFields::from_record(record),
            static_values: parts.static_values,
            fields: parts.fields,
            extra_specs: parts.extra_specs,
            shape: parts.shape,
        }
    }

    /// Set a static catalog value from raw input
    pub fn set_static(&mut self, key: &str, raw: impl Into<String>) -> AppResult<()> {
        if !is_static_key(self.component_type, key) {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!("{} is not a {} field", key, self.component_type.label()),
            )
            .with_detail("field", key));
        }
        self.static_values
            .insert(key.to_string(), Value::String(raw.into()));
        Ok(())
    }

    /// Static value as shown in its input
    pub fn static_text(&self, key: &str) -> String {
        match self.static_values.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn to_payload(&self, now: DateTime<Utc>) -> ComponentPayload {
        super::recompose(self, self.shape, now)
    }
}
