//! Component Model

use super::component_type::ComponentType;
use super::extra_spec::ExtraSpec;
use super::serde_helpers::{null_default, price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vendor offer attached to a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOffer {
    #[serde(default, with = "price")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
    /// Price after vendor discounts and shipping
    #[serde(default, rename = "effective_price_inr", with = "price")]
    pub effective_price: Option<Decimal>,
}

/// Cheapest in-stock offer, or the cheapest overall when nothing is in stock
///
/// Offers without an effective price sort last.
pub fn best_offer(offers: &[ComponentOffer]) -> Option<&ComponentOffer> {
    let in_stock = offers.iter().any(|o| o.in_stock);
    offers
        .iter()
        .filter(|o| !in_stock || o.in_stock)
        .min_by(|a, b| match (a.effective_price, b.effective_price) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        })
}

/// Component entity as returned by `GET /components/{id}`
///
/// The type-specific sub-record (keyed by the lowercased component type)
/// and any other backend columns land in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default, deserialize_with = "null_default")]
    pub manufacturer: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub model_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub model_number: String,
    #[serde(default)]
    pub product_page_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, with = "price")]
    pub price: Option<Decimal>,
    #[serde(default, with = "price")]
    pub discounted_price: Option<Decimal>,
    /// Price tracked by the scraper
    #[serde(default, with = "price")]
    pub tracked_price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_default")]
    pub specs: Map<String, Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub offers: Vec<ComponentOffer>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentRecord {
    /// Type-specific sub-record, if the backend embedded one
    pub fn type_record(&self) -> Option<&Map<String, Value>> {
        self.extra
            .get(&self.component_type.record_key())
            .and_then(Value::as_object)
    }

    pub fn best_offer(&self) -> Option<&ComponentOffer> {
        best_offer(&self.offers)
    }
}

/// Create/update body for `POST /components` and `PATCH /components/{id}`
///
/// Produced by recomposition; never assembled by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPayload {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub model_name: String,
    pub model_number: String,
    #[serde(default)]
    pub product_page_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, with = "price")]
    pub price: Option<Decimal>,
    #[serde(default, with = "price")]
    pub discounted_price: Option<Decimal>,
    #[serde(default, with = "price")]
    pub tracked_price: Option<Decimal>,
    /// Identity-like dynamic fields (separated shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_custom_data: Option<Map<String, Value>>,
    /// Technical dynamic fields plus static values (separated shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_specs: Option<Map<String, Value>>,
    #[serde(default)]
    pub specs: Map<String, Value>,
    /// Static values (legacy shape only)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub compat_specs: Map<String, Value>,
}

impl ComponentPayload {
    /// Extra-spec rows carried in `specs`
    pub fn extra_specs(&self) -> Vec<ExtraSpec> {
        ExtraSpec::parse_list(self.specs.get(ExtraSpec::SPECS_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(price: Option<i64>, in_stock: bool) -> ComponentOffer {
        ComponentOffer {
            price: None,
            vendor: None,
            url: None,
            in_stock,
            effective_price: price.map(Decimal::from),
        }
    }

    #[test]
    fn test_best_offer_prefers_in_stock() {
        let offers = vec![offer(Some(100), false), offer(Some(250), true), offer(Some(200), true)];
        let best = best_offer(&offers).unwrap();
        assert_eq!(best.effective_price, Some(Decimal::from(200)));
    }

    #[test]
    fn test_best_offer_falls_back_to_all_offers() {
        let offers = vec![offer(None, false), offer(Some(300), false)];
        let best = best_offer(&offers).unwrap();
        assert_eq!(best.effective_price, Some(Decimal::from(300)));
        assert!(best_offer(&[]).is_none());
    }

    #[test]
    fn test_record_deserializes_loose_backend_shape() {
        let record: ComponentRecord = serde_json::from_value(json!({
            "id": "c-1",
            "type": "PROCESSOR",
            "manufacturer": "AMD",
            "model_name": "Ryzen 5",
            "model_number": "7600X",
            "price": "23999.00",
            "discounted_price": null,
            "specs": null,
            "updatedAt": "2024-05-01T10:00:00.000Z",
            "processor": { "socket": "AM5", "cores": 6 }
        }))
        .unwrap();

        assert_eq!(record.component_type, ComponentType::Processor);
        assert_eq!(record.price, Some(Decimal::from(23999)));
        assert!(record.discounted_price.is_none());
        assert!(record.specs.is_empty());
        assert_eq!(record.type_record().unwrap()["socket"], json!("AM5"));
    }

    #[test]
    fn test_payload_always_emits_prices() {
        let payload = ComponentPayload {
            component_type: ComponentType::Ram,
            manufacturer: "Corsair".into(),
            vendor: None,
            model_name: "Vengeance".into(),
            model_number: "CMK16GX4".into(),
            product_page_url: String::new(),
            image_url: None,
            price: Some(Decimal::from(4999)),
            discounted_price: None,
            tracked_price: None,
            core_custom_data: None,
            tech_specs: None,
            specs: Map::new(),
            compat_specs: Map::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], json!(4999));
        assert!(json["discounted_price"].is_null());
        assert!(json.as_object().unwrap().contains_key("tracked_price"));
        assert!(!json.as_object().unwrap().contains_key("core_custom_data"));
        assert!(!json.as_object().unwrap().contains_key("compat_specs"));
    }
}
