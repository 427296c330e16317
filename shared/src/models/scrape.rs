//! Scraped spec hints (`POST /components/fetch-specs`)

use super::serde_helpers::price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSpecsRequest {
    pub url: String,
}

/// Best-effort guesses scraped from a product page
///
/// Hints only: they pre-fill the edit form and are never persisted without
/// an explicit save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, with = "price", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Every other scraped key/value pair
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

impl ScrapedSpecs {
    /// Scraped pairs rendered as (label, text) in response order
    pub fn raw_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.raw.iter().map(|(k, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.as_str(), text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_keys_split_from_raw_pairs() {
        let scraped: ScrapedSpecs = serde_json::from_value(json!({
            "manufacturer": "Intel",
            "model_number": "BX8071514600K",
            "price": "28999",
            "Cache": "24 MB",
            "Cores": 14
        }))
        .unwrap();

        assert_eq!(scraped.manufacturer.as_deref(), Some("Intel"));
        assert!(scraped.model_name.is_none());
        assert_eq!(scraped.price, Some(Decimal::from(28999)));
        let pairs: Vec<_> = scraped.raw_pairs().collect();
        assert_eq!(
            pairs,
            vec![("Cache", "24 MB".to_string()), ("Cores", "14".to_string())]
        );
    }
}
