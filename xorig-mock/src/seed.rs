//! Demo catalog for local development

use crate::state::AppState;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};
use shared::error::AppResult;
use shared::models::ScrapedSpecs;

pub const DEMO_GPU_URL: &str = "https://shop.example.in/products/rtx-4070-super-twin-edge";
pub const DEMO_PSU_URL: &str = "https://shop.example.in/products/rm850x-shift";

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Insert demo components and scrape pages
pub async fn seed_demo(state: &AppState) -> AppResult<()> {
    let components = [
        // separated layout
        json!({
            "type": "GRAPHICS_CARD",
            "manufacturer": "Zotac",
            "vendor": "MD Computers",
            "model_name": "RTX 4070 Super Twin Edge",
            "model_number": "ZT-D40720E-10M",
            "product_page_url": DEMO_GPU_URL,
            "price": 61999,
            "discounted_price": 58999,
            "tracked_price": null,
            "core_custom_data": { "colour_scheme": "Black", "warranty_years": 5 },
            "tech_specs": {
                "chipset": "RTX 4070 Super",
                "vram_gb": 12,
                "display_outputs": ["HDMI 2.1", "DP 1.4a"],
                "dual_bios": false
            },
            "specs": { "extra_specs": [{ "review": "Runs cool under load", "source": "techpowerup" }] }
        }),
        // legacy layout: dynamic fields inside specs
        json!({
            "type": "POWER_SUPPLY",
            "manufacturer": "Corsair",
            "model_name": "RM850x Shift",
            "model_number": "CP-9020252",
            "product_page_url": DEMO_PSU_URL,
            "price": 13499,
            "discounted_price": null,
            "tracked_price": 12999,
            "compat_specs": { "wattage": 850, "efficiency": "80+ Gold", "modular": "Full" },
            "specs": {
                "extra_specs": [],
                "_dynamic_fan_size": {
                    "v": 140,
                    "source_id": "manual",
                    "confidence": 1.0,
                    "updated_at": "2024-05-01T10:00:00.000Z",
                    "section": "technical_specs"
                },
                "_dynamic_cable_colour": {
                    "v": "Black",
                    "source_id": "scraper",
                    "confidence": 0.6,
                    "updated_at": "2024-05-01T10:00:00.000Z"
                }
            }
        }),
    ];

    for component in components {
        state.components.create(object(component)).await?;
    }

    state
        .scrapes
        .insert(
            DEMO_GPU_URL,
            ScrapedSpecs {
                manufacturer: Some("Zotac".into()),
                model_name: Some("RTX 4070 Super Twin Edge".into()),
                model_number: Some("ZT-D40720E-10M".into()),
                price: Some(Decimal::from(61999)),
                raw: object(json!({ "Boost Clock": "2475 MHz", "Length": "234 mm" })),
            },
        )
        .await;
    state
        .scrapes
        .insert(
            DEMO_PSU_URL,
            ScrapedSpecs {
                manufacturer: Some("Corsair".into()),
                raw: object(json!({ "Connector": "Side-mounted" })),
                ..Default::default()
            },
        )
        .await;

    tracing::info!(
        components = state.components.len().await,
        "Demo catalog seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_demo() {
        let state = AppState::new();
        seed_demo(&state).await.unwrap();
        assert_eq!(state.components.len().await, 2);
        assert!(state.scrapes.lookup(DEMO_PSU_URL).await.is_ok());
        assert!(state.scrapes.lookup("https://unknown.example").await.is_err());
    }
}
