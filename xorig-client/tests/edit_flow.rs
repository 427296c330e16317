use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{Map, json};
use shared::fields::{ComponentDraft, CoreField, FieldInput, FieldType, FieldValue, Section, StorageShape};
use shared::models::{ComponentListQuery, ComponentType, SortDir, SortKey};
use std::sync::Arc;
use xorig_client::{ClientConfig, ComponentApi, EditSession, HttpClient, SessionMode};
use xorig_mock::{AppState, seed};

async fn client(seeded: bool) -> HttpClient {
    let state = Arc::new(AppState::new());
    if seeded {
        seed::seed_demo(&state).await.unwrap();
    }
    let addr = xorig_mock::spawn("127.0.0.1:0", state).await.unwrap();
    HttpClient::new(&ClientConfig::new(format!("http://{}", addr))).unwrap()
}

async fn first_of(client: &HttpClient, component_type: ComponentType) -> String {
    let query = ComponentListQuery::default().category(component_type.as_str());
    let page = client.list(&query).await.unwrap();
    page.data[0].id.clone().unwrap()
}

#[tokio::test]
async fn test_create_and_reload_dynamic_fields() {
    let client = client(false).await;
    let mut session = EditSession::create(client.clone(), ComponentType::GraphicsCard);
    session.set_core_field(CoreField::Manufacturer, "Sapphire");
    session.set_core_field(CoreField::ModelName, "Pulse RX 7800 XT");
    session.set_core_field(CoreField::ModelNumber, "11330-02-20G");
    session.set_core_field(CoreField::Price, "49999");
    session.set_static_value("vram_gb", "16 GB");

    session.open_add_field(Section::CoreIdentity);
    session.set_new_field_name("Colour Scheme");
    session.submit_add_field().unwrap();
    session.update_field("colour_scheme", FieldInput::Text("Black".into()));

    session.open_add_field(Section::TechnicalSpecs);
    session.set_new_field_name("Dual BIOS");
    session.set_new_field_type(FieldType::Boolean);
    session.submit_add_field().unwrap();
    session.update_field("dual_bios", FieldInput::Checked(true));

    let saved = session.save().await.unwrap();
    assert_eq!(session.mode(), SessionMode::Viewing);
    assert_eq!(saved.price, Some(Decimal::from(49999)));
    let sub = saved.type_record().unwrap();
    assert_eq!(sub["vram_gb"], json!(16));
    assert_eq!(sub["core_custom_data"], json!({ "colour_scheme": "Black" }));
    assert_eq!(sub["data"], json!({ "dual_bios": true }));

    let id = saved.id.unwrap();
    let reloaded = EditSession::load(client, &id).await.unwrap();
    let draft = reloaded.draft();
    assert_eq!(draft.shape, StorageShape::Separated);
    assert_eq!(draft.static_text("vram_gb"), "16");
    let (section, field) = draft.fields.get("colour_scheme").unwrap();
    assert_eq!(section, Section::CoreIdentity);
    assert_eq!(field.value, FieldValue::Text("Black".into()));
    let (section, field) = draft.fields.get("dual_bios").unwrap();
    assert_eq!(section, Section::TechnicalSpecs);
    assert_eq!(field.field_type, FieldType::Boolean);
    assert_eq!(field.value, FieldValue::Bool(true));
}

#[tokio::test]
async fn test_missing_identity_sends_nothing() {
    let client = client(false).await;
    let mut session = EditSession::create(client.clone(), ComponentType::Keyboard);
    session.set_core_field(CoreField::Manufacturer, "Keychron");
    session.set_core_field(CoreField::ModelName, "Q1 Pro");

    assert!(session.save().await.is_none());
    assert_eq!(session.mode(), SessionMode::Editing);
    assert_eq!(session.draft().core.manufacturer, "Keychron");
    assert_eq!(session.take_notifications()[0].description, "Model Number is required");

    let page = client.list(&ComponentListQuery::default()).await.unwrap();
    assert_eq!(page.meta.total_items, 0);
}

#[tokio::test]
async fn test_legacy_record_saved_in_place() {
    let client = client(true).await;
    let id = first_of(&client, ComponentType::PowerSupply).await;

    let mut session = EditSession::load(client.clone(), &id).await.unwrap();
    assert_eq!(session.draft().shape, StorageShape::Legacy);
    let (section, _) = session.draft().fields.get("fan_size").unwrap();
    assert_eq!(section, Section::TechnicalSpecs);

    session.begin_edit();
    session.update_field("fan_size", FieldInput::Text("135mm".into()));
    session.save().await.unwrap();

    let record = ComponentApi::get(&client, &id).await.unwrap();
    let fan = &record.specs["_dynamic_fan_size"];
    assert_eq!(fan["v"], json!(135));
    assert_eq!(fan["section"], json!("technical_specs"));
    assert_eq!(fan["source_id"], json!("manual"));
    assert_eq!(record.specs["_dynamic_cable_colour"]["v"], json!("Black"));
    assert_eq!(record.type_record().unwrap()["wattage"], json!(850));
}

#[tokio::test]
async fn test_fetch_specs_prefills_form() {
    let client = client(true).await;
    let mut session = EditSession::create(client, ComponentType::GraphicsCard);
    session.set_core_field(CoreField::ProductPageUrl, seed::DEMO_GPU_URL);
    session.set_core_field(CoreField::ModelName, "My own name");

    assert!(session.fetch_specs().await);
    let draft = session.draft();
    assert_eq!(draft.core.manufacturer, "Zotac");
    assert_eq!(draft.core.model_name, "My own name");
    assert_eq!(draft.core.price, "61999");
    assert!(draft.extra_specs.iter().any(|row| row.review == "Boost Clock"));
}

#[tokio::test]
async fn test_fetch_specs_failure_keeps_values() {
    let client = client(true).await;
    let mut session = EditSession::create(client, ComponentType::Ssd);
    session.set_core_field(CoreField::ProductPageUrl, "https://nowhere.example/ssd");
    session.set_core_field(CoreField::Manufacturer, "Samsung");
    let before = session.draft().clone();

    assert!(!session.fetch_specs().await);
    assert_eq!(session.draft(), &before);
    let notes = session.take_notifications();
    assert!(notes[0].is_destructive());
}

#[tokio::test]
async fn test_backend_rejection_keeps_editing() {
    let client = client(true).await;
    let id = first_of(&client, ComponentType::GraphicsCard).await;
    let mut session = EditSession::load(client.clone(), &id).await.unwrap();
    session.begin_edit();
    session.set_core_field(CoreField::Vendor, "PrimeABGB");

    ComponentApi::delete(&client, &id).await.unwrap();
    assert!(session.save().await.is_none());
    assert_eq!(session.mode(), SessionMode::Editing);
    assert_eq!(session.draft().core.vendor, "PrimeABGB");
    assert!(session.take_notifications()[0].is_destructive());
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let client = client(true).await;
    let id = first_of(&client, ComponentType::GraphicsCard).await;
    let mut session = EditSession::load(client.clone(), &id).await.unwrap();

    assert!(session.delete().await);
    let err = ComponentApi::get(&client, &id).await.unwrap_err();
    assert_eq!(err.code(), Some(6001));
}

#[tokio::test]
async fn test_list_filters_and_sorts() {
    let client = client(true).await;
    let all = client
        .list(&ComponentListQuery::default().order_by(SortKey::Price, SortDir::Asc))
        .await
        .unwrap();
    assert_eq!(all.meta.total_items, 2);
    assert_eq!(all.data[0].manufacturer, "Corsair");

    let found = client
        .list(&ComponentListQuery::default().search("zotac"))
        .await
        .unwrap();
    assert_eq!(found.data.len(), 1);
    assert_eq!(found.data[0].component_type, ComponentType::GraphicsCard);

    let paged = client
        .list(&ComponentListQuery::default().paginate(2, 1))
        .await
        .unwrap();
    assert_eq!(paged.data.len(), 1);
    assert_eq!(paged.meta.total_pages, 2);
    assert_eq!(paged.meta.current_page, 2);
}

#[tokio::test]
async fn test_cleared_static_stays_cleared() {
    let client = client(false).await;
    let mut session = EditSession::create(client.clone(), ComponentType::Processor);
    session.set_core_field(CoreField::Manufacturer, "AMD");
    session.set_core_field(CoreField::ModelName, "Ryzen 5 7600X");
    session.set_core_field(CoreField::ModelNumber, "100-100000593WOF");
    session.set_static_value("socket", "AM5");
    let id = session.save().await.unwrap().id.unwrap();

    let mut session = EditSession::load(client.clone(), &id).await.unwrap();
    assert_eq!(session.draft().static_text("socket"), "AM5");
    session.begin_edit();
    session.set_static_value("socket", "");
    session.save().await.unwrap();

    let reloaded = EditSession::load(client, &id).await.unwrap();
    assert_eq!(reloaded.draft().static_text("socket"), "");
    assert!(reloaded.loaded().unwrap().type_record().unwrap().get("socket").is_none());
}

#[tokio::test]
async fn test_removed_field_gone_from_mixed_record() {
    let client = client(true).await;
    let id = first_of(&client, ComponentType::PowerSupply).await;

    // a separated-map copy next to the legacy envelopes
    let record = ComponentApi::get(&client, &id).await.unwrap();
    let mut payload = ComponentDraft::from_record(&record).to_payload(Utc::now());
    let mut core = Map::new();
    core.insert("sleeve_colour".into(), json!("Black"));
    payload.core_custom_data = Some(core);
    client.update(&id, &payload).await.unwrap();

    let mut session = EditSession::load(client.clone(), &id).await.unwrap();
    assert_eq!(session.draft().shape, StorageShape::Legacy);
    assert!(session.draft().fields.contains_key("sleeve_colour"));
    session.begin_edit();
    session.remove_field("sleeve_colour").unwrap();
    session.save().await.unwrap();

    let reloaded = EditSession::load(client, &id).await.unwrap();
    assert!(!reloaded.draft().fields.contains_key("sleeve_colour"));
    assert!(reloaded.draft().fields.contains_key("fan_size"));
    assert!(reloaded.draft().fields.contains_key("cable_colour"));
}
