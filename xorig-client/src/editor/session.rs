//! Edit session state machine
//!
//! ```text
//! create() ─► Editing ──save()──► Saving ──ok──► Viewing
//!                ▲                  │
//!                └──────── err ─────┘
//! open()/load() ─► Viewing ──begin_edit()──► Editing
//! ```

use super::{AddFieldDialog, Notification};
use crate::api::ComponentApi;
use crate::error::ClientResult;
use chrono::Utc;
use shared::fields::{ComponentDraft, CoreField, FieldInput, FieldType, Section, TypedField};
use shared::models::{ComponentRecord, ComponentType, ExtraSpec, ScrapedSpecs};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Viewing,
    Editing,
    /// A create/update call is in flight
    Saving,
}

/// Editable column of an extra-spec row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraSpecColumn {
    Review,
    Source,
}

/// One component's edit surface
pub struct EditSession<A: ComponentApi> {
    api: A,
    mode: SessionMode,
    draft: ComponentDraft,
    /// Last record returned by the backend; `None` while creating
    loaded: Option<ComponentRecord>,
    add_field: AddFieldDialog,
    notifications: Vec<Notification>,
}

impl<A: ComponentApi> EditSession<A> {
    /// Blank creation form, already editable
    pub fn create(api: A, component_type: ComponentType) -> Self {
        Self {
            api,
            mode: SessionMode::Editing,
            draft: ComponentDraft::new(component_type),
            loaded: None,
            add_field: AddFieldDialog::default(),
            notifications: Vec::new(),
        }
    }

    /// Session over an already fetched record
    pub fn open(api: A, record: ComponentRecord) -> Self {
        Self {
            api,
            mode: SessionMode::Viewing,
            draft: ComponentDraft::from_record(&record),
            loaded: Some(record),
            add_field: AddFieldDialog::default(),
            notifications: Vec::new(),
        }
    }

    /// Fetch a record by id and open it
    pub async fn load(api: A, id: &str) -> ClientResult<Self> {
        let record = api.get(id).await?;
        tracing::debug!(id, component_type = %record.component_type, "Component loaded");
        Ok(Self::open(api, record))
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SessionMode::Editing
    }

    pub fn draft(&self) -> &ComponentDraft {
        &self.draft
    }

    pub fn loaded(&self) -> Option<&ComponentRecord> {
        self.loaded.as_ref()
    }

    pub fn add_field_dialog(&self) -> &AddFieldDialog {
        &self.add_field
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain pending notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Draft, when mutations are currently allowed
    fn editable(&mut self) -> Option<&mut ComponentDraft> {
        if self.mode == SessionMode::Editing {
            Some(&mut self.draft)
        } else {
            None
        }
    }

    // ========== Mode transitions ==========

    pub fn begin_edit(&mut self) {
        if self.mode == SessionMode::Viewing {
            self.mode = SessionMode::Editing;
        }
    }

    /// Discard unsaved changes
    ///
    /// A loaded record is restored and the session returns to viewing; a
    /// creation form is reset to blank and stays editable.
    pub fn cancel_edit(&mut self) {
        if self.mode != SessionMode::Editing {
            return;
        }
        self.add_field.cancel();
        match &self.loaded {
            Some(record) => {
                self.draft = ComponentDraft::from_record(record);
                self.mode = SessionMode::Viewing;
            }
            None => self.draft = ComponentDraft::new(self.draft.component_type),
        }
    }

    // ========== Field edits ==========

    pub fn set_core_field(&mut self, field: CoreField, value: impl Into<String>) {
        if let Some(draft) = self.editable() {
            draft.core.set(field, value);
        }
    }

    pub fn set_static_value(&mut self, key: &str, raw: impl Into<String>) {
        let Some(draft) = self.editable() else {
            return;
        };
        if let Err(e) = draft.set_static(key, raw) {
            self.notify(Notification::destructive("Invalid field", e.message));
        }
    }

    /// Apply raw input to a dynamic field, coerced to its declared type
    pub fn update_field(&mut self, key: &str, input: FieldInput) {
        if let Some(field) = self
            .editable()
            .and_then(|draft| draft.fields.get_mut(key))
        {
            field.set_input(input);
        }
    }

    pub fn remove_field(&mut self, key: &str) -> Option<(Section, TypedField)> {
        self.editable()?.fields.remove(key)
    }

    pub fn add_extra_spec(&mut self) {
        if let Some(draft) = self.editable() {
            draft.extra_specs.push(ExtraSpec::default());
        }
    }

    pub fn update_extra_spec(&mut self, index: usize, column: ExtraSpecColumn, value: impl Into<String>) {
        if let Some(row) = self
            .editable()
            .and_then(|draft| draft.extra_specs.get_mut(index))
        {
            match column {
                ExtraSpecColumn::Review => row.review = value.into(),
                ExtraSpecColumn::Source => row.source = value.into(),
            }
        }
    }

    pub fn remove_extra_spec(&mut self, index: usize) {
        if let Some(draft) = self.editable()
            && index < draft.extra_specs.len()
        {
            draft.extra_specs.remove(index);
        }
    }

    // ========== Add-field dialog ==========

    pub fn open_add_field(&mut self, section: Section) {
        if self.is_editing() {
            self.add_field.open(section);
        }
    }

    pub fn set_new_field_name(&mut self, name: impl Into<String>) {
        self.add_field.set_name(name);
    }

    pub fn set_new_field_type(&mut self, field_type: FieldType) {
        self.add_field.set_type(field_type);
    }

    pub fn cancel_add_field(&mut self) {
        self.add_field.cancel();
    }

    /// Submit the dialog; returns the new key on success
    pub fn submit_add_field(&mut self) -> Option<String> {
        if !self.is_editing() {
            return None;
        }
        match self
            .add_field
            .submit(self.draft.component_type, &mut self.draft.fields)
        {
            Ok(key) => key,
            Err(e) => {
                self.notify(Notification::destructive("Cannot add field", e.message));
                None
            }
        }
    }

    // ========== Scraped hints ==========

    /// Pre-fill empty fixed fields and append unseen scraped pairs as extra specs
    pub fn apply_scraped(&mut self, scraped: &ScrapedSpecs) {
        let Some(draft) = self.editable() else {
            return;
        };

        let hints = [
            (CoreField::Manufacturer, scraped.manufacturer.clone()),
            (CoreField::ModelName, scraped.model_name.clone()),
            (CoreField::ModelNumber, scraped.model_number.clone()),
            (CoreField::Price, scraped.price.map(|p| p.to_string())),
        ];
        for (field, hint) in hints {
            if let Some(hint) = hint
                && draft.core.get(field).trim().is_empty()
            {
                draft.core.set(field, hint);
            }
        }

        for (label, text) in scraped.raw_pairs() {
            if !draft.extra_specs.iter().any(|row| row.review == label) {
                draft.extra_specs.push(ExtraSpec::new(label, text));
            }
        }
    }

    /// Scrape the product page URL and apply the result as hints
    pub async fn fetch_specs(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        let url = self.draft.core.product_page_url.trim().to_string();
        if url.is_empty() {
            self.notify(Notification::destructive(
                "Missing URL",
                "Enter a product page URL first",
            ));
            return false;
        }

        match self.api.fetch_specs(&url).await {
            Ok(scraped) => {
                self.apply_scraped(&scraped);
                self.notify(Notification::info(
                    "Specs fetched",
                    "Review the pre-filled values before saving",
                ));
                true
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Fetching specs failed");
                self.notify(Notification::destructive("Failed to fetch specs", e.to_string()));
                false
            }
        }
    }

    // ========== Persistence ==========

    /// Validate, recompose and persist the draft
    ///
    /// Returns the saved record. On any failure the draft is kept as is and
    /// the session stays editable.
    pub async fn save(&mut self) -> Option<ComponentRecord> {
        if self.mode != SessionMode::Editing {
            return None;
        }
        if let Err(e) = self.draft.core.validate() {
            self.notify(Notification::destructive("Validation error", e.message));
            return None;
        }

        self.mode = SessionMode::Saving;
        let payload = self.draft.to_payload(Utc::now());
        let result = match self.draft.id.as_deref() {
            Some(id) => self.api.update(id, &payload).await,
            None => self.api.create(&payload).await,
        };

        match result {
            Ok(record) => {
                let created = self.draft.id.is_none();
                tracing::info!(
                    id = record.id.as_deref().unwrap_or_default(),
                    created,
                    "Component saved"
                );
                self.draft = ComponentDraft::from_record(&record);
                self.loaded = Some(record.clone());
                self.mode = SessionMode::Viewing;
                self.notify(Notification::info(
                    if created { "Component created" } else { "Component updated" },
                    format!("{} {}", record.manufacturer, record.model_name),
                ));
                Some(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving component failed");
                self.mode = SessionMode::Editing;
                self.notify(Notification::destructive("Failed to save component", e.to_string()));
                None
            }
        }
    }

    /// Delete the loaded record
    pub async fn delete(&mut self) -> bool {
        let Some(id) = self.draft.id.clone() else {
            return false;
        };
        match self.api.delete(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Component deleted");
                self.notify(Notification::info("Component deleted", id));
                true
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Deleting component failed");
                self.notify(Notification::destructive("Failed to delete component", e.to_string()));
                false
            }
        }
    }
}
