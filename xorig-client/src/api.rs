//! Component catalog endpoints

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{
    ComponentListQuery, ComponentPage, ComponentPayload, ComponentRecord, FetchSpecsRequest,
    ScrapedSpecs,
};

const COMPONENTS: &str = "/api/components";

/// Persistence operations the edit session depends on
#[async_trait]
pub trait ComponentApi: Send + Sync {
    /// `GET /components`
    async fn list(&self, query: &ComponentListQuery) -> ClientResult<ComponentPage>;

    /// `GET /components/{id}`
    async fn get(&self, id: &str) -> ClientResult<ComponentRecord>;

    /// `POST /components`
    async fn create(&self, payload: &ComponentPayload) -> ClientResult<ComponentRecord>;

    /// `PATCH /components/{id}`
    async fn update(&self, id: &str, payload: &ComponentPayload) -> ClientResult<ComponentRecord>;

    /// `DELETE /components/{id}`
    async fn delete(&self, id: &str) -> ClientResult<()>;

    /// `POST /components/fetch-specs`
    async fn fetch_specs(&self, url: &str) -> ClientResult<ScrapedSpecs>;
}

#[async_trait]
impl ComponentApi for HttpClient {
    async fn list(&self, query: &ComponentListQuery) -> ClientResult<ComponentPage> {
        self.get_with_query(COMPONENTS, query).await
    }

    async fn get(&self, id: &str) -> ClientResult<ComponentRecord> {
        HttpClient::get(self, &format!("{}/{}", COMPONENTS, id)).await
    }

    async fn create(&self, payload: &ComponentPayload) -> ClientResult<ComponentRecord> {
        tracing::debug!(component_type = %payload.component_type, "Creating component");
        self.post(COMPONENTS, payload).await
    }

    async fn update(&self, id: &str, payload: &ComponentPayload) -> ClientResult<ComponentRecord> {
        tracing::debug!(id, "Updating component");
        self.patch(&format!("{}/{}", COMPONENTS, id), payload).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete(self, &format!("{}/{}", COMPONENTS, id)).await
    }

    async fn fetch_specs(&self, url: &str) -> ClientResult<ScrapedSpecs> {
        let request = FetchSpecsRequest {
            url: url.to_string(),
        };
        self.post(&format!("{}/fetch-specs", COMPONENTS), &request)
            .await
    }
}

#[async_trait]
impl<T: ComponentApi + ?Sized> ComponentApi for std::sync::Arc<T> {
    async fn list(&self, query: &ComponentListQuery) -> ClientResult<ComponentPage> {
        (**self).list(query).await
    }

    async fn get(&self, id: &str) -> ClientResult<ComponentRecord> {
        (**self).get(id).await
    }

    async fn create(&self, payload: &ComponentPayload) -> ClientResult<ComponentRecord> {
        (**self).create(payload).await
    }

    async fn update(&self, id: &str, payload: &ComponentPayload) -> ClientResult<ComponentRecord> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        (**self).delete(id).await
    }

    async fn fetch_specs(&self, url: &str) -> ClientResult<ScrapedSpecs> {
        (**self).fetch_specs(url).await
    }
}
