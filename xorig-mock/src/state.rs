use crate::store::ComponentStore;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::ScrapedSpecs;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct AppState {
    pub components: ComponentStore,
    pub scrapes: ScrapeTable,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            components: ComponentStore::new(),
            scrapes: ScrapeTable::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned scrape results keyed by product URL
pub struct ScrapeTable {
    pages: RwLock<HashMap<String, ScrapedSpecs>>,
}

impl ScrapeTable {
    pub fn new() -> Self {
        Self {
            pages: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, url: impl Into<String>, specs: ScrapedSpecs) {
        self.pages.write().await.insert(url.into(), specs);
    }

    /// Scrape result for `url`; unknown pages fail like an unreachable site
    pub async fn lookup(&self, url: &str) -> AppResult<ScrapedSpecs> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::invalid_request("url is required"));
        }
        self.pages
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::new(ErrorCode::ScrapeFailed).with_detail("url", url))
    }
}

impl Default for ScrapeTable {
    fn default() -> Self {
        Self::new()
    }
}
