//! Listing query and paginated response

use super::component::ComponentRecord;
use super::component_type::ComponentType;
use serde::{Deserialize, Serialize};

/// Pseudo-category meaning "no type filter"
pub const ALL_CATEGORIES: &str = "All";

/// Sortable column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "manufacturer")]
    Manufacturer,
    #[serde(rename = "model_name")]
    ModelName,
    #[default]
    #[serde(rename = "updatedAt")]
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Query for `GET /components`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_dir: SortDir,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for ComponentListQuery {
    fn default() -> Self {
        Self {
            component_type: None,
            search: None,
            page: default_page(),
            limit: default_limit(),
            sort_key: SortKey::default(),
            sort_dir: SortDir::default(),
        }
    }
}

impl ComponentListQuery {
    /// Filter by a category name; `"All"` (or an unknown name) clears the filter
    pub fn category(mut self, category: &str) -> Self {
        self.component_type = if category == ALL_CATEGORIES {
            None
        } else {
            category.parse().ok()
        };
        self
    }

    /// Free-text search; blank input clears it
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }

    /// Page is 1-based; zero is clamped to the first page
    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = page.max(1);
        self.limit = limit;
        self
    }

    pub fn order_by(mut self, key: SortKey, dir: SortDir) -> Self {
        self.sort_key = key;
        self.sort_dir = dir;
        self
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl PageMeta {
    pub fn new(total_items: u64, current_page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total_items.div_ceil(limit as u64) as u32
        } else {
            1
        };
        Self {
            total_items,
            total_pages,
            current_page,
        }
    }
}

/// Paginated listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentPage {
    pub data: Vec<ComponentRecord>,
    pub meta: PageMeta,
}

impl ComponentPage {
    /// Page shown when listing fails
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta {
                total_items: 0,
                total_pages: 0,
                current_page: 1,
            },
        }
    }
}
