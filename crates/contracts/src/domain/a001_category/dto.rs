use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, ResourceDescriptor, ResourceRecord};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub category_name_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub product_count: Option<i64>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ResourceRecord for CategoryDto {
    fn key(&self) -> String {
        self.category_name_id.to_string()
    }

    fn label(&self) -> String {
        self.category_name.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const FILTERS: &[FilterField] = &[SEARCH_FILTER, STATUS_FILTER];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a001_category",
    title: "Categories",
    endpoint: "/api/category",
    key_field: "category_name_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
