use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Physical outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub store_id: i64,
    pub store_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for StoreDto {
    fn key(&self) -> String {
        self.store_id.to_string()
    }

    fn label(&self) -> String {
        self.store_name.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const FILTERS: &[FilterField] = &[
    SEARCH_FILTER,
    FilterField {
        name: "city",
        label: "City",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(60),
    },
    FilterField {
        name: "pincode",
        label: "Pincode",
        kind: FilterKind::Text,
        rules: ValidationRules::numeric(None, None).with_min_length(6).with_max_length(6),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a007_store",
    title: "Stores",
    endpoint: "/api/store",
    key_field: "store_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
