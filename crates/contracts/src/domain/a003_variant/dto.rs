use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Product variant (pack size, strength, flavour...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDto {
    pub variant_id: i64,
    pub variant_name: String,
    #[serde(default)]
    pub variant_type: Option<String>,
    #[serde(default)]
    pub variant_values: Vec<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for VariantDto {
    fn key(&self) -> String {
        self.variant_id.to_string()
    }

    fn label(&self) -> String {
        self.variant_name.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const VARIANT_TYPES: &[(&str, &str)] = &[
    ("size", "Size"),
    ("strength", "Strength"),
    ("flavour", "Flavour"),
    ("pack", "Pack"),
];

const FILTERS: &[FilterField] = &[
    SEARCH_FILTER,
    FilterField {
        name: "variant_type",
        label: "Type",
        kind: FilterKind::Choice(VARIANT_TYPES),
        rules: ValidationRules::none(),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a003_variant",
    title: "Variants",
    endpoint: "/api/variant",
    key_field: "variant_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
