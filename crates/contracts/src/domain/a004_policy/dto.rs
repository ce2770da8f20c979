use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Published policy page (privacy, returns, shipping...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDto {
    pub policy_id: i64,
    pub title: String,
    #[serde(default)]
    pub policy_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for PolicyDto {
    fn key(&self) -> String {
        self.policy_id.to_string()
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const POLICY_TYPES: &[(&str, &str)] = &[
    ("privacy", "Privacy"),
    ("terms", "Terms & conditions"),
    ("return", "Return & refund"),
    ("shipping", "Shipping"),
];

const FILTERS: &[FilterField] = &[
    SEARCH_FILTER,
    FilterField {
        name: "policy_type",
        label: "Policy type",
        kind: FilterKind::Choice(POLICY_TYPES),
        rules: ValidationRules::none(),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a004_policy",
    title: "Policies",
    endpoint: "/api/policy",
    key_field: "policy_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
