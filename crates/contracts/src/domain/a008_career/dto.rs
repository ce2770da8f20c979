use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Job opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerDto {
    pub career_id: i64,
    pub job_title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub openings: Option<u32>,
    #[serde(default)]
    pub posted_on: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for CareerDto {
    fn key(&self) -> String {
        self.career_id.to_string()
    }

    fn label(&self) -> String {
        self.job_title.clone()
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
        name: "location",
        label: "Location",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(60),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a008_career",
    title: "Careers",
    endpoint: "/api/career",
    key_field: "career_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
