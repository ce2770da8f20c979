use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDto {
    pub testimonial_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for TestimonialDto {
    fn key(&self) -> String {
        self.testimonial_id.to_string()
    }

    fn label(&self) -> String {
        self.customer_name.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const RATINGS: &[(&str, &str)] = &[
    ("5", "5 stars"),
    ("4", "4 stars"),
    ("3", "3 stars"),
    ("2", "2 stars"),
    ("1", "1 star"),
];

const FILTERS: &[FilterField] = &[
    SEARCH_FILTER,
    FilterField {
        name: "rating",
        label: "Rating",
        kind: FilterKind::Choice(RATINGS),
        rules: ValidationRules::none(),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a006_testimonial",
    title: "Testimonials",
    endpoint: "/api/testimonial",
    key_field: "testimonial_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
