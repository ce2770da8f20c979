use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::STATUS_FILTER;
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Serviceable pincode with its delivery terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZoneDto {
    pub pincode: String,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub delivery_charge: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub min_order_amount: Option<f64>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for DeliveryZoneDto {
    fn key(&self) -> String {
        self.pincode.clone()
    }

    fn label(&self) -> String {
        match &self.area_name {
            Some(area) => format!("{} ({})", self.pincode, area),
            None => self.pincode.clone(),
        }
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const FILTERS: &[FilterField] = &[
    FilterField {
        name: "pincode",
        label: "Pincode",
        kind: FilterKind::Text,
        rules: ValidationRules::numeric(None, None).with_max_length(6),
    },
    FilterField {
        name: "city",
        label: "City",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(60),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a009_delivery_zone",
    title: "Delivery zones",
    endpoint: "/api/delivery-zone",
    key_field: "pincode",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
