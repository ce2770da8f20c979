use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::STATUS_FILTER;
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// GST slab bound to an HSN code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstDto {
    pub gst_id: i64,
    pub hsn_code: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Total rate in percent
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub gst_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cgst: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub sgst: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub igst: Option<f64>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for GstDto {
    fn key(&self) -> String {
        self.gst_id.to_string()
    }

    fn label(&self) -> String {
        self.hsn_code.clone()
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
        name: "hsn_code",
        label: "HSN code",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_min_length(2).with_max_length(8),
    },
    FilterField {
        name: "gst_rate",
        label: "GST rate (%)",
        kind: FilterKind::Text,
        rules: ValidationRules::numeric(Some(0.0), Some(28.0)),
    },
    STATUS_FILTER,
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a002_gst",
    title: "GST",
    endpoint: "/api/gst",
    key_field: "gst_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
