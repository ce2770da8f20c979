use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::{DATE_FROM_FILTER, DATE_TO_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Tax collected per HSN code and rate for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummaryDto {
    pub hsn_code: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub gst_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub taxable_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cgst_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub sgst_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub igst_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_tax: Option<f64>,
}

impl ResourceRecord for TaxSummaryDto {
    /// One row per HSN code and rate pair.
    fn key(&self) -> String {
        format!("{}@{}", self.hsn_code, self.gst_rate.unwrap_or_default())
    }
}

const TAX_TYPES: &[(&str, &str)] = &[("intra", "CGST + SGST"), ("inter", "IGST")];

const FILTERS: &[FilterField] = &[
    DATE_FROM_FILTER,
    DATE_TO_FILTER,
    FilterField {
        name: "hsn_code",
        label: "HSN code",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(8),
    },
    FilterField {
        name: "tax_type",
        label: "Supply type",
        kind: FilterKind::Choice(TAX_TYPES),
        rules: ValidationRules::none(),
    },
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "p903_tax_report",
    title: "Tax report",
    endpoint: "/api/report/tax",
    key_field: "hsn_code",
    status_field: None,
    deletable: false,
    filters: FILTERS,
};
