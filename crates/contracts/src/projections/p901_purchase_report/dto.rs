use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::{DATE_FROM_FILTER, DATE_TO_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Supplier bill in the purchase register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseBillDto {
    pub purchase_id: i64,
    pub bill_no: String,
    #[serde(default)]
    pub bill_date: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub supplier_gstin: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub taxable_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tax_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: Option<f64>,
}

impl ResourceRecord for PurchaseBillDto {
    fn key(&self) -> String {
        self.purchase_id.to_string()
    }
}

const FILTERS: &[FilterField] = &[
    DATE_FROM_FILTER,
    DATE_TO_FILTER,
    FilterField {
        name: "supplier",
        label: "Supplier",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(100),
    },
    FilterField {
        name: "bill_no",
        label: "Bill no.",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(30),
    },
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "p901_purchase_report",
    title: "Purchase report",
    endpoint: "/api/report/purchase",
    key_field: "purchase_id",
    status_field: None,
    deletable: false,
    filters: FILTERS,
};
