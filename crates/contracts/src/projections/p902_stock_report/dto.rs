use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::SEARCH_FILTER;
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// Stock on hand for one product batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBatchDto {
    pub stock_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub batch_no: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub mrp: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub purchase_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub stock_value: Option<f64>,
}

impl ResourceRecord for StockBatchDto {
    fn key(&self) -> String {
        self.stock_id.to_string()
    }
}

const STOCK_LEVELS: &[(&str, &str)] = &[
    ("in_stock", "In stock"),
    ("low", "Low stock"),
    ("out", "Out of stock"),
    ("expiring", "Expiring in 90 days"),
];

const FILTERS: &[FilterField] = &[
    SEARCH_FILTER,
    FilterField {
        name: "stock_level",
        label: "Stock level",
        kind: FilterKind::Choice(STOCK_LEVELS),
        rules: ValidationRules::none(),
    },
    FilterField {
        name: "batch_no",
        label: "Batch no.",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(30),
    },
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "p902_stock_report",
    title: "Stock report",
    endpoint: "/api/report/stock",
    key_field: "stock_id",
    status_field: None,
    deletable: false,
    filters: FILTERS,
};
