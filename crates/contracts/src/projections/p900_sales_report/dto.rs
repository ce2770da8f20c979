use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;
use crate::shared::list::resource::{DATE_FROM_FILTER, DATE_TO_FILTER};
use crate::shared::list::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
use crate::shared::metadata::ValidationRules;

/// One sales invoice in the sales register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoiceDto {
    pub invoice_id: i64,
    pub invoice_no: String,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub taxable_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tax_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub discount_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: Option<f64>,
}

impl ResourceRecord for SalesInvoiceDto {
    fn key(&self) -> String {
        self.invoice_id.to_string()
    }
}

const PAYMENT_MODES: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("card", "Card"),
    ("upi", "UPI"),
    ("credit", "Credit"),
];

const FILTERS: &[FilterField] = &[
    DATE_FROM_FILTER,
    DATE_TO_FILTER,
    FilterField {
        name: "invoice_no",
        label: "Invoice no.",
        kind: FilterKind::Text,
        rules: ValidationRules::none().with_max_length(30),
    },
    FilterField {
        name: "payment_mode",
        label: "Payment mode",
        kind: FilterKind::Choice(PAYMENT_MODES),
        rules: ValidationRules::none(),
    },
];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "p900_sales_report",
    title: "Sales report",
    endpoint: "/api/report/sales",
    key_field: "invoice_id",
    status_field: None,
    deletable: false,
    filters: FILTERS,
};
