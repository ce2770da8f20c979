//! Read-only reports computed by the backend.

pub mod p900_sales_report {
    pub mod dto;
}
pub mod p901_purchase_report {
    pub mod dto;
}
pub mod p902_stock_report {
    pub mod dto;
}
pub mod p903_tax_report {
    pub mod dto;
}
