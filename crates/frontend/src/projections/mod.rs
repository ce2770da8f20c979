pub mod p900_sales_report {
    pub mod ui {
        pub mod list;
    }
}
pub mod p901_purchase_report {
    pub mod ui {
        pub mod list;
    }
}
pub mod p902_stock_report {
    pub mod ui {
        pub mod list;
    }
}
pub mod p903_tax_report {
    pub mod ui {
        pub mod list;
    }
}
