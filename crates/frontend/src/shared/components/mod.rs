pub mod filter_panel;
pub mod pagination_controls;
pub mod table;
pub mod table_totals_row;
pub mod ui;
