use contracts::projections::p902_stock_report::dto::{StockBatchDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns(symbol: &str) -> Vec<Column<StockBatchDto>> {
    vec![
        Column::text("Product", |s: &StockBatchDto| (&s.product_name).into()),
        Column::text("Batch", |s: &StockBatchDto| (&s.batch_no).into()),
        Column::date("Expiry", |s: &StockBatchDto| (&s.expiry_date).into()),
        Column::integer("Qty", |s: &StockBatchDto| s.quantity.into()),
        Column::money("MRP", |s: &StockBatchDto| s.mrp.into(), symbol),
        Column::money("Purchase rate", |s: &StockBatchDto| s.purchase_rate.into(), symbol),
        Column::money("Stock value", |s: &StockBatchDto| s.stock_value.into(), symbol),
    ]
}

#[component]
pub fn StockReportList() -> impl IntoView {
    let config = expect_context::<Config>();
    let controller = ListController::<StockBatchDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns(&config.list.currency_symbol) show_totals=true /> }
}
