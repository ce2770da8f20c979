use contracts::projections::p901_purchase_report::dto::{PurchaseBillDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns(symbol: &str) -> Vec<Column<PurchaseBillDto>> {
    vec![
        Column::text("Bill no.", |b: &PurchaseBillDto| (&b.bill_no).into()),
        Column::date("Date", |b: &PurchaseBillDto| (&b.bill_date).into()),
        Column::text("Supplier", |b: &PurchaseBillDto| (&b.supplier_name).into()),
        Column::text("GSTIN", |b: &PurchaseBillDto| (&b.supplier_gstin).into()),
        Column::money("Taxable", |b: &PurchaseBillDto| b.taxable_amount.into(), symbol),
        Column::money("Tax", |b: &PurchaseBillDto| b.tax_amount.into(), symbol),
        Column::money("Total", |b: &PurchaseBillDto| b.total_amount.into(), symbol),
    ]
}

#[component]
pub fn PurchaseReportList() -> impl IntoView {
    let config = expect_context::<Config>();
    let controller = ListController::<PurchaseBillDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns(&config.list.currency_symbol) show_totals=true /> }
}
