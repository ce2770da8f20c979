use contracts::projections::p903_tax_report::dto::{TaxSummaryDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns(symbol: &str) -> Vec<Column<TaxSummaryDto>> {
    vec![
        Column::text("HSN code", |t: &TaxSummaryDto| (&t.hsn_code).into()),
        Column::percent("Rate", |t: &TaxSummaryDto| t.gst_rate.into()),
        Column::money("Taxable", |t: &TaxSummaryDto| t.taxable_amount.into(), symbol),
        Column::money("CGST", |t: &TaxSummaryDto| t.cgst_amount.into(), symbol),
        Column::money("SGST", |t: &TaxSummaryDto| t.sgst_amount.into(), symbol),
        Column::money("IGST", |t: &TaxSummaryDto| t.igst_amount.into(), symbol),
        Column::money("Total tax", |t: &TaxSummaryDto| t.total_tax.into(), symbol),
    ]
}

#[component]
pub fn TaxReportList() -> impl IntoView {
    let config = expect_context::<Config>();
    let controller = ListController::<TaxSummaryDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns(&config.list.currency_symbol) show_totals=true /> }
}
