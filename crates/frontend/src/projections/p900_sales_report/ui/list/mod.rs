use contracts::projections::p900_sales_report::dto::{SalesInvoiceDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns(symbol: &str) -> Vec<Column<SalesInvoiceDto>> {
    vec![
        Column::text("Invoice no.", |i: &SalesInvoiceDto| (&i.invoice_no).into()),
        Column::date("Date", |i: &SalesInvoiceDto| (&i.invoice_date).into()),
        Column::text("Customer", |i: &SalesInvoiceDto| (&i.customer_name).into()),
        Column::text("Store", |i: &SalesInvoiceDto| (&i.store_name).into()),
        Column::text("Payment", |i: &SalesInvoiceDto| (&i.payment_mode).into()),
        Column::money("Taxable", |i: &SalesInvoiceDto| i.taxable_amount.into(), symbol),
        Column::money("Tax", |i: &SalesInvoiceDto| i.tax_amount.into(), symbol),
        Column::money("Discount", |i: &SalesInvoiceDto| i.discount_amount.into(), symbol),
        Column::money("Total", |i: &SalesInvoiceDto| i.total_amount.into(), symbol),
    ]
}

#[component]
pub fn SalesReportList() -> impl IntoView {
    let config = expect_context::<Config>();
    let controller = ListController::<SalesInvoiceDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns(&config.list.currency_symbol) show_totals=true /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::{column_totals, format_current_page};

    fn invoice(no: &str, total: Option<f64>) -> SalesInvoiceDto {
        SalesInvoiceDto {
            invoice_id: 1,
            invoice_no: no.into(),
            invoice_date: Some("2024-03-15".into()),
            customer_name: Some("Walk-in".into()),
            store_name: None,
            payment_mode: Some("upi".into()),
            taxable_amount: total.map(|t| t / 1.12),
            tax_amount: None,
            discount_amount: None,
            total_amount: total,
        }
    }

    #[test]
    fn test_export_rows() {
        let matrix = format_current_page(&[invoice("S-001", Some(112.0))], &columns("₹"));
        assert_eq!(matrix.header[8], "Total");
        assert_eq!(
            matrix.rows[0],
            vec!["S-001", "15 Mar 2024", "Walk-in", "", "upi", "₹100.00", "₹0.00", "₹0.00", "₹112.00"]
        );
    }

    #[test]
    fn test_totals_skip_missing_amounts() {
        let records = vec![invoice("S-001", Some(112.0)), invoice("S-002", None), invoice("S-003", Some(56.0))];
        let totals = column_totals(&records, &columns("₹"));
        assert_eq!(totals[8], Some(168.0));
        assert_eq!(totals[0], None);
    }
}
