//! Export of list records into a [`RowMatrix`] of display strings.
//!
//! Columns carry their own formatting: money cells are prefixed with the
//! column's currency symbol, percent cells suffixed with `%`, dates localized.
//! Money and percent cells always come out with exactly two decimals; a
//! missing or unparseable amount renders as `0.00`.

pub mod csv;

use std::future::Future;

use contracts::shared::amount::{parse_amount, parse_amount_with_symbol};

use crate::shared::api::ApiError;
use crate::shared::components::table::format_number_with_decimals;
use crate::shared::date_utils::format_date;

pub use csv::{download_csv, to_csv};

/// Raw value pulled out of a record for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Missing,
}

impl CellValue {
    /// Numeric reading of the value; text goes through the lenient amount parser.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) if value.is_finite() => Some(*value),
            CellValue::Text(raw) => parse_amount(raw),
            _ => None,
        }
    }

    /// [`CellValue::as_amount`] for money text that may carry `symbol`, e.g. `"Rs. 100"`.
    pub fn as_amount_in(&self, symbol: &str) -> Option<f64> {
        match self {
            CellValue::Text(raw) => parse_amount_with_symbol(raw, symbol),
            other => other.as_amount(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<&Option<String>> for CellValue {
    fn from(value: &Option<String>) -> Self {
        match value {
            Some(text) => CellValue::Text(text.clone()),
            None => CellValue::Missing,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CellValue::Missing, CellValue::Number)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(CellValue::Missing, |v| CellValue::Number(v as f64))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Flag(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellFormat {
    Text,
    Money { symbol: String },
    Percent,
    Integer,
    Date,
    Flag { yes: &'static str, no: &'static str },
}

impl CellFormat {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellFormat::Money { .. } | CellFormat::Percent | CellFormat::Integer
        )
    }
}

/// One table/export column.
#[derive(Clone)]
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> CellValue,
    pub format: CellFormat,
}

impl<T> Column<T> {
    pub fn text(header: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Text,
        }
    }

    pub fn money(header: &'static str, value: fn(&T) -> CellValue, symbol: &str) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Money {
                symbol: symbol.to_string(),
            },
        }
    }

    pub fn percent(header: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Percent,
        }
    }

    pub fn integer(header: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Integer,
        }
    }

    pub fn date(header: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Date,
        }
    }

    pub fn flag(
        header: &'static str,
        value: fn(&T) -> CellValue,
        yes: &'static str,
        no: &'static str,
    ) -> Self {
        Self {
            header,
            value,
            format: CellFormat::Flag { yes, no },
        }
    }

    /// Cell text shared by the on-screen table and exports.
    pub fn display_cell(&self, record: &T) -> String {
        display_cell(&(self.value)(record), &self.format)
    }
}

/// Two-decimal rendering of an amount; missing or non-finite values become `0.00`.
pub fn format_decimal(value: Option<f64>) -> String {
    let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Re-formats amount text such as `"12.5"` or `"₹1,200"`.
pub fn format_amount_text(raw: &str) -> String {
    format_decimal(parse_amount(raw))
}

pub fn format_cell(value: &CellValue, format: &CellFormat) -> String {
    match format {
        CellFormat::Money { .. } | CellFormat::Percent => format_decimal(value.as_amount()),
        CellFormat::Integer => value
            .as_amount()
            .map(|v| format!("{:.0}", v))
            .unwrap_or_default(),
        CellFormat::Date => match value {
            CellValue::Text(raw) => format_date(raw),
            _ => String::new(),
        },
        CellFormat::Flag { yes, no } => match value {
            CellValue::Flag(true) => yes.to_string(),
            CellValue::Flag(false) => no.to_string(),
            _ => String::new(),
        },
        CellFormat::Text => match value {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Flag(flag) => flag.to_string(),
            CellValue::Missing => String::new(),
        },
    }
}

pub fn display_cell(value: &CellValue, format: &CellFormat) -> String {
    match format {
        CellFormat::Money { symbol } => {
            let amount = value.as_amount_in(symbol).unwrap_or(0.0);
            format!("{}{}", symbol, format_number_with_decimals(amount, 2))
        }
        CellFormat::Percent => format!("{}%", format_decimal(value.as_amount())),
        CellFormat::Integer => match value.as_amount() {
            Some(v) => format_number_with_decimals(v, 0),
            None => String::new(),
        },
        _ => format_cell(value, format),
    }
}

/// Header row plus one row of display strings per record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMatrix {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowMatrix {
    pub fn with_header<T>(columns: &[Column<T>]) -> Self {
        Self {
            header: columns.iter().map(|c| c.header.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_records<T>(&mut self, records: &[T], columns: &[Column<T>]) {
        self.rows.extend(
            records
                .iter()
                .map(|record| columns.iter().map(|c| c.display_cell(record)).collect()),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    CurrentPage,
    AllPages,
}

pub fn format_current_page<T>(records: &[T], columns: &[Column<T>]) -> RowMatrix {
    let mut matrix = RowMatrix::with_header(columns);
    matrix.push_records(records, columns);
    matrix
}

/// Fetches pages `1..=total_pages` one after another and concatenates them in page order.
///
/// The first failed page aborts the export.
pub async fn format_all_pages<T, F, Fut>(
    mut fetch_page: F,
    total_pages: usize,
    columns: &[Column<T>],
) -> Result<RowMatrix, ApiError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let mut matrix = RowMatrix::with_header(columns);
    for index in 1..=total_pages.max(1) {
        let records = fetch_page(index).await?;
        log::debug!("export: page {} of {} ({} records)", index, total_pages, records.len());
        matrix.push_records(&records, columns);
    }
    Ok(matrix)
}

/// Per-column sums of money columns; `None` for every other column.
pub fn column_totals<T>(records: &[T], columns: &[Column<T>]) -> Vec<Option<f64>> {
    columns
        .iter()
        .map(|column| match &column.format {
            CellFormat::Money { symbol } => Some(
                records
                    .iter()
                    .filter_map(|record| (column.value)(record).as_amount_in(symbol))
                    .sum(),
            ),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::ready;

    #[derive(Debug, Clone)]
    struct Invoice {
        no: String,
        total: Option<f64>,
        rate: CellValue,
    }

    fn invoice(no: &str, total: Option<f64>) -> Invoice {
        Invoice {
            no: no.to_string(),
            total,
            rate: CellValue::Text("18".into()),
        }
    }

    fn columns() -> Vec<Column<Invoice>> {
        vec![
            Column::text("Invoice", |i: &Invoice| (&i.no).into()),
            Column::money("Total", |i: &Invoice| i.total.into(), "₹"),
            Column::percent("GST", |i: &Invoice| i.rate.clone()),
        ]
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_amount_text("12.5"), "12.50");
        assert_eq!(format_amount_text(&format_amount_text("12.5")), "12.50");
        assert_eq!(format_amount_text("abc"), "0.00");
        assert_eq!(format_amount_text(""), "0.00");
        assert_eq!(format_decimal(None), "0.00");
        assert_eq!(format_decimal(Some(f64::NAN)), "0.00");
        assert_eq!(format_decimal(Some(-0.001)), "0.00");
        assert_eq!(format_decimal(Some(1234.567)), "1234.57");
    }

    #[test]
    fn test_money_and_percent_cells() {
        let columns = columns();
        let record = invoice("INV-1", Some(1234.5));
        assert_eq!(columns[1].display_cell(&record), "₹1,234.50");
        assert_eq!(columns[2].display_cell(&record), "18.00%");

        let blank = invoice("INV-2", None);
        assert_eq!(columns[1].display_cell(&blank), "₹0.00");

        let mut garbled = invoice("INV-3", Some(12.5));
        garbled.rate = CellValue::Text("n/a".into());
        assert_eq!(columns[1].display_cell(&garbled), "₹12.50");
        assert_eq!(columns[2].display_cell(&garbled), "0.00%");
    }

    #[test]
    fn test_money_text_with_configured_symbol() {
        let money = CellFormat::Money {
            symbol: "USD ".into(),
        };
        assert_eq!(display_cell(&CellValue::Text("USD 100".into()), &money), "USD 100.00");
        assert_eq!(display_cell(&CellValue::Text("Rs. 100".into()), &money), "USD 100.00");
    }

    #[test]
    fn test_other_formats() {
        let flag = CellFormat::Flag {
            yes: "Active",
            no: "Inactive",
        };
        assert_eq!(format_cell(&CellValue::Flag(true), &flag), "Active");
        assert_eq!(format_cell(&CellValue::Flag(false), &flag), "Inactive");
        assert_eq!(format_cell(&CellValue::Number(12.0), &CellFormat::Integer), "12");
        assert_eq!(format_cell(&CellValue::Missing, &CellFormat::Integer), "");
        assert_eq!(
            format_cell(&CellValue::Text("2024-03-15".into()), &CellFormat::Date),
            "15 Mar 2024"
        );
    }

    #[test]
    fn test_current_page_matrix() {
        let matrix = format_current_page(&[invoice("A", Some(1.0))], &columns());
        assert_eq!(matrix.header, vec!["Invoice", "Total", "GST"]);
        assert_eq!(matrix.rows, vec![vec!["A", "₹1.00", "18.00%"]]);
    }

    #[test]
    fn test_all_pages_keep_page_order() {
        let requested = RefCell::new(Vec::new());
        let matrix = block_on(format_all_pages(
            |index| {
                requested.borrow_mut().push(index);
                let base = (index - 1) * 2;
                ready(Ok(vec![
                    invoice(&format!("R{}", base + 1), Some(1.0)),
                    invoice(&format!("R{}", base + 2), Some(2.0)),
                ]))
            },
            3,
            &columns(),
        ))
        .unwrap();

        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
        let order: Vec<&str> = matrix.rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(order, vec!["R1", "R2", "R3", "R4", "R5", "R6"]);
    }

    #[test]
    fn test_all_pages_abort_on_first_failure() {
        let requested = RefCell::new(Vec::new());
        let result = block_on(format_all_pages(
            |index| {
                requested.borrow_mut().push(index);
                if index == 2 {
                    ready(Err(ApiError::Transport("offline".into())))
                } else {
                    ready(Ok(vec![invoice("X", None)]))
                }
            },
            3,
            &columns(),
        ));

        assert_eq!(result, Err(ApiError::Transport("offline".into())));
        assert_eq!(*requested.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_column_totals() {
        let records = vec![invoice("A", Some(10.5)), invoice("B", None), invoice("C", Some(4.5))];
        assert_eq!(column_totals(&records, &columns()), vec![None, Some(15.0), None]);
    }
}
