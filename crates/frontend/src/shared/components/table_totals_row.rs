use leptos::prelude::*;

use crate::shared::components::table::format_money;

/// Totals row rendered under the header of report tables.
///
/// `totals` has one entry per column; `None` leaves the cell empty, except the
/// first one which shows the record count.
#[component]
pub fn TableTotalsRow(
    #[prop(into)] totals: Signal<Vec<Option<f64>>>,
    #[prop(into)] record_count: Signal<usize>,
    #[prop(optional)] currency: String,
) -> impl IntoView {
    view! {
        <tr class="table__totals-row">
            {move || {
                let currency = currency.clone();
                totals
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, total)| {
                        let text = match total {
                            Some(sum) => format!("{}{}", currency, format_money(sum)),
                            None if i == 0 => format!("Records: {}", record_count.get()),
                            None => String::new(),
                        };
                        let class = if total.is_some() {
                            "table__cell table__cell--right"
                        } else {
                            "table__cell"
                        };
                        view! { <td class=class>{text}</td> }
                    })
                    .collect_view()
            }}
        </tr>
    }
}
