use contracts::shared::list::Page;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// First/prev/next/last buttons, the "Showing X to Y of Z" label and a page-size select.
///
/// Pages are 1-based; buttons are disabled at the bounds.
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<Page>,

    /// Requested 1-based page index
    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    #[prop(into)] page_size_options: Vec<usize>,
) -> impl IntoView {
    let at_first = move || !page.get().has_prev();
    let at_last = move || !page.get().has_next();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get_untracked().prev().index)
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = page.get();
                    format!("{} / {}", p.index, p.total_pages())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get_untracked().next().index)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get_untracked().total_pages())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-range">{move || page.get().showing_label()}</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page.get().size.to_string()
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page.get().size == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
