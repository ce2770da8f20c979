//! Generic list page: header with export buttons, filter panel with
//! pagination, the record table and the row actions.

use std::sync::Arc;

use contracts::shared::list::{FilterField, FilterKind, FilterValue, ResourceRecord};
use leptos::prelude::*;
use thaw::*;

use super::controller::ListController;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::config::Config;
use crate::shared::date_utils::parse_input_date;
use crate::shared::export::{column_totals, CellFormat, CellValue, Column, ExportScope};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_LIST, PAGE_CAT_REPORT};

#[component]
pub fn ResourceListPage<T>(
    controller: ListController<T>,
    columns: Vec<Column<T>>,
    /// Sum money columns of the current page under the header
    #[prop(optional)]
    show_totals: bool,
) -> impl IntoView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let ctrl = controller;
    let descriptor = ctrl.descriptor;
    let config = expect_context::<Config>();
    let columns = Arc::new(columns);
    let has_actions = descriptor.supports_status() || descriptor.deletable;
    let category = if descriptor.is_read_only() {
        PAGE_CAT_REPORT
    } else {
        PAGE_CAT_LIST
    };

    ctrl.mount();

    let export = {
        let columns = columns.clone();
        move |scope: ExportScope| ctrl.export(scope, columns.to_vec())
    };
    let export_page = export.clone();
    let export_all = export;
    let export_disabled =
        Signal::derive(move || ctrl.is_exporting() || ctrl.is_loading() || ctrl.page().total_count == 0);

    let page_size_options = config.list.page_size_options.clone();
    let currency = config.list.currency_symbol.clone();
    let table_columns = columns.clone();

    view! {
        <PageFrame code=descriptor.code category=category>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{descriptor.title}</h1>
                    <Badge variant="primary".to_string()>
                        {move || ctrl.page().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.refresh()
                        disabled=Signal::derive(move || ctrl.is_loading())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export_page(ExportScope::CurrentPage)
                        disabled=export_disabled
                    >
                        {icon("download")}
                        " Export page"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export_all(ExportScope::AllPages)
                        disabled=export_disabled
                    >
                        {icon("download")}
                        {move || if ctrl.is_exporting() { " Exporting..." } else { " Export all" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=ctrl.filters_open()
                    on_toggle=Callback::new(move |_| ctrl.toggle_filters())
                    active_filters_count=Signal::derive(move || ctrl.active_filter_count())
                    pagination_controls=move || {
                        view! {
                            <PaginationControls
                                page=Signal::derive(move || ctrl.page())
                                on_page_change=Callback::new(move |index| ctrl.go_to(index))
                                on_page_size_change=Callback::new(move |size| ctrl.set_page_size(size))
                                page_size_options=page_size_options.clone()
                            />
                        }
                    }
                    filter_content=move || view! { <FilterForm controller=ctrl /> }
                    filter_tags=move || view! { <FilterChips controller=ctrl /> }
                />

                <Show when=move || ctrl.is_loading()>
                    <div class="list__loading">"Loading..."</div>
                </Show>

                <Show
                    when=move || ctrl.error().is_none()
                    fallback=move || {
                        let message = ctrl.error().map(|e| e.to_string()).unwrap_or_default();
                        view! {
                            <div class="alert alert--error">
                                <p>{message}</p>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctrl.refresh()>
                                    "Try again"
                                </Button>
                            </div>
                        }
                    }
                >
                    <ResourceTable
                        controller=ctrl
                        columns=table_columns.clone()
                        has_actions=has_actions
                        show_totals=show_totals
                        currency=currency.clone()
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn ResourceTable<T>(
    controller: ListController<T>,
    columns: Arc<Vec<Column<T>>>,
    has_actions: bool,
    show_totals: bool,
    currency: String,
) -> impl IntoView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let ctrl = controller;
    let header_cells = columns
        .iter()
        .map(|column| {
            let class = if column.format.is_numeric() {
                "table__header-cell--right"
            } else {
                ""
            };
            let header = column.header;
            view! { <TableHeaderCell class=class>{header}</TableHeaderCell> }
        })
        .collect_view();

    let totals_row = show_totals.then(|| {
        let columns = columns.clone();
        let totals = Signal::derive(move || column_totals(&ctrl.records(), &columns));
        let record_count = Signal::derive(move || ctrl.records().len());
        view! { <TableTotalsRow totals=totals record_count=record_count currency=currency /> }
    });

    view! {
        <div class="table-wrapper">
            <Table attr:id=format!("{}-table", ctrl.descriptor.code) attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header_cells}
                        {has_actions.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                    </TableRow>
                    {totals_row}
                </TableHeader>
                <TableBody>
                    <For
                        each=move || ctrl.records()
                        key=|record| format!("{}:{:?}", record.key(), record.status())
                        children=move |record| {
                            view! {
                                <ResourceRow
                                    controller=ctrl
                                    columns=columns.clone()
                                    record=record
                                    has_actions=has_actions
                                />
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || !ctrl.is_loading() && ctrl.page().total_count == 0>
                <div class="list__empty">"No records found"</div>
            </Show>
        </div>
    }
}

#[component]
fn ResourceRow<T>(
    controller: ListController<T>,
    columns: Arc<Vec<Column<T>>>,
    record: T,
    has_actions: bool,
) -> impl IntoView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let ctrl = controller;
    let descriptor = ctrl.descriptor;

    let cells = columns
        .iter()
        .map(|column| {
            let class = if column.format.is_numeric() {
                "table__cell--right"
            } else {
                ""
            };
            let text = column.display_cell(&record);
            let content = match (&column.format, (column.value)(&record)) {
                (CellFormat::Flag { .. }, CellValue::Flag(active)) => {
                    view! { <StatusBadge active=active>{text}</StatusBadge> }.into_any()
                }
                _ => text.into_any(),
            };
            view! {
                <TableCell class=class>
                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();

    let actions = has_actions.then(|| {
        let toggle = descriptor.supports_status().then(|| {
            let record = record.clone();
            let title = match record.status() {
                Some(true) => "Deactivate",
                _ => "Activate",
            };
            view! {
                <button
                    class="button button--icon"
                    title=title
                    on:click=move |_| ctrl.request_status_toggle(&record)
                >
                    {icon("power")}
                </button>
            }
        });
        let delete = descriptor.deletable.then(|| {
            let record = record.clone();
            view! {
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| ctrl.request_delete(&record)
                >
                    {icon("delete")}
                </button>
            }
        });
        view! {
            <TableCell>
                <TableCellLayout>{toggle}{delete}</TableCellLayout>
            </TableCell>
        }
    });

    view! { <TableRow>{cells}{actions}</TableRow> }
}

/// One input per filter field of the descriptor plus Apply/Clear.
#[component]
fn FilterForm<T>(controller: ListController<T>) -> impl IntoView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let ctrl = controller;
    let fields = ctrl
        .descriptor
        .filters
        .iter()
        .map(|field| {
            let name = field.name;
            view! {
                <div class="filter-field">
                    <label class="filter-field__label" for=format!("filter-{}", name)>{field.label}</label>
                    {filter_input(ctrl, field)}
                    {move || ctrl.filter_error(name).map(|message| view! {
                        <span class="filter-field__error">{message}</span>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <form
            class="filter-form"
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.apply_filters();
            }
        >
            {fields}
            <div class="filter-form__actions">
                <button type="submit" class="button button--primary">"Apply"</button>
                <button type="button" class="button button--secondary" on:click=move |_| ctrl.clear_filters()>
                    "Clear"
                </button>
            </div>
        </form>
    }
}

/// Raw draft text as typed, so the input is never rewritten while editing.
fn draft_text(value: Option<FilterValue>) -> String {
    match value {
        Some(FilterValue::Text(text)) | Some(FilterValue::Choice(text)) => text,
        Some(FilterValue::Date(date)) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

fn filter_input<T>(ctrl: ListController<T>, field: &'static FilterField) -> AnyView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let name = field.name;
    let id = format!("filter-{}", name);
    let value = move || draft_text(ctrl.draft_value(name));

    match field.kind {
        FilterKind::Text => view! {
            <input
                id=id
                type="text"
                class="filter-field__input"
                prop:value=value
                on:input=move |ev| ctrl.set_draft_field(name, FilterValue::Text(event_target_value(&ev)))
            />
        }
        .into_any(),
        FilterKind::Date => view! {
            <input
                id=id
                type="date"
                class="filter-field__input"
                prop:value=value
                on:change=move |ev| {
                    let value = match parse_input_date(&event_target_value(&ev)) {
                        Some(date) => FilterValue::Date(date),
                        None => FilterValue::Text(String::new()),
                    };
                    ctrl.set_draft_field(name, value);
                }
            />
        }
        .into_any(),
        FilterKind::Choice(options) => view! {
            <select
                id=id
                class="filter-field__input"
                prop:value=value
                on:change=move |ev| ctrl.set_draft_field(name, FilterValue::Choice(event_target_value(&ev)))
            >
                <option value="">"All"</option>
                {options
                    .iter()
                    .map(|(option, label)| view! { <option value=*option>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    }
}

/// Chips for the applied filters; closing one re-queries without it.
#[component]
fn FilterChips<T>(controller: ListController<T>) -> impl IntoView
where
    T: ResourceRecord + Send + Sync + 'static,
{
    let ctrl = controller;
    let descriptor = ctrl.descriptor;

    move || {
        ctrl.applied_filters()
            .iter()
            .map(|(name, value)| {
                let field = descriptor.filter(name);
                let label = field.map(|f| f.label).unwrap_or(name);
                let shown = match (field.map(|f| f.kind), value) {
                    (Some(FilterKind::Choice(options)), FilterValue::Choice(choice)) => options
                        .iter()
                        .find(|(option, _)| *option == choice.as_str())
                        .map(|(_, text)| text.to_string())
                        .unwrap_or_else(|| choice.clone()),
                    _ => value.display(),
                };
                let name = name.to_string();
                view! {
                    <FilterTag
                        label=format!("{}: {}", label, shown)
                        on_remove=Callback::new(move |_| ctrl.remove_filter(&name))
                    />
                }
            })
            .collect_view()
    }
}
