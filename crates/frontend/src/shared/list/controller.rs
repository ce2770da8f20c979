//! Reactive wrapper around [`ListStore`] used by every resource page.
//!
//! The controller owns the signals of one list view, runs the fetches the
//! store asks for and routes outcomes to the store and to the user.

use std::sync::Arc;

use contracts::shared::list::{
    FilterEditor, FilterSet, FilterValue, ListPage, ListQuery, Page, ResourceDescriptor,
    ResourceRecord,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::store::{FetchTicket, ListStore, Resolution};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::{ApiError, HttpResourceClient, ResourceClient};
use crate::shared::api_utils::api_base;
use crate::shared::config::Config;
use crate::shared::date_utils::today_stamp;
use crate::shared::export::{
    download_csv, format_all_pages, format_current_page, Column, ExportScope, RowMatrix,
};
use crate::shared::modal::ConfirmService;
use crate::shared::notify::NotificationService;

pub struct ListController<T: 'static> {
    pub descriptor: &'static ResourceDescriptor,
    store: RwSignal<ListStore<T>>,
    editor: RwSignal<FilterEditor>,
    client: StoredValue<Arc<dyn ResourceClient<T>>>,
    filters_open: RwSignal<bool>,
    exporting: RwSignal<bool>,
    notify: NotificationService,
    confirm: ConfirmService,
    global: AppGlobalContext,
}

impl<T: 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: ResourceRecord + DeserializeOwned + Send + Sync + 'static,
{
    /// Controller talking to the configured backend over HTTP.
    pub fn for_descriptor(descriptor: &'static ResourceDescriptor) -> Self {
        let config = expect_context::<Config>();
        let client = HttpResourceClient::<T>::new(api_base(&config.api), descriptor);
        Self::new(descriptor, Arc::new(client), config.list.default_page_size)
    }
}

impl<T> ListController<T>
where
    T: ResourceRecord + Send + Sync + 'static,
{
    pub fn new(
        descriptor: &'static ResourceDescriptor,
        client: Arc<dyn ResourceClient<T>>,
        page_size: usize,
    ) -> Self {
        let global = expect_context::<AppGlobalContext>();
        let saved = restore_filters(&global, descriptor.code);

        Self {
            descriptor,
            store: RwSignal::new(ListStore::with_filters(page_size, saved.clone())),
            editor: RwSignal::new(FilterEditor::new(saved)),
            client: StoredValue::new(client),
            filters_open: RwSignal::new(false),
            exporting: RwSignal::new(false),
            notify: expect_context::<NotificationService>(),
            confirm: expect_context::<ConfirmService>(),
            global,
        }
    }

    // ---- reads (tracked) ----

    pub fn records(&self) -> Vec<T> {
        self.store.with(|s| s.records().to_vec())
    }

    pub fn page(&self) -> Page {
        self.store.with(|s| s.page())
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<ApiError> {
        self.store.with(|s| s.error().cloned())
    }

    pub fn applied_filters(&self) -> FilterSet {
        self.editor.with(|e| e.applied().clone())
    }

    pub fn active_filter_count(&self) -> usize {
        self.editor.with(|e| e.applied().active_count())
    }

    pub fn draft_value(&self, field: &str) -> Option<FilterValue> {
        self.editor.with(|e| e.draft().get(field).cloned())
    }

    pub fn filter_error(&self, field: &str) -> Option<String> {
        self.editor.with(|e| e.error_for(field).map(ToString::to_string))
    }

    pub fn filters_open(&self) -> RwSignal<bool> {
        self.filters_open
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.get()
    }

    // ---- fetching ----

    fn run(self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let client = self.client.get_value();
        log::debug!(
            "{}: fetch #{} page {}",
            self.descriptor.code,
            ticket.seq,
            ticket.query.page.index
        );
        spawn_local(async move {
            let outcome = client.fetch_page(&ticket.query).await;
            self.on_fetched(ticket.seq, outcome);
        });
    }

    fn on_fetched(self, seq: u64, outcome: Result<ListPage<T>, ApiError>) {
        match self.store.try_update(|s| s.resolve(seq, outcome)) {
            Some(Resolution::Applied) => {
                log::debug!("{}: fetch #{} applied", self.descriptor.code, seq)
            }
            Some(Resolution::Stale) => {
                log::debug!("{}: fetch #{} superseded, dropped", self.descriptor.code, seq)
            }
            Some(Resolution::Refetch(ticket)) => {
                log::info!(
                    "{}: result shrank, reloading page {}",
                    self.descriptor.code,
                    ticket.query.page.index
                );
                self.run(Some(ticket));
            }
            Some(Resolution::Failed(error)) => {
                log::error!("{}: fetch #{} failed: {}", self.descriptor.code, seq, error);
                self.notify
                    .error(format!("Could not load {}", self.descriptor.title), error.to_string());
            }
            // The list view was disposed while the request was in flight.
            None => {}
        }
    }

    pub fn mount(&self) {
        self.run(self.store.try_update(|s| s.mount()));
    }

    pub fn refresh(&self) {
        self.run(self.store.try_update(|s| s.refresh()));
    }

    pub fn go_to(&self, index: usize) {
        self.run(self.store.try_update(|s| s.go_to(index)).flatten());
    }

    pub fn next(&self) {
        self.run(self.store.try_update(|s| s.next()).flatten());
    }

    pub fn prev(&self) {
        self.run(self.store.try_update(|s| s.prev()).flatten());
    }

    pub fn first(&self) {
        self.run(self.store.try_update(|s| s.first()).flatten());
    }

    pub fn last(&self) {
        self.run(self.store.try_update(|s| s.last()).flatten());
    }

    pub fn set_page_size(&self, size: usize) {
        self.run(self.store.try_update(|s| s.set_page_size(size)));
    }

    // ---- filters ----

    pub fn toggle_filters(&self) {
        if !self.filters_open.get_untracked() {
            self.editor.update(FilterEditor::open);
        }
        self.filters_open.update(|open| *open = !*open);
    }

    pub fn set_draft_field(&self, field: &str, value: FilterValue) {
        self.editor.update(|e| e.set_draft_field(field, value));
    }

    pub fn apply_filters(&self) {
        let schema = self.descriptor.filters;
        match self.editor.try_update(|e| e.commit(schema)) {
            Some(Ok(filters)) => self.use_filters(filters),
            Some(Err(errors)) => {
                log::debug!("{}: {} invalid filter(s)", self.descriptor.code, errors.len())
            }
            None => {}
        }
    }

    pub fn clear_filters(&self) {
        if let Some(filters) = self.editor.try_update(FilterEditor::clear) {
            self.use_filters(filters);
        }
    }

    pub fn remove_filter(&self, field: &str) {
        if let Some(filters) = self.editor.try_update(|e| e.remove(field)) {
            self.use_filters(filters);
        }
    }

    fn use_filters(&self, filters: FilterSet) {
        save_filters(&self.global, self.descriptor.code, &filters);
        self.run(self.store.try_update(|s| s.apply_filters(filters)));
    }

    // ---- mutations ----

    /// Asks for confirmation, then flips the record's status.
    pub fn request_status_toggle(&self, record: &T) {
        let Some(current) = record.status() else {
            return;
        };
        let key = record.key();
        let label = record.label();
        let target = if current { "inactive" } else { "active" };
        let this = *self;
        self.confirm.ask(
            "Change status",
            format!("Mark \"{}\" as {}?", label, target),
            "Confirm",
            move || this.set_status(key.clone(), !current),
        );
    }

    /// Applies the new status immediately and rolls it back if the backend refuses.
    ///
    /// When the record is not on screen (a reload is in flight) the request is
    /// still sent and the list reloaded once the backend accepts it.
    pub fn set_status(&self, key: String, active: bool) {
        let Some(change) = self
            .store
            .try_update(|s| s.begin_status_change(&key, active))
        else {
            log::warn!("{}: list closed before status of {} was sent", self.descriptor.code, key);
            self.notify
                .error("Status not updated", "The list was closed before the change was sent");
            return;
        };
        if !change.is_optimistic() {
            log::debug!("{}: record {} not displayed, sending without patch", self.descriptor.code, key);
        }

        let this = *self;
        let client = self.client.get_value();
        spawn_local(async move {
            match client.update_status(&key, active).await {
                Ok(()) => {
                    log::info!("{}: record {} status -> {}", this.descriptor.code, key, active);
                    this.notify.success(
                        "Status updated",
                        format!("Record is now {}", if active { "active" } else { "inactive" }),
                    );
                    if !change.is_optimistic() {
                        this.refresh();
                    }
                }
                Err(error) => {
                    log::error!("{}: status update of {} failed: {}", this.descriptor.code, key, error);
                    this.store.update(|s| s.rollback_status_change(&change));
                    this.notify.error("Status not updated", error.to_string());
                }
            }
        });
    }

    pub fn request_delete(&self, record: &T) {
        let key = record.key();
        let label = record.label();
        let this = *self;
        self.confirm.ask(
            format!("Delete from {}", self.descriptor.title),
            format!("Delete \"{}\"? This cannot be undone.", label),
            "Delete",
            move || this.delete(key.clone()),
        );
    }

    /// Deletes on the backend; the list is reloaded only when that succeeds.
    pub fn delete(&self, key: String) {
        let this = *self;
        let client = self.client.get_value();
        spawn_local(async move {
            match client.delete(&key).await {
                Ok(()) => {
                    log::info!("{}: record {} deleted", this.descriptor.code, key);
                    this.notify.success("Deleted", "The record was deleted");
                    this.run(this.store.try_update(|s| s.record_deleted()));
                }
                Err(error) => {
                    log::error!("{}: delete of {} failed: {}", this.descriptor.code, key, error);
                    this.notify.error("Delete failed", error.to_string());
                }
            }
        });
    }

    // ---- export ----

    pub fn export(&self, scope: ExportScope, columns: Vec<Column<T>>) {
        if self.exporting.get_untracked() {
            return;
        }
        self.exporting.set(true);

        let this = *self;
        let client = self.client.get_value();
        let (filters, page) = self
            .store
            .with_untracked(|s| (s.filters().clone(), s.page()));
        let records = self.store.with_untracked(|s| s.records().to_vec());
        let filename = format!("{}_{}.csv", self.descriptor.code, today_stamp());

        spawn_local(async move {
            let matrix = match scope {
                ExportScope::CurrentPage => Ok(format_current_page(&records, &columns)),
                ExportScope::AllPages => {
                    log::info!(
                        "{}: exporting {} page(s)",
                        this.descriptor.code,
                        page.total_pages()
                    );
                    format_all_pages(
                        |index| {
                            let client = client.clone();
                            let query = ListQuery {
                                filters: filters.clone(),
                                page: Page { index, ..page },
                            };
                            async move { client.fetch_page(&query).await.map(|p| p.records) }
                        },
                        page.total_pages(),
                        &columns,
                    )
                    .await
                }
            };
            this.finish_export(matrix, &filename);
            this.exporting.set(false);
        });
    }

    fn finish_export(&self, matrix: Result<RowMatrix, ApiError>, filename: &str) {
        match matrix {
            Ok(matrix) if matrix.is_empty() => {
                self.notify.info("Nothing to export", "No records to export");
            }
            Ok(matrix) => match download_csv(&matrix, filename) {
                Ok(()) => self
                    .notify
                    .success("Export complete", format!("{} rows exported", matrix.len())),
                Err(message) => {
                    log::error!("{}: download failed: {}", self.descriptor.code, message);
                    self.notify.error("Export failed", message);
                }
            },
            Err(error) => {
                log::error!("{}: export aborted: {}", self.descriptor.code, error);
                self.notify.error("Export failed", error.to_string());
            }
        }
    }
}

fn restore_filters(global: &AppGlobalContext, code: &str) -> FilterSet {
    global
        .get_form_state(code)
        .and_then(|value| match serde_json::from_value(value) {
            Ok(filters) => Some(filters),
            Err(e) => {
                log::warn!("{}: ignoring saved filters: {}", code, e);
                None
            }
        })
        .unwrap_or_default()
}

fn save_filters(global: &AppGlobalContext, code: &str, filters: &FilterSet) {
    match serde_json::to_value(filters) {
        Ok(value) => global.set_form_state(code.to_string(), value),
        Err(e) => log::warn!("{}: filters not saved: {}", code, e),
    }
}
