//! List store: the state machine behind every resource list.
//!
//! The store performs no I/O. Every trigger hands back a [`FetchTicket`]; the
//! caller runs the request and passes the outcome to [`ListStore::resolve`]
//! with the ticket's sequence number. Only the most recently issued ticket can
//! change the state, so a slow response to a superseded request is dropped.

use contracts::shared::list::{FilterSet, ListPage, ListQuery, Page, ResourceRecord};

use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success { records: Vec<T>, page: Page },
    Failed(ApiError),
}

/// A request the store wants executed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// What [`ListStore::resolve`] did with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Applied,
    /// Response of a superseded request; state untouched
    Stale,
    /// The requested page no longer exists; load the returned (clamped) page instead
    Refetch(FetchTicket),
    Failed(ApiError),
}

/// A confirmed status change on its way to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub key: String,
    /// Status the displayed row had before it was patched; `None` when no row was patched
    pub previous: Option<bool>,
    pub requested: bool,
}

impl StatusChange {
    pub fn is_optimistic(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ListStore<T> {
    state: FetchState<T>,
    filters: FilterSet,
    page: Page,
    latest_seq: u64,
}

impl<T: ResourceRecord> ListStore<T> {
    pub fn new(page_size: usize) -> Self {
        Self::with_filters(page_size, FilterSet::new())
    }

    /// Store starting from previously applied filters (restored form state).
    pub fn with_filters(page_size: usize, filters: FilterSet) -> Self {
        Self {
            state: FetchState::Idle,
            filters,
            page: Page::new(page_size),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Records currently displayed; empty unless the last fetch succeeded.
    pub fn records(&self) -> &[T] {
        match &self.state {
            FetchState::Success { records, .. } => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn mount(&mut self) -> FetchTicket {
        self.page.index = 1;
        self.issue()
    }

    /// New applied filters always restart from page 1.
    pub fn apply_filters(&mut self, filters: FilterSet) -> FetchTicket {
        self.filters = filters;
        self.page.index = 1;
        self.issue()
    }

    /// Issues nothing when `index` is out of range or already current.
    pub fn go_to(&mut self, index: usize) -> Option<FetchTicket> {
        let target = self.page.go_to(index);
        if target.index == self.page.index {
            return None;
        }
        self.page = target;
        Some(self.issue())
    }

    pub fn next(&mut self) -> Option<FetchTicket> {
        let index = self.page.next().index;
        self.go_to(index)
    }

    pub fn prev(&mut self) -> Option<FetchTicket> {
        let index = self.page.prev().index;
        self.go_to(index)
    }

    pub fn first(&mut self) -> Option<FetchTicket> {
        self.go_to(1)
    }

    pub fn last(&mut self) -> Option<FetchTicket> {
        let index = self.page.total_pages();
        self.go_to(index)
    }

    pub fn set_page_size(&mut self, size: usize) -> FetchTicket {
        self.page = self.page.with_size(size);
        self.issue()
    }

    /// Reloads the current page with the current filters.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state = FetchState::Loading;
        FetchTicket {
            seq: self.latest_seq,
            query: ListQuery {
                filters: self.filters.clone(),
                page: self.page,
            },
        }
    }

    pub fn resolve(&mut self, seq: u64, outcome: Result<ListPage<T>, ApiError>) -> Resolution {
        if seq != self.latest_seq {
            return Resolution::Stale;
        }

        match outcome {
            Ok(list) => {
                let page = self.page.set_total_count(list.total_count);
                if page.index != self.page.index {
                    self.page = page;
                    return Resolution::Refetch(self.issue());
                }
                self.page = page;
                self.state = FetchState::Success {
                    records: list.records,
                    page,
                };
                Resolution::Applied
            }
            Err(error) => {
                self.state = FetchState::Failed(error.clone());
                Resolution::Failed(error)
            }
        }
    }

    fn record_mut(&mut self, key: &str) -> Option<&mut T> {
        match &mut self.state {
            FetchState::Success { records, .. } => records.iter_mut().find(|r| r.key() == key),
            _ => None,
        }
    }

    /// Starts a confirmed status change.
    ///
    /// A displayed record is flipped before the backend confirms it. While a
    /// reload is in flight nothing is displayed, so nothing is patched, but the
    /// change is still returned and must be sent.
    pub fn begin_status_change(&mut self, key: &str, active: bool) -> StatusChange {
        let previous = self.record_mut(key).and_then(|record| {
            let previous = record.status()?;
            record.set_status(active);
            Some(previous)
        });
        StatusChange {
            key: key.to_string(),
            previous,
            requested: active,
        }
    }

    /// Restores the value a rejected status change replaced.
    ///
    /// A record reloaded from the backend in the meantime is left alone.
    pub fn rollback_status_change(&mut self, change: &StatusChange) {
        let Some(previous) = change.previous else {
            return;
        };
        if let Some(record) = self.record_mut(&change.key) {
            if record.status() == Some(change.requested) {
                record.set_status(previous);
            }
        }
    }

    /// A record was deleted on the backend.
    ///
    /// The total shrinks by one, the page steps back if it no longer exists,
    /// and the page is reloaded.
    pub fn record_deleted(&mut self) -> FetchTicket {
        let total_count = self.page.total_count.saturating_sub(1);
        self.page = self.page.set_total_count(total_count);
        self.issue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::FilterValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        active: bool,
    }

    impl ResourceRecord for Row {
        fn key(&self) -> String {
            self.id.to_string()
        }

        fn status(&self) -> Option<bool> {
            Some(self.active)
        }

        fn set_status(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn rows(ids: std::ops::RangeInclusive<u32>) -> Vec<Row> {
        ids.map(|id| Row { id, active: true }).collect()
    }

    fn ok(ids: std::ops::RangeInclusive<u32>, total: usize) -> Result<ListPage<Row>, ApiError> {
        Ok(ListPage::new(rows(ids), total))
    }

    /// Store showing `index` of a list with `total` records, page size 10.
    fn loaded_at(index: usize, total: usize) -> ListStore<Row> {
        let mut store = ListStore::new(10);
        let ticket = store.mount();
        store.resolve(ticket.seq, ok(1..=10, total));
        if index > 1 {
            let ticket = store.go_to(index).unwrap();
            let first = ((index - 1) * 10 + 1) as u32;
            let last = (index * 10).min(total) as u32;
            store.resolve(ticket.seq, ok(first..=last, total));
        }
        store
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut store: ListStore<Row> = ListStore::new(10);
        assert_eq!(store.state(), &FetchState::Idle);

        let ticket = store.mount();
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.query.page.index, 1);
        assert!(ticket.query.filters.is_empty());
        assert!(store.is_loading());
    }

    #[test]
    fn test_success_updates_total() {
        let store = loaded_at(1, 23);
        assert_eq!(store.page().total_pages(), 3);
        assert_eq!(store.page().showing_label(), "Showing 1 to 10 of 23");
        assert_eq!(store.records().len(), 10);
    }

    #[test]
    fn test_next_twice_then_noop() {
        let mut store = loaded_at(1, 23);
        for (index, last) in [(2, 20), (3, 23)] {
            let ticket = store.next().unwrap();
            assert_eq!(ticket.query.page.index, index);
            let first = ((index - 1) * 10 + 1) as u32;
            store.resolve(ticket.seq, ok(first..=last, 23));
        }
        assert_eq!(store.page().showing_label(), "Showing 21 to 23 of 23");
        assert!(store.next().is_none());
        assert_eq!(store.page().index, 3);
    }

    #[test]
    fn test_out_of_range_pages_issue_nothing() {
        let mut store = loaded_at(1, 45);
        let seq = store.latest_seq();
        assert!(store.go_to(0).is_none());
        assert!(store.go_to(6).is_none());
        assert!(store.go_to(1).is_none());
        assert!(store.prev().is_none());
        assert_eq!(store.latest_seq(), seq);
        assert_eq!(store.page().index, 1);
    }

    #[test]
    fn test_filter_commit_resets_to_first_page() {
        let mut store = loaded_at(3, 45);
        let filters = FilterSet::new().with_field("search", FilterValue::Text("gel".into()));
        let ticket = store.apply_filters(filters.clone());
        assert_eq!(ticket.query.page.index, 1);
        assert_eq!(ticket.query.filters, filters);
        assert_eq!(store.filters(), &filters);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut store = loaded_at(1, 30);
        let first = store.refresh();
        let second = store.next().unwrap();

        assert_eq!(store.resolve(second.seq, ok(11..=20, 30)), Resolution::Applied);
        assert_eq!(store.resolve(first.seq, ok(1..=10, 30)), Resolution::Stale);

        assert_eq!(store.page().index, 2);
        assert_eq!(store.records()[0].id, 11);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut store = loaded_at(1, 30);
        let first = store.refresh();
        let second = store.refresh();
        store.resolve(second.seq, ok(1..=10, 30));
        let late = store.resolve(first.seq, Err(ApiError::Transport("timeout".into())));
        assert_eq!(late, Resolution::Stale);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_failure_clears_records() {
        let mut store = loaded_at(1, 30);
        let ticket = store.next().unwrap();
        let error = ApiError::Backend {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            store.resolve(ticket.seq, Err(error.clone())),
            Resolution::Failed(error.clone())
        );
        assert!(store.records().is_empty());
        assert_eq!(store.error(), Some(&error));
    }

    #[test]
    fn test_shrunk_result_refetches_clamped_page() {
        let mut store = loaded_at(5, 45);
        let ticket = store.refresh();
        let resolution = store.resolve(ticket.seq, ok(1..=0, 32));
        let Resolution::Refetch(follow_up) = resolution else {
            panic!("expected a follow-up fetch, got {:?}", resolution);
        };
        assert_eq!(follow_up.query.page.index, 4);
        assert!(store.is_loading());

        store.resolve(follow_up.seq, ok(31..=32, 32));
        assert_eq!(store.page().index, 4);
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn test_deleting_last_record_of_last_page_steps_back() {
        let mut store = loaded_at(3, 21);
        assert_eq!(store.records().len(), 1);

        let ticket = store.record_deleted();
        assert_eq!(ticket.query.page.index, 2);
        store.resolve(ticket.seq, ok(11..=20, 20));
        assert_eq!(store.page().index, 2);
        assert_eq!(store.page().total_pages(), 2);
    }

    #[test]
    fn test_delete_in_the_middle_reloads_same_page() {
        let mut store = loaded_at(2, 35);
        let ticket = store.record_deleted();
        assert_eq!(ticket.query.page.index, 2);
        assert_eq!(ticket.query.page.total_count, 34);
    }

    #[test]
    fn test_delete_while_page_change_in_flight() {
        let mut store = loaded_at(1, 30);
        let page_change = store.next().unwrap();

        let reload = store.record_deleted();
        assert_eq!(reload.query.page.index, 2);
        assert_eq!(reload.query.page.total_count, 29);

        assert_eq!(store.resolve(page_change.seq, ok(11..=20, 30)), Resolution::Stale);
        assert!(store.is_loading());
        assert_eq!(store.resolve(reload.seq, ok(11..=20, 29)), Resolution::Applied);
        assert_eq!(store.page().total_count, 29);
    }

    #[test]
    fn test_delete_on_last_page_while_reload_in_flight() {
        let mut store = loaded_at(3, 21);
        let refresh = store.refresh();

        let reload = store.record_deleted();
        assert_eq!(reload.query.page.index, 2);

        assert_eq!(store.resolve(refresh.seq, ok(21..=21, 21)), Resolution::Stale);
        assert_eq!(store.resolve(reload.seq, ok(11..=20, 20)), Resolution::Applied);
        assert_eq!(store.page().index, 2);
        assert_eq!(store.records().len(), 10);
    }

    #[test]
    fn test_status_change_and_rollback() {
        let mut store = loaded_at(1, 10);
        let change = store.begin_status_change("3", false);
        assert_eq!(change.previous, Some(true));
        assert!(change.is_optimistic());
        assert!(!store.records()[2].active);

        store.rollback_status_change(&change);
        assert!(store.records()[2].active);
    }

    #[test]
    fn test_status_change_for_record_not_displayed() {
        let mut store = loaded_at(1, 10);
        let change = store.begin_status_change("99", false);
        assert_eq!(change.key, "99");
        assert!(!change.is_optimistic());
        assert!(store.records().iter().all(|r| r.active));
    }

    #[test]
    fn test_status_change_during_reload_is_still_issued() {
        let mut store = loaded_at(1, 10);
        let ticket = store.refresh();

        let change = store.begin_status_change("1", false);
        assert_eq!(
            change,
            StatusChange {
                key: "1".into(),
                previous: None,
                requested: false,
            }
        );

        let mut reloaded = rows(1..=10);
        reloaded[0].active = false;
        store.resolve(ticket.seq, Ok(ListPage::new(reloaded, 10)));

        // Nothing was patched, so a rejection leaves the reloaded row alone.
        store.rollback_status_change(&change);
        assert!(!store.records()[0].active);
    }

    #[test]
    fn test_rollback_skips_reloaded_record() {
        let mut store = loaded_at(1, 10);
        let change = store.begin_status_change("1", false);
        let ticket = store.refresh();
        store.resolve(ticket.seq, ok(1..=10, 10));
        store.rollback_status_change(&change);
        assert!(store.records()[0].active);
    }

    #[test]
    fn test_page_size_change_restarts() {
        let mut store = loaded_at(3, 45);
        let ticket = store.set_page_size(25);
        assert_eq!(ticket.query.page.index, 1);
        assert_eq!(ticket.query.page.size, 25);
    }
}
