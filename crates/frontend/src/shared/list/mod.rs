//! Paginated resource list: store, reactive controller and page component.

pub mod controller;
pub mod store;
pub mod view;

pub use controller::ListController;
pub use store::{FetchState, FetchTicket, ListStore, Resolution, StatusChange};
pub use view::ResourceListPage;
