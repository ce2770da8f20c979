pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
