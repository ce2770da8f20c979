//! HTTP access to the admin backend.

mod client;
mod error;

pub use client::{list_url, record_url, HttpResourceClient, ResourceClient};
pub use error::{backend_message, ApiError, ErrorKind};
