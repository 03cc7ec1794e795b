//! NHL stats API: HTTP client and response types.

pub mod http;
pub mod types;

pub use http::{NhlClient, DEFAULT_BASE_URL};
