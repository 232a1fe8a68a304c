//! Backend entry service.

pub mod client;
pub mod types;

pub use client::EntriesClient;
pub use types::{rejection, ApiError, CreatedResponse, EntriesResponse, ErrorBody};
