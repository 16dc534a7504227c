//! HTTP client module.

mod client;

pub use client::{HttpClient, RawResponse};
