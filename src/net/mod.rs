//! Backend wire contract: chat request/response types and the HTTP client.

pub mod api;
pub mod types;
