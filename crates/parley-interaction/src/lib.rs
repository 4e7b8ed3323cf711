//! Parley interaction layer.
//!
//! Infrastructure implementations of the core's external seams:
//! environment-based configuration and the reqwest-backed completion
//! API client.

pub mod completion_api_client;
pub mod config;

pub use completion_api_client::CompletionApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
