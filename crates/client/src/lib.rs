//! HTTP client for the EKOS knowledge backend
//!
//! `ApiClient` wraps the backend's small JSON contract (`/query`,
//! `/ingest/*`, `/screenshot-match`, `/automation/create-jira`, list
//! endpoints) and answers from `ekos-mock` when mock mode is on. Search
//! additionally falls back to a mock answer when the backend is
//! unreachable.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, SearchOutcome};
pub use config::ApiConfig;
pub use error::{ClientError, Result};
