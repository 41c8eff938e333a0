//! Canned data for local development and backend fallback
//!
//! - `generate_query_response`: keyword-bucketed answers for `/query`
//! - fixtures: documents, meetings, screenshot matches, connectors
//! - `graph` / `timeline`: the fixed sets rendered by the graph and timeline viewers

pub mod fixtures;
pub mod graph;
pub mod query;
pub mod timeline;

pub use fixtures::{
    connectors, find_document, find_meeting, ingest_response, jira_ticket, mock_documents,
    mock_meetings, screenshot_matches, screenshot_response,
};
pub use graph::{mock_graph_edges, mock_graph_nodes};
pub use query::{generate_query_response, generate_query_response_at, Bucket};
pub use timeline::mock_timeline_events;

use chrono::{DateTime, TimeZone, Utc};

/// Build a fixture timestamp. Fixture values are all valid, so the epoch
/// fallback is never observed.
pub(crate) fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Millisecond suffix used for generated ids (`query_<ms>`, `doc_<ms>`, ...)
pub(crate) fn millis(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}
