//! Core domain types for the EKOS client
//!
//! This crate defines the value objects exchanged with the knowledge
//! backend: documents, meetings, query answers with their citations and
//! timelines, ingestion and screenshot payloads, and the knowledge-graph
//! nodes and edges rendered by the graph viewer.

pub mod connector;
pub mod document;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod meeting;
pub mod query;

pub use connector::Connector;
pub use document::{Document, DocumentStatus, DocumentType};
pub use error::{CoreError, Result};
pub use graph::{EdgeType, GraphEdge, GraphNode, NodeType};
pub use ingest::{
    IngestResponse, IngestUrlRequest, JiraTicket, JiraTicketRequest, ScreenshotMatch,
    ScreenshotMatchRequest, ScreenshotMatchResponse, UploadFile,
};
pub use meeting::Meeting;
pub use query::{ActionItem, Citation, Priority, QueryRequest, QueryResponse, TimelineItem};
