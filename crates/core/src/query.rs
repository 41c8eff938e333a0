//! Query types - questions asked of the knowledge base and their answers

use serde::{Deserialize, Serialize};

/// Urgency of a suggested action
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A follow-up the backend suggests (create a ticket, draft a report, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionItem {
    /// Action kind, e.g. `create_jira`, `create_report`, `send_email`
    pub action: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl ActionItem {
    pub fn new(
        action: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            action: action.into(),
            title: title.into(),
            description: description.into(),
            priority,
            metadata: serde_json::Value::Null,
        }
    }
}

/// A snippet of source text supporting an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub doc_id: String,
    pub chunk_id: String,
    pub text: String,
    /// Relevance score (0.0 - 1.0)
    pub score: f32,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl Citation {
    /// Title from metadata, falling back to the document id
    pub fn title(&self) -> &str {
        self.metadata
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.doc_id)
    }

    pub fn source(&self) -> Option<&str> {
        self.metadata.get("source").and_then(|v| v.as_str())
    }
}

/// An event placed on a timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineItem {
    /// RFC 3339 timestamp or plain `YYYY-MM-DD`; may be absent
    #[serde(default)]
    pub date: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl TimelineItem {
    pub fn new(
        date: Option<&str>,
        title: impl Into<String>,
        description: impl Into<String>,
        source: Option<&str>,
    ) -> Self {
        Self {
            date: date.map(str::to_string),
            title: title.into(),
            description: description.into(),
            source: source.map(str::to_string),
        }
    }
}

/// Body of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_citations: Option<bool>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Builder: set tenant
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Builder: set result count
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Builder: add a filter entry
    pub fn with_filter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.filters
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }

    /// Builder: request or suppress citations
    pub fn with_citations(mut self, include: bool) -> Self {
        self.include_citations = Some(include);
        self
    }
}

/// Answer returned by `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub answer: String,
    pub summary: String,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub actions: Vec<ActionItem>,
    pub query_id: String,
    pub processed_at: String,
}

impl QueryResponse {
    /// Highest-scoring citation, if any
    pub fn top_citation(&self) -> Option<&Citation> {
        self.citations
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}
