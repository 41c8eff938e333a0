//! Ingestion, screenshot matching and automation payloads

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Body of `POST /ingest/url`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestUrlRequest {
    pub url: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl IngestUrlRequest {
    pub fn new(url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
            tenant_id: None,
            metadata: None,
        }
    }

    /// Reject obviously unusable URLs before hitting the network
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(CoreError::Validation("url cannot be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Validation(format!(
                "url must start with http:// or https://: {}",
                url
            )));
        }
        Ok(())
    }
}

/// Reply to both ingestion endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestResponse {
    pub doc_id: String,
    pub status: String,
    pub message: String,
}

/// A local file queued for `POST /ingest/upload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            mime: None,
        }
    }

    /// Builder: set the MIME type
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk, using its file name as the upload name
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CoreError::Validation(format!("not a file path: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Body of `POST /screenshot-match`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScreenshotMatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenshotMatch {
    pub doc_id: String,
    pub chunk_id: String,
    pub similarity_score: f32,
    pub text: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenshotMatchResponse {
    #[serde(default)]
    pub matches: Vec<ScreenshotMatch>,
    pub query_id: String,
}

/// Body of `POST /automation/create-jira`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JiraTicketRequest {
    pub project: String,
    pub summary: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JiraTicket {
    pub ticket_id: String,
    pub url: String,
}
