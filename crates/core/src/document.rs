//! Document types - ingested content tracked by the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The file/content kind of a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Pdf,
    Docx,
    Xlsx,
    Image,
    Video,
    Url,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Pdf => write!(f, "pdf"),
            DocumentType::Docx => write!(f, "docx"),
            DocumentType::Xlsx => write!(f, "xlsx"),
            DocumentType::Image => write!(f, "image"),
            DocumentType::Video => write!(f, "video"),
            DocumentType::Url => write!(f, "url"),
        }
    }
}

/// Processing state of a document on the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Processing,
    Ready,
    Failed,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Processing => write!(f, "processing"),
            DocumentStatus::Ready => write!(f, "ready"),
            DocumentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processing" => Ok(Self::Processing),
            "ready" => Ok(Self::Ready),
            "failed" => Ok(Self::Failed),
            other => Err(crate::CoreError::Validation(format!(
                "unknown document status: {}",
                other
            ))),
        }
    }
}

/// A document known to the knowledge base
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,

    pub title: String,

    /// Where the document came from (e.g. "Google Drive")
    pub source: String,

    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    pub status: DocumentStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Size in bytes, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl Document {
    /// Human readable size, e.g. "2.3 MB"
    pub fn display_size(&self) -> Option<String> {
        let size = self.size?;
        let kb = size as f64 / 1024.0;
        if kb < 1024.0 {
            Some(format!("{:.1} KB", kb))
        } else {
            Some(format!("{:.1} MB", kb / 1024.0))
        }
    }
}
