//! Meeting records with transcripts and follow-up actions

use crate::ActionItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    /// Length in minutes
    pub duration: u32,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

impl Meeting {
    pub fn has_transcript(&self) -> bool {
        self.transcript
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}
