//! Connectors - named external data sources shown on the admin screen

use serde::{Deserialize, Serialize};

/// A data source integration (Drive, Slack, ...). Display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connector {
    pub name: String,
    pub description: String,
    pub connected: bool,
}

impl Connector {
    pub fn new(name: impl Into<String>, description: impl Into<String>, connected: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            connected,
        }
    }

    /// Badge text for the admin card
    pub fn status_label(&self) -> &'static str {
        if self.connected {
            "Active"
        } else {
            "Disconnected"
        }
    }
}
