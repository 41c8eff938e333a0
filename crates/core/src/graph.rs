//! Knowledge-graph nodes and edges, used only for client-side visualization

use serde::{Deserialize, Serialize};

/// What a node represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Document,
    Person,
    Project,
    Topic,
    Meeting,
    Action,
}

impl NodeType {
    pub const ALL: [NodeType; 6] = [
        NodeType::Document,
        NodeType::Person,
        NodeType::Project,
        NodeType::Topic,
        NodeType::Meeting,
        NodeType::Action,
    ];

    /// Legend colour used when a node carries none of its own
    pub fn default_color(&self) -> &'static str {
        match self {
            NodeType::Document => "#3b82f6",
            NodeType::Person => "#10b981",
            NodeType::Project => "#8b5cf6",
            NodeType::Topic => "#f59e0b",
            NodeType::Meeting => "#ec4899",
            NodeType::Action => "#ef4444",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Document => write!(f, "document"),
            NodeType::Person => write!(f, "person"),
            NodeType::Project => write!(f, "project"),
            NodeType::Topic => write!(f, "topic"),
            NodeType::Meeting => write!(f, "meeting"),
            NodeType::Action => write!(f, "action"),
        }
    }
}

impl std::str::FromStr for NodeType {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::CoreError::Validation(format!("unknown node type: {}", s)))
    }
}

/// Types of relationships between graph nodes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    RelatedTo,
    MentionedIn,
    CreatedBy,
    AttendedBy,
    Discusses,
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeType::RelatedTo => write!(f, "related_to"),
            EdgeType::MentionedIn => write!(f, "mentioned_in"),
            EdgeType::CreatedBy => write!(f, "created_by"),
            EdgeType::AttendedBy => write!(f, "attended_by"),
            EdgeType::Discusses => write!(f, "discusses"),
        }
    }
}

/// A node in the rendered knowledge graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
            x: None,
            y: None,
            color: None,
            size: None,
            metadata: serde_json::Value::Null,
        }
    }

    /// Builder: set render size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder: pin to a position
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.node_type.default_color())
    }
}

/// An edge in the rendered knowledge graph. Direction is kept for display;
/// neighbourhood queries treat it as undirected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        edge_type: EdgeType,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type,
            label: None,
            weight: None,
        }
    }

    /// Builder: set weight
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight.clamp(0.0, 1.0));
        self
    }

    /// Whether `node_id` is either endpoint
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// The endpoint opposite `node_id`, if the edge touches it
    pub fn other_end(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(self.target.as_str())
        } else if self.target == node_id {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}
