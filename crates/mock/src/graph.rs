//! The fixed knowledge graph shown by the graph viewer

use ekos_core::{EdgeType, GraphEdge, GraphNode, NodeType};

pub fn mock_graph_nodes() -> Vec<GraphNode> {
    let node = |id: &str, label: &str, node_type: NodeType, size: u32| {
        GraphNode::new(id, label, node_type).with_size(size)
    };

    vec![
        node("doc_001", "Q3 Financial Report", NodeType::Document, 40),
        node("doc_002", "Product Roadmap 2024", NodeType::Document, 35),
        node("doc_003", "Design System", NodeType::Document, 30),
        node("person_001", "Alex Chen", NodeType::Person, 35),
        node("person_002", "Sarah Johnson", NodeType::Person, 35),
        node("person_003", "Mike Rodriguez", NodeType::Person, 30),
        node("person_004", "Jennifer Lee", NodeType::Person, 30),
        node("project_001", "Q4 Features", NodeType::Project, 45),
        node("project_002", "API Optimization", NodeType::Project, 40),
        node("project_003", "Dashboard Redesign", NodeType::Project, 35),
        node("topic_001", "Revenue Growth", NodeType::Topic, 35),
        node("topic_002", "Product Launch", NodeType::Topic, 30),
        node("topic_003", "Performance", NodeType::Topic, 30),
        node("meeting_001", "Engineering Standup", NodeType::Meeting, 35),
        node("meeting_002", "Product Review", NodeType::Meeting, 30),
        node("action_001", "Investigate API Performance", NodeType::Action, 25),
        node("action_002", "Review Dashboard PR", NodeType::Action, 25),
    ]
}

pub fn mock_graph_edges() -> Vec<GraphEdge> {
    use EdgeType::*;

    let edges: [(&str, &str, &str, EdgeType, f32); 22] = [
        ("e1", "doc_001", "topic_001", RelatedTo, 0.9),
        ("e2", "doc_001", "project_001", RelatedTo, 0.8),
        ("e3", "doc_002", "project_001", RelatedTo, 0.95),
        ("e4", "doc_002", "topic_002", RelatedTo, 0.9),
        ("e5", "doc_003", "project_003", RelatedTo, 0.85),
        ("e6", "person_001", "doc_001", CreatedBy, 1.0),
        ("e7", "person_002", "doc_002", CreatedBy, 1.0),
        ("e8", "person_003", "doc_003", CreatedBy, 1.0),
        ("e9", "person_001", "meeting_001", AttendedBy, 1.0),
        ("e10", "person_002", "meeting_001", AttendedBy, 1.0),
        ("e11", "person_003", "meeting_001", AttendedBy, 1.0),
        ("e12", "person_004", "meeting_002", AttendedBy, 1.0),
        ("e13", "meeting_001", "project_002", Discusses, 0.9),
        ("e14", "meeting_001", "project_003", Discusses, 0.8),
        ("e15", "meeting_001", "topic_003", Discusses, 0.85),
        ("e16", "meeting_002", "project_001", Discusses, 0.95),
        ("e17", "action_001", "project_002", RelatedTo, 1.0),
        ("e18", "action_001", "meeting_001", MentionedIn, 0.9),
        ("e19", "action_002", "project_003", RelatedTo, 1.0),
        ("e20", "action_002", "meeting_001", MentionedIn, 0.85),
        ("e21", "topic_001", "topic_002", RelatedTo, 0.7),
        ("e22", "topic_003", "project_002", RelatedTo, 0.9),
    ];

    edges
        .into_iter()
        .map(|(id, source, target, edge_type, weight)| {
            GraphEdge::new(id, source, target, edge_type).with_weight(weight)
        })
        .collect()
}
