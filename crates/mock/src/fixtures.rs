//! Canned documents, meetings, screenshot matches and connectors

use crate::{millis, ts};
use chrono::{DateTime, Utc};
use ekos_core::{
    ActionItem, Connector, CoreError, Document, DocumentStatus, DocumentType, IngestResponse,
    JiraTicket, Meeting, Priority, Result, ScreenshotMatch, ScreenshotMatchResponse,
};
use rand::Rng;
use serde_json::json;

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    title: &str,
    source: &str,
    doc_type: DocumentType,
    status: DocumentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    size: Option<u64>,
    metadata: serde_json::Value,
) -> Document {
    Document {
        id: id.into(),
        title: title.into(),
        source: source.into(),
        doc_type,
        status,
        created_at,
        updated_at,
        size,
        url: None,
        metadata,
    }
}

pub fn mock_documents() -> Vec<Document> {
    vec![
        document(
            "doc_001",
            "Q3 2023 Financial Report",
            "Google Drive",
            DocumentType::Pdf,
            DocumentStatus::Ready,
            ts(2023, 10, 1, 10, 0),
            ts(2023, 10, 1, 10, 0),
            Some(2_458_000),
            json!({ "author": "Finance Team", "category": "Financial" }),
        ),
        document(
            "doc_002",
            "Product Roadmap 2024",
            "Confluence",
            DocumentType::Url,
            DocumentStatus::Ready,
            ts(2023, 9, 15, 14, 30),
            ts(2023, 10, 20, 9, 15),
            None,
            json!({ "author": "Product Team", "category": "Planning" }),
        ),
        document(
            "doc_003",
            "Design System Documentation",
            "Figma",
            DocumentType::Url,
            DocumentStatus::Ready,
            ts(2023, 8, 10, 11, 0),
            ts(2023, 10, 22, 16, 45),
            None,
            json!({ "author": "Design Team", "category": "Design" }),
        ),
        document(
            "doc_004",
            "Customer Feedback Analysis",
            "Google Sheets",
            DocumentType::Xlsx,
            DocumentStatus::Processing,
            ts(2023, 10, 23, 8, 0),
            ts(2023, 10, 23, 8, 0),
            Some(1_024_000),
            json!({ "author": "Customer Success", "category": "Analytics" }),
        ),
        document(
            "doc_005",
            "Engineering Architecture Diagram",
            "Slack",
            DocumentType::Image,
            DocumentStatus::Ready,
            ts(2023, 10, 20, 13, 20),
            ts(2023, 10, 20, 13, 20),
            Some(512_000),
            json!({ "author": "Engineering", "category": "Technical" }),
        ),
    ]
}

const STANDUP_TRANSCRIPT: &str = "Alex: Good morning team. Let's start with sprint progress.\n\n\
Sarah: We completed 8 out of 10 stories. The remaining two are blocked on API performance issues.\n\n\
Alex: Can you elaborate on the performance issues?\n\n\
Sarah: We're seeing response times over 2 seconds on the mobile API, particularly for the user dashboard endpoint.\n\n\
Mike: I noticed that too during testing. It's affecting the mobile app experience.\n\n\
Sarah: I'll investigate the database queries this afternoon. Might need to add some indexes.\n\n\
Alex: Great. Mike, can you demo the new dashboard?\n\n\
Mike: Sure! *shares screen* Here's the new analytics dashboard with real-time metrics...";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn mock_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: "meeting_001".into(),
            title: "Engineering Standup - Oct 24".into(),
            date: ts(2023, 10, 24, 10, 0),
            duration: 30,
            attendees: names(&["Alex Chen", "Sarah Johnson", "Mike Rodriguez", "Emily Davis"]),
            transcript: Some(STANDUP_TRANSCRIPT.into()),
            summary: Some("Sprint progress review, API performance discussion, dashboard demo".into()),
            action_items: vec![
                ActionItem::new(
                    "investigate",
                    "Investigate API Performance",
                    "Database query optimization for mobile endpoints",
                    Priority::High,
                ),
                ActionItem::new(
                    "review",
                    "Review Dashboard PR",
                    "Code review for new analytics dashboard",
                    Priority::Medium,
                ),
            ],
        },
        Meeting {
            id: "meeting_002".into(),
            title: "Product Roadmap Review - Oct 22".into(),
            date: ts(2023, 10, 22, 14, 0),
            duration: 60,
            attendees: names(&["Jennifer Lee", "Alex Chen", "David Park", "Lisa Wang"]),
            transcript: None,
            summary: Some("Q4 feature prioritization and resource allocation".into()),
            action_items: vec![ActionItem::new(
                "create_doc",
                "Draft Q4 Feature Specs",
                "Detailed specifications for top 3 Q4 features",
                Priority::High,
            )],
        },
        Meeting {
            id: "meeting_003".into(),
            title: "Customer Success Sync - Oct 23".into(),
            date: ts(2023, 10, 23, 11, 0),
            duration: 45,
            attendees: names(&["Rachel Green", "Tom Anderson", "Nina Patel"]),
            transcript: None,
            summary: Some("Customer feedback review and support ticket analysis".into()),
            action_items: vec![ActionItem::new(
                "follow_up",
                "Follow up with Enterprise Customers",
                "Schedule calls with top 5 enterprise accounts",
                Priority::Medium,
            )],
        },
    ]
}

pub fn find_document(id: &str) -> Result<Document> {
    mock_documents()
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| CoreError::DocumentNotFound(id.to_string()))
}

pub fn find_meeting(id: &str) -> Result<Meeting> {
    mock_meetings()
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| CoreError::MeetingNotFound(id.to_string()))
}

pub fn screenshot_matches() -> Vec<ScreenshotMatch> {
    let entry = |doc_id: &str, chunk_id: &str, score: f32, text: &str, title: &str, page: &str| {
        ScreenshotMatch {
            doc_id: doc_id.into(),
            chunk_id: chunk_id.into(),
            similarity_score: score,
            text: text.into(),
            metadata: json!({ "source": "Figma", "title": title, "page": page }),
        }
    };

    vec![
        entry(
            "doc_design_system",
            "chunk_login_001",
            0.95,
            "Login screen mockup with email/password fields, company logo, and create account link",
            "Design System - Auth Flows",
            "Login Flow",
        ),
        entry(
            "doc_ui_components",
            "chunk_form_003",
            0.87,
            "Form component library showing input fields with validation states",
            "UI Component Library",
            "Forms",
        ),
        entry(
            "doc_mobile_app",
            "chunk_auth_002",
            0.82,
            "Mobile authentication screens with biometric login option",
            "Mobile App Designs",
            "Authentication",
        ),
    ]
}

pub fn screenshot_response(now: DateTime<Utc>) -> ScreenshotMatchResponse {
    ScreenshotMatchResponse {
        matches: screenshot_matches(),
        query_id: format!("screenshot_{}", millis(now)),
    }
}

/// Acknowledgement returned by both mock ingestion paths
pub fn ingest_response(message: impl Into<String>, now: DateTime<Utc>) -> IngestResponse {
    IngestResponse {
        doc_id: format!("doc_{}", millis(now)),
        status: "processing".into(),
        message: message.into(),
    }
}

pub fn jira_ticket<R: Rng + ?Sized>(rng: &mut R) -> JiraTicket {
    let number: u32 = rng.gen_range(0..1000);
    JiraTicket {
        ticket_id: format!("EKOS-{}", number),
        url: format!("https://jira.example.com/browse/EKOS-{}", number),
    }
}

pub fn connectors() -> Vec<Connector> {
    vec![
        Connector::new(
            "Google Drive",
            "Sync documents, spreadsheets, and presentations.",
            true,
        ),
        Connector::new("Slack", "Index public channels and threads.", true),
        Connector::new("Jira", "Track tickets, epics, and sprints.", false),
        Connector::new("Confluence", "Knowledge base and documentation.", false),
    ]
}
