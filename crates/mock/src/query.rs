//! Mock answers for `/query`, chosen by keyword bucket

use chrono::{DateTime, SecondsFormat, Utc};
use ekos_core::{ActionItem, Citation, Priority, QueryResponse, TimelineItem};
use serde_json::json;

/// Keyword buckets, checked in declaration order. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Q3,
    Login,
    Meeting,
}

impl Bucket {
    pub const ORDER: [Bucket; 3] = [Bucket::Q3, Bucket::Login, Bucket::Meeting];

    pub fn keyword(&self) -> &'static str {
        match self {
            Bucket::Q3 => "q3",
            Bucket::Login => "login",
            Bucket::Meeting => "meeting",
        }
    }

    /// First bucket whose keyword occurs in `query`, ignoring case
    pub fn matching(query: &str) -> Option<Bucket> {
        let query = query.to_lowercase();
        Self::ORDER
            .into_iter()
            .find(|bucket| query.contains(bucket.keyword()))
    }
}

/// Parts of a response that vary per bucket
struct Canned {
    answer: String,
    summary: String,
    timeline: Vec<TimelineItem>,
    citations: Vec<Citation>,
    actions: Vec<ActionItem>,
}

/// Mock response for `query`, stamped with the current time
pub fn generate_query_response(query: &str) -> QueryResponse {
    generate_query_response_at(query, Utc::now())
}

/// Mock response for `query`, stamped with `now`
pub fn generate_query_response_at(query: &str, now: DateTime<Utc>) -> QueryResponse {
    let canned = match Bucket::matching(query) {
        Some(Bucket::Q3) => q3_revenue(),
        Some(Bucket::Login) => login_flow(),
        Some(Bucket::Meeting) => engineering_standup(),
        None => generic(query),
    };

    QueryResponse {
        answer: canned.answer,
        summary: canned.summary,
        timeline: canned.timeline,
        citations: canned.citations,
        actions: canned.actions,
        query_id: format!("query_{}", crate::millis(now)),
        processed_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn citation(
    doc_id: &str,
    chunk_id: &str,
    text: impl Into<String>,
    score: f32,
    source: &str,
    title: &str,
) -> Citation {
    Citation {
        doc_id: doc_id.into(),
        chunk_id: chunk_id.into(),
        text: text.into(),
        score,
        metadata: json!({ "source": source, "title": title }),
    }
}

fn q3_revenue() -> Canned {
    Canned {
        answer: "Based on the Q3 financial reports and team meetings, revenue increased by 23% compared to Q2, reaching $4.2M. The growth was primarily driven by enterprise sales (+35%) and the new product launch in September. However, operational costs also rose by 18% due to increased headcount and marketing spend.".into(),
        summary: "Q3 showed strong revenue growth of 23% to $4.2M, led by enterprise sales. Costs increased 18% from hiring and marketing.".into(),
        timeline: vec![
            TimelineItem::new(
                Some("2023-09-15T00:00:00Z"),
                "Product Launch",
                "New enterprise features released, driving 35% increase in enterprise sales",
                Some("Product Roadmap Doc"),
            ),
            TimelineItem::new(
                Some("2023-10-01T00:00:00Z"),
                "Q3 Financial Close",
                "Revenue reached $4.2M, 23% growth over Q2",
                Some("Financial Report Q3 2023"),
            ),
        ],
        citations: vec![
            citation(
                "doc_q3_2023",
                "chunk_001",
                "Q3 revenue totaled $4.2M, representing a 23% increase from Q2. Enterprise segment grew 35% following the September product launch...",
                0.92,
                "Google Drive",
                "Q3 Financial Report",
            ),
            citation(
                "doc_team_meeting_092023",
                "chunk_045",
                "Sarah mentioned that operational costs rose 18% this quarter, primarily from the 12 new hires in engineering and increased marketing spend...",
                0.87,
                "Zoom",
                "Leadership Team Meeting - Sept 2023",
            ),
        ],
        actions: vec![ActionItem::new(
            "create_report",
            "Generate Q3 Summary Deck",
            "Create executive summary presentation with key metrics",
            Priority::High,
        )],
    }
}

fn login_flow() -> Canned {
    Canned {
        answer: "The login flow consists of three main screens: the main login page with email/password fields, a forgot password screen for account recovery, and a two-factor authentication screen for enhanced security. The UI uses a clean, minimalist design with the company logo at the top and a 'Create Account' link at the bottom.".into(),
        summary: "Login flow has 3 screens: main login, password recovery, and 2FA. Clean minimalist design.".into(),
        timeline: Vec::new(),
        citations: vec![citation(
            "doc_design_system",
            "chunk_login_001",
            "Login screen mockup shows email and password input fields, with 'Forgot Password' link below. Company logo centered at top, 'Create Account' CTA at bottom...",
            0.95,
            "Figma",
            "Design System - Auth Flows",
        )],
        actions: Vec::new(),
    }
}

fn engineering_standup() -> Canned {
    Canned {
        answer: "The last engineering standup on October 24th covered sprint progress, with the team completing 8 out of 10 planned stories. Alex raised concerns about API performance issues affecting the mobile app. Sarah committed to investigating the database query optimization. Mike demoed the new dashboard feature.".into(),
        summary: "Engineering standup: 8/10 stories done, API performance issues raised, dashboard demo completed.".into(),
        timeline: vec![TimelineItem::new(
            Some("2023-10-24T10:00:00Z"),
            "Engineering Standup",
            "Sprint review, performance discussion, dashboard demo",
            Some("Zoom Meeting"),
        )],
        citations: vec![citation(
            "meeting_102423",
            "transcript_001",
            "Alex: We're seeing response times over 2 seconds on the mobile API. Sarah: I'll look into the database queries this afternoon...",
            0.89,
            "Zoom",
            "Engineering Standup - Oct 24",
        )],
        actions: vec![ActionItem::new(
            "create_jira",
            "Investigate API Performance",
            "Database query optimization for mobile endpoints",
            Priority::High,
        )],
    }
}

fn generic(query: &str) -> Canned {
    Canned {
        answer: format!(
            "Based on your query \"{}\", I found several relevant documents in the knowledge base. The information suggests this topic has been discussed in recent team meetings and documented in various sources.",
            query
        ),
        summary: "Multiple relevant sources found across documents and meetings.".into(),
        timeline: Vec::new(),
        citations: vec![citation(
            "doc_general_001",
            "chunk_001",
            format!(
                "Information related to \"{}\" can be found in multiple documents across the organization...",
                query
            ),
            0.75,
            "Google Drive",
            "General Documentation",
        )],
        actions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q3_any_case() {
        for query in ["q3 revenue", "What happened in Q3?", "SHOW ME Q3", "xq3x"] {
            let response = generate_query_response(query);
            assert!(response.answer.contains("$4.2M"), "query {:?}", query);
            assert_eq!(response.timeline.len(), 2);
            assert_eq!(response.citations.len(), 2);
            assert_eq!(response.actions[0].action, "create_report");
        }
    }

    #[test]
    fn test_first_bucket_wins_over_later_ones() {
        // Contains both "meeting" and "q3"; q3 is checked first.
        assert_eq!(Bucket::matching("meeting notes about Q3"), Some(Bucket::Q3));
        assert_eq!(Bucket::matching("login meeting"), Some(Bucket::Login));
        assert_eq!(Bucket::matching("Last MEETING"), Some(Bucket::Meeting));
    }

    #[test]
    fn test_login_bucket_has_no_timeline_or_actions() {
        let response = generate_query_response("login screens");
        assert!(response.timeline.is_empty());
        assert!(response.actions.is_empty());
        assert_eq!(response.citations[0].source(), Some("Figma"));
    }

    #[test]
    fn test_unmatched_query_echoes_text() {
        let query = "hiring plan for the berlin office";
        assert_eq!(Bucket::matching(query), None);

        let response = generate_query_response(query);
        assert!(response.answer.contains(query));
        assert!(response.citations[0].text.contains(query));
        assert!(response.timeline.is_empty());
    }

    #[test]
    fn test_ids_are_stamped() {
        let now = crate::ts(2023, 10, 24, 10, 0);
        let response = generate_query_response_at("anything", now);
        assert_eq!(response.query_id, format!("query_{}", now.timestamp_millis()));
        assert_eq!(response.processed_at, "2023-10-24T10:00:00.000Z");
    }
}
