//! The fixed event list shown by the timeline viewer

use ekos_core::TimelineItem;

pub fn mock_timeline_events() -> Vec<TimelineItem> {
    vec![
        TimelineItem::new(
            Some("2023-10-24T10:00:00Z"),
            "Engineering Standup",
            "Sprint progress review, API performance discussion, dashboard demo completed",
            Some("Zoom Meeting"),
        ),
        TimelineItem::new(
            Some("2023-10-23T08:00:00Z"),
            "Customer Feedback Analysis Upload",
            "New customer feedback spreadsheet uploaded and processed for Q4 analysis",
            Some("Google Sheets"),
        ),
        TimelineItem::new(
            Some("2023-10-22T14:00:00Z"),
            "Product Roadmap Review",
            "Q4 feature prioritization and resource allocation discussed with product team",
            Some("Zoom Meeting"),
        ),
        TimelineItem::new(
            Some("2023-10-20T13:20:00Z"),
            "Architecture Diagram Shared",
            "New engineering architecture diagram uploaded to knowledge base",
            Some("Slack"),
        ),
        TimelineItem::new(
            Some("2023-10-15T09:30:00Z"),
            "Design System Update",
            "Updated design system documentation with new component patterns",
            Some("Figma"),
        ),
        TimelineItem::new(
            Some("2023-10-01T10:00:00Z"),
            "Q3 Financial Report Published",
            "Q3 2023 financial report finalized and published to Google Drive",
            Some("Google Drive"),
        ),
        TimelineItem::new(
            Some("2023-09-15T14:30:00Z"),
            "Product Launch",
            "New enterprise features released, driving 35% increase in enterprise sales",
            Some("Product Roadmap Doc"),
        ),
        TimelineItem::new(
            Some("2023-08-10T11:00:00Z"),
            "Design System Initial Release",
            "Initial design system documentation published with core components",
            Some("Figma"),
        ),
    ]
}
