//! Terminal rendering for each page

use ekos_core::{
    Connector, Document, IngestResponse, JiraTicket, Meeting, QueryResponse,
    ScreenshotMatchResponse, TimelineItem,
};
use ekos_views::timeline::parse_event_date;
use ekos_views::{ActionPanel, GraphView, Month, Route, UploadEntry, UploadStatus, NAV_ITEMS};

fn preview(text: &str, limit: usize) -> String {
    let head: String = text.chars().take(limit).collect();
    if text.chars().count() > limit {
        format!("{}...", head)
    } else {
        head
    }
}

/// Sidebar header printed above every page inside the shell
pub fn shell_header(route: &Route) {
    let nav: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if Route::from_path(item.path) == *route {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    println!("EKOS | {}", nav.join(" · "));
    println!("{}", "─".repeat(60));
}

pub fn query_response(response: &QueryResponse, from_mock: bool) {
    if from_mock {
        println!("(offline: showing a mock answer)\n");
    }
    println!("{}\n", response.answer);
    println!("Summary: {}", response.summary);

    if !response.citations.is_empty() {
        println!("\nCitations ({}):", response.citations.len());
        for (i, c) in response.citations.iter().enumerate() {
            println!(
                "  {}. {} [{}] {:.0}%",
                i + 1,
                c.title(),
                c.source().unwrap_or("unknown"),
                c.score * 100.0
            );
            println!("     {}", preview(&c.text, 120));
        }
    }

    if !response.timeline.is_empty() {
        println!("\nTimeline:");
        for item in &response.timeline {
            timeline_item(item);
        }
    }

    if !response.actions.is_empty() {
        action_panel(&ActionPanel::new(response.actions.clone()));
    }
}

pub fn action_panel(panel: &ActionPanel) {
    println!("\nSuggested actions ({} open):", panel.remaining());
    for (i, action) in panel.actions().iter().enumerate() {
        let mark = if panel.is_completed(i) { "x" } else { " " };
        println!(
            "  [{}] {} ({}, {}) - {}",
            mark, action.title, action.action, action.priority, action.description
        );
    }
}

pub fn timeline_item(item: &TimelineItem) {
    let date = item
        .date
        .as_deref()
        .and_then(parse_event_date)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "undated".into());
    println!(
        "  • {}  {}{}",
        date,
        item.title,
        item.source
            .as_deref()
            .map(|s| format!(" ({})", s))
            .unwrap_or_default()
    );
    println!("    {}", item.description);
}

pub fn timeline(month: Month, sources: &[&str], events: &[&TimelineItem]) {
    println!("{}", month);
    if !sources.is_empty() {
        println!("Sources: {}", sources.join(", "));
    }
    println!();
    if events.is_empty() {
        println!("No events this month.");
        return;
    }
    for event in events {
        timeline_item(event);
    }
}

pub fn documents(documents: &[&Document]) {
    if documents.is_empty() {
        println!("No documents found.");
        return;
    }
    println!("Documents ({}):\n", documents.len());
    for doc in documents {
        println!("• {} [{}]", doc.title, doc.id);
        println!(
            "  {} · {} · {}{}",
            doc.doc_type,
            doc.source,
            doc.status,
            doc.display_size()
                .map(|s| format!(" · {}", s))
                .unwrap_or_default()
        );
    }
}

pub fn document(doc: &Document) {
    println!("Document: {} ({})", doc.title, doc.id);
    println!("Type: {}", doc.doc_type);
    println!("Source: {}", doc.source);
    println!("Status: {}", doc.status);
    println!("Created: {}", doc.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated: {}", doc.updated_at.format("%Y-%m-%d %H:%M"));
    if let Some(size) = doc.display_size() {
        println!("Size: {}", size);
    }
    if let Some(url) = &doc.url {
        println!("URL: {}", url);
    }
}

pub fn meetings(meetings: &[Meeting]) {
    if meetings.is_empty() {
        println!("No meetings found.");
        return;
    }
    println!("Meetings ({}):\n", meetings.len());
    for m in meetings {
        println!("• {} [{}]", m.title, m.id);
        println!(
            "  {} · {} min · {} attendees",
            m.date.format("%b %d, %Y %H:%M"),
            m.duration,
            m.attendees.len()
        );
        if let Some(summary) = &m.summary {
            println!("  {}", preview(summary, 80));
        }
    }
}

pub fn meeting(m: &Meeting) {
    println!("Meeting: {} ({})", m.title, m.id);
    println!(
        "When: {} ({} min)",
        m.date.format("%Y-%m-%d %H:%M"),
        m.duration
    );
    println!("Attendees: {}", m.attendees.join(", "));
    if let Some(summary) = &m.summary {
        println!("\n{}", summary);
    }
    if !m.action_items.is_empty() {
        action_panel(&ActionPanel::new(m.action_items.clone()));
    }
    if let Some(transcript) = m.transcript.as_deref().filter(|t| !t.trim().is_empty()) {
        println!("\nTranscript:\n{}", transcript);
    }
}

pub fn screenshot_matches(response: &ScreenshotMatchResponse) {
    if response.matches.is_empty() {
        println!("No matching documents.");
        return;
    }
    println!("Matches ({}):\n", response.matches.len());
    for (i, m) in response.matches.iter().enumerate() {
        let title = m
            .metadata
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(&m.doc_id);
        println!("{}. {} ({:.0}%)", i + 1, title, m.similarity_score * 100.0);
        println!("   {}", m.text);
    }
}

pub fn ingest(response: &IngestResponse) {
    println!("✓ {} [{}] {}", response.message, response.doc_id, response.status);
}

pub fn jira(ticket: &JiraTicket) {
    println!("✓ Created {}: {}", ticket.ticket_id, ticket.url);
}

pub fn uploads(entries: &[UploadEntry]) {
    for entry in entries {
        let mark = match entry.status {
            UploadStatus::Uploading => "…",
            UploadStatus::Success => "✓",
            UploadStatus::Error => "✗",
        };
        println!(
            "{} {} ({} bytes) {:>3}% {}",
            mark,
            entry.name,
            entry.size,
            entry.progress,
            entry.message.as_deref().unwrap_or("")
        );
        if let Some(error) = &entry.error {
            println!("    {}", error);
        }
    }
}

pub fn connectors(connectors: &[Connector]) {
    println!("Integrations:\n");
    for c in connectors {
        println!("• {} [{}]", c.name, c.status_label());
        println!("  {}", c.description);
    }
}

pub fn graph(view: &GraphView) {
    let (nodes, edges) = view.visible();
    let filter = view
        .type_filter()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "all".into());

    println!(
        "Knowledge graph: {} nodes, {} edges (filter: {}, zoom: {:.1}x)",
        nodes.len(),
        edges.len(),
        filter,
        view.zoom()
    );

    let legend: Vec<String> = view
        .type_counts()
        .into_iter()
        .map(|(t, n)| format!("{} {}", t, n))
        .collect();
    println!("Legend: {}\n", legend.join(", "));

    for node in &nodes {
        let mark = if view.selected() == Some(node.id.as_str()) {
            "●"
        } else if view.is_highlighted(&node.id) {
            "◉"
        } else {
            "○"
        };
        let (x, y) = view.screen_position(&node.id).unwrap_or((0.0, 0.0));
        println!(
            "{} {} [{}] {} @ ({:.0}, {:.0})",
            mark, node.label, node.id, node.node_type, x, y
        );
    }

    if let Some(selected) = view.selected() {
        let neighbors = view.neighbors(selected);
        println!("\nConnected to {} ({}):", selected, neighbors.len());
        for id in neighbors {
            let label = view.node(id).map(|n| n.label.as_str()).unwrap_or(id);
            println!("  → {}", label);
        }
    }

    println!("\nEdges:");
    for edge in &edges {
        println!(
            "  {} -{}-> {}{}",
            edge.source,
            edge.edge_type,
            edge.target,
            edge.weight
                .map(|w| format!(" ({:.2})", w))
                .unwrap_or_default()
        );
    }
}
