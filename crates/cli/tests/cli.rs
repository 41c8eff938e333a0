//! End-to-end tests for the `ekos` binary, run in mock mode

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// `ekos --mock` with no EKOS_* settings leaking in from the environment
fn ekos() -> Command {
    let mut cmd = Command::cargo_bin("ekos").expect("ekos binary");
    for key in [
        "EKOS_API_URL",
        "EKOS_MOCK_MODE",
        "EKOS_MOCK_LATENCY_MS",
        "EKOS_TIMEOUT_SECS",
        "EKOS_TENANT_ID",
    ] {
        cmd.env_remove(key);
    }
    cmd.arg("--mock");
    cmd
}

#[test]
fn test_search_q3_answer() {
    ekos()
        .args(["search", "What", "was", "Q3", "revenue?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.2M"))
        .stdout(predicate::str::contains("Q3 Financial Report"))
        .stdout(predicate::str::contains("Generate Q3 Summary Deck"));
}

#[test]
fn test_search_json_flags_mock_answer() {
    let output = ekos()
        .args(["--json", "search", "login screens"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["from_mock"], true);
    assert!(value["response"]["answer"]
        .as_str()
        .unwrap()
        .contains("three main screens"));
    assert!(value["response"]["query_id"]
        .as_str()
        .unwrap()
        .starts_with("query_"));
}

#[test]
fn test_search_rejects_bad_filter() {
    ekos()
        .args(["search", "anything", "--filter", "noequals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key=value"));
}

#[test]
fn test_timeline_month_is_descending() {
    let output = ekos()
        .args(["timeline", "--month", "2023-10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("October 2023"));
    let standup = stdout.find("Engineering Standup").unwrap();
    let q3 = stdout.find("Q3 Financial Report Published").unwrap();
    assert!(standup < q3);
    assert!(!stdout.contains("Product Launch"));
}

#[test]
fn test_timeline_prev_and_source_filter() {
    ekos()
        .args(["timeline", "--month", "2023-10", "--prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("September 2023"))
        .stdout(predicate::str::contains("Product Launch"));

    ekos()
        .args(["timeline", "--month", "2023-10", "--source", "Figma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design System Update"))
        .stdout(predicate::str::contains("Engineering Standup").not());
}

#[test]
fn test_timeline_rejects_bad_month() {
    ekos()
        .args(["timeline", "--month", "2023-13"])
        .assert()
        .failure();
}

#[test]
fn test_graph_type_filter_keeps_only_touching_edges() {
    let output = ekos()
        .args(["--json", "graph", "--type", "meeting", "--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let type_of = |id: &str| {
        value["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["id"] == id)
            .map(|n| n["type"].as_str().unwrap().to_string())
    };

    let edges = value["edges"].as_array().unwrap();
    assert!(!edges.is_empty());
    for edge in edges {
        let source = type_of(edge["source"].as_str().unwrap()).unwrap();
        let target = type_of(edge["target"].as_str().unwrap()).unwrap();
        assert!(source == "meeting" || target == "meeting");
    }
    assert!(type_of("doc_003").is_none());
}

#[test]
fn test_graph_select_lists_neighbors() {
    ekos()
        .args(["graph", "--select", "meeting_002", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected to meeting_002 (2)"))
        .stdout(predicate::str::contains("Jennifer Lee"))
        .stdout(predicate::str::contains("Q4 Features"));
}

#[test]
fn test_graph_zoom_is_clamped() {
    ekos()
        .args(["graph", "--zoom-in", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zoom: 2.0x"));
}

#[test]
fn test_graph_unknown_node_fails() {
    ekos()
        .args(["graph", "--select", "nope"])
        .assert()
        .failure();
}

#[test]
fn test_documents_status_filter() {
    ekos()
        .args(["documents", "--status", "processing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Feedback Analysis"))
        .stdout(predicate::str::contains("Q3 2023 Financial Report").not());
}

#[test]
fn test_documents_search_is_case_insensitive() {
    ekos()
        .args(["documents", "--search", "ROADMAP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Roadmap 2024"))
        .stdout(predicate::str::contains("Documents (1)"));
}

#[test]
fn test_document_not_found() {
    ekos().args(["document", "doc_999"]).assert().failure();
}

#[test]
fn test_meetings_newest_first() {
    let output = ekos().arg("meetings").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let standup = stdout.find("Engineering Standup - Oct 24").unwrap();
    let customer = stdout.find("Customer Success Sync - Oct 23").unwrap();
    let roadmap = stdout.find("Product Roadmap Review - Oct 22").unwrap();
    assert!(standup < customer && customer < roadmap);
}

#[test]
fn test_meeting_detail_shows_transcript() {
    ekos()
        .args(["meeting", "meeting_001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript:"));
}

#[test]
fn test_upload_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "quarterly notes").unwrap();

    ekos()
        .arg("upload")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("Upload complete"))
        .stdout(predicate::str::contains("1 uploaded, 0 failed"));
}

#[test]
fn test_upload_missing_file_fails() {
    ekos()
        .args(["upload", "/definitely/not/here.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_ingest_url_validation() {
    ekos()
        .args(["ingest-url", "https://example.com/wiki"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document ingestion started successfully"));

    ekos()
        .args(["ingest-url", "ftp://example.com/file"])
        .assert()
        .failure();
}

#[test]
fn test_screenshot_with_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    ekos()
        .arg("screenshot")
        .arg("--image")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches (3)"));
}

#[test]
fn test_jira_ticket() {
    ekos()
        .args(["jira", "--summary", "Investigate API Performance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created EKOS-"));
}

#[test]
fn test_connectors() {
    ekos()
        .arg("connectors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Drive [Active]"))
        .stdout(predicate::str::contains("[Disconnected]"));
}

#[test]
fn test_open_routes() {
    ekos()
        .args(["open", "/graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Knowledge Graph]"));

    ekos()
        .args(["open", "/document/doc_002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Roadmap 2024"));

    ekos()
        .args(["open", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EKOS |").not());
}

#[test]
fn test_open_search_json_is_clean() {
    let output = ekos().args(["--json", "open", "/search"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["usage"], "ekos search <query>");
}

#[test]
fn test_rejects_api_url_without_scheme() {
    ekos()
        .args(["--api-url", "localhost:8000", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_open_unknown_path_fails() {
    ekos().args(["open", "/nope"]).assert().failure();
}

#[test]
fn test_health_in_mock_mode() {
    ekos()
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mock mode"));
}

#[test]
fn test_interactive_session() {
    ekos()
        .arg("interactive")
        .write_stdin("search Q3 revenue\ndone 1\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.2M"))
        .stdout(predicate::str::contains("(0 open)"))
        .stdout(predicate::str::contains("• Q3 revenue"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_health_fails_when_backend_down() {
    let mut cmd = Command::cargo_bin("ekos").unwrap();
    cmd.env_remove("EKOS_MOCK_MODE")
        .env("EKOS_TIMEOUT_SECS", "2")
        .args(["--api-url", "http://127.0.0.1:9", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backend unavailable"));
}
