//! HTTP behaviour of `ApiClient` against a local wiremock backend

use ekos_client::{ApiClient, ApiConfig, ClientError};
use ekos_core::{IngestUrlRequest, JiraTicketRequest, QueryRequest, UploadFile};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()).with_timeout(Duration::from_secs(5))).unwrap()
}

fn backend_answer() -> serde_json::Value {
    json!({
        "answer": "Live answer from the backend",
        "summary": "live",
        "timeline": [],
        "citations": [{
            "doc_id": "doc_live",
            "chunk_id": "c1",
            "text": "live text",
            "score": 0.5
        }],
        "actions": [],
        "query_id": "query_live",
        "processed_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_search_sends_defaults_and_returns_live_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({
            "query": "hiring plan",
            "tenant_id": "default",
            "filters": {},
            "top_k": 5,
            "include_citations": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_answer()))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .search_with_source(QueryRequest::new("hiring plan"))
        .await
        .unwrap();

    assert!(!outcome.from_mock);
    assert_eq!(outcome.response.query_id, "query_live");
    assert_eq!(outcome.response.citations.len(), 1);
}

#[tokio::test]
async fn test_search_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .search_with_source(QueryRequest::new("Q3 revenue"))
        .await
        .unwrap();

    assert!(outcome.from_mock);
    assert!(outcome.response.answer.contains("$4.2M"));
}

#[tokio::test]
async fn test_search_falls_back_on_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .search(QueryRequest::new("holiday schedule"))
        .await
        .unwrap();

    assert!(response.answer.contains("holiday schedule"));
}

#[tokio::test]
async fn test_search_falls_back_when_backend_is_down() {
    // Nothing listens on port 9 (discard) on test machines.
    let client = ApiClient::new(
        ApiConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let outcome = client
        .search_with_source(QueryRequest::new("login flow"))
        .await
        .unwrap();

    assert!(outcome.from_mock);
    assert!(outcome.response.answer.contains("three main screens"));
}

#[tokio::test]
async fn test_search_propagates_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "detail": "query too short" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(QueryRequest::new("q"))
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("query too short"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_search_calls_do_not_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).list_documents().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_ingest_url_posts_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest/url"))
        .and(body_json(json!({ "url": "https://example.com/a", "source": "web" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doc_id": "doc_42",
            "status": "processing",
            "message": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .ingest_url(IngestUrlRequest::new("https://example.com/a", "web"))
        .await
        .unwrap();
    assert_eq!(response.doc_id, "doc_42");
}

#[tokio::test]
async fn test_upload_sends_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest/upload"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\"; filename=\"report.pdf\""))
        .and(body_string_contains("manual_upload"))
        .and(body_string_contains("uploaded_by"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doc_id": "doc_up",
            "status": "processing",
            "message": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = UploadFile::new("report.pdf", b"%PDF-1.4".to_vec());
    let metadata = json!({ "uploaded_by": "user" });
    let response = client_for(&server)
        .upload_file(&file, "manual_upload", Some(&metadata))
        .await
        .unwrap();
    assert_eq!(response.doc_id, "doc_up");
}

#[tokio::test]
async fn test_create_jira_ticket_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/automation/create-jira"))
        .and(body_json(json!({
            "project": "EKOS",
            "summary": "Investigate API Performance",
            "description": "Database query optimization"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket_id": "EKOS-7",
            "url": "https://jira.example.com/browse/EKOS-7"
        })))
        .mount(&server)
        .await;

    let ticket = client_for(&server)
        .create_jira_ticket(JiraTicketRequest {
            project: "EKOS".into(),
            summary: "Investigate API Performance".into(),
            description: "Database query optimization".into(),
            issue_type: None,
        })
        .await
        .unwrap();
    assert_eq!(ticket.ticket_id, "EKOS-7");
}

#[tokio::test]
async fn test_health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert!(client_for(&server).health().await.unwrap());
}
