//! `ApiClient` - thin JSON wrapper over the knowledge backend

use crate::{ApiConfig, ClientError, Result};
use chrono::Utc;
use ekos_core::{
    CoreError, Document, IngestResponse, IngestUrlRequest, JiraTicket, JiraTicketRequest, Meeting,
    QueryRequest, QueryResponse, ScreenshotMatchRequest, ScreenshotMatchResponse, UploadFile,
};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

const DEFAULT_TOP_K: u32 = 5;

/// A search answer and where it came from
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub response: QueryResponse,
    /// True when the answer was generated locally (mock mode or fallback)
    pub from_mock: bool,
}

/// Client for the knowledge backend
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for `config`. The base URL must be http or https.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(config.base_url));
        }
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Client configured from `EKOS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// Client that never touches the network
    pub fn mock() -> Result<Self> {
        Self::new(ApiConfig::default().with_mock_mode(true))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn is_mock_mode(&self) -> bool {
        self.config.mock_mode
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn mock_delay(&self) {
        if !self.config.mock_latency.is_zero() {
            tokio::time::sleep(self.config.mock_latency).await;
        }
    }

    /// Send a request and decode a JSON body, turning non-2xx replies into
    /// `ClientError::Status` with the body text preserved.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Backend returned {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Fill in request defaults: tenant, empty filters, top_k 5, citations on
    fn with_defaults(&self, request: QueryRequest) -> QueryRequest {
        QueryRequest {
            tenant_id: request
                .tenant_id
                .or_else(|| Some(self.config.tenant_id.clone())),
            filters: request.filters.or_else(|| Some(serde_json::Map::new())),
            top_k: request.top_k.or(Some(DEFAULT_TOP_K)),
            include_citations: Some(request.include_citations != Some(false)),
            query: request.query,
        }
    }

    /// `POST /query`
    pub async fn search(&self, request: QueryRequest) -> Result<QueryResponse> {
        Ok(self.search_with_source(request).await?.response)
    }

    /// `POST /query`, reporting whether the answer is a mock.
    ///
    /// In mock mode the backend is skipped. Otherwise connectivity
    /// failures, 5xx and 404 fall back to a mock answer; any other error
    /// (e.g. a 422 validation failure) is returned unchanged.
    #[instrument(skip(self, request), fields(query = %request.query))]
    pub async fn search_with_source(&self, request: QueryRequest) -> Result<SearchOutcome> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(SearchOutcome {
                response: ekos_mock::generate_query_response(&request.query),
                from_mock: true,
            });
        }

        let request = self.with_defaults(request);
        let query = request.query.clone();
        let result: Result<QueryResponse> = self
            .send_json(self.client.post(self.url("/query")).json(&request))
            .await;

        match result {
            Ok(response) => {
                debug!(
                    "Received answer with {} citations",
                    response.citations.len()
                );
                Ok(SearchOutcome {
                    response,
                    from_mock: false,
                })
            }
            Err(e) if e.is_unavailable() => {
                warn!("Backend unavailable ({}), falling back to mock response", e);
                self.mock_delay().await;
                Ok(SearchOutcome {
                    response: ekos_mock::generate_query_response(&query),
                    from_mock: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// `POST /ingest/url`
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn ingest_url(&self, request: IngestUrlRequest) -> Result<IngestResponse> {
        request.validate()?;

        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::ingest_response(
                "Document ingestion started successfully",
                Utc::now(),
            ));
        }

        let response: IngestResponse = self
            .send_json(self.client.post(self.url("/ingest/url")).json(&request))
            .await?;
        info!("Ingestion queued: {}", response.doc_id);
        Ok(response)
    }

    /// `POST /ingest/upload` as multipart (`file`, `source`, `metadata`)
    #[instrument(skip(self, file, metadata), fields(file = %file.name, bytes = file.len()))]
    pub async fn upload_file(
        &self,
        file: &UploadFile,
        source: &str,
        metadata: Option<&serde_json::Value>,
    ) -> Result<IngestResponse> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::ingest_response(
                format!("File \"{}\" uploaded successfully", file.name),
                Utc::now(),
            ));
        }

        let mime = match &file.mime {
            Some(mime) => mime.clone(),
            None => mime_guess::from_path(&file.name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        };

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&mime)?;

        let mut form = Form::new()
            .part("file", part)
            .text("source", source.to_string());
        if let Some(metadata) = metadata {
            form = form.text(
                "metadata",
                serde_json::to_string(metadata).map_err(CoreError::from)?,
            );
        }

        let response: IngestResponse = self
            .send_json(self.client.post(self.url("/ingest/upload")).multipart(form))
            .await?;
        info!("Uploaded {} as {}", file.name, response.doc_id);
        Ok(response)
    }

    /// `POST /screenshot-match`
    #[instrument(skip(self, request))]
    pub async fn match_screenshot(
        &self,
        request: ScreenshotMatchRequest,
    ) -> Result<ScreenshotMatchResponse> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::screenshot_response(Utc::now()));
        }

        self.send_json(self.client.post(self.url("/screenshot-match")).json(&request))
            .await
    }

    /// `GET /documents`
    #[instrument(skip(self))]
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::mock_documents());
        }

        self.send_json(self.client.get(self.url("/documents"))).await
    }

    /// `GET /documents/{id}`
    #[instrument(skip(self))]
    pub async fn get_document(&self, id: &str) -> Result<Document> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return ekos_mock::find_document(id)
                .map_err(|_| ClientError::NotFound(format!("document {}", id)));
        }

        self.send_json(self.client.get(self.url(&format!("/documents/{}", id))))
            .await
    }

    /// `GET /meetings`
    #[instrument(skip(self))]
    pub async fn list_meetings(&self) -> Result<Vec<Meeting>> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::mock_meetings());
        }

        self.send_json(self.client.get(self.url("/meetings"))).await
    }

    /// `GET /meetings/{id}`
    #[instrument(skip(self))]
    pub async fn get_meeting(&self, id: &str) -> Result<Meeting> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return ekos_mock::find_meeting(id)
                .map_err(|_| ClientError::NotFound(format!("meeting {}", id)));
        }

        self.send_json(self.client.get(self.url(&format!("/meetings/{}", id))))
            .await
    }

    /// `POST /automation/create-jira`
    #[instrument(skip(self, request), fields(project = %request.project))]
    pub async fn create_jira_ticket(&self, request: JiraTicketRequest) -> Result<JiraTicket> {
        if self.config.mock_mode {
            self.mock_delay().await;
            return Ok(ekos_mock::jira_ticket(&mut rand::thread_rng()));
        }

        let ticket: JiraTicket = self
            .send_json(
                self.client
                    .post(self.url("/automation/create-jira"))
                    .json(&request),
            )
            .await?;
        info!("Created ticket {}", ticket.ticket_id);
        Ok(ticket)
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<bool> {
        if self.config.mock_mode {
            return Ok(true);
        }

        let response = self.client.get(self.url("/health")).send().await?;
        Ok(response.status().is_success())
    }
}
