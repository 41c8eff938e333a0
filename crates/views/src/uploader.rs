//! Document uploader: per-file status with simulated progress
//!
//! Files are uploaded one at a time. While an upload call is pending a
//! ticker bumps that file's progress bar by 10 up to 90; the real call
//! reports no progress of its own. Completion sets 100/success or leaves
//! the bar where it was and marks the file failed. Files never affect each
//! other's status and failures are not retried.

use chrono::Utc;
use ekos_client::{ApiClient, ClientError};
use ekos_core::{IngestResponse, UploadFile};
use serde_json::json;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

const DEFAULT_TICK: Duration = Duration::from_millis(200);
const PROGRESS_STEP: u8 = 10;
const PROGRESS_CAP: u8 = 90;
const UPLOAD_SOURCE: &str = "manual_upload";

/// Where uploaded files go
pub trait FileSink {
    fn upload(
        &self,
        file: &UploadFile,
    ) -> impl Future<Output = Result<IngestResponse, ClientError>> + Send;
}

impl FileSink for ApiClient {
    async fn upload(&self, file: &UploadFile) -> Result<IngestResponse, ClientError> {
        let metadata = json!({
            "uploaded_by": "user",
            "upload_date": Utc::now().to_rfc3339(),
        });
        self.upload_file(file, UPLOAD_SOURCE, Some(&metadata)).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct UploadEntry {
    pub id: Uuid,
    pub name: String,
    pub size: usize,
    /// 0 - 100
    pub progress: u8,
    pub status: UploadStatus,
    pub message: Option<String>,
    /// Backend id once the upload succeeded
    pub doc_id: Option<String>,
    /// Backend error text once the upload failed
    pub error: Option<String>,
}

impl UploadEntry {
    fn new(file: &UploadFile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: file.name.clone(),
            size: file.len(),
            progress: 0,
            status: UploadStatus::Uploading,
            message: None,
            doc_id: None,
            error: None,
        }
    }

    fn advance(&mut self) {
        if self.status == UploadStatus::Uploading && self.progress < PROGRESS_CAP {
            self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CAP);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploading: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct DocumentUploader<S> {
    sink: S,
    entries: Vec<UploadEntry>,
    tick: Duration,
}

impl<S: FileSink> DocumentUploader<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            entries: Vec::new(),
            tick: DEFAULT_TICK,
        }
    }

    /// Builder: progress tick interval
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn entry(&self, id: Uuid) -> Option<&UploadEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Queue `files` and upload them in order. Returns the ids assigned to
    /// them, in the same order.
    pub async fn add_files(&mut self, files: Vec<UploadFile>) -> Vec<Uuid> {
        let ids: Vec<Uuid> = files
            .iter()
            .map(|file| {
                let entry = UploadEntry::new(file);
                let id = entry.id;
                self.entries.push(entry);
                id
            })
            .collect();

        info!("Uploading {} files", files.len());

        for (id, file) in ids.iter().zip(files.iter()) {
            self.upload_one(*id, file).await;
        }

        ids
    }

    async fn upload_one(&mut self, id: Uuid, file: &UploadFile) {
        let Self {
            sink,
            entries,
            tick,
        } = self;

        let upload = sink.upload(file);
        tokio::pin!(upload);

        let mut ticker = tokio::time::interval(*tick);
        // First tick completes immediately
        ticker.tick().await;

        let result = loop {
            tokio::select! {
                result = &mut upload => break result,
                _ = ticker.tick() => {
                    if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                        entry.advance();
                    }
                }
            }
        };

        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return;
        };

        match result {
            Ok(response) => {
                debug!("{} uploaded as {}", entry.name, response.doc_id);
                entry.progress = 100;
                entry.status = UploadStatus::Success;
                entry.message = Some("Upload complete".into());
                entry.doc_id = Some(response.doc_id);
            }
            Err(e) => {
                warn!("Upload of {} failed: {}", entry.name, e);
                entry.status = UploadStatus::Error;
                entry.message = Some("Upload failed".into());
                entry.error = Some(e.to_string());
            }
        }
    }

    /// Drop an entry from the list. Returns whether it existed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn summary(&self) -> UploadSummary {
        self.entries
            .iter()
            .fold(UploadSummary::default(), |mut summary, entry| {
                match entry.status {
                    UploadStatus::Uploading => summary.uploading += 1,
                    UploadStatus::Success => summary.succeeded += 1,
                    UploadStatus::Error => summary.failed += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails any file whose name starts with "bad", after `delay`
    struct FlakySink {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl FlakySink {
        fn new(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }
    }

    impl FileSink for FlakySink {
        async fn upload(&self, file: &UploadFile) -> Result<IngestResponse, ClientError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if file.name.starts_with("bad") {
                return Err(ClientError::Status {
                    status: 500,
                    body: "disk full".into(),
                });
            }
            Ok(IngestResponse {
                doc_id: format!("doc_{}", n),
                status: "processing".into(),
                message: "ok".into(),
            })
        }
    }

    fn file(name: &str) -> UploadFile {
        UploadFile::new(name, name.as_bytes().to_vec())
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_file_is_attempted_once_and_tracked_independently() {
        let mut uploader = DocumentUploader::new(FlakySink::new(Duration::from_millis(500)));
        let ids = uploader
            .add_files(vec![file("a.pdf"), file("bad.docx"), file("c.txt")])
            .await;

        assert_eq!(ids.len(), 3);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);
        assert_eq!(uploader.sink.calls.load(Ordering::SeqCst), 3);

        let a = uploader.entry(ids[0]).unwrap();
        assert_eq!(a.status, UploadStatus::Success);
        assert_eq!(a.progress, 100);
        assert_eq!(a.message.as_deref(), Some("Upload complete"));
        assert_eq!(a.doc_id.as_deref(), Some("doc_0"));

        let bad = uploader.entry(ids[1]).unwrap();
        assert_eq!(bad.status, UploadStatus::Error);
        assert_eq!(bad.message.as_deref(), Some("Upload failed"));
        assert!(bad.progress < 100);
        assert!(bad.error.as_deref().unwrap().contains("disk full"));

        let c = uploader.entry(ids[2]).unwrap();
        assert_eq!(c.status, UploadStatus::Success);

        assert_eq!(
            uploader.summary(),
            UploadSummary {
                uploading: 0,
                succeeded: 2,
                failed: 1
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_progress_is_capped() {
        // 20 ticks of 200ms would reach 200 without the cap
        let mut uploader = DocumentUploader::new(FlakySink::new(Duration::from_secs(4)));
        let ids = uploader.add_files(vec![file("bad-slow.pdf")]).await;

        let entry = uploader.entry(ids[0]).unwrap();
        assert_eq!(entry.status, UploadStatus::Error);
        assert_eq!(entry.progress, PROGRESS_CAP);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_advances_while_pending() {
        let mut uploader = DocumentUploader::new(FlakySink::new(Duration::from_millis(650)))
            .with_tick(Duration::from_millis(200));
        let ids = uploader.add_files(vec![file("bad.png")]).await;

        // Ticks at 200, 400, 600 before the failure at 650
        assert_eq!(uploader.entry(ids[0]).unwrap().progress, 30);
    }

    #[tokio::test]
    async fn test_remove_entry() {
        let mut uploader = DocumentUploader::new(FlakySink::new(Duration::ZERO));
        let ids = uploader.add_files(vec![file("a"), file("b")]).await;

        assert!(uploader.remove(ids[0]));
        assert!(!uploader.remove(ids[0]));
        assert_eq!(uploader.entries().len(), 1);
        assert_eq!(uploader.entries()[0].name, "b");
    }

    #[tokio::test]
    async fn test_api_client_sink_in_mock_mode() {
        let client = ApiClient::mock().unwrap();
        let mut uploader = DocumentUploader::new(client);
        let ids = uploader.add_files(vec![file("q3.pdf")]).await;

        let entry = uploader.entry(ids[0]).unwrap();
        assert_eq!(entry.status, UploadStatus::Success);
        assert!(entry.doc_id.as_deref().unwrap().starts_with("doc_"));
    }

    #[test]
    fn test_empty_summary() {
        let uploader = DocumentUploader::new(FlakySink::new(Duration::ZERO));
        assert_eq!(uploader.summary(), UploadSummary::default());
    }
}
