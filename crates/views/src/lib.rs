//! View state for the EKOS pages
//!
//! Everything here is local, ephemeral UI state: the router that maps paths
//! to pages, graph layout/selection/filtering, timeline month navigation,
//! the document uploader, and the small list filters used by the library,
//! meeting and search pages.

pub mod error;
pub mod graph;
pub mod library;
pub mod meetings;
pub mod router;
pub mod search;
pub mod timeline;
pub mod uploader;

pub use error::{Result, ViewError};
pub use graph::{GraphView, Layout, MAX_ZOOM, MIN_ZOOM};
pub use library::DocumentFilter;
pub use meetings::MeetingList;
pub use router::{is_backend_path, NavItem, Route, BACKEND_PREFIXES, NAV_ITEMS};
pub use search::{ActionPanel, SearchHistory};
pub use timeline::{Month, TimelineView};
pub use uploader::{DocumentUploader, FileSink, UploadEntry, UploadStatus, UploadSummary};
