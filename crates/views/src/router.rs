//! URL path to page mapping and the navigation frame around it

use crate::{Result, ViewError};

/// A page of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    ScreenshotSearch,
    Timeline,
    KnowledgeGraph,
    DocumentViewer(String),
    Meetings,
    Admin,
    Login,
    NotFound(String),
}

impl Route {
    /// Resolve a browser path. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search,
            ["screenshot"] => Route::ScreenshotSearch,
            ["timeline"] => Route::Timeline,
            ["graph"] => Route::KnowledgeGraph,
            ["document", id] if !id.is_empty() => Route::DocumentViewer(id.to_string()),
            ["meetings"] => Route::Meetings,
            ["admin"] => Route::Admin,
            ["login"] => Route::Login,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Like `from_path`, but unknown paths are an error
    pub fn resolve(path: &str) -> Result<Route> {
        match Route::from_path(path) {
            Route::NotFound(path) => Err(ViewError::UnknownRoute(path)),
            route => Ok(route),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Search => "/search".into(),
            Route::ScreenshotSearch => "/screenshot".into(),
            Route::Timeline => "/timeline".into(),
            Route::KnowledgeGraph => "/graph".into(),
            Route::DocumentViewer(id) => format!("/document/{}", id),
            Route::Meetings => "/meetings".into(),
            Route::Admin => "/admin".into(),
            Route::Login => "/login".into(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether the page renders inside the navigation frame
    pub fn in_shell(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::ScreenshotSearch => "Screenshot Search",
            Route::Timeline => "Timeline",
            Route::KnowledgeGraph => "Knowledge Graph",
            Route::DocumentViewer(_) => "Document",
            Route::Meetings => "Meetings",
            Route::Admin => "Admin",
            Route::Login => "Login",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// A sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Search", path: "/search" },
    NavItem { label: "Screenshot Search", path: "/screenshot" },
    NavItem { label: "Timeline", path: "/timeline" },
    NavItem { label: "Knowledge Graph", path: "/graph" },
    NavItem { label: "Meetings", path: "/meetings" },
    NavItem { label: "Admin", path: "/admin" },
];

/// Paths the development proxy forwards to the backend instead of routing
pub const BACKEND_PREFIXES: [&str; 7] = [
    "/query",
    "/ingest",
    "/preprocess",
    "/screenshot-match",
    "/automation",
    "/webhook",
    "/health",
];

/// Whether the development proxy forwards `path` to the backend. Any path
/// starting with a prefix matches, so `/ingestion` and `/healthz` are
/// forwarded too.
pub fn is_backend_path(path: &str) -> bool {
    BACKEND_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
