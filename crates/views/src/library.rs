//! Document library filter: title search plus status

use ekos_core::{Document, DocumentStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Case-insensitive title substring; empty matches everything
    pub search: String,
    /// `None` means "all"
    pub status: Option<DocumentStatus>,
}

impl DocumentFilter {
    pub fn new(search: impl Into<String>, status: Option<DocumentStatus>) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        let matches_search = document
            .title
            .to_lowercase()
            .contains(&self.search.trim().to_lowercase());
        let matches_status = self.status.map_or(true, |status| document.status == status);
        matches_search && matches_status
    }

    pub fn apply<'a>(&self, documents: &'a [Document]) -> Vec<&'a Document> {
        documents.iter().filter(|d| self.matches(d)).collect()
    }
}
