//! Search page state: recent searches and the action panel

use ekos_core::ActionItem;
use std::collections::{BTreeSet, VecDeque};

const HISTORY_LIMIT: usize = 5;

/// Most-recent-first list of past queries, without duplicates
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: VecDeque<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query. Blank queries are ignored; a repeated query moves to
    /// the front.
    pub fn push(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        self.entries.retain(|q| q != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Suggested actions with a per-action completed toggle
#[derive(Debug, Clone, Default)]
pub struct ActionPanel {
    actions: Vec<ActionItem>,
    completed: BTreeSet<usize>,
}

impl ActionPanel {
    pub fn new(actions: Vec<ActionItem>) -> Self {
        Self {
            actions,
            completed: BTreeSet::new(),
        }
    }

    pub fn actions(&self) -> &[ActionItem] {
        &self.actions
    }

    /// Flip the completed flag of action `index`. Out-of-range indexes are
    /// ignored. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.actions.len() {
            return false;
        }
        if !self.completed.remove(&index) {
            self.completed.insert(index);
            return true;
        }
        false
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn remaining(&self) -> usize {
        self.actions.len() - self.completed.len()
    }
}
