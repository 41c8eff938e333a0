//! Meeting list with a single selected meeting

use ekos_core::{CoreError, Meeting};

#[derive(Debug, Clone, Default)]
pub struct MeetingList {
    meetings: Vec<Meeting>,
    selected: Option<usize>,
}

impl MeetingList {
    /// Meetings are kept newest first
    pub fn new(mut meetings: Vec<Meeting>) -> Self {
        meetings.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            meetings,
            selected: None,
        }
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn select(&mut self, id: &str) -> Result<&Meeting, CoreError> {
        let index = self
            .meetings
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CoreError::MeetingNotFound(id.to_string()))?;
        self.selected = Some(index);
        Ok(&self.meetings[index])
    }

    pub fn selected(&self) -> Option<&Meeting> {
        self.selected.and_then(|i| self.meetings.get(i))
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Total minutes across all meetings
    pub fn total_minutes(&self) -> u32 {
        self.meetings.iter().map(|m| m.duration).sum()
    }
}
