//! Timeline viewer state: one month of events, optionally by source

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use ekos_core::{CoreError, TimelineItem};

/// A calendar month (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!("month out of range: {}", month)));
        }
        Ok(Self { year, month })
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(&Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { month: self.month - 1, ..self }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { month: self.month + 1, ..self }
        }
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => write!(f, "{}", first.format("%B %Y")),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

impl std::str::FromStr for Month {
    type Err = CoreError;

    /// Parses `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("expected YYYY-MM, got {:?}", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Month::new(year, month)
    }
}

/// Parse an event date: RFC 3339, or a bare `YYYY-MM-DD` taken as UTC midnight
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Utc.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()
}

/// Month-at-a-time view over a fixed event list
#[derive(Debug, Clone)]
pub struct TimelineView {
    events: Vec<TimelineItem>,
    current: Month,
    source: Option<String>,
}

impl TimelineView {
    /// View starting at the current month
    pub fn new(events: Vec<TimelineItem>) -> Self {
        Self::starting_at(events, Month::current())
    }

    pub fn starting_at(events: Vec<TimelineItem>, month: Month) -> Self {
        Self {
            events,
            current: month,
            source: None,
        }
    }

    pub fn current_month(&self) -> Month {
        self.current
    }

    pub fn prev_month(&mut self) {
        self.current = self.current.prev();
    }

    pub fn next_month(&mut self) {
        self.current = self.current.next();
    }

    pub fn go_to(&mut self, month: Month) {
        self.current = month;
    }

    pub fn go_to_today(&mut self) {
        self.current = Month::current();
    }

    pub fn source_filter(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_source_filter(&mut self, source: Option<String>) {
        self.source = source;
    }

    /// Distinct sources in first-seen order
    pub fn sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = Vec::new();
        for source in self.events.iter().filter_map(|e| e.source.as_deref()) {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        sources
    }

    /// Events dated within the current month (and matching the source
    /// filter, if set), newest first. Undated events are never shown.
    pub fn visible(&self) -> Vec<&TimelineItem> {
        let mut dated: Vec<(DateTime<Utc>, &TimelineItem)> = self
            .events
            .iter()
            .filter_map(|event| {
                let date = parse_event_date(event.date.as_deref()?)?;
                Some((date, event))
            })
            .filter(|(date, _)| self.current.contains(date))
            .filter(|(_, event)| match &self.source {
                Some(source) => event.source.as_deref() == Some(source.as_str()),
                None => true,
            })
            .collect();

        dated.sort_by(|a, b| b.0.cmp(&a.0));
        dated.into_iter().map(|(_, event)| event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn october() -> TimelineView {
        TimelineView::starting_at(ekos_mock::mock_timeline_events(), Month::new(2023, 10).unwrap())
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let jan = Month::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), Month::new(2023, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        assert!(Month::new(2024, 13).is_err());
    }

    #[test]
    fn test_month_parse_and_display() {
        let month: Month = "2023-10".parse().unwrap();
        assert_eq!(month.to_string(), "October 2023");
        assert!("2023/10".parse::<Month>().is_err());
    }

    #[test]
    fn test_parse_event_date_formats() {
        assert!(parse_event_date("2023-10-24T10:00:00Z").is_some());
        assert!(parse_event_date("2023-10-24T12:00:00+02:00").is_some());
        assert_eq!(
            parse_event_date("2023-10-24"),
            Utc.with_ymd_and_hms(2023, 10, 24, 0, 0, 0).single()
        );
        assert!(parse_event_date("last tuesday").is_none());
    }

    #[test]
    fn test_visible_is_month_only_and_descending() {
        let view = october();
        let visible = view.visible();
        let titles: Vec<&str> = visible.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Engineering Standup",
                "Customer Feedback Analysis Upload",
                "Product Roadmap Review",
                "Architecture Diagram Shared",
                "Design System Update",
                "Q3 Financial Report Published",
            ]
        );
    }

    #[test]
    fn test_navigation_changes_visible_set() {
        let mut view = october();
        view.prev_month();
        let september = view.visible();
        assert_eq!(september.len(), 1);
        assert_eq!(september[0].title, "Product Launch");

        view.prev_month();
        view.prev_month();
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_source_filter_never_leaks_other_sources() {
        let mut view = october();
        view.set_source_filter(Some("Zoom Meeting".into()));
        let visible = view.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|e| e.source.as_deref() == Some("Zoom Meeting")));

        view.set_source_filter(Some("Nowhere".into()));
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_undated_events_are_hidden() {
        let events = vec![
            TimelineItem::new(None, "No date", "", Some("Slack")),
            TimelineItem::new(Some("garbage"), "Bad date", "", Some("Slack")),
            TimelineItem::new(Some("2023-10-02"), "Plain date", "", Some("Slack")),
        ];
        let view = TimelineView::starting_at(events, Month::new(2023, 10).unwrap());
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Plain date");
    }

    #[test]
    fn test_sources_first_seen_order() {
        let view = october();
        let sources = view.sources();
        assert_eq!(sources[0], "Zoom Meeting");
        assert_eq!(sources.iter().filter(|s| **s == "Figma").count(), 1);
    }
}
