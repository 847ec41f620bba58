use chrono::NaiveDate;

use super::event::{Event, EventId, SlotTime, MIN_EVENT_MINUTES};
use crate::error::{DashboardError, DashboardResult};

/// Durations offered as one-click chips in the editor
pub const QUICK_DURATIONS: [u32; 5] = [15, 30, 60, 90, 120];

/// Editable form state behind the event modal
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    /// Set when editing an existing event
    pub editing: Option<EventId>,
    pub day: NaiveDate,
    pub title: String,
    pub start: u32,
    pub end: u32,
    pub address: String,
    pub note: String,
}

impl EventDraft {
    pub fn new_at(day: NaiveDate, slot: SlotTime, default_minutes: u32) -> Self {
        let start = slot.minutes();
        Self {
            editing: None,
            day,
            title: String::new(),
            start,
            end: start + default_minutes.max(MIN_EVENT_MINUTES),
            address: String::new(),
            note: String::new(),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            editing: Some(event.id),
            day: event.date,
            title: event.title.clone(),
            start: event.start_minute(),
            end: event.end_minute(),
            address: event.address.clone(),
            note: event.note.clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start).max(MIN_EVENT_MINUTES)
    }

    /// Moving the start keeps the current duration
    pub fn set_start(&mut self, start: u32) {
        let duration = self.end.saturating_sub(self.start);
        self.start = start;
        self.end = start + duration;
    }

    pub fn set_end(&mut self, end: u32) {
        self.end = end.max(self.start + MIN_EVENT_MINUTES);
    }

    pub fn set_duration(&mut self, minutes: u32) {
        self.end = self.start + minutes;
    }

    /// Build the finished event. New events take `fresh_id`; edits keep their own.
    pub fn finish(&self, fresh_id: EventId) -> DashboardResult<Event> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DashboardError::EmptyTitle);
        }
        Ok(Event {
            id: self.editing.unwrap_or(fresh_id),
            title: title.to_string(),
            date: self.day,
            start_hour: (self.start / 60) % 24,
            start_min: self.start % 60,
            duration: self.duration(),
            address: self.address.clone(),
            note: self.note.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::sample_event;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn start_change_preserves_duration() {
        let mut draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 45);
        draft.set_start(13 * 60);
        assert_eq!(draft.end, 13 * 60 + 45);
        assert_eq!(draft.duration(), 45);
    }

    #[test]
    fn end_cannot_precede_start_plus_floor() {
        let mut draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 30);
        draft.set_end(8 * 60);
        assert_eq!(draft.end, 9 * 60 + 15);
    }

    #[test]
    fn empty_title_is_rejected() {
        let draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 30).with_title("   ");
        assert_eq!(draft.finish(EventId(1)), Err(DashboardError::EmptyTitle));
    }

    #[test]
    fn finish_new_event_uses_fresh_id() {
        let mut draft = EventDraft::new_at(day(), SlotTime::new(9, 30), 30).with_title(" Standup ");
        draft.set_duration(90);
        let event = draft.finish(EventId(42)).unwrap();
        assert_eq!(event.id, EventId(42));
        assert_eq!(event.title, "Standup");
        assert_eq!((event.start_hour, event.start_min, event.duration), (9, 30, 90));
    }

    #[test]
    fn finish_edit_keeps_original_id() {
        let original = sample_event(3, (11, 15), 60);
        let mut draft = EventDraft::from_event(&original);
        draft.title = "Renamed".into();
        let event = draft.finish(EventId(99)).unwrap();
        assert_eq!(event.id, EventId(3));
        assert_eq!(event.start_minute(), 11 * 60 + 15);
        assert_eq!(event.duration, 60);
    }
}
