use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

/// Shortest duration an event may have, in minutes
pub const MIN_EVENT_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A time of day on the quarter-hour grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn minutes(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub start_min: u32,
    /// Minutes, never below MIN_EVENT_MINUTES
    pub duration: u32,
    pub address: String,
    pub note: String,
}

impl Event {
    pub fn start_minute(&self) -> u32 {
        self.start_hour * 60 + self.start_min
    }

    pub fn end_minute(&self) -> u32 {
        self.start_minute() + self.duration
    }

    /// Half-open interval intersection; touching endpoints do not overlap
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_minute() < other.end_minute() && other.start_minute() < self.end_minute()
    }
}

/// Owner of every event in the session. Views read day-filtered slices; all writes go through here.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh id for an event the editor is about to produce
    pub fn allocate_id(&mut self) -> EventId {
        self.next_id += 1;
        EventId(self.next_id)
    }

    #[cfg(test)]
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, mut event: Event) {
        event.duration = event.duration.max(MIN_EVENT_MINUTES);
        self.next_id = self.next_id.max(event.id.0);
        debug!(id = %event.id, date = %event.date, start = event.start_minute(), "event added");
        self.events.push(event);
    }

    pub fn update(&mut self, mut event: Event) -> DashboardResult<()> {
        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or(DashboardError::EventNotFound(event.id))?;
        event.duration = event.duration.max(MIN_EVENT_MINUTES);
        debug!(id = %event.id, date = %event.date, start = event.start_minute(), duration = event.duration, "event updated");
        *slot = event;
        Ok(())
    }

    pub fn resize(&mut self, id: EventId, duration: u32) -> DashboardResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DashboardError::EventNotFound(id))?;
        event.duration = duration.max(MIN_EVENT_MINUTES);
        debug!(%id, duration = event.duration, "event resized");
        Ok(())
    }

    /// Move an event to another day, optionally to a new start time
    pub fn move_to(&mut self, id: EventId, date: NaiveDate, time: Option<SlotTime>) -> DashboardResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DashboardError::EventNotFound(id))?;
        event.date = date;
        if let Some(time) = time {
            event.start_hour = time.hour.min(23);
            event.start_min = time.minute.min(59);
        }
        debug!(%id, %date, ?time, "event moved");
        Ok(())
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.events.iter().filter(|e| e.date == date).count()
    }

    /// Events on or after `from`, ordered by day then start time
    pub fn upcoming(&self, from: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.date >= from).collect();
        events.sort_by_key(|e| (e.date, e.start_minute()));
        events
    }
}

#[cfg(test)]
pub(crate) fn sample_event(id: u64, start: (u32, u32), duration: u32) -> Event {
    Event {
        id: EventId(id),
        title: format!("event {}", id),
        date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        start_hour: start.0,
        start_min: start.1,
        duration,
        address: String::new(),
        note: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_events_do_not_overlap() {
        let a = sample_event(1, (9, 0), 60);
        let b = sample_event(2, (10, 0), 30);
        let c = sample_event(3, (9, 45), 30);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn resize_is_clamped_to_floor() {
        let mut store = EventStore::new();
        store.add(sample_event(1, (9, 0), 60));
        store.resize(EventId(1), 5).unwrap();
        assert_eq!(store.get(EventId(1)).unwrap().duration, MIN_EVENT_MINUTES);
        assert_eq!(
            store.resize(EventId(9), 30),
            Err(DashboardError::EventNotFound(EventId(9)))
        );
    }

    #[test]
    fn update_replaces_and_clamps() {
        let mut store = EventStore::new();
        store.add(sample_event(1, (9, 0), 60));
        let mut edited = sample_event(1, (14, 30), 0);
        edited.title = "Dentist".into();
        store.update(edited).unwrap();
        let event = store.get(EventId(1)).unwrap();
        assert_eq!(event.title, "Dentist");
        assert_eq!(event.start_minute(), 14 * 60 + 30);
        assert_eq!(event.duration, MIN_EVENT_MINUTES);
        assert_eq!(
            store.update(sample_event(4, (9, 0), 30)),
            Err(DashboardError::EventNotFound(EventId(4)))
        );
    }

    #[test]
    fn move_without_time_keeps_start() {
        let mut store = EventStore::new();
        store.add(sample_event(1, (9, 30), 60));
        let target = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();

        store.move_to(EventId(1), target, None).unwrap();
        let moved = store.get(EventId(1)).unwrap();
        assert_eq!(moved.date, target);
        assert_eq!(moved.start_minute(), 9 * 60 + 30);

        store.move_to(EventId(1), target, Some(SlotTime::new(14, 15))).unwrap();
        assert_eq!(store.get(EventId(1)).unwrap().start_minute(), 14 * 60 + 15);
    }

    #[test]
    fn allocated_ids_never_collide_with_added_ones() {
        let mut store = EventStore::new();
        store.add(sample_event(7, (9, 0), 30));
        assert_eq!(store.allocate_id(), EventId(8));
    }

    #[test]
    fn upcoming_is_ordered_and_skips_past_days() {
        let mut store = EventStore::new();
        let mut later = sample_event(1, (8, 0), 30);
        later.date = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        let mut past = sample_event(2, (8, 0), 30);
        past.date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        store.add(later);
        store.add(past);
        store.add(sample_event(3, (11, 0), 30));
        store.add(sample_event(4, (7, 0), 30));

        let from = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let ids: Vec<u64> = store.upcoming(from).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![4, 3, 1]);
    }
}
