mod draft;
mod event;
mod items;
mod panel;
pub mod time;

pub use draft::{EventDraft, QUICK_DURATIONS};
pub use event::{Event, EventId, EventStore, SlotTime, MIN_EVENT_MINUTES};
pub use items::{ItemId, Items, OngoingCategory};
pub use panel::{Panel, PanelId, PanelKind, MAX_COLUMNS};

#[cfg(test)]
pub(crate) use event::sample_event;
