mod app;
mod bento;
mod modal;
mod panels;
mod schedule;
mod theme;

pub use app::HakoApp;

use chrono::NaiveDate;
use egui::{DragAndDrop, Rect};
use std::any::Any;
use std::sync::Arc;

use crate::model::{EventDraft, EventId, ItemId, PanelId, SlotTime};

/// Pointer position if it is over the visible part of `rect`
fn pointer_over(ui: &egui::Ui, rect: Rect) -> Option<egui::Pos2> {
    let pos = ui.ctx().input(|i| i.pointer.interact_pos())?;
    (rect.contains(pos) && ui.clip_rect().contains(pos)).then_some(pos)
}

/// Payload of type `P` currently dragged over `rect`
fn hovered_payload<P: Any + Send + Sync>(ui: &egui::Ui, rect: Rect) -> Option<Arc<P>> {
    pointer_over(ui, rect)?;
    DragAndDrop::payload::<P>(ui.ctx())
}

/// Take a payload of type `P` released over `rect` this frame, with the drop position
fn released_payload<P: Any + Send + Sync>(ui: &egui::Ui, rect: Rect) -> Option<(Arc<P>, egui::Pos2)> {
    // take_payload drops a payload of another type, so check first
    if !ui.ctx().input(|i| i.pointer.any_released())
        || !DragAndDrop::has_payload_of_type::<P>(ui.ctx())
    {
        return None;
    }
    let pos = pointer_over(ui, rect)?;
    DragAndDrop::take_payload::<P>(ui.ctx()).map(|payload| (payload, pos))
}

/// Drag payload for an event block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPayload {
    pub id: EventId,
    pub from: NaiveDate,
}

/// Drag payload for a to-do, priority or on-going item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPayload(pub ItemId);

/// Drag payload for a panel header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPayload(pub PanelId);

/// A mutation requested while painting. Applied by the app once the frame's widgets are done.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenDraft(EventDraft),
    EditEvent(EventId),
    MoveEvent {
        id: EventId,
        date: NaiveDate,
        time: Option<SlotTime>,
    },
    ResizeEvent {
        id: EventId,
        duration: u32,
    },
    /// An item dropped on a schedule grid becomes a draft titled after it
    ItemToEvent {
        item: ItemId,
        date: NaiveDate,
        time: SlotTime,
    },
    SelectDay(NaiveDate),
    RemovePanel(PanelId),
    ReorderPanel {
        from: PanelId,
        to: PanelId,
    },
    PanelToNewColumn(PanelId),
}
