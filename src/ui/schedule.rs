use chrono::{Local, NaiveDate, Timelike};
use egui::{pos2, vec2, Align2, CursorIcon, DragAndDrop, FontId, Painter, Rect, Rounding, Sense, Stroke, Ui};

use super::theme::Palette;
use super::{hovered_payload, released_payload, Action, EventPayload, ItemPayload};
use crate::config::Config;
use crate::layout::{resolve_lanes, GridGeometry, ResizeSession};
use crate::model::time::{format_clock_time, format_duration, hour_label};
use crate::model::{Event, EventDraft, EventId, ItemId, SlotTime};

/// Result from schedule grid interactions
#[derive(Debug, Default)]
pub struct ScheduleResult {
    pub slot_click: Option<SlotTime>,
    pub event_click: Option<EventId>,
    pub event_drop: Option<(EventId, SlotTime)>,
    // Reported on every pointer move while a resize is held
    pub event_resize: Option<(EventId, u32)>,
    pub item_drop: Option<(ItemId, SlotTime)>,
}

impl ScheduleResult {
    pub fn into_actions(self, day: NaiveDate, default_minutes: u32, actions: &mut Vec<Action>) {
        if let Some(slot) = self.slot_click {
            actions.push(Action::OpenDraft(EventDraft::new_at(day, slot, default_minutes)));
        }
        if let Some(id) = self.event_click {
            actions.push(Action::EditEvent(id));
        }
        if let Some((id, time)) = self.event_drop {
            actions.push(Action::MoveEvent {
                id,
                date: day,
                time: Some(time),
            });
        }
        if let Some((id, duration)) = self.event_resize {
            actions.push(Action::ResizeEvent { id, duration });
        }
        if let Some((item, time)) = self.item_drop {
            actions.push(Action::ItemToEvent {
                item,
                date: day,
                time,
            });
        }
    }
}

/// Paint one day's 24-hour grid with its events and collect the interactions.
///
/// The grid never mutates events; everything is reported through the result.
#[allow(clippy::too_many_arguments)]
pub fn render_time_grid(
    ui: &mut Ui,
    day: NaiveDate,
    events: &[&Event],
    width: f32,
    geometry: GridGeometry,
    resize: &mut ResizeSession,
    palette: &Palette,
    config: &Config,
) -> ScheduleResult {
    let mut result = ScheduleResult::default();

    let (grid_rect, grid_response) =
        ui.allocate_exact_size(vec2(width, geometry.total_height()), Sense::click());
    let painter = ui.painter();
    let gutter_x = grid_rect.min.x + geometry.label_width;
    let hour_line = palette.border.gamma_multiply(0.6);
    let quarter_line = palette.border.gamma_multiply(0.2);

    // Hour labels, hour lines and 15-minute subdivisions
    for hour in 0..24u32 {
        let y = grid_rect.min.y + hour as f32 * geometry.hour_height;
        if geometry.label_width > 0.0 {
            painter.text(
                pos2(gutter_x - 3.0, y + 1.0),
                Align2::RIGHT_TOP,
                hour_label(hour, config.clock_format),
                FontId::proportional(9.0),
                palette.muted,
            );
        }
        painter.line_segment(
            [pos2(gutter_x, y), pos2(grid_rect.max.x, y)],
            Stroke::new(1.0, hour_line),
        );
        for quarter in 1..4 {
            let quarter_y = y + quarter as f32 * geometry.hour_height / 4.0;
            painter.line_segment(
                [pos2(gutter_x, quarter_y), pos2(grid_rect.max.x, quarter_y)],
                Stroke::new(1.0, quarter_line),
            );
        }
    }

    // Now line on today's grid
    let now = Local::now();
    if now.date_naive() == day {
        let y = grid_rect.min.y + geometry.y_for_minute(now.hour() * 60 + now.minute());
        painter.line_segment(
            [pos2(gutter_x, y), pos2(grid_rect.max.x, y)],
            Stroke::new(1.5, palette.accent),
        );
        painter.circle_filled(pos2(gutter_x, y), 3.0, palette.accent);
    }

    // Quarter-hour drop preview
    let dropping = hovered_payload::<EventPayload>(ui, grid_rect).is_some()
        || hovered_payload::<ItemPayload>(ui, grid_rect).is_some();
    if dropping {
        if let Some(pos) = ui.ctx().input(|i| i.pointer.interact_pos()) {
            let slot = geometry.slot_at(pos.y - grid_rect.min.y);
            let top = grid_rect.min.y + geometry.y_for_minute(slot.minutes());
            let rect = Rect::from_min_max(
                pos2(gutter_x, top),
                pos2(grid_rect.max.x, top + geometry.hour_height / 4.0),
            );
            let (fill, border) = palette.drop_colors();
            painter.rect(rect, 2.0, fill, Stroke::new(1.0, border));
            painter.text(
                rect.left_center() + vec2(4.0, 0.0),
                Align2::LEFT_CENTER,
                format_clock_time(slot.minutes(), config.clock_format),
                FontId::proportional(10.0),
                border,
            );
        }
    }

    let dragged = DragAndDrop::payload::<EventPayload>(ui.ctx()).map(|p| p.id);

    for placement in resolve_lanes(events) {
        let event = placement.event;
        let block = geometry.block_rect(grid_rect, &placement);
        let id = ui.id().with(("event", event.id));

        let response = ui.interact(block, id, Sense::click_and_drag());
        response.dnd_set_drag_payload(EventPayload {
            id: event.id,
            from: day,
        });
        paint_event_block(painter, block, event, dragged == Some(event.id), palette, config);

        if response.clicked() {
            result.event_click = Some(event.id);
        }
        if response.hovered() && !resize.is_active() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        // Bottom-edge grab strip starts a resize
        let handle = geometry.resize_handle(block);
        let handle_response = ui.interact(handle, id.with("resize"), Sense::drag());
        if handle_response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
            painter.line_segment(
                [
                    pos2(handle.center().x - 8.0, handle.max.y - 3.0),
                    pos2(handle.center().x + 8.0, handle.max.y - 3.0),
                ],
                Stroke::new(2.0, palette.accent),
            );
        }
        if handle_response.drag_started() {
            if let Some(pos) = handle_response.interact_pointer_pos() {
                resize.start(event.id, pos.y, event.duration);
            }
        }
    }

    // Live duration while a resize on this day is held
    if let Some(key) = resize.key() {
        if let Some(event) = events.iter().find(|e| e.id == key) {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
            if let Some(pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                if let Some((id, duration)) = geometry.resize_update(resize, pos.y) {
                    if duration != event.duration {
                        result.event_resize = Some((id, duration));
                    }
                }
            }
        }
    }

    if grid_response.clicked() {
        if let Some(pos) = grid_response.interact_pointer_pos() {
            if pos.x >= gutter_x {
                result.slot_click = Some(geometry.slot_at(pos.y - grid_rect.min.y));
            }
        }
    }

    if let Some((payload, pos)) = released_payload::<EventPayload>(ui, grid_rect) {
        result.event_drop = Some((payload.id, geometry.slot_at(pos.y - grid_rect.min.y)));
    }
    if let Some((payload, pos)) = released_payload::<ItemPayload>(ui, grid_rect) {
        result.item_drop = Some((payload.0, geometry.slot_at(pos.y - grid_rect.min.y)));
    }

    result
}

/// Paint a single event block (no interaction, that's handled by the caller)
fn paint_event_block(
    painter: &Painter,
    rect: Rect,
    event: &Event,
    ghost: bool,
    palette: &Palette,
    config: &Config,
) {
    let (mut fill, mut stripe, mut text) = palette.event_colors();
    if ghost {
        fill = fill.gamma_multiply(0.4);
        stripe = stripe.gamma_multiply(0.4);
        text = text.gamma_multiply(0.4);
    }
    let corner_radius = 4.0;

    painter.rect(
        rect,
        corner_radius,
        fill,
        Stroke::new(1.0, stripe.gamma_multiply(0.5)),
    );

    // Left accent stripe
    let accent_width = 3.0;
    painter.rect(
        Rect::from_min_size(rect.min, vec2(accent_width, rect.height())),
        Rounding {
            nw: corner_radius,
            sw: corner_radius,
            ne: 0.0,
            se: 0.0,
        },
        stripe,
        Stroke::NONE,
    );

    let painter = painter.with_clip_rect(rect.shrink(1.0));
    let left = rect.min.x + accent_width + 4.0;
    painter.text(
        pos2(left, rect.min.y + 2.0),
        Align2::LEFT_TOP,
        &event.title,
        FontId::proportional(11.0),
        text,
    );

    if rect.height() > 28.0 {
        let range = format!(
            "{} - {} · {}",
            format_clock_time(event.start_minute(), config.clock_format),
            format_clock_time(event.end_minute(), config.clock_format),
            format_duration(event.duration, config.time_format),
        );
        painter.text(
            pos2(left, rect.min.y + 16.0),
            Align2::LEFT_TOP,
            range,
            FontId::proportional(9.5),
            text.gamma_multiply(0.75),
        );
    }
    if rect.height() > 44.0 && !event.address.is_empty() {
        painter.text(
            pos2(left, rect.min.y + 29.0),
            Align2::LEFT_TOP,
            &event.address,
            FontId::proportional(9.5),
            text.gamma_multiply(0.75),
        );
    }
}
