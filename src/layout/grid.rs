//! Geometry of the 24-hour schedule grid: pixel ↔ time mapping, block placement, resize snapping

use egui::{pos2, vec2, Rect};

use super::overlap::Placement;
use super::session::DragSession;
use crate::model::{EventId, SlotTime, MIN_EVENT_MINUTES};

/// Pixels per hour row
pub const HOUR_HEIGHT: f32 = 52.0;
/// Width of the hour-label gutter on the left of the grid
pub const LABEL_WIDTH: f32 = 24.0;
pub const SNAP_MINUTES: u32 = 15;
/// Height of the grab strip along a block's bottom edge
pub const RESIZE_HANDLE_HEIGHT: f32 = 8.0;

const BLOCK_GAP: f32 = 2.0;
const MIN_BLOCK_HOURS: f32 = 0.35;

/// Resize gesture: keyed by event, remembering the duration at press time
pub type ResizeSession = DragSession<EventId, u32>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub hour_height: f32,
    pub label_width: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            hour_height: HOUR_HEIGHT,
            label_width: LABEL_WIDTH,
        }
    }
}

impl GridGeometry {
    pub fn total_height(&self) -> f32 {
        24.0 * self.hour_height
    }

    /// Convert a vertical offset from the grid top into a quarter-hour slot.
    ///
    /// The hour is floored; the remainder snaps to the nearest 15 minutes, and a remainder
    /// that would round up to 60 stays at :45 of the same hour.
    pub fn slot_at(&self, y: f32) -> SlotTime {
        let raw = y / self.hour_height;
        let hour = raw.floor().clamp(0.0, 23.0);
        let quarters = ((raw - hour) * 60.0 / SNAP_MINUTES as f32).round().max(0.0) as u32;
        let minute = (quarters * SNAP_MINUTES).min(60 - SNAP_MINUTES);
        SlotTime::new(hour as u32, minute)
    }

    pub fn y_for_minute(&self, minute: u32) -> f32 {
        minute as f32 / 60.0 * self.hour_height
    }

    /// Screen rect for a placed event inside `grid` (the full grid rect including the label gutter)
    pub fn block_rect(&self, grid: Rect, placement: &Placement<'_>) -> Rect {
        let event = placement.event;
        let top = (event.start_hour as f32 + event.start_min as f32 / 60.0) * self.hour_height;
        let height = (MIN_BLOCK_HOURS * self.hour_height)
            .max(event.duration as f32 / 60.0 * self.hour_height - BLOCK_GAP);

        let lanes = placement.total_cols.max(1) as f32;
        let available = (grid.width() - self.label_width - 2.0 * BLOCK_GAP).max(0.0);
        let lane_width = available / lanes;
        let left = grid.min.x + self.label_width + BLOCK_GAP + placement.col as f32 * lane_width;

        Rect::from_min_size(pos2(left, grid.min.y + top), vec2(lane_width, height))
    }

    /// Bottom-edge grab strip of a block
    pub fn resize_handle(&self, block: Rect) -> Rect {
        Rect::from_min_max(pos2(block.min.x, block.max.y - RESIZE_HANDLE_HEIGHT), block.max)
    }

    /// New duration after dragging the bottom edge by `dy` pixels, snapped to 15 minutes
    pub fn resized_duration(&self, original: u32, dy: f32) -> u32 {
        // Half a step always rounds toward the longer duration
        let steps = (dy / self.hour_height * 60.0 / SNAP_MINUTES as f32 + 0.5).floor() as i64;
        let duration = original as i64 + steps * SNAP_MINUTES as i64;
        duration.max(MIN_EVENT_MINUTES as i64) as u32
    }

    /// Live duration for the active resize session at pointer height `pointer_y`
    pub fn resize_update(&self, session: &ResizeSession, pointer_y: f32) -> Option<(EventId, u32)> {
        session
            .delta(pointer_y)
            .map(|(id, dy, original)| (id, self.resized_duration(*original, dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::overlap::resolve_lanes;
    use crate::model::sample_event;
    use proptest::prelude::*;

    const H: f32 = HOUR_HEIGHT;

    #[test]
    fn slot_on_the_hour() {
        assert_eq!(GridGeometry::default().slot_at(9.0 * H), SlotTime::new(9, 0));
    }

    #[test]
    fn slot_half_past() {
        assert_eq!(GridGeometry::default().slot_at(9.0 * H + H / 2.0), SlotTime::new(9, 30));
    }

    #[test]
    fn slot_end_of_hour_folds_back() {
        assert_eq!(GridGeometry::default().slot_at(9.0 * H + 0.99 * H), SlotTime::new(9, 45));
    }

    #[test]
    fn slot_is_clamped_to_day() {
        let grid = GridGeometry::default();
        assert_eq!(grid.slot_at(-20.0), SlotTime::new(0, 0));
        assert_eq!(grid.slot_at(30.0 * H), SlotTime::new(23, 45));
    }

    #[test]
    fn block_rect_splits_lanes() {
        let grid = GridGeometry::default();
        let area = Rect::from_min_size(pos2(100.0, 0.0), vec2(228.0, grid.total_height()));
        let events = [sample_event(1, (9, 0), 60), sample_event(2, (9, 30), 60)];
        let refs: Vec<_> = events.iter().collect();
        let placed = resolve_lanes(&refs);

        let first = grid.block_rect(area, &placed[0]);
        let second = grid.block_rect(area, &placed[1]);
        // 228 - 24 label - 4 gap = 200 available, two lanes of 100
        assert_eq!(first.width(), 100.0);
        assert_eq!(first.min.x, 100.0 + LABEL_WIDTH + 2.0);
        assert_eq!(second.min.x, first.min.x + 100.0);
        assert_eq!(first.min.y, 9.0 * H);
        assert_eq!(first.height(), H - 2.0);
        assert_eq!(second.min.y, 9.5 * H);
    }

    #[test]
    fn short_blocks_keep_minimum_height() {
        let grid = GridGeometry::default();
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, grid.total_height()));
        let events = [sample_event(1, (0, 0), 15)];
        let refs: Vec<_> = events.iter().collect();
        let placed = resolve_lanes(&refs);
        assert_eq!(grid.block_rect(area, &placed[0]).height(), 0.35 * H);
    }

    #[test]
    fn resize_snaps_to_quarter_hours() {
        let grid = GridGeometry::default();
        assert_eq!(grid.resized_duration(60, H / 2.0), 90);
        assert_eq!(grid.resized_duration(60, H * 0.1), 60);
        assert_eq!(grid.resized_duration(60, H * 0.2), 75);
        assert_eq!(grid.resized_duration(60, -H), 15);
    }

    #[test]
    fn half_step_drags_round_up() {
        let grid = GridGeometry::default();
        assert_eq!(grid.resized_duration(60, -H / 8.0), 60);
        assert_eq!(grid.resized_duration(60, H / 8.0), 75);
        assert_eq!(grid.resized_duration(60, -3.0 * H / 8.0), 45);
    }

    #[test]
    fn resize_update_follows_session() {
        let grid = GridGeometry::default();
        let mut session = ResizeSession::default();
        assert_eq!(grid.resize_update(&session, 100.0), None);
        session.start(EventId(7), 100.0, 30);
        assert_eq!(grid.resize_update(&session, 100.0 + H), Some((EventId(7), 90)));
    }

    proptest! {
        #[test]
        fn resize_never_goes_below_floor(original in (1u32..40).prop_map(|q| q * 15), dy in -100_000f32..100_000f32) {
            let duration = GridGeometry::default().resized_duration(original, dy);
            prop_assert!(duration >= MIN_EVENT_MINUTES);
            prop_assert_eq!(duration % SNAP_MINUTES, 0);
        }
    }
}
