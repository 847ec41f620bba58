//! Vertical stacking of panels inside one dashboard column

use tracing::debug;

use super::session::DragSession;
use crate::model::Panel;

/// Smallest weight a stretch panel can be dragged down to
pub const ROW_WEIGHT_FLOOR: f32 = 0.12;
/// Stretch panels never render shorter than this
pub const MIN_STRETCH_HEIGHT: f32 = 60.0;
/// Space between stacked panels; also the height of a row handle
pub const ROW_GAP: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnItem<'a> {
    pub panel: &'a Panel,
    /// Index among the column's stretch panels; `None` for compact panels
    pub stretch: Option<usize>,
    /// A row handle follows this item
    pub handle_after: bool,
}

/// Render list for a column in paint order.
///
/// A handle sits between two consecutive stretch panels only; a compact panel in between
/// breaks the pair.
pub fn column_items<'a>(panels: &[&'a Panel]) -> Vec<ColumnItem<'a>> {
    let mut next_stretch = 0;
    let mut items: Vec<ColumnItem<'a>> = panels
        .iter()
        .map(|panel| {
            let stretch = if panel.kind.is_compact() {
                None
            } else {
                next_stretch += 1;
                Some(next_stretch - 1)
            };
            ColumnItem {
                panel,
                stretch,
                handle_after: false,
            }
        })
        .collect();

    for i in 1..items.len() {
        if items[i - 1].stretch.is_some() && items[i].stretch.is_some() {
            items[i - 1].handle_after = true;
        }
    }
    items
}

/// Which row handle is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    pub column: usize,
    /// Stretch index of the panel above the handle
    pub index: usize,
}

/// Row drag gesture, remembering every weight of the column at press time
pub type RowDragSession = DragSession<RowHandle, Vec<f32>>;

/// Proportional heights ("fr" weights) of a column's stretch panels.
///
/// Weights are tied to the column's panel-id sequence: any change in membership or order
/// resets them to all-1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowWeights {
    fingerprint: String,
    weights: Vec<f32>,
}

impl RowWeights {
    pub fn fingerprint(panels: &[&Panel]) -> String {
        panels
            .iter()
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Reset to uniform weights if the column's membership changed. Returns true on reset.
    pub fn sync(&mut self, column: usize, panels: &[&Panel]) -> bool {
        let fingerprint = Self::fingerprint(panels);
        if fingerprint == self.fingerprint {
            return false;
        }
        let stretch_count = panels.iter().filter(|p| !p.kind.is_compact()).count();
        debug!(column, %fingerprint, stretch_count, "row weights reset");
        self.fingerprint = fingerprint;
        self.weights = vec![1.0; stretch_count];
        true
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn set(&mut self, weights: Vec<f32>) {
        if weights.len() == self.weights.len() {
            self.weights = weights;
        }
    }

    pub fn total(&self) -> f32 {
        let sum: f32 = self.weights.iter().sum();
        if sum > 0.0 {
            sum
        } else {
            1.0
        }
    }

    /// Share of the stretch space for stretch panel `index`
    pub fn fraction(&self, index: usize) -> f32 {
        self.weights.get(index).copied().unwrap_or(1.0) / self.total()
    }

    /// Pixel height of stretch panel `index` given the space left for stretch panels
    pub fn height(&self, index: usize, available: f32) -> f32 {
        (self.fraction(index) * available).max(MIN_STRETCH_HEIGHT)
    }
}

/// Weights after dragging the handle below stretch panel `index` by `dy` pixels.
///
/// Only the pair around the handle changes, so every other panel keeps its size.
pub fn redistribute(start: &[f32], index: usize, dy: f32, container_height: f32) -> Vec<f32> {
    let mut weights = start.to_vec();
    if index + 1 >= weights.len() || container_height <= 0.0 {
        return weights;
    }
    let total: f32 = start.iter().sum();
    let delta = dy / container_height * total;
    weights[index] = (start[index] + delta).max(ROW_WEIGHT_FLOOR);
    weights[index + 1] = (start[index + 1] - delta).max(ROW_WEIGHT_FLOOR);
    weights
}
