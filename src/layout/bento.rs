//! Dashboard layout: panel membership, column widths, dividers and drag-reorder

use tracing::{debug, info};

use super::column::{redistribute, RowDragSession, RowHandle, RowWeights};
use super::placement::choose_column;
use super::session::DragSession;
use crate::error::{DashboardError, DashboardResult};
use crate::model::{Panel, PanelId, PanelKind, MAX_COLUMNS};

/// Narrowest share column 0 can be dragged to
const COL0_MIN: f32 = 15.0;
const COL0_MAX_TWO: f32 = 85.0;
const COL0_MAX_THREE: f32 = 70.0;
/// Narrowest share for columns 1 and 2 when dragging the second divider
const SIDE_MIN: f32 = 10.0;

/// Column divider gesture: keyed by divider index (0 = between columns 0 and 1),
/// remembering all widths at press time
pub type DividerSession = DragSession<usize, [f32; MAX_COLUMNS]>;

/// Transient state of a panel being dragged around the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelDrag {
    pub dragging: Option<PanelId>,
    pub over: Option<PanelId>,
    pub new_column_hover: bool,
}

/// Entry of the "+ panel" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddableKind {
    pub kind: PanelKind,
    /// Adding this kind replaces its open alternate
    pub swap: bool,
}

/// Width percentages for a given number of active columns
pub fn default_widths(count: usize) -> [f32; MAX_COLUMNS] {
    match count {
        0 | 1 => [100.0, 0.0, 0.0],
        2 => [65.0, 35.0, 0.0],
        _ => [52.0, 28.0, 20.0],
    }
}

/// Widths after moving `divider` by `delta` percentage points from `start`
pub fn drag_divider(
    start: [f32; MAX_COLUMNS],
    count: usize,
    divider: usize,
    delta: f32,
) -> [f32; MAX_COLUMNS] {
    match (divider, count) {
        (0, 2) => {
            let col0 = (start[0] + delta).clamp(COL0_MIN, COL0_MAX_TWO);
            [col0, 100.0 - col0, 0.0]
        }
        (0, 3) => {
            let col0 = (start[0] + delta).clamp(COL0_MIN, COL0_MAX_THREE);
            let rest = 100.0 - col0;
            let pair = start[1] + start[2];
            let ratio = if pair > 0.0 { start[1] / pair } else { 0.5 };
            [col0, rest * ratio, rest * (1.0 - ratio)]
        }
        (1, 3) => {
            let pair = start[1] + start[2];
            let col1 = (start[1] + delta).max(SIDE_MIN).min(pair - SIDE_MIN);
            [start[0], col1, pair - col1]
        }
        _ => start,
    }
}

/// Owner of the panel list and all layout geometry.
///
/// List order is the paint order: within a column panels render in the order they appear
/// here, and there is no separate row index.
#[derive(Debug, Clone)]
pub struct Bento {
    panels: Vec<Panel>,
    widths: [f32; MAX_COLUMNS],
    width_count: usize,
    rows: [RowWeights; MAX_COLUMNS],
    drag: PanelDrag,
    divider: DividerSession,
    row_drag: RowDragSession,
    next_id: u64,
}

impl Default for Bento {
    fn default() -> Self {
        Self::new()
    }
}

impl Bento {
    pub fn new() -> Self {
        let mut bento = Self {
            panels: Vec::new(),
            widths: default_widths(1),
            width_count: 1,
            rows: Default::default(),
            drag: PanelDrag::default(),
            divider: DividerSession::default(),
            row_drag: RowDragSession::default(),
            next_id: 1,
        };
        bento.after_change(false);
        bento
    }

    /// Monthly calendar above the daily schedule in a single column
    pub fn with_default_layout() -> Self {
        let mut bento = Self::new();
        for kind in [PanelKind::Monthly, PanelKind::Daily] {
            let id = bento.allocate_id();
            bento.panels.push(Panel::new(id, kind, 0));
        }
        bento.after_change(false);
        bento
    }

    fn allocate_id(&mut self) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        id
    }

    #[cfg(test)]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[cfg(test)]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: PanelId) -> DashboardResult<usize> {
        self.panels
            .iter()
            .position(|p| p.id == id)
            .ok_or(DashboardError::PanelNotFound(id))
    }

    pub fn is_open(&self, kind: PanelKind) -> bool {
        self.panels.iter().any(|p| p.kind == kind)
    }

    /// Active columns, derived from the highest occupied column index
    pub fn column_count(&self) -> usize {
        self.panels
            .iter()
            .map(|p| p.col + 1)
            .max()
            .unwrap_or(1)
            .min(MAX_COLUMNS)
    }

    pub fn panels_in(&self, col: usize) -> Vec<&Panel> {
        self.panels.iter().filter(|p| p.col == col).collect()
    }

    /// Widths of the active columns in percent
    pub fn widths(&self) -> &[f32] {
        &self.widths[..self.width_count]
    }

    pub fn row_weights(&self, col: usize) -> Option<&RowWeights> {
        self.rows.get(col)
    }

    /// Open a panel of `kind`.
    ///
    /// An open alternate is replaced in place with a fresh id; a kind that is already open is
    /// refused.
    pub fn add(&mut self, kind: PanelKind) -> DashboardResult<PanelId> {
        if let Some(alternate) = kind.alternate() {
            if let Some(index) = self.panels.iter().position(|p| p.kind == alternate) {
                let col = self.panels[index].col;
                let id = self.allocate_id();
                let old = std::mem::replace(&mut self.panels[index], Panel::new(id, kind, col));
                info!(replaced = %old.id, %id, ?kind, col, "panel swapped");
                self.after_change(false);
                return Ok(id);
            }
        }
        if self.is_open(kind) {
            debug!(?kind, "panel already open");
            return Err(DashboardError::AlreadyOpen(kind));
        }

        let col = choose_column(kind, &self.panels);
        let id = self.allocate_id();
        self.panels.push(Panel::new(id, kind, col));
        info!(%id, ?kind, col, "panel added");
        self.after_change(false);
        Ok(id)
    }

    /// Open a panel by catalog key
    pub fn add_key(&mut self, key: &str) -> DashboardResult<PanelId> {
        let kind = PanelKind::from_key(key)
            .ok_or_else(|| DashboardError::UnknownPanelKey(key.to_string()))?;
        self.add(kind)
    }

    /// Close a panel. Column indices are left as they are.
    pub fn remove(&mut self, id: PanelId) -> DashboardResult<Panel> {
        let index = self.index_of(id)?;
        let panel = self.panels.remove(index);
        info!(%id, kind = ?panel.kind, "panel removed");
        self.after_change(false);
        Ok(panel)
    }

    pub fn clear(&mut self) {
        info!(count = self.panels.len(), "panels cleared");
        self.panels.clear();
        self.drag = PanelDrag::default();
        self.after_change(false);
    }

    /// Move panel `from` to just before panel `to`, taking `to`'s column
    pub fn reorder(&mut self, from: PanelId, to: PanelId) -> DashboardResult<()> {
        if from == to {
            return Err(DashboardError::SelfDrop(from));
        }
        let from_index = self.index_of(from)?;
        let target_col = self.panels[self.index_of(to)?].col;

        let mut moved = self.panels.remove(from_index);
        moved.col = target_col;
        let insert_at = self.index_of(to)?;
        self.panels.insert(insert_at, moved);
        info!(%from, %to, col = target_col, "panel reordered");
        self.after_change(true);
        Ok(())
    }

    pub fn move_to_column(&mut self, id: PanelId, col: usize) -> DashboardResult<()> {
        if col >= MAX_COLUMNS {
            return Err(DashboardError::ColumnOutOfRange(col));
        }
        let index = self.index_of(id)?;
        self.panels[index].col = col;
        info!(%id, col, "panel moved to column");
        self.after_change(true);
        Ok(())
    }

    /// Drop onto the new-column strip: the panel opens the next column
    pub fn drop_new_column(&mut self, id: PanelId) -> DashboardResult<()> {
        let count = self.column_count();
        if count >= MAX_COLUMNS {
            return Err(DashboardError::ColumnsFull);
        }
        self.move_to_column(id, count)
    }

    /// Whether the new-column strip should be offered
    pub fn can_add_column(&self) -> bool {
        self.drag.dragging.is_some() && self.column_count() < MAX_COLUMNS
    }

    /// Kinds the "+ panel" menu offers
    pub fn addable_kinds(&self) -> Vec<AddableKind> {
        PanelKind::ALL
            .into_iter()
            .filter(|kind| !self.is_open(*kind))
            .map(|kind| AddableKind {
                kind,
                swap: kind.alternate().is_some_and(|alt| self.is_open(alt)),
            })
            .collect()
    }

    fn compact_columns(&mut self) {
        while !self.panels.is_empty() && !self.panels.iter().any(|p| p.col == 0) {
            for panel in &mut self.panels {
                panel.col = panel.col.saturating_sub(1);
            }
            debug!("columns compacted leftward");
        }
    }

    fn after_change(&mut self, compact: bool) {
        if compact {
            self.compact_columns();
        }
        let count = self.column_count();
        if count != self.width_count {
            info!(from = self.width_count, to = count, "column count changed");
            self.width_count = count;
            self.widths = default_widths(count);
        }
        for col in 0..MAX_COLUMNS {
            let members: Vec<&Panel> = self.panels.iter().filter(|p| p.col == col).collect();
            self.rows[col].sync(col, &members);
        }
    }

    pub fn drag(&self) -> PanelDrag {
        self.drag
    }

    pub fn begin_drag(&mut self, id: PanelId) {
        if self.drag.dragging.is_none() {
            debug!(%id, "panel drag started");
        }
        self.drag = PanelDrag {
            dragging: Some(id),
            over: None,
            new_column_hover: false,
        };
    }

    pub fn drag_over(&mut self, target: Option<PanelId>) {
        self.drag.over = target.filter(|t| Some(*t) != self.drag.dragging);
    }

    pub fn hover_new_column(&mut self, hover: bool) {
        self.drag.new_column_hover = hover;
    }

    /// Clear all drag state, whether or not the drop succeeded
    pub fn end_drag(&mut self) {
        if self.drag.dragging.is_some() {
            debug!(dragging = ?self.drag.dragging, "panel drag ended");
        }
        self.drag = PanelDrag::default();
    }

    pub fn divider_active(&self) -> Option<usize> {
        self.divider.key()
    }

    pub fn begin_divider(&mut self, divider: usize, pointer_x: f32) -> bool {
        self.divider.start(divider, pointer_x, self.widths)
    }

    pub fn update_divider(&mut self, pointer_x: f32, container_width: f32) {
        if container_width <= 0.0 {
            return;
        }
        if let Some((divider, dx, start)) = self.divider.delta(pointer_x) {
            let delta = dx / container_width * 100.0;
            self.widths = drag_divider(*start, self.width_count, divider, delta);
        }
    }

    pub fn end_divider(&mut self, primary_down: bool) {
        self.divider.end_unless_held(primary_down);
    }

    pub fn row_drag_active(&self) -> Option<RowHandle> {
        self.row_drag.key()
    }

    pub fn begin_row_drag(&mut self, handle: RowHandle, pointer_y: f32) -> bool {
        let Some(rows) = self.rows.get(handle.column) else {
            return false;
        };
        let weights = rows.weights().to_vec();
        self.row_drag.start(handle, pointer_y, weights)
    }

    /// `container_height` is the column's space shared by its stretch panels
    pub fn update_row_drag(&mut self, pointer_y: f32, container_height: f32) {
        if let Some((handle, dy, start)) = self.row_drag.delta(pointer_y) {
            let weights = redistribute(start, handle.index, dy, container_height);
            if let Some(rows) = self.rows.get_mut(handle.column) {
                rows.set(weights);
            }
        }
    }

    pub fn end_row_drag(&mut self, primary_down: bool) {
        self.row_drag.end_unless_held(primary_down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(bento: &Bento) -> Vec<(PanelKind, usize)> {
        bento.panels().iter().map(|p| (p.kind, p.col)).collect()
    }

    fn assert_widths(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn default_layout_is_one_column() {
        let bento = Bento::with_default_layout();
        assert_eq!(
            kinds(&bento),
            vec![(PanelKind::Monthly, 0), (PanelKind::Daily, 0)]
        );
        assert_eq!(bento.column_count(), 1);
        assert_widths(bento.widths(), &[100.0]);
        assert_eq!(bento.row_weights(0).map(|r| r.weights().len()), Some(2));
    }

    #[test]
    fn adding_open_fixed_kind_is_a_noop() {
        let mut bento = Bento::new();
        bento.add(PanelKind::Weekly5).unwrap();
        assert_eq!(
            bento.add(PanelKind::Weekly5),
            Err(DashboardError::AlreadyOpen(PanelKind::Weekly5))
        );
        assert_eq!(bento.panels().len(), 1);
    }

    #[test]
    fn adding_open_flexible_kind_is_a_noop() {
        let mut bento = Bento::with_default_layout();
        assert!(bento.add(PanelKind::Monthly).is_err());
        assert_eq!(bento.panels().len(), 2);
    }

    #[test]
    fn alternate_replaces_in_place() {
        let mut bento = Bento::with_default_layout();
        let week = bento.add(PanelKind::Weekly5).unwrap();
        bento.add(PanelKind::Notes).unwrap();
        bento.move_to_column(week, 1).unwrap();
        let before = bento.panels().iter().position(|p| p.id == week);

        let swapped = bento.add(PanelKind::Weekly7).unwrap();
        assert_ne!(swapped, week);
        let after = bento.panels().iter().position(|p| p.id == swapped);
        assert_eq!(before, after);
        assert_eq!(bento.get(swapped).map(|p| p.col), Some(1));
        assert!(!bento.is_open(PanelKind::Weekly5));
        assert_eq!(bento.panels().len(), 4);
    }

    #[test]
    fn unknown_key_is_refused() {
        let mut bento = Bento::with_default_layout();
        assert_eq!(
            bento.add_key("kanban"),
            Err(DashboardError::UnknownPanelKey("kanban".into()))
        );
        assert_eq!(bento.panels().len(), 2);
        assert!(bento.add_key("notes").is_ok());
    }

    #[test]
    fn every_menu_key_opens_its_kind() {
        let mut bento = Bento::new();
        for kind in PanelKind::ALL {
            assert!(bento.addable_kinds().iter().any(|entry| entry.kind == kind));
            let id = bento.add_key(kind.spec().key).unwrap();
            assert_eq!(bento.get(id).map(|p| p.kind), Some(kind));
        }
        assert!(bento.addable_kinds().iter().all(|entry| entry.swap));
        // the two week views share one slot
        assert_eq!(bento.panels().len(), PanelKind::ALL.len() - 1);
        assert!(bento.is_open(PanelKind::Weekly7));
        assert!(!bento.is_open(PanelKind::Weekly5));
    }

    #[test]
    fn flexible_add_prefers_emptier_column() {
        let mut bento = Bento::with_default_layout();
        let notes = bento.add(PanelKind::Notes).unwrap();
        assert_eq!(bento.get(notes).map(|p| p.col), Some(0));
        bento.move_to_column(notes, 1).unwrap();
        let agenda = bento.add(PanelKind::Agenda).unwrap();
        assert_eq!(bento.get(agenda).map(|p| p.col), Some(1));
        // columns now hold 2 and 2: tie goes to column 0
        let six = bento.add(PanelKind::SixMonth).unwrap();
        assert_eq!(bento.get(six).map(|p| p.col), Some(0));
    }

    #[test]
    fn first_panel_uses_its_default_column() {
        let mut bento = Bento::new();
        let id = bento.add(PanelKind::Notes).unwrap();
        assert_eq!(bento.get(id).map(|p| p.col), Some(1));
        assert_eq!(bento.column_count(), 2);
    }

    #[test]
    fn moving_the_only_panel_right_compacts() {
        let mut bento = Bento::new();
        let id = bento.add(PanelKind::Monthly).unwrap();
        bento.move_to_column(id, 1).unwrap();
        assert_eq!(bento.get(id).map(|p| p.col), Some(0));
        assert_eq!(bento.column_count(), 1);
    }

    #[test]
    fn emptying_column_zero_shifts_everything_left() {
        let mut bento = Bento::with_default_layout();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.drop_new_column(ids[1]).unwrap();
        assert_eq!(bento.column_count(), 2);
        bento.move_to_column(ids[0], 1).unwrap();
        assert_eq!(
            kinds(&bento),
            vec![(PanelKind::Monthly, 0), (PanelKind::Daily, 0)]
        );
        assert_eq!(bento.column_count(), 1);
    }

    #[test]
    fn compaction_closes_multi_column_gaps() {
        let mut bento = Bento::with_default_layout();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.move_to_column(ids[1], 2).unwrap();
        bento.move_to_column(ids[0], 2).unwrap();
        assert!(bento.panels().iter().all(|p| p.col == 0));
    }

    #[test]
    fn removal_does_not_compact() {
        let mut bento = Bento::with_default_layout();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.drop_new_column(ids[1]).unwrap();
        bento.remove(ids[0]).unwrap();
        assert_eq!(kinds(&bento), vec![(PanelKind::Daily, 1)]);
        assert_eq!(bento.column_count(), 2);
        assert_eq!(bento.remove(ids[0]), Err(DashboardError::PanelNotFound(ids[0])));
    }

    #[test]
    fn reorder_inserts_before_target_and_takes_its_column() {
        let mut bento = Bento::with_default_layout();
        let notes = bento.add(PanelKind::Notes).unwrap();
        bento.drop_new_column(notes).unwrap();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();

        bento.reorder(notes, ids[0]).unwrap();
        let order: Vec<(PanelId, usize)> = bento.panels().iter().map(|p| (p.id, p.col)).collect();
        assert_eq!(order, vec![(notes, 0), (ids[0], 0), (ids[1], 0)]);
        assert_eq!(bento.column_count(), 1);
    }

    #[test]
    fn reorder_downwards_lands_before_target() {
        let mut bento = Bento::with_default_layout();
        let notes = bento.add(PanelKind::Notes).unwrap();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.reorder(ids[0], notes).unwrap();
        let order: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![ids[1], ids[0], notes]);
    }

    #[test]
    fn invalid_reorder_leaves_list_unchanged() {
        let mut bento = Bento::with_default_layout();
        let before = bento.panels().to_vec();
        let id = before[0].id;
        assert_eq!(bento.reorder(id, id), Err(DashboardError::SelfDrop(id)));
        assert!(bento.reorder(id, PanelId(99)).is_err());
        assert!(bento.reorder(PanelId(99), id).is_err());
        assert_eq!(bento.panels(), &before[..]);
    }

    #[test]
    fn new_column_zone_opens_next_index_until_full() {
        let mut bento = Bento::with_default_layout();
        let notes = bento.add(PanelKind::Notes).unwrap();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();

        assert!(!bento.can_add_column());
        bento.begin_drag(ids[1]);
        assert!(bento.can_add_column());

        bento.drop_new_column(ids[1]).unwrap();
        assert_eq!(bento.get(ids[1]).map(|p| p.col), Some(1));
        assert_widths(bento.widths(), &[65.0, 35.0]);

        bento.drop_new_column(notes).unwrap();
        assert_eq!(bento.get(notes).map(|p| p.col), Some(2));
        assert_widths(bento.widths(), &[52.0, 28.0, 20.0]);

        assert!(!bento.can_add_column());
        assert_eq!(bento.drop_new_column(ids[0]), Err(DashboardError::ColumnsFull));
        bento.end_drag();
        assert_eq!(bento.drag(), PanelDrag::default());
    }

    #[test]
    fn move_to_column_rejects_out_of_range() {
        let mut bento = Bento::with_default_layout();
        let id = bento.panels()[0].id;
        assert_eq!(
            bento.move_to_column(id, 3),
            Err(DashboardError::ColumnOutOfRange(3))
        );
    }

    #[test]
    fn drag_over_ignores_self() {
        let mut bento = Bento::with_default_layout();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.begin_drag(ids[0]);
        bento.drag_over(Some(ids[0]));
        assert_eq!(bento.drag().over, None);
        bento.drag_over(Some(ids[1]));
        assert_eq!(bento.drag().over, Some(ids[1]));
    }

    #[test]
    fn addable_kinds_flags_week_swap() {
        let mut bento = Bento::with_default_layout();
        bento.add(PanelKind::Weekly5).unwrap();
        let addable = bento.addable_kinds();
        assert!(!addable.iter().any(|a| a.kind == PanelKind::Monthly));
        assert!(!addable.iter().any(|a| a.kind == PanelKind::Weekly5));
        assert!(addable.contains(&AddableKind {
            kind: PanelKind::Weekly7,
            swap: true
        }));
        assert!(addable.contains(&AddableKind {
            kind: PanelKind::Notes,
            swap: false
        }));
    }

    #[test]
    fn clear_removes_everything() {
        let mut bento = Bento::with_default_layout();
        bento.clear();
        assert!(bento.panels().is_empty());
        assert_eq!(bento.column_count(), 1);
        assert!(bento.add(PanelKind::Monthly).is_ok());
    }

    #[test]
    fn divider_two_columns_clamps_at_fifteen() {
        let mut bento = Bento::with_default_layout();
        let id = bento.panels()[1].id;
        bento.drop_new_column(id).unwrap();
        assert!(bento.begin_divider(0, 500.0));
        bento.update_divider(0.0, 1000.0);
        assert_widths(bento.widths(), &[15.0, 85.0]);
        bento.update_divider(1000.0, 1000.0);
        assert_widths(bento.widths(), &[85.0, 15.0]);
        bento.end_divider(false);
        assert_eq!(bento.divider_active(), None);
    }

    #[test]
    fn divider_three_columns_keeps_side_ratio() {
        let widths = drag_divider([52.0, 28.0, 20.0], 3, 0, 8.0);
        assert_widths(&widths, &[60.0, 40.0 * 28.0 / 48.0, 40.0 * 20.0 / 48.0]);
        let clamped = drag_divider([52.0, 28.0, 20.0], 3, 0, 40.0);
        assert_eq!(clamped[0], 70.0);
    }

    #[test]
    fn second_divider_clamps_both_sides() {
        assert_widths(&drag_divider([52.0, 28.0, 20.0], 3, 1, -30.0), &[52.0, 10.0, 38.0]);
        assert_widths(&drag_divider([52.0, 28.0, 20.0], 3, 1, 30.0), &[52.0, 38.0, 10.0]);
        assert_widths(&drag_divider([52.0, 28.0, 20.0], 3, 1, 5.0), &[52.0, 33.0, 15.0]);
    }

    #[test]
    fn divider_without_neighbour_is_ignored() {
        assert_eq!(drag_divider([100.0, 0.0, 0.0], 1, 0, 20.0), [100.0, 0.0, 0.0]);
        assert_eq!(drag_divider([65.0, 35.0, 0.0], 2, 1, 20.0), [65.0, 35.0, 0.0]);
    }

    #[test]
    fn custom_widths_reset_when_count_changes() {
        let mut bento = Bento::with_default_layout();
        let ids: Vec<PanelId> = bento.panels().iter().map(|p| p.id).collect();
        bento.drop_new_column(ids[1]).unwrap();
        bento.begin_divider(0, 0.0);
        bento.update_divider(100.0, 1000.0);
        bento.end_divider(false);
        assert_widths(bento.widths(), &[75.0, 25.0]);

        let notes = bento.add(PanelKind::Notes).unwrap();
        bento.drop_new_column(notes).unwrap();
        assert_widths(bento.widths(), &[52.0, 28.0, 20.0]);
    }

    #[test]
    fn row_drag_changes_weights_until_membership_changes() {
        let mut bento = Bento::with_default_layout();
        let handle = RowHandle { column: 0, index: 0 };
        assert!(bento.begin_row_drag(handle, 100.0));
        bento.update_row_drag(150.0, 200.0);
        assert_eq!(bento.row_weights(0).map(|r| r.weights().to_vec()), Some(vec![1.5, 0.5]));
        bento.end_row_drag(false);
        assert_eq!(bento.row_drag_active(), None);

        bento.add(PanelKind::Notes).unwrap();
        assert_eq!(
            bento.row_weights(0).map(|r| r.weights().to_vec()),
            Some(vec![1.0, 1.0, 1.0])
        );
    }

    #[test]
    fn second_row_drag_is_ignored_while_active() {
        let mut bento = Bento::with_default_layout();
        assert!(bento.begin_row_drag(RowHandle { column: 0, index: 0 }, 0.0));
        assert!(!bento.begin_row_drag(RowHandle { column: 0, index: 1 }, 0.0));
        assert_eq!(bento.row_drag_active(), Some(RowHandle { column: 0, index: 0 }));
        bento.end_row_drag(true);
        assert!(bento.row_drag_active().is_some());
    }
}
