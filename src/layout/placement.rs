//! Column choice for newly added panels

use crate::model::{Panel, PanelKind, MAX_COLUMNS};

/// Pick the column a new panel of `kind` enters.
///
/// Fixed kinds always use their default column. Flexible kinds go to the existing column
/// with the fewest panels (lowest index on ties), or the default column on an empty board.
pub fn choose_column(kind: PanelKind, panels: &[Panel]) -> usize {
    let spec = kind.spec();
    if !spec.flexible || panels.is_empty() {
        return spec.default_column;
    }

    let mut counts = [0usize; MAX_COLUMNS];
    for panel in panels {
        counts[panel.col.min(MAX_COLUMNS - 1)] += 1;
    }
    let existing = panels.iter().map(|p| p.col).max().unwrap_or(0).min(MAX_COLUMNS - 1) + 1;

    (0..existing)
        .min_by_key(|&col| counts[col])
        .unwrap_or(spec.default_column)
}
