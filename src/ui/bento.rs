use egui::{pos2, vec2, Align, Align2, Color32, CursorIcon, FontId, Id, Layout, Rect, RichText, Sense, Stroke, Ui, UiBuilder};

use super::panels::{render_panel, PanelContext};
use super::theme::Palette;
use super::{hovered_payload, released_payload, Action, PanelPayload};
use crate::layout::{column_items, Bento, RowHandle, ROW_GAP};
use crate::model::Panel;

const DIVIDER_WIDTH: f32 = 6.0;
const DROP_ZONE_WIDTH: f32 = 16.0;
const DROP_ZONE_HOVER_WIDTH: f32 = 72.0;
const HEADER_HEIGHT: f32 = 26.0;
const CARD_PADDING: f32 = 8.0;
/// Height assumed for a compact panel until it has been measured once
const COMPACT_FALLBACK_HEIGHT: f32 = 220.0;

/// Lay out every column of the dashboard inside the remaining space of `ui`
pub fn render_bento(ui: &mut Ui, bento: &mut Bento, cx: &mut PanelContext<'_>) {
    let area = ui.available_rect_before_wrap();
    ui.allocate_rect(area, Sense::hover());

    let zone_width = match (bento.can_add_column(), bento.drag().new_column_hover) {
        (false, _) => 0.0,
        (true, false) => DROP_ZONE_WIDTH,
        (true, true) => DROP_ZONE_HOVER_WIDTH,
    };
    let count = bento.column_count();
    let reserved = (count - 1) as f32 * DIVIDER_WIDTH
        + if zone_width > 0.0 { zone_width + DIVIDER_WIDTH } else { 0.0 };
    let columns_width = (area.width() - reserved).max(0.0);

    let widths = bento.widths().to_vec();
    let mut x = area.min.x;
    for (col, percent) in widths.iter().enumerate() {
        let width = columns_width * percent / 100.0;
        let col_rect = Rect::from_min_size(pos2(x, area.min.y), vec2(width, area.height()));
        render_column(ui, bento, col, col_rect, cx);
        x += width;
        if col + 1 < widths.len() {
            let divider = Rect::from_min_size(pos2(x, area.min.y), vec2(DIVIDER_WIDTH, area.height()));
            render_divider(ui, bento, col, divider, columns_width, cx.palette);
            x += DIVIDER_WIDTH;
        }
    }

    if zone_width > 0.0 {
        let zone = Rect::from_min_max(pos2(area.max.x - zone_width, area.min.y), area.max);
        render_new_column_zone(ui, bento, zone, cx);
    } else {
        bento.hover_new_column(false);
    }
}

fn compact_height_id(panel: &Panel) -> Id {
    Id::new(("compact_height", panel.id))
}

/// Last measured height of a compact panel
fn compact_height(ctx: &egui::Context, panel: &Panel) -> f32 {
    ctx.data(|d| d.get_temp::<f32>(compact_height_id(panel)))
        .unwrap_or(COMPACT_FALLBACK_HEIGHT)
}

fn render_column(ui: &mut Ui, bento: &mut Bento, col: usize, rect: Rect, cx: &mut PanelContext<'_>) {
    let panels: Vec<Panel> = bento.panels_in(col).into_iter().cloned().collect();
    if panels.is_empty() {
        ui.painter().text(
            rect.center_top() + vec2(0.0, 40.0),
            Align2::CENTER_CENTER,
            format!("{} add a panel or drop one here", egui_phosphor::regular::PLUS),
            FontId::proportional(12.0),
            cx.palette.muted,
        );
        return;
    }
    let refs: Vec<&Panel> = panels.iter().collect();
    let items = column_items(&refs);

    let ctx = ui.ctx().clone();
    let compact_total: f32 = items
        .iter()
        .filter(|item| item.stretch.is_none())
        .map(|item| compact_height(&ctx, item.panel))
        .sum();
    let gaps = (items.len() - 1) as f32 * ROW_GAP;
    let stretch_space = (rect.height() - compact_total - gaps).max(0.0);
    let weights = bento.row_weights(col).cloned().unwrap_or_default();

    let mut y = rect.min.y;
    for item in &items {
        let height = match item.stretch {
            Some(index) => weights.height(index, stretch_space),
            None => compact_height(&ctx, item.panel),
        };
        let card = Rect::from_min_size(pos2(rect.min.x, y), vec2(rect.width(), height));
        let used = render_card(ui, bento, item.panel, card, cx);
        if item.stretch.is_none() {
            ctx.data_mut(|d| d.insert_temp(compact_height_id(item.panel), used));
        }
        y += height;

        if let (true, Some(index)) = (item.handle_after, item.stretch) {
            let handle = Rect::from_min_size(pos2(rect.min.x, y), vec2(rect.width(), ROW_GAP));
            render_row_handle(ui, bento, RowHandle { column: col, index }, handle, stretch_space, cx.palette);
        }
        y += ROW_GAP;
    }
}

/// Paint one panel card and return the height its content needed
fn render_card(ui: &mut Ui, bento: &mut Bento, panel: &Panel, rect: Rect, cx: &mut PanelContext<'_>) -> f32 {
    let palette = *cx.palette;
    let dragged = bento.drag().dragging == Some(panel.id);
    let fill = if dragged { palette.card.gamma_multiply(0.5) } else { palette.card };
    ui.painter().rect(rect, 8.0, fill, Stroke::new(1.0, palette.border));

    // Header: drag grip with title, close button on the right
    let header = Rect::from_min_size(rect.min, vec2(rect.width(), HEADER_HEIGHT)).shrink2(vec2(CARD_PADDING, 2.0));
    let mut header_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(header)
            .id_salt(("panel_header", panel.id))
            .layout(Layout::left_to_right(Align::Center)),
    );
    header_ui.dnd_drag_source(Id::new(("panel_drag", panel.id)), PanelPayload(panel.id), |ui| {
        ui.label(
            RichText::new(format!("{} {}", egui_phosphor::regular::DOTS_SIX_VERTICAL, panel.label))
                .size(12.0)
                .strong()
                .color(palette.muted),
        );
    });
    header_ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let close = ui.add(
            egui::Button::new(RichText::new(egui_phosphor::regular::X).size(11.0).color(palette.muted))
                .frame(false),
        );
        if close.clicked() {
            cx.actions.push(Action::RemovePanel(panel.id));
        }
    });

    let body = Rect::from_min_max(
        pos2(rect.min.x + CARD_PADDING, rect.min.y + HEADER_HEIGHT),
        pos2(rect.max.x - CARD_PADDING, rect.max.y - CARD_PADDING),
    );
    let mut body_ui = ui.new_child(UiBuilder::new().max_rect(body).id_salt(("panel_body", panel.id)));
    body_ui.set_clip_rect(body.intersect(ui.clip_rect()));
    render_panel(&mut body_ui, panel.kind, cx);
    let used = body_ui.min_rect().height() + HEADER_HEIGHT + CARD_PADDING;

    // The card is the drop target for reordering; insertion goes above it
    if hovered_payload::<PanelPayload>(ui, rect).is_some_and(|p| p.0 != panel.id) {
        bento.drag_over(Some(panel.id));
        ui.painter().rect_filled(
            Rect::from_min_size(rect.min - vec2(0.0, 4.0), vec2(rect.width(), 3.0)),
            1.5,
            palette.accent,
        );
    } else if bento.drag().over == Some(panel.id) {
        bento.drag_over(None);
    }
    if let Some((payload, _)) = released_payload::<PanelPayload>(ui, rect) {
        cx.actions.push(Action::ReorderPanel {
            from: payload.0,
            to: panel.id,
        });
    }
    used
}

fn render_divider(ui: &mut Ui, bento: &mut Bento, divider: usize, rect: Rect, container_width: f32, palette: &Palette) {
    let response = ui.interact(rect, ui.id().with(("column_divider", divider)), Sense::drag());
    let active = bento.divider_active() == Some(divider);
    if response.hovered() || active {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
    }
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            bento.begin_divider(divider, pos.x);
        }
    }
    if active {
        if let Some(pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
            bento.update_divider(pos.x, container_width);
        }
    }

    let color = if response.hovered() || active { palette.accent } else { palette.border.gamma_multiply(0.4) };
    let x = rect.center().x;
    ui.painter().line_segment(
        [pos2(x, rect.min.y + 8.0), pos2(x, rect.max.y - 8.0)],
        Stroke::new(if active { 2.0 } else { 1.0 }, color),
    );
}

fn render_row_handle(
    ui: &mut Ui,
    bento: &mut Bento,
    handle: RowHandle,
    rect: Rect,
    stretch_space: f32,
    palette: &Palette,
) {
    let response = ui.interact(
        rect,
        ui.id().with(("row_handle", handle.column, handle.index)),
        Sense::drag(),
    );
    let active = bento.row_drag_active() == Some(handle);
    if response.hovered() || active {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
        let y = rect.center().y;
        ui.painter().line_segment(
            [pos2(rect.center().x - 16.0, y), pos2(rect.center().x + 16.0, y)],
            Stroke::new(2.0, palette.accent),
        );
    }
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            bento.begin_row_drag(handle, pos.y);
        }
    }
    if active {
        if let Some(pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
            bento.update_row_drag(pos.y, stretch_space);
        }
    }
}

fn render_new_column_zone(ui: &mut Ui, bento: &mut Bento, zone: Rect, cx: &mut PanelContext<'_>) {
    let hovered = hovered_payload::<PanelPayload>(ui, zone).is_some();
    bento.hover_new_column(hovered);

    let (fill, border) = cx.palette.drop_colors();
    ui.painter().rect(
        zone,
        8.0,
        if hovered { fill } else { Color32::TRANSPARENT },
        Stroke::new(1.0, border),
    );
    let label = if hovered { "+ column" } else { "+" };
    ui.painter().text(
        zone.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(11.0),
        border,
    );

    if let Some((payload, _)) = released_payload::<PanelPayload>(ui, zone) {
        cx.actions.push(Action::PanelToNewColumn(payload.0));
    }
}
