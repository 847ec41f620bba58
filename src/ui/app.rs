use chrono::{Local, NaiveDate};
use eframe::egui;
use egui::{Align2, DragAndDrop, FontId, Id, LayerId, Order, RichText, Sense, Stroke};
use tracing::{debug, warn};

use super::bento::render_bento;
use super::modal::{EventModal, ModalOutcome};
use super::panels::{mini_month, render_goals, render_upcoming, PanelContext, PanelInputs};
use super::theme::{phosphor_fill_family, setup_fonts, setup_theme, Palette};
use super::{Action, EventPayload, PanelPayload};
use crate::config::{ClockFormat, Config, PaletteName};
use crate::error::{DashboardError, DashboardResult};
use crate::layout::{Bento, ResizeSession};
use crate::model::time::month_start;
use crate::model::{EventDraft, EventStore, Items};

const SIDEBAR_WIDTH: f32 = 240.0;
const UPCOMING_LIMIT: usize = 6;

pub struct HakoApp {
    config: Config,
    palette: Palette,
    events: EventStore,
    items: Items,
    bento: Bento,
    resize: ResizeSession,
    inputs: PanelInputs,
    selected: NaiveDate,
    modal: Option<EventModal>,
}

/// Hand a finished draft to the store: new events get a fresh id, edits replace in place
fn commit_draft(events: &mut EventStore, draft: &EventDraft) -> DashboardResult<()> {
    match draft.editing {
        Some(id) => events.update(draft.finish(id)?),
        None => {
            let event = draft.finish(events.allocate_id())?;
            events.add(event);
            Ok(())
        }
    }
}

impl HakoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load config, using defaults");
            Config::default()
        });
        let palette = Palette::of(config.palette);
        setup_fonts(&cc.egui_ctx);
        setup_theme(&cc.egui_ctx, &palette);

        Self {
            config,
            palette,
            events: EventStore::new(),
            items: Items::new(),
            bento: Bento::with_default_layout(),
            resize: ResizeSession::default(),
            inputs: PanelInputs::default(),
            selected: Local::now().date_naive(),
            modal: None,
        }
    }

    fn save_config(&self) {
        if let Err(err) = self.config.save() {
            warn!(error = %err, "failed to save config");
        }
    }

    fn set_palette(&mut self, ctx: &egui::Context, name: PaletteName) {
        self.config.palette = name;
        self.palette = Palette::of(name);
        setup_theme(ctx, &self.palette);
        self.save_config();
    }

    fn open_editor(&mut self, draft: EventDraft) {
        self.modal = Some(EventModal::new(draft, &self.config));
    }

    fn apply(&mut self, action: Action) -> DashboardResult<()> {
        match action {
            Action::OpenDraft(draft) => self.open_editor(draft),
            Action::EditEvent(id) => {
                let event = self.events.get(id).ok_or(DashboardError::EventNotFound(id))?;
                self.open_editor(EventDraft::from_event(event));
            }
            Action::MoveEvent { id, date, time } => self.events.move_to(id, date, time)?,
            Action::ResizeEvent { id, duration } => self.events.resize(id, duration)?,
            Action::ItemToEvent { item, date, time } => {
                let title = self.items.draggable_text(item).unwrap_or_default().to_string();
                let draft = EventDraft::new_at(date, time, self.config.default_event_minutes).with_title(title);
                self.open_editor(draft);
            }
            Action::SelectDay(date) => self.selected = date,
            Action::RemovePanel(id) => {
                self.bento.remove(id)?;
            }
            Action::ReorderPanel { from, to } => self.bento.reorder(from, to)?,
            Action::PanelToNewColumn(id) => self.bento.drop_new_column(id)?,
        }
        Ok(())
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.palette.surface)
                    .inner_margin(egui::Margin::symmetric(14.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("hako").size(18.0).strong().color(self.palette.accent));
                    ui.label(
                        RichText::new(Local::now().format("%A, %B %-d").to_string())
                            .size(12.0)
                            .color(self.palette.muted),
                    );
                    ui.add_space(16.0);

                    ui.menu_button(format!("{} panel", egui_phosphor::regular::PLUS), |ui| {
                        let addable = self.bento.addable_kinds();
                        if addable.is_empty() {
                            ui.label(RichText::new("Every panel is open").color(self.palette.muted));
                        }
                        for entry in addable {
                            let label = if entry.swap {
                                format!("{} {}", egui_phosphor::regular::ARROWS_LEFT_RIGHT, entry.kind.label())
                            } else {
                                entry.kind.label().to_string()
                            };
                            if ui.button(label).clicked() {
                                if let Err(err) = self.bento.add_key(entry.kind.spec().key) {
                                    debug!(error = %err, "panel not added");
                                }
                                ui.close_menu();
                            }
                        }
                    });
                    if ui.button("clear").clicked() {
                        self.bento.clear();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let sidebar_icon = if self.config.sidebar_open {
                            RichText::new(egui_phosphor::fill::SIDEBAR_SIMPLE)
                                .size(16.0)
                                .family(phosphor_fill_family())
                                .color(self.palette.accent)
                        } else {
                            RichText::new(egui_phosphor::regular::SIDEBAR_SIMPLE)
                                .size(16.0)
                                .color(self.palette.muted)
                        };
                        let toggle = ui.add(egui::Label::new(sidebar_icon).sense(Sense::click()));
                        if toggle.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if toggle.clicked() {
                            self.config.sidebar_open = !self.config.sidebar_open;
                            self.save_config();
                        }

                        let clock = match self.config.clock_format {
                            ClockFormat::Hour24 => "24h",
                            ClockFormat::Hour12 => "12h",
                        };
                        if ui.button(clock).clicked() {
                            self.config.clock_format = match self.config.clock_format {
                                ClockFormat::Hour24 => ClockFormat::Hour12,
                                ClockFormat::Hour12 => ClockFormat::Hour24,
                            };
                            self.save_config();
                        }

                        let mut chosen = None;
                        for name in PaletteName::ALL.into_iter().rev() {
                            let (rect, response) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::click());
                            let ring = if name == self.config.palette {
                                Stroke::new(2.0, self.palette.text)
                            } else {
                                Stroke::new(1.0, self.palette.border)
                            };
                            ui.painter().circle(rect.center(), 7.0, Palette::swatch(name), ring);
                            if response.on_hover_text(format!("{:?}", name)).clicked() {
                                chosen = Some(name);
                            }
                        }
                        if let Some(name) = chosen {
                            self.set_palette(ui.ctx(), name);
                        }
                    });
                });
            });
    }

    /// Floating label that follows the pointer while an event is dragged
    fn paint_event_ghost(&self, ctx: &egui::Context) {
        let Some(payload) = DragAndDrop::payload::<EventPayload>(ctx) else {
            return;
        };
        let (Some(event), Some(pos)) = (self.events.get(payload.id), ctx.pointer_interact_pos()) else {
            return;
        };
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("event_drag_ghost")));
        let (fill, stripe, text) = self.palette.event_colors();
        let galley = painter.layout_no_wrap(event.title.clone(), FontId::proportional(11.0), text);
        let rect = egui::Rect::from_min_size(pos + egui::vec2(12.0, 4.0), galley.size() + egui::vec2(12.0, 6.0));
        painter.rect(rect, 4.0, fill, Stroke::new(1.0, stripe));
        painter.text(rect.center(), Align2::CENTER_CENTER, &event.title, FontId::proportional(11.0), text);
    }
}

impl eframe::App for HakoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pinch-to-zoom (trackpad pinch or Ctrl+scroll)
        let zoom_delta = ctx.input(|i| i.zoom_delta());
        if zoom_delta != 1.0 {
            self.config.font_scale = (self.config.font_scale * zoom_delta).clamp(0.75, 2.5);
            if (zoom_delta - 1.0).abs() > 0.01 {
                self.save_config();
            }
        }
        ctx.set_pixels_per_point(self.config.font_scale);

        // Mirror egui's drag-and-drop payload into the layout's drag state
        match DragAndDrop::payload::<PanelPayload>(ctx) {
            Some(payload) if self.bento.drag().dragging != Some(payload.0) => self.bento.begin_drag(payload.0),
            Some(_) => {}
            None => self.bento.end_drag(),
        }

        self.render_header(ctx);

        let today = Local::now().date_naive();
        let mut actions = Vec::new();
        let mut cx = PanelContext {
            events: &self.events,
            items: &mut self.items,
            inputs: &mut self.inputs,
            resize: &mut self.resize,
            config: &self.config,
            palette: &self.palette,
            today,
            selected: self.selected,
            actions: &mut actions,
        };

        if self.config.sidebar_open {
            egui::SidePanel::right("sidebar")
                .resizable(false)
                .exact_width(SIDEBAR_WIDTH)
                .frame(
                    egui::Frame::none()
                        .fill(self.palette.surface)
                        .inner_margin(egui::Margin::same(12.0)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().id_salt("sidebar_scroll").show(ui, |ui| {
                        let month = month_start(cx.selected);
                        let title = month.format("%B %Y").to_string();
                        mini_month(ui, &mut cx, month, 30.0, Some(title));
                        ui.add_space(14.0);
                        ui.label(RichText::new("Upcoming").size(12.0).strong().color(self.palette.muted));
                        render_upcoming(ui, &mut cx, UPCOMING_LIMIT);
                        ui.add_space(14.0);
                        ui.label(RichText::new("Goals").size(12.0).strong().color(self.palette.muted));
                        render_goals(ui, &mut cx);
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.palette.bg)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                render_bento(ui, &mut self.bento, &mut cx);
            });

        self.paint_event_ghost(ctx);

        // Sessions end on release, or when the button is seen up after pointer loss
        let primary_down = ctx.input(|i| i.pointer.primary_down());
        self.resize.end_unless_held(primary_down);
        self.bento.end_divider(primary_down);
        self.bento.end_row_drag(primary_down);

        for action in actions {
            if let Err(err) = self.apply(action) {
                debug!(error = %err, "action skipped");
            }
        }

        if let Some(modal) = self.modal.as_mut() {
            match modal.show(ctx, &self.palette, &self.config) {
                ModalOutcome::Open => {}
                ModalOutcome::Cancel => self.modal = None,
                ModalOutcome::Save => match commit_draft(&mut self.events, &modal.draft) {
                    Ok(()) => self.modal = None,
                    Err(err) => modal.set_error(err.to_string()),
                },
            }
        }

        if self.bento.drag().dragging.is_some()
            || self.resize.is_active()
            || self.bento.divider_active().is_some()
            || self.bento.row_drag_active().is_some()
        {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlotTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn new_draft_gets_fresh_id() {
        let mut events = EventStore::new();
        let draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 30).with_title("Standup");
        commit_draft(&mut events, &draft).unwrap();
        commit_draft(&mut events, &draft).unwrap();
        let ids: Vec<_> = events.all().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn edited_draft_replaces_event() {
        let mut events = EventStore::new();
        let draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 30).with_title("Standup");
        commit_draft(&mut events, &draft).unwrap();
        let id = events.all()[0].id;

        let mut edit = EventDraft::from_event(&events.all()[0]);
        edit.title = "Retro".into();
        edit.set_duration(60);
        commit_draft(&mut events, &edit).unwrap();

        assert_eq!(events.all().len(), 1);
        let event = events.get(id).unwrap();
        assert_eq!(event.title, "Retro");
        assert_eq!(event.duration, 60);
    }

    #[test]
    fn untitled_draft_is_rejected() {
        let mut events = EventStore::new();
        let draft = EventDraft::new_at(day(), SlotTime::new(9, 0), 30);
        assert!(matches!(commit_draft(&mut events, &draft), Err(DashboardError::EmptyTitle)));
        assert!(events.all().is_empty());
    }
}
