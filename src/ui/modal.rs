use egui::{Color32, RichText};

use super::theme::Palette;
use crate::config::Config;
use crate::model::time::{format_clock_time, format_duration, parse_time_input};
use crate::model::{EventDraft, QUICK_DURATIONS};

/// What the editor asks of the app after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Open,
    Save,
    Cancel,
}

/// Which time field a text edit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeField {
    Start,
    End,
}

/// Event editor window around an [`EventDraft`]
pub struct EventModal {
    pub draft: EventDraft,
    start_text: String,
    end_text: String,
    error: Option<String>,
    focus_title: bool,
}

impl EventModal {
    pub fn new(draft: EventDraft, config: &Config) -> Self {
        let start_text = format_clock_time(draft.start, config.clock_format);
        let end_text = format_clock_time(draft.end, config.clock_format);
        Self {
            draft,
            start_text,
            end_text,
            error: None,
            focus_title: true,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Parse a committed time field into the draft and rewrite both fields from it
    fn commit_time(&mut self, field: TimeField, config: &Config) {
        let text = match field {
            TimeField::Start => &self.start_text,
            TimeField::End => &self.end_text,
        };
        match parse_time_input(text) {
            Some(minutes) => {
                match field {
                    TimeField::Start => self.draft.set_start(minutes),
                    TimeField::End => self.draft.set_end(minutes),
                }
                self.error = None;
            }
            None => self.error = Some(format!("Couldn't read \"{}\" as a time", text.trim())),
        }
        self.refresh_times(config);
    }

    fn refresh_times(&mut self, config: &Config) {
        self.start_text = format_clock_time(self.draft.start, config.clock_format);
        self.end_text = format_clock_time(self.draft.end, config.clock_format);
    }

    pub fn show(&mut self, ctx: &egui::Context, palette: &Palette, config: &Config) -> ModalOutcome {
        let mut outcome = ModalOutcome::Open;
        let title = if self.draft.editing.is_some() { "Edit event" } else { "New event" };

        let frame = egui::Frame::none()
            .fill(palette.card)
            .stroke(egui::Stroke::new(2.0, palette.border))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(20.0));

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(frame)
            .show(ctx, |ui| {
                ui.set_min_width(380.0);
                ui.label(
                    RichText::new(self.draft.day.format("%A, %B %-d").to_string())
                        .size(12.0)
                        .color(palette.muted),
                );
                ui.add_space(8.0);

                let mut committed = None;
                egui::Grid::new("event_editor_grid")
                    .num_columns(2)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Title");
                        let title_edit = ui.add(
                            egui::TextEdit::singleline(&mut self.draft.title)
                                .desired_width(260.0)
                                .hint_text("What's happening?"),
                        );
                        if std::mem::take(&mut self.focus_title) {
                            title_edit.request_focus();
                        }
                        ui.end_row();

                        ui.label("Time");
                        ui.horizontal(|ui| {
                            let start = ui.add(egui::TextEdit::singleline(&mut self.start_text).desired_width(70.0));
                            if start.lost_focus() {
                                committed = Some(TimeField::Start);
                            }
                            ui.label("to");
                            let end = ui.add(egui::TextEdit::singleline(&mut self.end_text).desired_width(70.0));
                            if end.lost_focus() {
                                committed = Some(TimeField::End);
                            }
                            ui.label(
                                RichText::new(format_duration(self.draft.duration(), config.time_format))
                                    .color(palette.muted),
                            );
                        });
                        ui.end_row();

                        ui.label("");
                        ui.horizontal(|ui| {
                            for minutes in QUICK_DURATIONS {
                                let selected = self.draft.duration() == minutes;
                                let chip = ui.selectable_label(selected, format_duration(minutes, config.time_format));
                                if chip.clicked() {
                                    self.draft.set_duration(minutes);
                                    self.refresh_times(config);
                                }
                            }
                        });
                        ui.end_row();

                        ui.label("Where");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.draft.address)
                                .desired_width(260.0)
                                .hint_text("Address"),
                        );
                        ui.end_row();
                    });

                if let Some(field) = committed {
                    self.commit_time(field, config);
                }

                ui.add_space(6.0);
                let note = ui.add(
                    egui::TextEdit::multiline(&mut self.draft.note)
                        .desired_width(ui.available_width())
                        .desired_rows(3)
                        .hint_text("Note"),
                );

                if let Some(error) = &self.error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(Color32::from_rgb(224, 108, 117)));
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let enter = !note.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Save").clicked() || enter {
                        outcome = ModalOutcome::Save;
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = ModalOutcome::Cancel;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = ModalOutcome::Cancel;
        }
        outcome
    }
}
