use chrono::{Datelike, Duration, NaiveDate};
use egui::{pos2, vec2, Align2, CursorIcon, FontId, Id, Rect, RichText, Sense, Stroke, Ui};

use super::schedule::render_time_grid;
use super::theme::Palette;
use super::{hovered_payload, released_payload, Action, EventPayload, ItemPayload};
use crate::config::Config;
use crate::layout::grid::LABEL_WIDTH;
use crate::layout::{GridGeometry, ResizeSession};
use crate::model::time::{
    days_in_month, format_clock_time, month_cells, shift_month, week_start, weekday_short,
};
use crate::model::{EventDraft, EventStore, ItemId, Items, OngoingCategory, PanelKind, SlotTime};

/// Start used when something is dropped on a day without a time
const DEFAULT_DROP_SLOT: SlotTime = SlotTime { hour: 9, minute: 0 };
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Text buffers of the inline add forms
#[derive(Debug, Default)]
pub struct PanelInputs {
    pub task: String,
    pub priority: String,
    pub ongoing: String,
    pub ongoing_category: OngoingCategory,
    pub note: String,
    pub goal: String,
}

/// Everything a panel body reads or may change while painting.
///
/// Events are read-only here; changes to them go out as actions. The small item lists are
/// edited in place.
pub struct PanelContext<'a> {
    pub events: &'a EventStore,
    pub items: &'a mut Items,
    pub inputs: &'a mut PanelInputs,
    pub resize: &'a mut ResizeSession,
    pub config: &'a Config,
    pub palette: &'a Palette,
    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub actions: &'a mut Vec<Action>,
}

pub fn render_panel(ui: &mut Ui, kind: PanelKind, cx: &mut PanelContext<'_>) {
    match kind {
        PanelKind::Monthly => render_monthly(ui, cx),
        PanelKind::Weekly5 => render_week(ui, cx, 5),
        PanelKind::Weekly7 => render_week(ui, cx, 7),
        PanelKind::Daily => render_daily(ui, cx),
        PanelKind::SixMonth => render_six_month(ui, cx),
        PanelKind::Agenda => render_agenda(ui, cx),
        PanelKind::Ongoing => render_ongoing(ui, cx),
        PanelKind::Notes => render_notes(ui, cx),
        PanelKind::MiniCal => render_mini_cal(ui, cx),
    }
}

/// Navigation offset (months or weeks) kept in egui memory per panel
fn load_offset(ui: &Ui, salt: &str) -> (Id, i32) {
    let id = ui.id().with(salt);
    let offset = ui.ctx().data(|d| d.get_temp::<i32>(id)).unwrap_or(0);
    (id, offset)
}

fn store_offset(ui: &Ui, id: Id, offset: i32) {
    ui.ctx().data_mut(|d| d.insert_temp(id, offset));
}

/// Previous/next arrows followed by a label. Returns -1, 0 or 1.
fn nav_header(ui: &mut Ui, label: &str, palette: &Palette) -> i32 {
    let mut step = 0;
    ui.horizontal(|ui| {
        for (icon, delta) in [(egui_phosphor::regular::CARET_LEFT, -1), (egui_phosphor::regular::CARET_RIGHT, 1)] {
            let arrow = ui.add(
                egui::Label::new(RichText::new(icon).size(13.0).color(palette.muted))
                    .sense(Sense::click()),
            );
            if arrow.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
            if arrow.clicked() {
                step = delta;
            }
        }
        ui.label(RichText::new(label).size(13.0).strong().color(palette.text));
    });
    step
}

/// Highlight a drop target under an event drag
fn paint_drop_hover(ui: &Ui, rect: Rect, palette: &Palette) {
    if hovered_payload::<EventPayload>(ui, rect).is_some() {
        let (fill, border) = palette.drop_colors();
        ui.painter().rect(rect, 3.0, fill, Stroke::new(1.0, border));
    }
}

fn render_monthly(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let (offset_id, offset) = load_offset(ui, "month_offset");
    let month = shift_month(cx.selected, offset);
    let step = nav_header(ui, &month.format("%B %Y").to_string(), cx.palette);
    if step != 0 {
        store_offset(ui, offset_id, offset + step);
    }

    let width = ui.available_width();
    let cell_w = width / 7.0;
    let (head, _) = ui.allocate_exact_size(vec2(width, 16.0), Sense::hover());
    for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
        ui.painter().text(
            pos2(head.min.x + (i as f32 + 0.5) * cell_w, head.center().y),
            Align2::CENTER_CENTER,
            *name,
            FontId::proportional(10.0),
            cx.palette.muted,
        );
    }

    let cells = month_cells(month);
    let rows = cells.len().div_ceil(7);
    let cell_h = (ui.available_height() / rows as f32).max(44.0);
    let (grid, _) = ui.allocate_exact_size(vec2(width, cell_h * rows as f32), Sense::hover());

    for (i, cell) in cells.iter().enumerate() {
        let Some(date) = *cell else { continue };
        let rect = Rect::from_min_size(
            grid.min + vec2((i % 7) as f32 * cell_w, (i / 7) as f32 * cell_h),
            vec2(cell_w, cell_h),
        )
        .shrink(1.0);
        let response = ui.interact(rect, ui.id().with(("month_cell", date)), Sense::click());

        let fill = if date == cx.selected { cx.palette.soft } else { cx.palette.surface };
        let stroke = if date == cx.today {
            Stroke::new(1.5, cx.palette.accent)
        } else {
            Stroke::new(0.5, cx.palette.border.gamma_multiply(0.5))
        };
        ui.painter().rect(rect, 3.0, fill, stroke);
        paint_drop_hover(ui, rect, cx.palette);
        ui.painter().text(
            rect.min + vec2(4.0, 2.0),
            Align2::LEFT_TOP,
            date.day().to_string(),
            FontId::proportional(10.0),
            if date == cx.today { cx.palette.accent } else { cx.palette.muted },
        );

        let mut day_events = cx.events.events_on(date);
        day_events.sort_by_key(|e| e.start_minute());
        let (chip_fill, chip_stripe, chip_text) = cx.palette.event_colors();
        for (n, event) in day_events.iter().take(3).enumerate() {
            let chip = Rect::from_min_size(
                pos2(rect.min.x + 2.0, rect.min.y + 15.0 + n as f32 * 13.0),
                vec2(rect.width() - 4.0, 12.0),
            );
            if chip.max.y > rect.max.y {
                break;
            }
            let chip_response =
                ui.interact(chip, ui.id().with(("month_event", event.id)), Sense::click_and_drag());
            chip_response.dnd_set_drag_payload(EventPayload { id: event.id, from: date });
            if chip_response.clicked() {
                cx.actions.push(Action::EditEvent(event.id));
            }
            ui.painter().rect(chip, 2.0, chip_fill, Stroke::NONE);
            ui.painter().rect_filled(
                Rect::from_min_size(chip.min, vec2(2.0, chip.height())),
                0.0,
                chip_stripe,
            );
            ui.painter().with_clip_rect(chip).text(
                chip.min + vec2(4.0, 0.0),
                Align2::LEFT_TOP,
                &event.title,
                FontId::proportional(9.5),
                chip_text,
            );
        }
        if day_events.len() > 3 {
            ui.painter().text(
                rect.right_top() + vec2(-3.0, 2.0),
                Align2::RIGHT_TOP,
                format!("+{}", day_events.len() - 3),
                FontId::proportional(9.0),
                cx.palette.muted,
            );
        }

        if response.double_clicked() {
            cx.actions.push(Action::OpenDraft(EventDraft::new_at(
                date,
                DEFAULT_DROP_SLOT,
                cx.config.default_event_minutes,
            )));
        } else if response.clicked() {
            cx.actions.push(Action::SelectDay(date));
        }
        if let Some((payload, _)) = released_payload::<EventPayload>(ui, rect) {
            cx.actions.push(Action::MoveEvent { id: payload.id, date, time: None });
        }
    }
}

fn render_week(ui: &mut Ui, cx: &mut PanelContext<'_>, day_count: usize) {
    let (offset_id, offset) = load_offset(ui, "week_offset");
    let start = week_start(cx.selected) + Duration::weeks(offset as i64);
    let days: Vec<NaiveDate> = (0..day_count).map(|d| start + Duration::days(d as i64)).collect();
    let end = start + Duration::days(day_count as i64 - 1);
    let label = format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"));
    let step = nav_header(ui, &label, cx.palette);
    if step != 0 {
        store_offset(ui, offset_id, offset + step);
    }

    render_priorities(ui, cx);

    let width = ui.available_width();
    let day_w = ((width - LABEL_WIDTH) / day_count as f32).max(40.0);

    // Day headers; a drop here lands at the default start
    let (head, _) = ui.allocate_exact_size(vec2(width, 22.0), Sense::hover());
    for (i, day) in days.iter().enumerate() {
        let rect = Rect::from_min_size(
            pos2(head.min.x + LABEL_WIDTH + i as f32 * day_w, head.min.y),
            vec2(day_w, head.height()),
        );
        let response = ui.interact(rect, ui.id().with(("week_head", *day)), Sense::click());
        paint_drop_hover(ui, rect, cx.palette);
        let color = if *day == cx.today { cx.palette.accent } else { cx.palette.text };
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("{} {}", weekday_short(day.weekday()), day.day()),
            FontId::proportional(11.0),
            color,
        );
        if response.clicked() {
            cx.actions.push(Action::SelectDay(*day));
        }
        if let Some((payload, _)) = released_payload::<EventPayload>(ui, rect) {
            cx.actions.push(Action::MoveEvent {
                id: payload.id,
                date: *day,
                time: Some(DEFAULT_DROP_SLOT),
            });
        }
        if let Some((payload, _)) = released_payload::<ItemPayload>(ui, rect) {
            cx.actions.push(Action::ItemToEvent {
                item: payload.0,
                date: *day,
                time: DEFAULT_DROP_SLOT,
            });
        }
    }

    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("week_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for (i, day) in days.iter().enumerate() {
                    let geometry = GridGeometry {
                        label_width: if i == 0 { LABEL_WIDTH } else { 0.0 },
                        ..GridGeometry::default()
                    };
                    let events = cx.events.events_on(*day);
                    let result = render_time_grid(
                        ui,
                        *day,
                        &events,
                        day_w + geometry.label_width,
                        geometry,
                        cx.resize,
                        cx.palette,
                        cx.config,
                    );
                    result.into_actions(*day, cx.config.default_event_minutes, cx.actions);
                }
            });
        });
}

fn render_daily(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let day = cx.selected;
    ui.horizontal(|ui| {
        let step = nav_header(ui, &day.format("%A, %B %-d").to_string(), cx.palette);
        if step != 0 {
            cx.actions.push(Action::SelectDay(day + Duration::days(step as i64)));
        }
        if day != cx.today && ui.small_button("today").clicked() {
            cx.actions.push(Action::SelectDay(cx.today));
        }
    });

    render_todos(ui, cx, day);

    let events = cx.events.events_on(day);
    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("daily_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let result = render_time_grid(
                ui,
                day,
                &events,
                ui.available_width(),
                GridGeometry::default(),
                cx.resize,
                cx.palette,
                cx.config,
            );
            result.into_actions(day, cx.config.default_event_minutes, cx.actions);
        });
}

/// Checkbox row whose text can be dragged onto a schedule grid
fn item_row(ui: &mut Ui, id: ItemId, text: &str, done: bool, palette: &Palette) -> (bool, bool) {
    let mut toggled = false;
    let mut removed = false;
    ui.horizontal(|ui| {
        let mut checked = done;
        if ui.checkbox(&mut checked, "").changed() {
            toggled = true;
        }
        let color = if done { palette.muted } else { palette.text };
        let mut rich = RichText::new(text).size(12.0).color(color);
        if done {
            rich = rich.strikethrough();
        }
        ui.dnd_drag_source(ui.id().with(("item", id)), ItemPayload(id), |ui| {
            ui.label(rich);
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(RichText::new(egui_phosphor::regular::X).size(10.0)).frame(false))
                .clicked()
            {
                removed = true;
            }
        });
    });
    (toggled, removed)
}

/// Single-line input; returns the trimmed text when Enter is pressed
fn add_input(ui: &mut Ui, buffer: &mut String, hint: &str) -> Option<String> {
    let response = ui.add(
        egui::TextEdit::singleline(buffer)
            .hint_text(hint)
            .desired_width(ui.available_width()),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        let text = buffer.trim().to_string();
        buffer.clear();
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

fn render_todos(ui: &mut Ui, cx: &mut PanelContext<'_>, day: NaiveDate) {
    ui.label(RichText::new("To-dos").size(11.0).color(cx.palette.muted));
    let mut toggle = None;
    let mut remove = None;
    for task in cx.items.tasks_on(day) {
        let (toggled, removed) = item_row(ui, task.id, &task.text, task.done, cx.palette);
        if toggled {
            toggle = Some(task.id);
        }
        if removed {
            remove = Some(task.id);
        }
    }
    if let Some(id) = toggle {
        cx.items.toggle_task(id);
    }
    if let Some(id) = remove {
        cx.items.remove_task(id);
    }
    if let Some(text) = add_input(ui, &mut cx.inputs.task, "+ to-do") {
        cx.items.add_task(&text, Some(day));
    }
}

fn render_priorities(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    ui.label(RichText::new("Priorities").size(11.0).color(cx.palette.muted));
    let mut toggle = None;
    let mut remove = None;
    ui.horizontal_wrapped(|ui| {
        for task in cx.items.priorities() {
            let (toggled, removed) = item_row(ui, task.id, &task.text, task.done, cx.palette);
            if toggled {
                toggle = Some(task.id);
            }
            if removed {
                remove = Some(task.id);
            }
        }
    });
    if let Some(id) = toggle {
        cx.items.toggle_task(id);
    }
    if let Some(id) = remove {
        cx.items.remove_task(id);
    }
    if let Some(text) = add_input(ui, &mut cx.inputs.priority, "+ priority") {
        cx.items.add_task(&text, None);
    }
}

/// Small month grid: click selects a day, event drops move the event to that day
pub fn mini_month(ui: &mut Ui, cx: &mut PanelContext<'_>, month: NaiveDate, cell: f32, title: Option<String>) {
    if let Some(title) = title {
        ui.label(RichText::new(title).size(11.0).strong().color(cx.palette.text));
    }
    let (head, _) = ui.allocate_exact_size(vec2(cell * 7.0, cell * 0.8), Sense::hover());
    for (i, letter) in WEEKDAY_LETTERS.iter().enumerate() {
        ui.painter().text(
            pos2(head.min.x + (i as f32 + 0.5) * cell, head.center().y),
            Align2::CENTER_CENTER,
            *letter,
            FontId::proportional(9.0),
            cx.palette.muted,
        );
    }

    let cells = month_cells(month);
    let rows = cells.len().div_ceil(7);
    let (grid, _) = ui.allocate_exact_size(vec2(cell * 7.0, cell * rows as f32), Sense::hover());
    for (i, date) in cells.iter().enumerate() {
        let Some(date) = *date else { continue };
        let rect = Rect::from_min_size(
            grid.min + vec2((i % 7) as f32 * cell, (i / 7) as f32 * cell),
            vec2(cell, cell),
        );
        let response = ui.interact(rect, ui.id().with(("mini_day", month, date)), Sense::click());
        let center = rect.center();
        let radius = cell * 0.42;

        let text_color = if date == cx.selected {
            ui.painter().circle_filled(center, radius, cx.palette.accent);
            cx.palette.soft
        } else {
            if date == cx.today {
                ui.painter().circle_stroke(center, radius, Stroke::new(1.0, cx.palette.accent));
            } else if response.hovered() {
                ui.painter().circle_filled(center, radius, cx.palette.soft);
            }
            cx.palette.text
        };
        paint_drop_hover(ui, rect, cx.palette);
        ui.painter().text(
            center,
            Align2::CENTER_CENTER,
            date.day().to_string(),
            FontId::proportional(cell * 0.42),
            text_color,
        );
        if cx.events.count_on(date) > 0 {
            ui.painter().circle_filled(
                pos2(center.x, rect.max.y - 2.0),
                1.5,
                if date == cx.selected { cx.palette.soft } else { cx.palette.accent },
            );
        }

        if response.clicked() {
            cx.actions.push(Action::SelectDay(date));
        }
        if let Some((payload, _)) = released_payload::<EventPayload>(ui, rect) {
            cx.actions.push(Action::MoveEvent { id: payload.id, date, time: None });
        }
    }
}

fn render_mini_cal(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let (offset_id, offset) = load_offset(ui, "mini_offset");
    let month = shift_month(cx.selected, offset);
    let step = nav_header(ui, &month.format("%B %Y").to_string(), cx.palette);
    if step != 0 {
        store_offset(ui, offset_id, offset + step);
    }
    let cell = (ui.available_width() / 7.0).clamp(18.0, 28.0);
    mini_month(ui, cx, month, cell, None);
}

fn render_six_month(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let (offset_id, offset) = load_offset(ui, "six_offset");
    let first = shift_month(cx.selected, offset);
    let last = shift_month(first, 5);
    let label = format!("{} - {}", first.format("%b %Y"), last.format("%b %Y"));
    let step = nav_header(ui, &label, cx.palette);
    if step != 0 {
        store_offset(ui, offset_id, offset + step);
    }

    let width = ui.available_width();
    let per_row = if width > 540.0 { 3 } else { 2 };
    let block_w = width / per_row as f32;
    let cell = ((block_w - 12.0) / 7.0).clamp(12.0, 24.0);

    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("six_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let months: Vec<NaiveDate> = (0..6).map(|m| shift_month(first, m)).collect();
            for row in months.chunks(per_row) {
                ui.horizontal_top(|ui| {
                    for month in row {
                        let count: usize = (0..days_in_month(*month))
                            .map(|d| cx.events.count_on(*month + Duration::days(d as i64)))
                            .sum();
                        let title = format!("{} · {}", month.format("%B"), count);
                        ui.allocate_ui(vec2(block_w - 6.0, cell * 8.0), |ui| {
                            ui.vertical(|ui| mini_month(ui, cx, *month, cell, Some(title)));
                        });
                    }
                });
                ui.add_space(6.0);
            }
        });
}

fn render_agenda(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let upcoming = cx.events.upcoming(cx.today);
    if upcoming.is_empty() {
        ui.label(RichText::new("Nothing scheduled").size(12.0).color(cx.palette.muted));
        return;
    }
    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("agenda_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut current: Option<NaiveDate> = None;
            for event in upcoming {
                if current != Some(event.date) {
                    current = Some(event.date);
                    let heading = if event.date == cx.today {
                        "Today".to_string()
                    } else {
                        event.date.format("%a, %b %-d").to_string()
                    };
                    ui.add_space(4.0);
                    ui.label(RichText::new(heading).size(11.0).strong().color(cx.palette.accent));
                }
                let text = format!(
                    "{}  {}",
                    format_clock_time(event.start_minute(), cx.config.clock_format),
                    event.title
                );
                let response = ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(cx.palette.text))
                        .selectable(false)
                        .sense(Sense::click_and_drag()),
                );
                response.dnd_set_drag_payload(EventPayload { id: event.id, from: event.date });
                if response.clicked() {
                    cx.actions.push(Action::EditEvent(event.id));
                }
            }
        });
}

fn render_ongoing(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt(ui.id().with("ongoing_category"))
            .width(70.0)
            .selected_text(cx.inputs.ongoing_category.label())
            .show_ui(ui, |ui| {
                for category in OngoingCategory::ALL {
                    ui.selectable_value(&mut cx.inputs.ongoing_category, category, category.label());
                }
            });
        if let Some(text) = add_input(ui, &mut cx.inputs.ongoing, "+ on-going") {
            cx.items.add_ongoing(&text, cx.inputs.ongoing_category);
        }
    });

    let mut toggle = None;
    let mut remove = None;
    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("ongoing_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for category in OngoingCategory::ALL {
                let items: Vec<_> = cx.items.ongoing.iter().filter(|i| i.category == category).collect();
                if items.is_empty() {
                    continue;
                }
                ui.label(RichText::new(category.label()).size(10.0).color(cx.palette.muted));
                for item in items {
                    let (toggled, removed) = item_row(ui, item.id, &item.text, item.done, cx.palette);
                    if toggled {
                        toggle = Some(item.id);
                    }
                    if removed {
                        remove = Some(item.id);
                    }
                }
            }
        });
    if let Some(id) = toggle {
        cx.items.toggle_ongoing(id);
    }
    if let Some(id) = remove {
        cx.items.delete_ongoing(id);
    }
}

fn render_notes(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    ui.add(
        egui::TextEdit::multiline(&mut cx.inputs.note)
            .hint_text("Jot something down")
            .desired_rows(2)
            .desired_width(ui.available_width()),
    );
    if ui.small_button("add note").clicked() {
        let text = std::mem::take(&mut cx.inputs.note);
        cx.items.add_note(&text);
    }

    let mut edit: Option<(ItemId, String)> = None;
    let mut remove = None;
    let mut extract: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt(ui.id().with("notes_scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for note in &cx.items.notes {
                egui::Frame::none()
                    .fill(cx.palette.soft)
                    .rounding(4.0)
                    .inner_margin(egui::Margin::same(6.0))
                    .show(ui, |ui| {
                        let mut text = note.text.clone();
                        let response = ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .frame(false)
                                .desired_rows(1)
                                .desired_width(ui.available_width()),
                        );
                        if response.changed() {
                            edit = Some((note.id, text));
                        }
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(note.created.format("%b %-d %H:%M").to_string())
                                    .size(9.5)
                                    .color(cx.palette.muted),
                            );
                            if ui.small_button("→ task").clicked() {
                                extract = Some(note.text.clone());
                            }
                            if ui.small_button(egui_phosphor::regular::TRASH).clicked() {
                                remove = Some(note.id);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });
    if let Some((id, text)) = edit {
        cx.items.edit_note(id, &text);
    }
    if let Some(id) = remove {
        cx.items.delete_note(id);
    }
    if let Some(text) = extract {
        cx.items.extract_task(&text, cx.today);
    }
}

/// Goals list with an inline add field, used by the sidebar
pub fn render_goals(ui: &mut Ui, cx: &mut PanelContext<'_>) {
    let mut toggle = None;
    for goal in &cx.items.goals {
        let mut done = goal.done;
        let color = if goal.done { cx.palette.muted } else { cx.palette.text };
        if ui
            .checkbox(&mut done, RichText::new(&goal.text).size(12.0).color(color))
            .changed()
        {
            toggle = Some(goal.id);
        }
    }
    if let Some(id) = toggle {
        cx.items.toggle_goal(id);
    }
    if let Some(text) = add_input(ui, &mut cx.inputs.goal, "+ goal") {
        cx.items.add_goal(&text);
    }
}

/// Next few events from today, used by the sidebar
pub fn render_upcoming(ui: &mut Ui, cx: &mut PanelContext<'_>, limit: usize) {
    let upcoming = cx.events.upcoming(cx.today);
    if upcoming.is_empty() {
        ui.label(RichText::new("Nothing scheduled").size(11.0).color(cx.palette.muted));
    }
    for event in upcoming.into_iter().take(limit) {
        let text = format!(
            "{} {}  {}",
            event.date.format("%b %-d"),
            format_clock_time(event.start_minute(), cx.config.clock_format),
            event.title
        );
        let response = ui.add(
            egui::Label::new(RichText::new(text).size(11.0).color(cx.palette.text)).sense(Sense::click()),
        );
        if response.clicked() {
            cx.actions.push(Action::EditEvent(event.id));
        }
    }
}
