//! Small session collections behind the to-do, on-going, goal and note panels

use chrono::{DateTime, Local, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

/// A to-do. Dated tasks belong to a day; undated ones are weekly priorities.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: ItemId,
    pub text: String,
    pub date: Option<NaiveDate>,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OngoingCategory {
    #[default]
    Task,
    Habit,
    Note,
}

impl OngoingCategory {
    pub const ALL: [OngoingCategory; 3] = [
        OngoingCategory::Task,
        OngoingCategory::Habit,
        OngoingCategory::Note,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OngoingCategory::Task => "task",
            OngoingCategory::Habit => "habit",
            OngoingCategory::Note => "note",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OngoingItem {
    pub id: ItemId,
    pub text: String,
    pub category: OngoingCategory,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: ItemId,
    pub text: String,
    pub created: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct Items {
    pub tasks: Vec<Task>,
    pub ongoing: Vec<OngoingItem>,
    pub goals: Vec<Goal>,
    /// Newest first
    pub notes: Vec<Note>,
    next_id: u64,
}

impl Items {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    pub fn add_task(&mut self, text: &str, date: Option<NaiveDate>) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            date,
            done: false,
        });
        Some(id)
    }

    pub fn toggle_task(&mut self, id: ItemId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
        }
    }

    pub fn remove_task(&mut self, id: ItemId) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date == Some(date)).collect()
    }

    pub fn priorities(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date.is_none()).collect()
    }

    pub fn add_ongoing(&mut self, text: &str, category: OngoingCategory) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.ongoing.push(OngoingItem {
            id,
            text: text.to_string(),
            category,
            done: false,
        });
        Some(id)
    }

    pub fn toggle_ongoing(&mut self, id: ItemId) {
        if let Some(item) = self.ongoing.iter_mut().find(|i| i.id == id) {
            item.done = !item.done;
        }
    }

    pub fn delete_ongoing(&mut self, id: ItemId) {
        self.ongoing.retain(|i| i.id != id);
    }

    pub fn add_goal(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.goals.push(Goal {
            id,
            text: text.to_string(),
            done: false,
        });
        Some(id)
    }

    pub fn toggle_goal(&mut self, id: ItemId) {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) {
            goal.done = !goal.done;
        }
    }

    pub fn add_note(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.notes.insert(
            0,
            Note {
                id,
                text: text.to_string(),
                created: Local::now(),
            },
        );
        Some(id)
    }

    pub fn edit_note(&mut self, id: ItemId, text: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.text = text.to_string();
        }
    }

    pub fn delete_note(&mut self, id: ItemId) {
        self.notes.retain(|n| n.id != id);
    }

    /// Turn the first four words of a note into a task for `today`
    pub fn extract_task(&mut self, note_text: &str, today: NaiveDate) -> Option<ItemId> {
        let summary = note_text.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
        self.add_task(&summary, Some(today))
    }

    /// Text of any draggable item, used to prefill the editor after a drop
    pub fn draggable_text(&self, id: ItemId) -> Option<&str> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.text.as_str())
            .or_else(|| self.ongoing.iter().find(|i| i.id == id).map(|i| i.text.as_str()))
    }
}
