//! Note model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::priority::Priority;
use crate::error::Error;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A dated reminder attached to a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(time) = self.time {
            write!(f, " {}", time.format("%H:%M"))?;
        }
        Ok(())
    }
}

/// A checklist item inside a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    #[must_use]
    pub fn done(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: true,
        }
    }
}

/// File attached to a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAttachment {
    pub filename: String,
    pub mime_type: String,
}

/// A note on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub attachments: Vec<NoteAttachment>,
}

/// Badge counts shown on a note card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteCounts {
    pub reminders: usize,
    pub subtasks_done: usize,
    pub subtasks_total: usize,
    pub attachments: usize,
}

impl NoteCounts {
    #[must_use]
    pub const fn has_reminders(&self) -> bool {
        self.reminders > 0
    }

    #[must_use]
    pub const fn has_subtasks(&self) -> bool {
        self.subtasks_total > 0
    }

    #[must_use]
    pub const fn has_attachments(&self) -> bool {
        self.attachments > 0
    }
}

impl Note {
    /// Create a medium-priority note with no reminders, subtasks or attachments
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            priority: Priority::default(),
            reminders: Vec::new(),
            subtasks: Vec::new(),
            attachments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn counts(&self) -> NoteCounts {
        NoteCounts {
            reminders: self.reminders.len(),
            subtasks_done: self.subtasks.iter().filter(|s| s.completed).count(),
            subtasks_total: self.subtasks.len(),
            attachments: self.attachments.len(),
        }
    }

    /// Title to display; blank titles fall back to the first content line
    #[must_use]
    pub fn display_title(&self, max_len: usize) -> String {
        let source = if self.title.trim().is_empty() {
            self.content.lines().next().unwrap_or("")
        } else {
            self.title.as_str()
        };
        let title: String = source.trim().chars().take(max_len).collect();
        if title.is_empty() {
            "Untitled".to_string()
        } else {
            title
        }
    }

    /// Look up a note on a board by id
    pub fn find_mut(notes: &mut [Self], id: NoteId) -> crate::Result<&mut Self> {
        notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| Error::NotFound(format!("note {id}")))
    }

    /// Earliest reminder, if any
    #[must_use]
    pub fn next_reminder(&self) -> Option<&Reminder> {
        self.reminders
            .iter()
            .min_by_key(|r| (r.date, r.time.unwrap_or(NaiveTime::MIN)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reminder(y: i32, m: u32, d: u32) -> Reminder {
        Reminder {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            time: None,
        }
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn empty_note_has_zero_counts() {
        let note = Note::new("Groceries", "milk");
        let counts = note.counts();
        assert_eq!(counts, NoteCounts::default());
        assert!(!counts.has_reminders());
        assert!(!counts.has_subtasks());
        assert!(!counts.has_attachments());
    }

    #[test]
    fn counts_completed_subtasks() {
        let mut note = Note::new("Launch", "");
        note.subtasks = vec![Subtask::done("a"), Subtask::new("b"), Subtask::done("c")];
        note.reminders = vec![reminder(2024, 5, 1)];
        note.attachments = vec![NoteAttachment {
            filename: "plan.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
        }];

        assert_eq!(
            note.counts(),
            NoteCounts {
                reminders: 1,
                subtasks_done: 2,
                subtasks_total: 3,
                attachments: 1,
            }
        );
    }

    #[test]
    fn display_title_falls_back_to_content() {
        assert_eq!(Note::new("  ", "First line\nSecond").display_title(40), "First line");
        assert_eq!(Note::new("Title", "body").display_title(3), "Tit");
        assert_eq!(Note::new("", "").display_title(40), "Untitled");
    }

    #[test]
    fn next_reminder_is_earliest() {
        let mut note = Note::new("t", "");
        note.reminders = vec![reminder(2024, 3, 2), reminder(2024, 1, 9), reminder(2024, 2, 1)];
        assert_eq!(note.next_reminder(), Some(&reminder(2024, 1, 9)));
        assert_eq!(Note::new("none", "").next_reminder(), None);
    }

    #[test]
    fn reminder_display_includes_optional_time() {
        let mut at_three = reminder(2024, 4, 1);
        assert_eq!(at_three.to_string(), "2024-04-01");
        at_three.time = NaiveTime::from_hms_opt(15, 0, 0);
        assert_eq!(at_three.to_string(), "2024-04-01 15:00");
    }

    #[test]
    fn find_mut_reports_missing_notes() {
        let mut notes = vec![Note::new("a", ""), Note::new("b", "")];
        let id = notes[1].id;
        Note::find_mut(&mut notes, id).unwrap().title = "renamed".to_string();
        assert_eq!(notes[1].title, "renamed");

        let missing = NoteId::new();
        assert_eq!(
            Note::find_mut(&mut notes, missing),
            Err(Error::NotFound(format!("note {missing}")))
        );
    }

    #[test]
    fn deserializes_note_without_collections() {
        let id = NoteId::new();
        let json = format!(r#"{{"id":"{id}","title":"t","content":"c"}}"#);
        let note: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note.priority, Priority::Medium);
        assert!(note.reminders.is_empty());
    }
}
