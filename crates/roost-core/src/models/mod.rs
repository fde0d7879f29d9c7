//! Data models for Roost

mod message;
mod note;
mod priority;
mod settings;
mod user;

pub use message::{Message, MessageId, ReplyContext};
pub use note::{Note, NoteAttachment, NoteCounts, NoteId, Reminder, Subtask};
pub use priority::{Priority, PriorityConfig, PriorityStyle};
pub use settings::{Settings, ThemeMode};
pub use user::{User, UserId};
