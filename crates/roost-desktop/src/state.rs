//! Application state management
//!
//! Global state accessible via Dioxus context providers. The components stay
//! presentational; every mutation triggered by their callbacks lands here.

use dioxus::prelude::*;

use roost_core::chat::{ChatTab, UnreadCounts};
use roost_core::models::{Message, Note, NoteId, PriorityConfig, ReplyContext, Settings, User};
use roost_core::sortable::{apply_reorder, Reorder};

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user
    pub current_user: Signal<User>,
    /// Other participant of the open conversation
    pub contact: Signal<User>,
    /// Messages of the open conversation, oldest first
    pub messages: Signal<Vec<Message>>,
    /// Composer draft
    pub draft: Signal<String>,
    /// Message the draft replies to
    pub reply_to: Signal<Option<ReplyContext>>,
    /// Name of the other participant while they type
    pub typing_user: Signal<Option<String>>,
    /// Unread counts per conversation
    pub unread: Signal<UnreadCounts>,
    /// Active sidebar tab
    pub active_tab: Signal<ChatTab>,
    /// Notes in board order
    pub notes: Signal<Vec<Note>>,
    /// Currently selected note ID
    pub selected_note: Signal<Option<NoteId>>,
    /// Note open in the edit panel
    pub editing_note: Signal<Option<NoteId>>,
    /// Priority lookup table for note cards
    pub priorities: Signal<PriorityConfig>,
    /// Whether the profile photo overlay is open
    pub photo_open: Signal<bool>,
    /// Application settings
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Append the draft as a new message from the current user.
    pub fn send_draft(&mut self) {
        let text = self.draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }

        let message = Message::new((self.current_user)(), text);
        tracing::info!("Sent message: {}", message.id);
        self.messages.write().push(message);
        self.draft.set(String::new());
        self.reply_to.set(None);
        self.mark_conversation_read();
    }

    /// Drop the unread count of the open conversation once the user replies
    pub fn mark_conversation_read(&mut self) {
        let conversation = self.contact.peek().id.to_string();
        let cleared = self.unread.peek().get(&conversation);
        if cleared > 0 {
            self.unread.write().clear(&conversation);
            tracing::info!("Marked {} unread in {} as read", cleared, conversation);
        }
    }

    pub fn start_reply(&mut self, message: &Message) {
        tracing::debug!("Replying to message: {}", message.id);
        self.reply_to.set(Some(ReplyContext::from_message(message)));
    }

    pub fn select_tab(&mut self, tab: ChatTab) {
        tracing::info!("Switched to tab: {}", tab);
        self.active_tab.set(tab);
    }

    /// Commit a reorder reported by the note board.
    pub fn reorder_notes(&mut self, reorder: Reorder) {
        let result = apply_reorder::<Note>(&mut self.notes.write(), reorder);
        match result {
            Ok(()) => tracing::info!("Reordered notes: {} -> {}", reorder.from, reorder.to),
            Err(e) => tracing::warn!("Rejected note reorder: {}", e),
        }
    }

    pub fn select_note(&mut self, id: NoteId) {
        self.selected_note.set(Some(id));
    }

    pub fn edit_note(&mut self, id: NoteId) {
        self.selected_note.set(Some(id));
        self.editing_note.set(Some(id));
    }

    /// Replace a note's title and content
    pub fn update_note(&mut self, id: NoteId, title: String, content: String) {
        let mut notes = self.notes.write();
        match Note::find_mut(&mut notes, id) {
            Ok(note) => {
                note.title = title;
                note.content = content;
                tracing::info!("Updated note: {}", id);
            }
            Err(e) => tracing::warn!("Dropped note edit: {}", e),
        }
    }

    pub fn delete_note(&mut self, id: NoteId) {
        self.notes.write().retain(|note| note.id != id);
        if (self.selected_note)() == Some(id) {
            self.selected_note.set(None);
        }
        if (self.editing_note)() == Some(id) {
            self.editing_note.set(None);
        }
        tracing::info!("Deleted note: {}", id);
    }

    /// Note open in the edit panel, if it still exists
    #[must_use]
    pub fn editing(&self) -> Option<Note> {
        let id = (self.editing_note)()?;
        self.notes.read().iter().find(|note| note.id == id).cloned()
    }
}
