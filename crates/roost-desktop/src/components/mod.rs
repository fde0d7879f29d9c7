//! UI Components
//!
//! Presentational components for the chat workspace and the note board.
//! Each one renders from props and reports user intent through callbacks.

mod avatar;
mod chat_input;
mod chat_messages;
mod chat_sidebar;
mod profile_photo_modal;
mod sortable;
mod sortable_note;

#[cfg(test)]
mod test_support;

pub use avatar::Avatar;
pub use chat_input::ChatInput;
pub use chat_messages::ChatMessages;
pub use chat_sidebar::ChatSidebar;
pub use profile_photo_modal::ProfilePhotoModal;
pub use sortable::SortableNoteList;
pub use sortable_note::SortableNote;
