//! Application views

mod home;
mod note_edit_panel;

pub use home::Home;
