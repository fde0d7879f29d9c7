//! Inline editor for the note picked with a card's edit action

use dioxus::prelude::*;
use roost_core::models::Note;

use crate::state::AppState;
use crate::theme::use_palette;

#[component]
pub fn NoteEditPanel(note: Note) -> Element {
    let mut state = use_context::<AppState>();
    let colors = use_palette();
    let note_id = note.id;
    let mut title = use_signal(|| note.title.clone());
    let mut content = use_signal(|| note.content.clone());

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 6px 8px; border: 1px solid {}; \
         border-radius: 6px; font: inherit; background: {}; color: {};",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-edit-panel",
            style: "
                padding: 12px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                border-top: 1px solid {colors.border};
                background: {colors.bg_tertiary};
            ",
            input {
                r#type: "text",
                placeholder: "Title",
                value: "{title}",
                style: "{input_style}",
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                rows: "4",
                placeholder: "Content",
                value: "{content}",
                style: "{input_style} resize: vertical;",
                oninput: move |evt| content.set(evt.value()),
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    onclick: move |_| state.editing_note.set(None),
                    "Cancel"
                }
                button {
                    style: "background: {colors.accent}; color: {colors.accent_text}; border: none; border-radius: 6px; padding: 4px 12px;",
                    onclick: move |_| {
                        state.update_note(note_id, title(), content());
                        state.editing_note.set(None);
                        tracing::info!("Updated note: {}", note_id);
                    },
                    "Save"
                }
            }
        }
    }
}
