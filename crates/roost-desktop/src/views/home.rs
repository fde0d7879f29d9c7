//! Home view - chat workspace beside the note board

use dioxus::prelude::*;

use super::note_edit_panel::NoteEditPanel;
use crate::components::{ChatInput, ChatMessages, ChatSidebar, SortableNoteList};
use crate::state::AppState;
use crate::theme::use_palette;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let colors = use_palette();

    let user = (state.current_user)();
    let settings = (state.settings)();
    let active_tab = (state.active_tab)();
    let editing = state.editing();
    let pane_title = active_tab.label();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            ChatSidebar {
                user: user.clone(),
                active_tab,
                unread: (state.unread)(),
                on_tab_change: move |tab| state.select_tab(tab),
                on_avatar_click: move |()| state.photo_open.set(true),
            }

            div {
                class: "chat-pane",
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                header {
                    style: "
                        padding: 12px 16px;
                        font-weight: 600;
                        border-bottom: 1px solid {colors.border};
                        color: {colors.text_primary};
                    ",
                    "{pane_title}"
                }

                ChatMessages {
                    messages: (state.messages)(),
                    current_user_id: user.id.clone(),
                    typing_user: (state.typing_user)(),
                    clock_24h: settings.clock_24h,
                    on_reply: move |message| state.start_reply(&message),
                }

                ChatInput {
                    draft: (state.draft)(),
                    reply_to: (state.reply_to)(),
                    on_draft_change: move |text| state.draft.set(text),
                    on_send: move |()| state.send_draft(),
                    on_typing_change: move |typing: bool| {
                        tracing::debug!("Local typing: {}", typing);
                    },
                    on_attach: move |kind| {
                        tracing::info!("Attachment requested: {:?}", kind);
                    },
                    on_cancel_reply: move |()| state.reply_to.set(None),
                }
            }

            div {
                class: "note-board",
                style: "
                    width: 320px;
                    display: flex;
                    flex-direction: column;
                    border-left: 1px solid {colors.border};
                ",

                h2 {
                    style: "
                        margin: 0;
                        padding: 12px 16px;
                        font-size: 14px;
                        font-weight: 600;
                        color: {colors.text_secondary};
                        border-bottom: 1px solid {colors.border};
                    ",
                    "Notes"
                }

                SortableNoteList {
                    notes: (state.notes)(),
                    priorities: (state.priorities)(),
                    selected: (state.selected_note)(),
                    on_reorder: move |reorder| state.reorder_notes(reorder),
                    on_select: move |id| state.select_note(id),
                    on_edit: move |id| state.edit_note(id),
                    on_delete: move |id| state.delete_note(id),
                }

                {editing.map(|note| {
                    let id = note.id;
                    rsx! {
                        NoteEditPanel { key: "{id}", note }
                    }
                })}
            }
        }
    }
}
