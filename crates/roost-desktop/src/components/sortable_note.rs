//! A single note card inside the sortable note list

use dioxus::prelude::*;
use roost_core::models::{Note, NoteId, PriorityConfig};
use roost_core::util::truncate_with_ellipsis;

use super::sortable::SortableContext;
use crate::theme::use_palette;

const TITLE_MAX_CHARS: usize = 60;
const PREVIEW_MAX_CHARS: usize = 140;

/// Note card with drag handle, count badges, priority icon and actions.
///
/// Inside a [`SortableNoteList`](super::SortableNoteList) the handle is
/// draggable and the card dims while dragged. Edit and delete stop event
/// propagation so they never select the row.
#[component]
pub fn SortableNote(
    note: Note,
    priorities: PriorityConfig,
    #[props(default)] is_selected: bool,
    on_select: EventHandler<NoteId>,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let colors = use_palette();
    let sortable = try_use_context::<SortableContext>();

    let note_id = note.id;
    let is_dragging = sortable.is_some_and(|ctx| ctx.is_dragging(note_id));
    let is_over = sortable.is_some_and(|ctx| ctx.is_over(note_id));
    let handle_draggable = if sortable.is_some() { "true" } else { "false" };

    let counts = note.counts();
    let priority = priorities.resolve(note.priority);
    let title = note.display_title(TITLE_MAX_CHARS);
    let preview = truncate_with_ellipsis(&note.content, PREVIEW_MAX_CHARS);
    let reminder_title = note
        .next_reminder()
        .map_or_else(String::new, |reminder| format!("Next reminder: {reminder}"));

    let opacity = if is_dragging { "0.5" } else { "1" };
    let border = if is_selected {
        colors.accent
    } else if is_over {
        colors.text_muted
    } else {
        colors.border
    };

    rsx! {
        div {
            class: if is_selected { "sortable-note selected" } else { "sortable-note" },
            "data-note-id": "{note_id}",
            style: "
                display: flex;
                gap: 10px;
                padding: 10px 12px;
                border: 1px solid {border};
                border-left: 4px solid {priority.color};
                border-radius: 8px;
                cursor: pointer;
                background: {colors.bg_primary};
                opacity: {opacity};
                transition: opacity 0.15s, border-color 0.15s;
            ",
            onclick: move |_| on_select.call(note_id),

            span {
                class: "drag-handle",
                draggable: handle_draggable,
                title: "Drag to reorder",
                style: "cursor: grab; color: {colors.text_muted}; user-select: none;",
                "⠿"
            }

            div {
                style: "flex: 1; min-width: 0;",

                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    span {
                        class: "priority-icon",
                        title: "{priority.label}",
                        style: "color: {priority.color}; font-weight: 700;",
                        "{priority.icon}"
                    }
                    span {
                        class: "note-title",
                        style: "
                            font-weight: 500;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                            color: {colors.text_primary};
                        ",
                        "{title}"
                    }
                }

                if !preview.is_empty() {
                    div {
                        class: "note-content",
                        style: "
                            margin-top: 4px;
                            font-size: 12px;
                            color: {colors.text_secondary};
                            overflow: hidden;
                            text-overflow: ellipsis;
                        ",
                        "{preview}"
                    }
                }

                div {
                    class: "note-badges",
                    style: "display: flex; gap: 10px; margin-top: 6px; font-size: 11px; color: {colors.text_muted};",
                    if counts.has_reminders() {
                        span { class: "badge-reminders", title: "{reminder_title}", "🔔 {counts.reminders}" }
                    }
                    if counts.has_subtasks() {
                        span {
                            class: "badge-subtasks",
                            title: "Subtasks",
                            "☑ {counts.subtasks_done}/{counts.subtasks_total}"
                        }
                    }
                    if counts.has_attachments() {
                        span { class: "badge-attachments", title: "Attachments", "📎 {counts.attachments}" }
                    }
                }
            }

            div {
                class: "note-actions",
                style: "display: flex; align-items: flex-start; gap: 4px;",
                button {
                    class: "note-edit",
                    title: "Edit note",
                    style: "border: none; background: transparent; cursor: pointer; color: {colors.text_secondary};",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_edit.call(note_id);
                    },
                    "✎"
                }
                button {
                    class: "note-delete",
                    title: "Delete note",
                    style: "border: none; background: transparent; cursor: pointer; color: {colors.error};",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(note_id);
                    },
                    "🗑"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use crate::components::test_support::{render, Mounted};
    use pretty_assertions::assert_eq;
    use roost_core::models::{NoteAttachment, Priority, PriorityStyle, Reminder, Subtask};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct Props {
        note: Note,
        priorities: PriorityConfig,
    }

    fn card(props: Props) -> Element {
        rsx! {
            SortableNote {
                note: props.note,
                priorities: props.priorities,
                on_select: |_| {},
                on_edit: |_| {},
                on_delete: |_| {},
            }
        }
    }

    /// Card inside a drag session where `active` is being dragged
    #[derive(Clone)]
    struct Dragging {
        note: Note,
        active: NoteId,
    }

    fn card_in_drag(props: Dragging) -> Element {
        let dragged = props.active;
        let active = use_signal(move || Some(dragged));
        let over = use_signal(|| None);
        use_context_provider(|| SortableContext { active, over });
        rsx! {
            SortableNote {
                note: props.note,
                priorities: PriorityConfig::default(),
                on_select: |_| {},
                on_edit: |_| {},
                on_delete: |_| {},
            }
        }
    }

    type Calls = Rc<RefCell<Vec<(&'static str, NoteId)>>>;

    #[derive(Clone)]
    struct Recorded {
        note: Note,
        calls: Calls,
    }

    fn recorded_card(props: Recorded) -> Element {
        let Recorded { note, calls } = props;
        let (select, edit, delete) = (calls.clone(), calls.clone(), calls);
        rsx! {
            SortableNote {
                note,
                priorities: PriorityConfig::default(),
                on_select: move |id| select.borrow_mut().push(("select", id)),
                on_edit: move |id| edit.borrow_mut().push(("edit", id)),
                on_delete: move |id| delete.borrow_mut().push(("delete", id)),
            }
        }
    }

    fn plain(note: Note) -> Props {
        Props {
            note,
            priorities: PriorityConfig::default(),
        }
    }

    #[test]
    fn no_badges_for_bare_note() {
        let html = render(card, plain(Note::new("Plain", "nothing attached")));
        assert!(!html.contains("badge-reminders"));
        assert!(!html.contains("badge-subtasks"));
        assert!(!html.contains("badge-attachments"));
        assert!(html.contains("Plain"));
        assert!(html.contains("nothing attached"));
    }

    #[test]
    fn shows_counts_when_present() {
        let mut note = Note::new("Launch", "");
        note.reminders = vec![Reminder {
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            time: None,
        }];
        note.subtasks = vec![Subtask::done("spec"), Subtask::new("ship")];
        note.attachments = vec![
            NoteAttachment {
                filename: "a.png".to_string(),
                mime_type: "image/png".to_string(),
            },
            NoteAttachment {
                filename: "b.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
            },
        ];

        let html = render(card, plain(note));
        assert!(html.contains("🔔 1"));
        assert!(html.contains("title=\"Next reminder: 2024-04-01\""));
        assert!(html.contains("☑ 1/2"));
        assert!(html.contains("📎 2"));
    }

    #[test]
    fn priority_icon_comes_from_lookup_table() {
        let priorities = PriorityConfig::empty().with(
            Priority::High,
            PriorityStyle::new("H!", "#123456", "Hot"),
        );
        let html = render(
            card,
            Props {
                note: Note::new("Fix", "").with_priority(Priority::High),
                priorities,
            },
        );
        assert!(html.contains("H!"));
        assert!(html.contains("#123456"));
        assert!(html.contains("title=\"Hot\""));
    }

    #[test]
    fn not_draggable_outside_sortable_list() {
        let html = render(card, plain(Note::new("Loose", "")));
        assert!(html.contains("draggable=\"false\""));
        assert!(html.contains("opacity: 1;"));
    }

    #[test]
    fn reminder_tooltip_names_the_earliest_reminder() {
        let mut note = Note::new("Call", "");
        note.reminders = vec![
            Reminder {
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                time: None,
            },
            Reminder {
                date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
                time: NaiveTime::from_hms_opt(9, 30, 0),
            },
        ];
        let html = render(card, plain(note));
        assert!(html.contains("🔔 2"));
        assert!(html.contains("title=\"Next reminder: 2024-05-20 09:30\""));
    }

    #[test]
    fn dims_while_it_is_the_dragged_note() {
        let note = Note::new("Dragged", "");
        let active = note.id;
        let html = render(card_in_drag, Dragging { note, active });
        assert!(html.contains("opacity: 0.5;"));
        assert!(html.contains("draggable=\"true\""));
    }

    #[test]
    fn stays_opaque_while_another_note_is_dragged() {
        let html = render(
            card_in_drag,
            Dragging {
                note: Note::new("Still", ""),
                active: NoteId::new(),
            },
        );
        assert!(html.contains("opacity: 1;"));
        assert!(!html.contains("opacity: 0.5;"));
    }

    #[test]
    fn edit_and_delete_clicks_do_not_select_the_row() {
        let note = Note::new("Act", "");
        let id = note.id;
        let calls = Calls::default();
        let mounted = Mounted::new(
            recorded_card,
            Recorded {
                note,
                calls: calls.clone(),
            },
        );

        let clicks = mounted.listeners("click");
        assert_eq!(clicks.len(), 3);
        let (row, edit, delete) = (clicks[0], clicks[1], clicks[2]);

        mounted.click(edit);
        assert_eq!(*calls.borrow(), vec![("edit", id)]);

        mounted.click(delete);
        assert_eq!(*calls.borrow(), vec![("edit", id), ("delete", id)]);

        mounted.click(row);
        assert_eq!(
            *calls.borrow(),
            vec![("edit", id), ("delete", id), ("select", id)]
        );
    }
}
