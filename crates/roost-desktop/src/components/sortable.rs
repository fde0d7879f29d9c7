//! Drag-sortable note list.
//!
//! Built on the HTML5 drag events: the list tracks which note is being
//! dragged and which it is over, and reports a [`Reorder`] on drop. The
//! caller commits the new order.

use dioxus::prelude::*;
use roost_core::models::{Note, NoteId, PriorityConfig};
use roost_core::sortable::Reorder;

use super::SortableNote;
use crate::theme::use_palette;

/// Drag session shared with the notes inside a [`SortableNoteList`]
#[derive(Clone, Copy)]
pub struct SortableContext {
    /// Note currently being dragged
    pub active: Signal<Option<NoteId>>,
    /// Note the pointer is over
    pub over: Signal<Option<NoteId>>,
}

impl SortableContext {
    #[must_use]
    pub fn is_dragging(&self, id: NoteId) -> bool {
        (self.active)() == Some(id)
    }

    #[must_use]
    pub fn is_over(&self, id: NoteId) -> bool {
        (self.over)() == Some(id) && !self.is_dragging(id)
    }

    fn reset(&mut self) {
        self.active.set(None);
        self.over.set(None);
    }
}

#[component]
pub fn SortableNoteList(
    notes: Vec<Note>,
    priorities: PriorityConfig,
    selected: Option<NoteId>,
    on_reorder: EventHandler<Reorder>,
    on_select: EventHandler<NoteId>,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let colors = use_palette();
    let active = use_signal(|| None);
    let over = use_signal(|| None);
    let mut sortable = use_context_provider(|| SortableContext { active, over });
    let ids: Vec<NoteId> = notes.iter().map(|note| note.id).collect();
    let is_empty = notes.is_empty();

    rsx! {
        div {
            class: "sortable-note-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 12px;
                overflow-y: auto;
                background: {colors.bg_secondary};
            ",

            if is_empty {
                div {
                    class: "note-list-empty",
                    style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                    "No notes yet"
                }
            }

            for note in notes {
                {
                    let note_id = note.id;
                    let ids = ids.clone();
                    rsx! {
                        div {
                            key: "{note_id}",
                            class: "sortable-item",
                            ondragstart: move |_| {
                                tracing::debug!("Drag started: {}", note_id);
                                sortable.active.set(Some(note_id));
                            },
                            ondragover: move |evt: DragEvent| {
                                evt.prevent_default();
                                if (sortable.over)() != Some(note_id) {
                                    sortable.over.set(Some(note_id));
                                }
                            },
                            ondrop: move |evt: DragEvent| {
                                evt.prevent_default();
                                let dragged = (sortable.active)();
                                sortable.reset();
                                if let Some(reorder) =
                                    dragged.and_then(|dragged| Reorder::between(&ids, &dragged, &note_id))
                                {
                                    tracing::debug!("Dropped {:?}", reorder);
                                    on_reorder.call(reorder);
                                }
                            },
                            ondragend: move |_| sortable.reset(),

                            SortableNote {
                                note,
                                priorities: priorities.clone(),
                                is_selected: selected == Some(note_id),
                                on_select,
                                on_edit,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{count, render, Mounted};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn list(notes: Vec<Note>) -> Element {
        rsx! {
            SortableNoteList {
                notes,
                priorities: PriorityConfig::default(),
                on_reorder: |_| {},
                on_select: |_| {},
                on_edit: |_| {},
                on_delete: |_| {},
            }
        }
    }

    #[derive(Clone)]
    struct Recorded {
        notes: Vec<Note>,
        reorders: Rc<RefCell<Vec<Reorder>>>,
    }

    fn recorded_list(props: Recorded) -> Element {
        let Recorded { notes, reorders } = props;
        rsx! {
            SortableNoteList {
                notes,
                priorities: PriorityConfig::default(),
                on_reorder: move |reorder| reorders.borrow_mut().push(reorder),
                on_select: |_| {},
                on_edit: |_| {},
                on_delete: |_| {},
            }
        }
    }

    fn mount_three() -> (Mounted, Rc<RefCell<Vec<Reorder>>>) {
        let reorders = Rc::new(RefCell::new(Vec::new()));
        let mounted = Mounted::new(
            recorded_list,
            Recorded {
                notes: vec![Note::new("A", ""), Note::new("B", ""), Note::new("C", "")],
                reorders: reorders.clone(),
            },
        );
        (mounted, reorders)
    }

    #[test]
    fn renders_each_note_with_drag_handle() {
        let html = render(list, vec![Note::new("One", ""), Note::new("Two", "")]);
        assert_eq!(count(&html, "class=\"sortable-item\""), 2);
        assert_eq!(count(&html, "draggable=\"true\""), 2);
        assert!(!html.contains("note-list-empty"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render(list, Vec::new());
        assert!(html.contains("note-list-empty"));
    }

    #[test]
    fn drop_on_another_note_reports_reorder() {
        let (mounted, reorders) = mount_three();
        let items = mounted.listeners("drop");
        assert_eq!(items.len(), 3);
        assert_eq!(mounted.listeners("dragstart"), items);

        mounted.drag("dragstart", items[0]);
        mounted.drag("dragover", items[2]);
        mounted.drag("drop", items[2]);
        assert_eq!(*reorders.borrow(), vec![Reorder { from: 0, to: 2 }]);

        mounted.drag("dragstart", items[2]);
        mounted.drag("drop", items[1]);
        assert_eq!(
            *reorders.borrow(),
            vec![Reorder { from: 0, to: 2 }, Reorder { from: 2, to: 1 }]
        );
    }

    #[test]
    fn drop_on_itself_reports_nothing() {
        let (mounted, reorders) = mount_three();
        let items = mounted.listeners("drop");

        mounted.drag("dragstart", items[1]);
        mounted.drag("drop", items[1]);
        assert!(reorders.borrow().is_empty());
    }

    #[test]
    fn drop_without_drag_start_reports_nothing() {
        let (mounted, reorders) = mount_three();
        let items = mounted.listeners("drop");

        mounted.drag("drop", items[0]);
        assert!(reorders.borrow().is_empty());
    }

    #[test]
    fn drag_end_cancels_the_session() {
        let (mounted, reorders) = mount_three();
        let items = mounted.listeners("drop");

        mounted.drag("dragstart", items[0]);
        mounted.drag("dragend", items[0]);
        mounted.drag("drop", items[2]);
        assert!(reorders.borrow().is_empty());
    }
}
