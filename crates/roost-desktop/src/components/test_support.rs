//! Helpers for rendering components and dispatching events in unit tests

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::html::point_interaction::SerializedPointInteraction;
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::prelude::*;

/// Render `root` with `props` into an HTML string.
pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of non-overlapping occurrences of `needle` in `html`
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// A mounted `VirtualDom` that tests can fire bubbling events into
pub struct Mounted {
    dom: VirtualDom,
    edits: Vec<Mutation>,
}

impl Mounted {
    pub fn new<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new_with_props(root, props);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        Self {
            dom,
            edits: mutations.edits,
        }
    }

    /// Elements listening for `event` (e.g. `"click"`), in document order
    pub fn listeners(&self, event: &str) -> Vec<ElementId> {
        self.edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == event => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn click(&self, target: ElementId) {
        self.dispatch("click", target, Box::<SerializedMouseData>::default());
    }

    /// Fire a drag event such as `"dragstart"` or `"drop"`
    pub fn drag(&self, event: &str, target: ElementId) {
        let data: SerializedDragData = serde_json::from_value(serde_json::json!({
            "mouse": SerializedPointInteraction::default(),
        }))
        .unwrap();
        self.dispatch(event, target, Box::new(data));
    }

    fn dispatch(&self, name: &str, target: ElementId, data: Box<dyn Any>) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event(name, event, target);
    }
}
