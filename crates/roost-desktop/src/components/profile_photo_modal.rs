//! Full-screen profile photo viewer

use dioxus::prelude::*;
use roost_core::util::normalize_text_option;

use crate::theme::use_palette;

/// Overlay showing an enlarged profile photo.
///
/// Renders nothing while closed or without a photo. Clicking the backdrop,
/// the close button, or pressing Escape calls `on_close`.
#[component]
pub fn ProfilePhotoModal(
    is_open: bool,
    photo_url: Option<String>,
    #[props(default = "Profile photo".to_string())] alt: String,
    on_close: EventHandler<()>,
) -> Element {
    let colors = use_palette();

    let Some(url) = normalize_text_option(photo_url.as_deref()).filter(|_| is_open) else {
        return VNode::empty();
    };

    rsx! {
        div {
            class: "photo-modal-overlay",
            role: "dialog",
            tabindex: "-1",
            style: "
                position: fixed;
                inset: 0;
                z-index: 1000;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                outline: none;
            ",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus photo overlay: {:?}", e);
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            button {
                class: "photo-modal-close",
                title: "Close",
                style: "
                    position: absolute;
                    top: 16px;
                    right: 16px;
                    width: 36px;
                    height: 36px;
                    border: none;
                    border-radius: 50%;
                    cursor: pointer;
                    font-size: 18px;
                    background: rgba(255, 255, 255, 0.15);
                    color: #ffffff;
                ",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_close.call(());
                },
                "✕"
            }

            img {
                class: "photo-modal-image",
                src: "{url}",
                alt: "{alt}",
                style: "
                    max-width: 90vw;
                    max-height: 90vh;
                    border-radius: 8px;
                    object-fit: contain;
                ",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }
        }
    }
}
