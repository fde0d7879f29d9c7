//! User avatar: profile photo with an initial-letter fallback

use dioxus::prelude::*;
use roost_core::models::User;

use crate::theme::use_palette;

#[component]
pub fn Avatar(
    user: User,
    #[props(default = 36)] size: u32,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let colors = use_palette();
    let cursor = if onclick.is_some() { "pointer" } else { "default" };
    let font_size = size * 2 / 5;
    let initial = user.initial();

    let handle_click = move |evt: MouseEvent| {
        if let Some(handler) = onclick {
            handler.call(evt);
        }
    };

    match user.photo() {
        Some(url) => rsx! {
            img {
                class: "avatar avatar-photo",
                src: "{url}",
                alt: "{user.display_name}",
                style: "
                    width: {size}px;
                    height: {size}px;
                    border-radius: 50%;
                    object-fit: cover;
                    cursor: {cursor};
                ",
                onclick: handle_click,
            }
        },
        None => rsx! {
            div {
                class: "avatar avatar-initial",
                title: "{user.display_name}",
                style: "
                    width: {size}px;
                    height: {size}px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    font-size: {font_size}px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    cursor: {cursor};
                ",
                onclick: handle_click,
                "{initial}"
            }
        },
    }
}
