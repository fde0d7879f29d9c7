//! Chat sidebar with the user avatar, tab switcher and unread badge

use dioxus::prelude::*;
use roost_core::chat::{ChatTab, UnreadCounts};
use roost_core::models::User;

use super::Avatar;
use crate::theme::use_palette;

/// Sidebar for the chat workspace.
///
/// Selection state belongs to the caller; clicking a tab only reports it.
/// The unread badge sums every conversation and is hidden when no counts
/// were supplied.
#[component]
pub fn ChatSidebar(
    user: User,
    active_tab: ChatTab,
    unread: UnreadCounts,
    on_tab_change: EventHandler<ChatTab>,
    on_avatar_click: Option<EventHandler<()>>,
) -> Element {
    let colors = use_palette();
    let unread_total = (!unread.is_empty()).then(|| unread.total());
    let avatar_click = on_avatar_click.map(|handler| {
        EventHandler::new(move |_: MouseEvent| handler.call(()))
    });

    rsx! {
        aside {
            class: "chat-sidebar",
            style: "
                width: 220px;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            div {
                class: "chat-sidebar-user",
                style: "display: flex; align-items: center; gap: 10px;",
                Avatar { user: user.clone(), size: 40, onclick: avatar_click }
                span {
                    style: "
                        font-weight: 600;
                        color: {colors.text_primary};
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{user.display_name}"
                }
            }

            nav {
                class: "chat-tabs",
                style: "display: flex; flex-direction: column; gap: 4px;",
                for tab in ChatTab::ALL {
                    {
                        let badge = if tab == ChatTab::Inbox { unread_total } else { None };
                        rsx! {
                            TabButton {
                                key: "{tab}",
                                tab,
                                is_active: tab == active_tab,
                                badge,
                                onclick: move |_| on_tab_change.call(tab),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(
    tab: ChatTab,
    is_active: bool,
    badge: Option<u32>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let colors = use_palette();
    let label = tab.label();

    let bg = if is_active { colors.accent } else { "transparent" };
    let text_color = if is_active {
        colors.accent_text
    } else {
        colors.text_primary
    };

    rsx! {
        button {
            class: if is_active { "chat-tab active" } else { "chat-tab" },
            "data-active": "{is_active}",
            style: "
                padding: 8px 10px;
                border: none;
                border-radius: 6px;
                cursor: pointer;
                background: {bg};
                color: {text_color};
                display: flex;
                justify-content: space-between;
                align-items: center;
                font: inherit;
                transition: background 0.15s;
            ",
            onclick: onclick,
            span { "{label}" }
            {badge.map(|count| rsx! {
                span {
                    class: "unread-badge",
                    style: "
                        min-width: 18px;
                        padding: 1px 6px;
                        border-radius: 9px;
                        font-size: 11px;
                        font-weight: 600;
                        text-align: center;
                        background: {colors.badge};
                        color: #ffffff;
                    ",
                    "{count}"
                }
            })}
        }
    }
}
