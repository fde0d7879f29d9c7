//! Scrollable chat message list grouped by day

use chrono::{FixedOffset, Local, NaiveDate, Offset};
use dioxus::prelude::*;
use roost_core::chat::{format_time, group_by_day, ChatRow};
use roost_core::models::{Message, UserId};

use crate::theme::{use_palette, ColorPalette};

const TYPING_KEYFRAMES: &str = r"
@keyframes roost-typing-bounce {
    0%, 80%, 100% { transform: translateY(0); opacity: 0.4; }
    40% { transform: translateY(-4px); opacity: 1; }
}
";

/// Ordered message list.
///
/// Day separators are derived from the message timestamps at the viewer's
/// UTC offset (`utc_offset_minutes`, defaulting to the local zone). `today`
/// only affects the "Today"/"Yesterday" labels.
#[component]
pub fn ChatMessages(
    messages: Vec<Message>,
    current_user_id: UserId,
    typing_user: Option<String>,
    utc_offset_minutes: Option<i32>,
    today: Option<NaiveDate>,
    #[props(default = true)] clock_24h: bool,
    on_reply: Option<EventHandler<Message>>,
) -> Element {
    let colors = use_palette();
    let offset = viewer_offset(utc_offset_minutes);
    let today = today.unwrap_or_else(|| Local::now().with_timezone(&offset).date_naive());
    let rows = group_by_day(&messages, &current_user_id, offset, today);

    rsx! {
        div {
            class: "chat-messages",
            style: "
                flex: 1;
                overflow-y: auto;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 6px;
                background: {colors.bg_primary};
            ",

            if rows.is_empty() {
                div {
                    class: "chat-empty",
                    style: "
                        margin: auto;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No messages yet. Say hello!"
                }
            } else {
                for row in rows {
                    {render_row(row, offset, clock_24h, on_reply, colors)}
                }
            }

            {typing_user.map(|name| rsx! { TypingIndicator { name } })}
        }
    }
}

fn viewer_offset(utc_offset_minutes: Option<i32>) -> FixedOffset {
    utc_offset_minutes
        .and_then(|minutes| minutes.checked_mul(60))
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Local::now().offset().fix())
}

fn render_row(
    row: ChatRow,
    offset: FixedOffset,
    clock_24h: bool,
    on_reply: Option<EventHandler<Message>>,
    colors: &ColorPalette,
) -> Element {
    match row {
        ChatRow::DaySeparator { date, label } => rsx! {
            div {
                key: "day-{date}",
                class: "date-separator",
                style: "
                    align-self: center;
                    margin: 12px 0 6px;
                    padding: 2px 10px;
                    border-radius: 10px;
                    font-size: 11px;
                    background: {colors.bg_tertiary};
                    color: {colors.text_secondary};
                ",
                "{label}"
            }
        },
        ChatRow::Message { message, own } => {
            let id = message.id;
            let time = format_time(message.sent_at, offset, clock_24h);
            rsx! {
                MessageBubble {
                    key: "{id}",
                    message,
                    own,
                    time,
                    on_reply,
                }
            }
        }
    }
}

#[component]
fn MessageBubble(
    message: Message,
    own: bool,
    time: String,
    on_reply: Option<EventHandler<Message>>,
) -> Element {
    let colors = use_palette();
    let reply_target = message.clone();

    let (align, bg, text_color) = if own {
        ("flex-end", colors.bubble_own, colors.bubble_own_text)
    } else {
        ("flex-start", colors.bubble_other, colors.text_primary)
    };
    let (receipt, receipt_title) = if message.read {
        ("✓✓", "Read")
    } else {
        ("✓", "Sent")
    };

    rsx! {
        div {
            class: if own { "message-row own" } else { "message-row" },
            style: "display: flex; flex-direction: column; align-items: {align};",

            if !own {
                span {
                    class: "message-sender",
                    style: "font-size: 11px; color: {colors.text_secondary}; margin-bottom: 2px;",
                    "{message.sender.display_name}"
                }
            }

            div {
                class: "message-bubble",
                title: if on_reply.is_some() { "Double-click to reply" } else { "" },
                ondoubleclick: move |_| {
                    if let Some(handler) = on_reply {
                        handler.call(reply_target.clone());
                    }
                },
                style: "
                    max-width: 70%;
                    padding: 8px 12px;
                    border-radius: 12px;
                    white-space: pre-wrap;
                    word-break: break-word;
                    background: {bg};
                    color: {text_color};
                ",
                "{message.text}"
            }

            div {
                class: "message-meta",
                style: "font-size: 10px; color: {colors.text_muted}; margin-top: 2px;",
                span { "{time}" }
                if own {
                    span {
                        class: if message.read { "read-receipt read" } else { "read-receipt" },
                        title: "{receipt_title}",
                        style: "margin-left: 4px;",
                        "{receipt}"
                    }
                }
            }
        }
    }
}

#[component]
fn TypingIndicator(name: String) -> Element {
    let colors = use_palette();

    rsx! {
        style { "{TYPING_KEYFRAMES}" }
        div {
            class: "typing-indicator",
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 4px 0;
                font-size: 12px;
                color: {colors.text_muted};
            ",
            span {
                style: "display: inline-flex; gap: 3px;",
                for delay in ["0s", "0.16s", "0.32s"] {
                    span {
                        class: "typing-dot",
                        style: "
                            width: 6px;
                            height: 6px;
                            border-radius: 50%;
                            background: {colors.text_muted};
                            animation: roost-typing-bounce 1.2s infinite ease-in-out;
                            animation-delay: {delay};
                        ",
                    }
                }
            }
            "{name} is typing"
        }
    }
}
