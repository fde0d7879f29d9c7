//! Message composer with attachment buttons and reply banner

use dioxus::prelude::*;
use roost_core::chat::{can_send, typing_transition, AttachmentKind};
use roost_core::models::ReplyContext;

use crate::theme::use_palette;

/// Controlled composer.
///
/// The draft lives with the caller: every keystroke is reported through
/// `on_draft_change` and submitting calls `on_send`. Typing start/stop is
/// reported only when the draft flips between blank and non-blank.
#[component]
pub fn ChatInput(
    draft: String,
    on_draft_change: EventHandler<String>,
    on_send: EventHandler<()>,
    on_typing_change: Option<EventHandler<bool>>,
    on_attach: Option<EventHandler<AttachmentKind>>,
    reply_to: Option<ReplyContext>,
    on_cancel_reply: Option<EventHandler<()>>,
    #[props(default = "Type a message...".to_string())] placeholder: String,
) -> Element {
    let colors = use_palette();
    let sendable = can_send(&draft);
    let send_bg = if sendable { colors.accent } else { colors.border };

    let submit = move || {
        if !sendable {
            return;
        }
        on_send.call(());
        if let Some(handler) = on_typing_change {
            handler.call(false);
        }
    };

    let previous = draft.clone();
    let on_input = move |evt: FormEvent| {
        let next = evt.value();
        if let (Some(handler), Some(typing)) = (on_typing_change, typing_transition(&previous, &next))
        {
            handler.call(typing);
        }
        on_draft_change.call(next);
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().shift() {
            evt.prevent_default();
            submit();
        }
    };

    let attach = move |kind: AttachmentKind| {
        if let Some(handler) = on_attach {
            handler.call(kind);
        }
    };

    rsx! {
        div {
            class: "chat-input",
            style: "
                border-top: 1px solid {colors.border};
                background: {colors.bg_secondary};
                padding: 10px 12px;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",

            {reply_to.map(|reply| rsx! {
                div {
                    class: "reply-banner",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 6px 10px;
                        border-left: 3px solid {colors.accent};
                        border-radius: 4px;
                        background: {colors.bg_tertiary};
                        font-size: 12px;
                    ",
                    div {
                        style: "flex: 1; overflow: hidden;",
                        div {
                            style: "font-weight: 600; color: {colors.accent};",
                            "Replying to {reply.sender_name}"
                        }
                        div {
                            class: "reply-excerpt",
                            style: "
                                color: {colors.text_secondary};
                                white-space: nowrap;
                                overflow: hidden;
                                text-overflow: ellipsis;
                            ",
                            "{reply.excerpt}"
                        }
                    }
                    button {
                        class: "cancel-reply",
                        title: "Cancel reply",
                        style: "border: none; background: transparent; cursor: pointer; color: {colors.text_muted};",
                        onclick: move |_| {
                            if let Some(handler) = on_cancel_reply {
                                handler.call(());
                            }
                        },
                        "✕"
                    }
                }
            })}

            div {
                style: "display: flex; align-items: flex-end; gap: 6px;",

                button {
                    class: "attach-button attach-image",
                    title: "Attach image",
                    style: "border: none; background: transparent; cursor: pointer; font-size: 18px;",
                    onclick: move |_| attach(AttachmentKind::Image),
                    "🖼"
                }
                button {
                    class: "attach-button attach-file",
                    title: "Attach file",
                    style: "border: none; background: transparent; cursor: pointer; font-size: 18px;",
                    onclick: move |_| attach(AttachmentKind::File),
                    "📎"
                }

                textarea {
                    class: "chat-draft",
                    rows: "1",
                    style: "
                        flex: 1;
                        resize: none;
                        padding: 8px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 18px;
                        outline: none;
                        font-family: inherit;
                        font-size: inherit;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    oninput: on_input,
                    onkeydown: on_keydown,
                }

                button {
                    class: "send-button",
                    "data-can-send": "{sendable}",
                    disabled: !sendable,
                    style: "
                        padding: 8px 14px;
                        border: none;
                        border-radius: 18px;
                        font-weight: 600;
                        cursor: pointer;
                        background: {send_bg};
                        color: {colors.accent_text};
                    ",
                    onclick: move |_| submit(),
                    "Send"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{count, render};
    use roost_core::models::{Message, User};

    #[derive(Clone)]
    struct Props {
        draft: &'static str,
        reply_to: Option<ReplyContext>,
    }

    fn composer(props: Props) -> Element {
        rsx! {
            ChatInput {
                draft: props.draft.to_string(),
                on_draft_change: |_| {},
                on_send: |_| {},
                reply_to: props.reply_to,
            }
        }
    }

    fn draft(text: &'static str) -> Props {
        Props {
            draft: text,
            reply_to: None,
        }
    }

    #[test]
    fn send_disabled_for_blank_drafts() {
        for text in ["", "   "] {
            let html = render(composer, draft(text));
            assert!(html.contains("data-can-send=\"false\""), "draft {text:?}");
            assert_eq!(count(&html, " disabled=true"), 1, "draft {text:?}");
        }
    }

    #[test]
    fn send_enabled_for_text() {
        let html = render(composer, draft("hi"));
        assert!(html.contains("data-can-send=\"true\""));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn reply_banner_only_when_replying() {
        assert!(!render(composer, draft("")).contains("reply-banner"));

        let original = Message::at(User::new("ada", "Ada"), "Are we shipping today?", 0);
        let html = render(
            composer,
            Props {
                draft: "",
                reply_to: Some(ReplyContext::from_message(&original)),
            },
        );
        assert!(html.contains("reply-banner"));
        assert!(html.contains("Replying to Ada"));
        assert!(html.contains("Are we shipping today?"));
        assert!(html.contains("cancel-reply"));
    }

    #[test]
    fn renders_both_attachment_buttons() {
        let html = render(composer, draft(""));
        assert!(html.contains("attach-image"));
        assert!(html.contains("attach-file"));
    }
}
