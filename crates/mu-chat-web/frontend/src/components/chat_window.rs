//! Chat window — message feed, typing indicator, quick questions, input.
//!
//! Each window owns its `Conversation` and the pending reply timer. The
//! timer is dropped (which cancels it) when the window unmounts, so a reply
//! never lands on a closed modal or a page the user has left.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use mu_chat_core::config::{ChatProfile, ChatSettings};
use mu_chat_core::conversation::{Conversation, Effect, Event};

use crate::api;

/// Loads the profile's settings from the server, then shows the chat.
#[component]
pub fn ChatPanel(profile: ChatProfile, closable: bool, on_close: EventHandler<()>) -> Element {
    let settings = use_resource(move || async move {
        api::fetch_chat_settings(profile).await.unwrap_or_else(|e| {
            tracing::warn!("Using built-in {} chat settings: {}", profile.as_str(), e);
            profile.defaults()
        })
    });

    match &*settings.read_unchecked() {
        Some(settings) => rsx! {
            ChatWindow { settings: settings.clone(), closable: closable, on_close: on_close }
        },
        None => rsx! {
            div { class: "chat-window loading", "Loading assistant..." }
        },
    }
}

#[component]
pub fn ChatWindow(settings: ChatSettings, closable: bool, on_close: EventHandler<()>) -> Element {
    let init = settings.clone();
    let mut conversation = use_signal(move || Conversation::new(init, Utc::now()));
    let reply_timer = use_hook(|| Rc::new(RefCell::new(None::<Timeout>)));

    {
        let reply_timer = reply_timer.clone();
        use_drop(move || {
            if reply_timer.borrow_mut().take().is_some() {
                tracing::debug!("pending reply cancelled");
            }
        });
    }

    // Auto-scroll whenever the log grows or the typing indicator toggles
    use_effect(move || {
        let conv = conversation.read();
        let _ = (conv.messages().len(), conv.is_busy());
        crate::scroll_to_bottom();
    });

    let send = use_callback(move |_: ()| {
        let text = conversation.read().draft().to_string();
        let effect = conversation.write().step(Event::Submit {
            text,
            at: Utc::now(),
        });
        if let Some(Effect::ScheduleReply { after }) = effect {
            let timer = Timeout::new(after.as_millis() as u32, move || {
                conversation.write().step(Event::ReplyDue { at: Utc::now() });
            });
            reply_timer.borrow_mut().replace(timer);
        }
    });

    let conv = conversation.read();
    let busy = conv.is_busy();
    let draft = conv.draft().to_string();
    let can_send = conv.can_submit(&draft);

    rsx! {
        div { class: "chat-window",
            div { class: "chat-header",
                div { class: "avatar", "🤖" }
                div { class: "chat-title",
                    h3 { "{settings.assistant_name}" }
                    p { "{settings.status_line}" }
                }
                if closable {
                    button {
                        class: "close",
                        aria_label: "Close chat",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
            }

            div { class: "messages",
                for msg in conv.messages().iter() {
                    div {
                        key: "{msg.id}",
                        class: if msg.is_user() { "msg-row user" } else { "msg-row bot" },
                        div { class: "bubble",
                            span { class: "icon", if msg.is_user() { "👤" } else { "🤖" } }
                            div {
                                p { class: "text", "{msg.text}" }
                                p { class: "time", {msg.display_time()} }
                            }
                        }
                    }
                }
                if busy {
                    div { class: "msg-row bot",
                        div { class: "bubble typing",
                            span { class: "spinner" }
                            span { "Assistant is typing..." }
                        }
                    }
                }
                div { id: "chat-bottom" }
            }

            if conv.show_quick_questions() {
                div { class: "quick-questions",
                    p { "Try asking about:" }
                    for question in settings.quick_questions.iter().cloned() {
                        button {
                            key: "{question}",
                            onclick: move |_| {
                                conversation.write().step(Event::Input(question.clone()));
                            },
                            "{question}"
                        }
                    }
                }
            }

            div { class: "input-bar",
                input {
                    r#type: "text",
                    placeholder: "{settings.input_placeholder}",
                    value: "{draft}",
                    disabled: busy,
                    oninput: move |e| {
                        conversation.write().step(Event::Input(e.value()));
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter && !e.modifiers().contains(Modifiers::SHIFT) {
                            e.prevent_default();
                            send.call(());
                        }
                    },
                }
                button {
                    class: "send",
                    aria_label: "Send message",
                    disabled: !can_send,
                    onclick: move |_| send.call(()),
                    "Send"
                }
            }
        }
    }
}
