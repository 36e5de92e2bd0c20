//! Home page — hero, feature cards, and the chat modal.

use dioxus::prelude::*;
use mu_chat_core::config::ChatProfile;
use mu_chat_core::site::SiteInfo;

use crate::components::chat_window::ChatPanel;

#[component]
pub fn Home() -> Element {
    let site = use_context::<Signal<SiteInfo>>();
    let mut chat_open = use_signal(|| false);
    let info = site();

    rsx! {
        div { class: "home",
            section { class: "hero",
                div { class: "logo big", "MU" }
                h1 { "{info.university_name}" }
                p { class: "subtitle", "{info.tagline}" }
                p { class: "lead", "{info.about}" }
                button {
                    class: "cta",
                    onclick: move |_| chat_open.set(true),
                    "Start Chatting"
                }
            }

            section { class: "features",
                h2 { "How Can We Help You?" }
                div { class: "feature-grid",
                    for card in info.features.iter() {
                        div { key: "{card.title}", class: "feature-card",
                            h3 { "{card.title}" }
                            p { "{card.description}" }
                        }
                    }
                }
            }

            // Unmounting the panel cancels any pending reply
            if chat_open() {
                div { class: "modal-backdrop",
                    ChatPanel {
                        profile: ChatProfile::Widget,
                        closable: true,
                        on_close: move |_| chat_open.set(false),
                    }
                }
            }
        }
    }
}
