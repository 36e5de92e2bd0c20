//! Dedicated chatbot page.

use dioxus::prelude::*;
use mu_chat_core::config::ChatProfile;
use mu_chat_core::site::{SiteInfo, UNIVERSITY_WEBSITE};

use crate::components::chat_window::ChatPanel;

#[component]
pub fn Chatbot() -> Element {
    let site = use_context::<Signal<SiteInfo>>();
    let university = site().university_name;

    rsx! {
        div { class: "chatbot-page",
            div { class: "page-header",
                h1 { "University Chatbot Assistant" }
                p { "Get instant answers to your questions about {university}" }
            }

            ChatPanel {
                profile: ChatProfile::Page,
                closable: false,
                on_close: move |_| {},
            }

            div { class: "help",
                p {
                    "Need more help? Visit our "
                    a {
                        href: UNIVERSITY_WEBSITE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "official website"
                    }
                    " or contact us directly."
                }
            }
        }
    }
}
