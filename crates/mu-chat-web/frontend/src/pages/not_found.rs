//! 404 page — logs the attempted path, offers a way back.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));
    use_effect(move || {
        tracing::error!(
            "404 Error: User attempted to access non-existent route: {}",
            attempted
        );
    });

    rsx! {
        div { class: "not-found",
            div { class: "logo big", "MU" }
            h1 { "404" }
            h2 { "Page Not Found" }
            p {
                "Sorry, the page you're looking for doesn't exist. It might have been moved, \
                 deleted, or the URL might be incorrect."
            }
            div { class: "actions",
                Link { to: Route::Home {}, class: "button primary", "Return to Home" }
                Link { to: Route::Chatbot {}, class: "button secondary", "Ask the Chatbot" }
            }
            p { class: "hint",
                "If you believe this is an error, please contact our support team or try using our chatbot for assistance."
            }
        }
    }
}
