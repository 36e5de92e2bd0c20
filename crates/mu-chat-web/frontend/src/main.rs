//! Murang'a University site — Dioxus app root.
//!
//! The chat runs entirely in the browser: each chat window owns a
//! `Conversation` and a reply timer that is cancelled when it unmounts.

mod api;
mod components;
mod pages;

use dioxus::prelude::*;

use mu_chat_core::site::{Route as SiteRoute, SiteInfo};

use components::{footer::Footer, navigation::Navigation};
use pages::{chatbot::Chatbot, home::Home, not_found::NotFound};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/chatbot")]
        Chatbot {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<SiteRoute> for Route {
    fn from(route: SiteRoute) -> Self {
        match route {
            SiteRoute::Home => Route::Home {},
            SiteRoute::Chatbot => Route::Chatbot {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    let mut site = use_context_provider(|| Signal::new(SiteInfo::default()));

    // Server copy overrides the built-in defaults when available
    use_effect(move || {
        spawn(async move {
            match api::fetch_site().await {
                Ok(info) => site.set(info),
                Err(e) => tracing::warn!("Using built-in site content: {}", e),
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { id: "main",
            Navigation {}
            Outlet::<Route> {}
            Footer {}
        }
    }
}

/// Bring the newest chat message into view.
pub fn scroll_to_bottom() {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("chat-bottom"))
    {
        el.scroll_into_view();
    }
}
