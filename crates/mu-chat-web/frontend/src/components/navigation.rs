//! Fixed navigation bar with a collapsible mobile menu.

use dioxus::prelude::*;
use mu_chat_core::site::SiteInfo;

use super::nav_item::NavItem;
use crate::Route;

pub fn Navigation() -> Element {
    let site = use_context::<Signal<SiteInfo>>();
    let mut menu_open = use_signal(|| false);
    let info = site();

    rsx! {
        nav { class: "nav",
            div { class: "nav-inner",
                Link { to: Route::Home {}, class: "brand",
                    div { class: "logo", "MU" }
                    div { class: "brand-text",
                        span { class: "brand-name", "{info.university_name}" }
                        span { class: "brand-tagline", "{info.tagline}" }
                    }
                }

                div { class: "nav-links desktop",
                    for link in info.nav_links.iter() {
                        NavItem {
                            key: "{link.name}",
                            link: link.clone(),
                            class: "nav-link",
                            on_follow: move |_| {},
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            // Following any link closes the mobile menu
            if menu_open() {
                div { class: "nav-links mobile",
                    for link in info.nav_links.iter() {
                        NavItem {
                            key: "{link.name}",
                            link: link.clone(),
                            class: "nav-link block",
                            on_follow: move |_| menu_open.set(false),
                        }
                    }
                }
            }
        }
    }
}
