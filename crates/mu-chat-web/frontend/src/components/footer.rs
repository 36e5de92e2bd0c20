//! Site footer — about blurb, quick links, contact details.

use dioxus::prelude::*;
use mu_chat_core::site::{ContactKind, SiteInfo};

use super::nav_item::NavItem;

pub fn Footer() -> Element {
    let site = use_context::<Signal<SiteInfo>>();
    let info = site();

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-about",
                    div { class: "brand",
                        div { class: "logo", "MU" }
                        div {
                            h3 { "{info.university_name}" }
                            p { "{info.tagline}" }
                        }
                    }
                    p { "{info.about}" }
                }

                div { class: "footer-links",
                    h3 { "Quick Links" }
                    ul {
                        for link in info.nav_links.iter() {
                            li { key: "{link.name}",
                                NavItem {
                                    link: link.clone(),
                                    class: "footer-link",
                                    show_external: true,
                                    on_follow: move |_| {},
                                }
                            }
                        }
                    }
                }

                div { class: "footer-contact",
                    h3 { "Contact Us" }
                    ul {
                        for contact in info.contacts.iter() {
                            li { key: "{contact.text}",
                                span { class: "icon", {contact_icon(contact.kind)} }
                                span { "{contact.text}" }
                            }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "{info.copyright}" }
                p { "Powered by AI Technology" }
            }
        }
    }
}

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Address => "📍",
        ContactKind::Phone => "📞",
        ContactKind::Email => "✉",
    }
}
