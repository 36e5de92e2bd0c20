//! One site link — router link for internal routes, new tab for external.

use dioxus::prelude::*;
use mu_chat_core::site::{LinkTarget, NavLink};

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct NavItemProps {
    link: NavLink,
    class: String,
    /// Marks external links with an arrow
    #[props(default)]
    show_external: bool,
    on_follow: EventHandler<()>,
}

pub fn NavItem(props: NavItemProps) -> Element {
    let on_follow = props.on_follow;
    let name = props.link.name.clone();

    match props.link.target {
        LinkTarget::Internal(route) => rsx! {
            Link {
                to: Route::from(route),
                class: "{props.class}",
                onclick: move |_| on_follow.call(()),
                "{name}"
            }
        },
        LinkTarget::External(url) => rsx! {
            a {
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "{props.class}",
                onclick: move |_| on_follow.call(()),
                "{name}"
                if props.show_external {
                    span { class: "external", " ↗" }
                }
            }
        },
    }
}
