use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCircleUser, FaHotel, FaRightFromBracket};
use crate::{use_api, use_session, Icon};

const NAVBAR_CSS: Asset = asset!("/src/navbar.css");

/// Top bar. Platform crates pass their router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { width: 20, height: 20, fill: "white", icon: FaHotel }
                "Akkor Hotel"
            }
            div { class: "navbar-links", {children} }
            UserBadge {}
        }
    }
}

/// Avatar, name and logout button for the signed-in user.
#[component]
fn UserBadge() -> Element {
    let session = use_session();
    let client = use_api();
    let current = session();

    if !current.is_authenticated() {
        return rsx! {};
    }

    let has_image = !current.profile_image_url.is_empty() && current.profile_image_url != "undefined";

    rsx! {
        div {
            class: "user-badge",
            if has_image {
                img { src: "{current.profile_image_url}", alt: "Profile" }
            } else {
                Icon { width: 24, height: 24, fill: "white", icon: FaCircleUser }
            }
            span { "{current.username}" }
            span { class: "role", "{current.role}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| client.logout(),
                Icon { width: 14, height: 14, fill: "white", icon: FaRightFromBracket }
                "Logout"
            }
        }
    }
}
