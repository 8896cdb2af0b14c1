use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            class: "card form-card",
            h1 { class: "view-title", "Page not found" }
            p { class: "view-muted", "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Back to the hotels" }
        }
    }
}
