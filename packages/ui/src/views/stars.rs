use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

#[component]
pub fn Stars(count: u8) -> Element {
    rsx! {
        span {
            class: "stars",
            title: "{count} stars",
            for i in 0..count.min(5) {
                Icon { key: "{i}", width: 14, height: 14, fill: "currentColor", icon: FaStar }
            }
        }
    }
}
