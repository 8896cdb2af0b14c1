use dioxus::prelude::*;
use ui::views::AdminDashboardView;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { AdminDashboardView {} }
}
