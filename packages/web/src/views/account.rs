use dioxus::prelude::*;
use ui::views::AccountView;

use crate::Route;

#[component]
pub fn Account() -> Element {
    let nav = use_navigator();
    rsx! {
        AccountView {
            on_deleted: move |_| {
                tracing::info!("account deleted, leaving the account page");
                nav.replace(Route::Home {});
            },
        }
    }
}
