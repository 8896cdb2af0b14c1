use api::models::SortOrder;
use api::ApiOutcome;
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant};
use ui::filters::{FilterState, Pager};
use ui::views::{ChipBar, FilterSidebar, HotelCard};
use ui::{use_api, use_config};

use crate::Route;

/// Hotel search. Filters apply when the search button is pressed. Paging and
/// sorting re-run the last search.
#[component]
pub fn Home() -> Element {
    let client = use_api();
    let page_size = use_config().search.page_size;
    let filters = use_signal(FilterState::default);
    let sort = use_signal(SortOrder::default);
    let mut applied = use_signal(FilterState::default);
    let mut page = use_signal(|| 0u32);

    let results = use_resource(move || {
        let client = client.clone();
        let request = applied().search_request(page(), page_size, sort());
        async move {
            tracing::debug!(page = request.page, "searching hotels");
            client.search_hotels(&request).await
        }
    });

    let on_search = move |_| {
        applied.set(filters());
        page.set(0);
    };

    rsx! {
        div {
            class: "home-layout",
            FilterSidebar { filters: filters, on_search: on_search }
            section {
                class: "view-page",
                style: "flex: 1;",
                ChipBar { filters: filters, sort: sort }
                match &*results.read() {
                    None => rsx! { p { class: "view-muted", "Loading hotels..." } },
                    Some(Err(e)) => rsx! { Alert { message: e.to_string() } },
                    Some(Ok(ApiOutcome::Err(message))) => rsx! { Alert { message: message.clone() } },
                    Some(Ok(ApiOutcome::Ok(found) | ApiOutcome::Warning(found))) => {
                        let pager = Pager { page: page(), total_pages: found.total_pages };
                        let summary = format!("{} hotel(s) found", found.hotels_found);
                        rsx! {
                            if let Some(warning) = found.error.clone() {
                                Alert { kind: AlertKind::Warning, message: warning }
                            }
                            p { class: "view-muted", "{summary}" }
                            div {
                                class: "hotel-grid",
                                for hotel in found.hotels.iter().cloned() {
                                    HotelCard {
                                        key: "{hotel.hotel_id}",
                                        hotel: hotel.clone(),
                                        Link {
                                            to: Route::HotelDetail { hotel_id: hotel.hotel_id.clone() },
                                            "See availability"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "pagination",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: !pager.has_previous(),
                                    onclick: move |_| page.set(pager.previous().page),
                                    "Previous"
                                }
                                span { "{pager.label()}" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: !pager.has_next(),
                                    onclick: move |_| page.set(pager.next().page),
                                    "Next"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
