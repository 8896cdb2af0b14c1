use api::models::{Amenity, SortOrder, StarRating};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::filters::{FilterState, CITY_MAX_LEN, PRICE_GAP, PRICE_MAX, PRICE_MIN};
use crate::icons::{FaMagnifyingGlass, FaMinus, FaPlus, FaXmark};
use crate::Icon;

/// Home-page sidebar. Edits `filters` in place; `on_search` runs the query.
#[component]
pub fn FilterSidebar(filters: Signal<FilterState>, on_search: EventHandler<()>) -> Element {
    let mut filters = filters;
    // The maximum is committed on blur so typing "1500" does not clamp at "1".
    let mut max_draft = use_signal(|| filters.peek().max_price.to_string());
    let state = filters();

    use_effect(move || {
        max_draft.set(filters().max_price.to_string());
    });

    rsx! {
        aside {
            class: "filter-sidebar",
            h3 { "Destination" }
            Input {
                r#type: "text",
                placeholder: "Search city...",
                value: state.city.clone(),
                maxlength: CITY_MAX_LEN as u32,
                oninput: move |evt: FormEvent| filters.write().set_city(&evt.value()),
            }

            h3 { "Guests" }
            div {
                class: "counter",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| filters.write().decrement_guests(),
                    Icon { width: 10, height: 10, icon: FaMinus }
                }
                output { "{state.guests}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| filters.write().increment_guests(),
                    Icon { width: 10, height: 10, icon: FaPlus }
                }
            }

            h3 { "Bedrooms" }
            div {
                class: "counter",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| filters.write().decrement_bedrooms(),
                    Icon { width: 10, height: 10, icon: FaMinus }
                }
                output { "{state.bedrooms}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| filters.write().increment_bedrooms(),
                    Icon { width: 10, height: 10, icon: FaPlus }
                }
            }

            h3 { "Stars" }
            for rating in StarRating::ALL {
                label {
                    key: "{rating.count()}",
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: state.stars.contains(&rating),
                        onchange: move |_| filters.write().toggle_star(rating),
                    }
                    "{rating.label()}"
                }
            }

            h3 { "Amenities" }
            for amenity in Amenity::searchable().iter().copied() {
                label {
                    key: "{amenity.as_str()}",
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: state.amenities.contains(&amenity),
                        onchange: move |_| filters.write().toggle_amenity(amenity),
                    }
                    "{amenity.label()}"
                }
            }

            h3 { "Price per night (€)" }
            div {
                class: "form-grid",
                div {
                    Label { html_for: "min-price", "Min" }
                    Input {
                        id: "min-price",
                        r#type: "number",
                        min: PRICE_MIN.to_string(),
                        max: state.max_price.saturating_sub(PRICE_GAP).to_string(),
                        value: state.min_price.to_string(),
                        oninput: move |evt: FormEvent| filters.write().set_min_price(&evt.value()),
                    }
                }
                div {
                    Label { html_for: "max-price", "Max" }
                    Input {
                        id: "max-price",
                        r#type: "number",
                        min: (state.min_price + PRICE_GAP).to_string(),
                        max: PRICE_MAX.to_string(),
                        value: max_draft(),
                        oninput: move |evt: FormEvent| max_draft.set(evt.value()),
                        onblur: move |_| {
                            let raw = max_draft();
                            filters.write().set_max_price(&raw);
                            max_draft.set(filters.peek().max_price.to_string());
                        },
                    }
                }
            }

            div {
                style: "margin-top: 1.5rem;",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_search.call(()),
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    "Search"
                }
            }
        }
    }
}

/// Active-filter chips and the sort selector above the results.
#[component]
pub fn ChipBar(filters: Signal<FilterState>, sort: Signal<SortOrder>) -> Element {
    let mut filters = filters;
    let mut sort = sort;
    let chips = filters().chips();
    let many = chips.len() > 1;

    rsx! {
        div {
            class: "chips",
            for (key, label) in chips.into_iter().map(|chip| (chip.key, chip.label)) {
                span {
                    key: "{label}",
                    class: "chip",
                    "{label}"
                    button {
                        r#type: "button",
                        "aria-label": "Remove filter",
                        onclick: move |_| filters.write().remove(key),
                        Icon { width: 10, height: 10, icon: FaXmark }
                    }
                }
            }
            if many {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| filters.write().reset(),
                    "Clear all"
                }
            }
            select {
                style: "margin-left: auto;",
                onchange: move |evt: FormEvent| {
                    if let Some(order) = SortOrder::ALL.into_iter().find(|o| o.label() == evt.value()) {
                        sort.set(order);
                    }
                },
                for order in SortOrder::ALL {
                    option {
                        key: "{order.label()}",
                        value: order.label(),
                        selected: sort() == order,
                        "{order.label()}"
                    }
                }
            }
        }
    }
}
