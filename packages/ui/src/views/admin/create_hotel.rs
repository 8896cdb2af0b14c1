use api::models::Amenity;
use api::Upload;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, FieldError, Input, Label};
use crate::forms::admin::{
    character_count, is_allowed_image, submit_hotel, HotelForm, ADDRESS_MAX, DESCRIPTION_MAX,
    HOTEL_NAME_MAX, INVALID_EXTRA_IMAGES, INVALID_MAIN_IMAGE, POSTAL_CODE_MAX, STATE_MAX,
};
use crate::forms::{FormPhase, ValidationErrors};
use crate::read_uploads;

#[component]
pub(super) fn CreateHotelPanel() -> Element {
    let client = crate::use_api();
    let mut form = use_signal(HotelForm::default);
    let mut main_image = use_signal(|| None::<Upload>);
    let mut extra_images = use_signal(Vec::<Upload>::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);

    let on_main_image = move |evt: FormEvent| {
        spawn(async move {
            let picked = read_uploads(evt).await.into_iter().next();
            errors.write().clear("main_image");
            match picked {
                Some(image) if is_allowed_image(&image.mime) => main_image.set(Some(image)),
                Some(_) => {
                    main_image.set(None);
                    errors.write().add("main_image", INVALID_MAIN_IMAGE);
                }
                None => main_image.set(None),
            }
        });
    };

    let on_extra_images = move |evt: FormEvent| {
        spawn(async move {
            let picked = read_uploads(evt).await;
            errors.write().clear("extra_images");
            if picked.iter().all(|image| is_allowed_image(&image.mime)) {
                extra_images.set(picked);
            } else {
                extra_images.set(Vec::new());
                errors.write().add("extra_images", INVALID_EXTRA_IMAGES);
            }
        });
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let picked = errors.peek().clone();
            let invalid = submit_hotel(
                &client,
                &form(),
                main_image(),
                extra_images(),
                &picked,
                |next| phase.set(next),
            )
            .await;
            errors.set(invalid);
            if phase.peek().success().is_some() {
                form.set(HotelForm::default());
                main_image.set(None);
                extra_images.set(Vec::new());
            }
        });
    };

    let current = form();
    let submitting = phase().is_submitting();
    let (description_count, description_over) = character_count(&current.description, DESCRIPTION_MAX);
    let counter_style = if description_over { "color: #dc2626;" } else { "" };
    let main_name = main_image().map(|image| image.file_name).unwrap_or_default();
    let extra_count = extra_images().len();

    rsx! {
        Alert { message: phase().error().unwrap_or_default().to_string() }
        Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
        form {
            class: "card",
            onsubmit: onsubmit,
            div {
                class: "form-grid",
                div {
                    class: "form-row",
                    Label { html_for: "hotel-name", "Name" }
                    Input {
                        id: "hotel-name",
                        maxlength: HOTEL_NAME_MAX as u32,
                        value: current.name.clone(),
                        invalid: errors().has("name"),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    FieldError { message: errors().message("name") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-stars", "Stars" }
                    select {
                        id: "hotel-stars",
                        class: "input",
                        onchange: move |evt: FormEvent| form.write().stars = evt.value().parse().unwrap_or(0),
                        option { value: "0", selected: current.stars == 0, "Select..." }
                        for n in 1..=5u8 {
                            option { key: "{n}", value: "{n}", selected: current.stars == n, "{n}" }
                        }
                    }
                    FieldError { message: errors().message("stars") }
                }
            }
            div {
                class: "form-row",
                Label { html_for: "hotel-description", "Description" }
                textarea {
                    id: "hotel-description",
                    class: "input",
                    rows: "4",
                    value: current.description.clone(),
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                p {
                    class: "view-muted",
                    style: "{counter_style}",
                    "{description_count}"
                }
                FieldError { message: errors().message("description") }
            }
            div {
                class: "form-grid",
                div {
                    class: "form-row",
                    Label { html_for: "hotel-city", "City" }
                    Input {
                        id: "hotel-city",
                        value: current.city.clone(),
                        invalid: errors().has("city"),
                        oninput: move |evt: FormEvent| form.write().city = evt.value(),
                    }
                    FieldError { message: errors().message("city") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-address", "Address" }
                    Input {
                        id: "hotel-address",
                        maxlength: ADDRESS_MAX as u32,
                        value: current.address.clone(),
                        invalid: errors().has("address"),
                        oninput: move |evt: FormEvent| form.write().address = evt.value(),
                    }
                    FieldError { message: errors().message("address") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-country", "Country" }
                    Input {
                        id: "hotel-country",
                        value: current.country.clone(),
                        invalid: errors().has("country"),
                        oninput: move |evt: FormEvent| form.write().country = evt.value(),
                    }
                    FieldError { message: errors().message("country") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-state", "State / Region" }
                    Input {
                        id: "hotel-state",
                        maxlength: STATE_MAX as u32,
                        value: current.state.clone(),
                        invalid: errors().has("state"),
                        oninput: move |evt: FormEvent| form.write().state = evt.value(),
                    }
                    FieldError { message: errors().message("state") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-postal", "Postal code" }
                    Input {
                        id: "hotel-postal",
                        maxlength: POSTAL_CODE_MAX as u32,
                        value: current.postal_code.clone(),
                        invalid: errors().has("postal_code"),
                        oninput: move |evt: FormEvent| form.write().postal_code = evt.value(),
                    }
                    FieldError { message: errors().message("postal_code") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-maps", "Google Maps URL" }
                    Input {
                        id: "hotel-maps",
                        r#type: "url",
                        placeholder: "https://",
                        value: current.google_maps_url.clone(),
                        invalid: errors().has("google_maps_url"),
                        oninput: move |evt: FormEvent| form.write().google_maps_url = evt.value(),
                    }
                    FieldError { message: errors().message("google_maps_url") }
                }
            }

            h2 { class: "view-section-title", "Amenities" }
            div {
                class: "checkbox-grid",
                for amenity in Amenity::ALL {
                    label {
                        key: "{amenity.as_str()}",
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.amenities.contains(&amenity),
                            onchange: move |_| form.write().toggle_amenity(amenity),
                        }
                        "{amenity.label()}"
                    }
                }
            }
            FieldError { message: errors().message("amenities") }

            h2 { class: "view-section-title", "Pictures" }
            div {
                class: "form-grid",
                div {
                    class: "form-row",
                    Label { html_for: "hotel-main-image", "Main image" }
                    input {
                        id: "hotel-main-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_main_image,
                    }
                    if !main_name.is_empty() {
                        p { class: "view-muted", "{main_name}" }
                    }
                    FieldError { message: errors().message("main_image") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "hotel-extra-images", "Additional images" }
                    input {
                        id: "hotel-extra-images",
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        onchange: on_extra_images,
                    }
                    if extra_count > 0 {
                        p { class: "view-muted", "{extra_count} file(s) selected" }
                    }
                    FieldError { message: errors().message("extra_images") }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end;",
                Button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Creating..." } else { "Create hotel" }
                }
            }
        }
    }
}
