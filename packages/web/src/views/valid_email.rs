use std::time::Duration;

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind};
use ui::forms::auth::{confirm_token, Countdown, VALIDATED_REDIRECT_SECS};
use ui::forms::FormPhase;
use ui::{sleep, use_api};

use crate::Route;

/// Landing page of the confirmation link. Confirms the token, then counts
/// down to the login page.
#[component]
pub fn ValidEmail(token: String) -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut phase = use_signal(|| FormPhase::Submitting);
    let mut countdown = use_signal(Countdown::default);

    // Keyed on the token so a new link in the same tab is confirmed too.
    let _confirmation = use_resource(use_reactive!(|token| {
        let client = client.clone();
        async move {
            phase.set(FormPhase::Submitting);
            countdown.set(Countdown::default());
            let outcome = confirm_token(&client, &token).await;
            let confirmed = outcome.success().is_some();
            phase.set(outcome);
            if !confirmed {
                return;
            }
            countdown.set(Countdown::start(VALIDATED_REDIRECT_SECS));
            loop {
                sleep(Duration::from_secs(1)).await;
                if countdown.write().tick() {
                    break;
                }
            }
            nav.replace(Route::Login {});
        }
    }));

    rsx! {
        div {
            class: "card form-card",
            h1 { class: "view-title", "Email confirmation" }
            if phase().is_submitting() {
                p { class: "view-muted", "Validating your email..." }
            }
            Alert { message: phase().error().unwrap_or_default().to_string() }
            Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
            if countdown().is_running() {
                p { "Redirecting to the login page in {countdown().remaining()} s..." }
            }
            if phase().error().is_some() {
                Link { to: Route::SendValidationEmail {}, "Request a new link" }
            }
        }
    }
}
