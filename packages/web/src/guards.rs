//! Router wrappers around [`ui::guard`]. Each one renders its nested routes
//! or replaces the current entry with the redirect target.

use dioxus::prelude::*;
use store::storage::AUTH_TOKEN_KEY;
use store::{KeyValueStorage, Role};
use ui::guard::{self, GuardDecision, GuardState, Redirect};

use crate::Route;

fn target(to: Redirect) -> Route {
    match to {
        Redirect::Login => Route::Login {},
        Redirect::Home => Route::Home {},
    }
}

/// Render the outlet or navigate away, whichever `decision` says.
fn apply(decision: GuardDecision) -> Element {
    let state = GuardState::resolve(decision);
    match state.redirect() {
        Some(to) => {
            tracing::debug!(?to, "route guard redirect");
            navigator().replace(target(to));
            rsx! {}
        }
        None => rsx! { Outlet::<Route> {} },
    }
}

#[component]
pub fn PrivateRoute() -> Element {
    let client = ui::use_api();
    let session = ui::use_session();
    let stored = client.session().storage().get(AUTH_TOKEN_KEY);
    apply(guard::private_route(stored.as_deref(), session().is_authenticated()))
}

#[component]
pub fn AdminRoute() -> Element {
    let session = ui::use_session();
    apply(guard::role_route(&session(), &[Role::Admin]))
}

/// Checked when the route is entered, not on every session change, so the
/// login page can show its success message before it navigates home.
#[component]
pub fn PublicRoute() -> Element {
    let session = ui::use_session();
    let signed_in = session.peek().is_authenticated();
    apply(guard::public_route(signed_in))
}
