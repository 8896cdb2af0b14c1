//! Route guard decisions.
//!
//! The router-aware wrappers live next to the `Route` enum in the app crate;
//! this module only decides. Each guard is evaluated once per render:
//!
//! ```text
//! Unknown ──authorized──▶ Authorized ──▶ Rendered
//!    └────denied────────▶ Unauthorized ──▶ Redirected
//! ```
//!
//! The private guard checks the stored token *and* the reactive
//! `is_authenticated` flag. The two can disagree for one render right after
//! login or logout; the guard redirects in that window.

use store::{Role, Session};

/// Where a denied navigation goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_render(self) -> bool {
        self == GuardDecision::Render
    }
}

/// Authenticated-only pages (bookings, account).
pub fn private_route(stored_token: Option<&str>, is_authenticated: bool) -> GuardDecision {
    match stored_token {
        None => GuardDecision::Redirect(Redirect::Login),
        Some(_) if is_authenticated => GuardDecision::Render,
        Some(_) => GuardDecision::Redirect(Redirect::Login),
    }
}

/// Pages limited to a set of roles (the admin dashboard).
pub fn role_route(session: &Session, allowed: &[Role]) -> GuardDecision {
    if session.is_authenticated() && allowed.contains(&session.role) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Redirect::Home)
    }
}

/// Pages only anonymous visitors should see (login, register).
pub fn public_route(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Redirect(Redirect::Home)
    } else {
        GuardDecision::Render
    }
}

/// Per-navigation guard lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unknown,
    Authorized,
    Unauthorized(Redirect),
    Rendered,
    Redirected(Redirect),
}

impl GuardState {
    /// `Unknown` → `Authorized` | `Unauthorized`. Any other state is kept.
    pub fn evaluate(self, decision: GuardDecision) -> GuardState {
        match (self, decision) {
            (GuardState::Unknown, GuardDecision::Render) => GuardState::Authorized,
            (GuardState::Unknown, GuardDecision::Redirect(to)) => GuardState::Unauthorized(to),
            (state, _) => state,
        }
    }

    /// `Authorized` → `Rendered`, `Unauthorized` → `Redirected`.
    pub fn settle(self) -> GuardState {
        match self {
            GuardState::Authorized => GuardState::Rendered,
            GuardState::Unauthorized(to) => GuardState::Redirected(to),
            state => state,
        }
    }

    /// Run both steps for one render.
    pub fn resolve(decision: GuardDecision) -> GuardState {
        GuardState::Unknown.evaluate(decision).settle()
    }

    pub fn redirect(self) -> Option<Redirect> {
        match self {
            GuardState::Unauthorized(to) | GuardState::Redirected(to) => Some(to),
            _ => None,
        }
    }
}
