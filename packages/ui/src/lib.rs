//! This crate contains all shared UI for the workspace: the session context,
//! route-guard decisions, form models and the panels that do not depend on
//! the router.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionProvider`], [`use_session`], [`use_api`] |
//! | [`guard`] | private / role / public route decisions |
//! | [`filters`] | home-page filter state and active-filter chips |
//! | [`forms`] | validation and [`forms::FormPhase`] per panel |
//! | [`components`] | buttons, inputs, labels, alerts |
//! | [`views`] | router-free panels shared by the app's pages |

pub mod components;
pub mod filters;
pub mod forms;
pub mod guard;
pub mod session;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod navbar;
pub use navbar::Navbar;

pub use api::sleep;

mod upload;
pub use upload::read_uploads;

pub use session::{make_client, use_api, use_config, use_session, AppClient, AppStorage, SessionProvider};
