//! Small styled building blocks shared by every view.

mod alert;
mod button;
mod input;
mod label;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::{FieldError, Label};

use dioxus::prelude::{asset, manganis, Asset};

/// Stylesheet for the components in this module, linked once by
/// [`crate::SessionProvider`].
pub(crate) const COMPONENTS_CSS: Asset = asset!("/src/components/components.css");
