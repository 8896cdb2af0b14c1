//! Router-free panels. Pages in the app crate compose these and supply
//! navigation through callbacks or child links.

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod stars;
pub use stars::Stars;

mod hotel_card;
pub use hotel_card::HotelCard;

mod filter_sidebar;
pub use filter_sidebar::{ChipBar, FilterSidebar};

mod booking_modal;
pub use booking_modal::BookingModal;

mod booking_card;
pub use booking_card::BookingCard;

mod account;
pub use account::AccountView;

pub mod admin;
pub use admin::AdminDashboardView;

use dioxus::prelude::{asset, manganis, Asset};

pub(crate) const VIEWS_CSS: Asset = asset!("/src/views/views.css");
