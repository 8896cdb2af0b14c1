use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{
    Account, AdminDashboard, Bookings, Home, HotelDetail, Login, NotFound, Register,
    SendValidationEmail, ValidEmail,
};

mod guards;
mod views;

use guards::{AdminRoute, PrivateRoute, PublicRoute};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/valid-email/:token")]
        ValidEmail { token: String },
        #[route("/send-validation-email")]
        SendValidationEmail {},
        #[route("/hotel/:hotel_id")]
        HotelDetail { hotel_id: String },
        #[layout(PublicRoute)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]
        #[layout(PrivateRoute)]
            #[route("/bookings")]
            Bookings {},
            #[route("/account")]
            Account {},
        #[end_layout]
        #[layout(AdminRoute)]
            #[route("/admin")]
            AdminDashboard {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../akkor.toml");

/// The embedded `akkor.toml` plus compile-time overrides. A malformed file
/// falls back to the defaults.
fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config.with_env_overrides(),
        Err(e) => {
            tracing::warn!("invalid {}: {e}", ClientConfig::filename());
            ClientConfig::default().with_env_overrides()
        }
    }
}

fn main() {
    let config = load_config();
    let level = config
        .log
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!(api = %config.api.base_url, "starting");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Title { "Akkor Hotel" }
        SessionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn AppLayout() -> Element {
    let session = ui::use_session();
    let current = session();

    rsx! {
        ui::Navbar {
            Link { to: Route::Home {}, "Hotels" }
            if current.is_authenticated() {
                Link { to: Route::Bookings {}, "My bookings" }
                Link { to: Route::Account {}, "Account" }
                if current.is_admin() {
                    Link { to: Route::AdminDashboard {}, "Admin" }
                }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
        Outlet::<Route> {}
    }
}
