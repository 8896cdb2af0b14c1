//! Session context for the component tree.
//!
//! [`SessionProvider`] builds the one [`AppClient`] the app uses, then mirrors
//! its [`store::SessionStore`] into a `Signal<Session>` so views re-render on
//! login, logout and profile edits. Views read the signal through
//! [`use_session`] and call the backend through [`use_api`]; nothing writes
//! local storage except the store itself.

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionStore};

use crate::components::COMPONENTS_CSS;
use crate::views::VIEWS_CSS;

/// Storage backing the session: `localStorage` in the browser, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStorage;

pub type AppClient = ApiClient<HttpTransport, AppStorage>;

/// Build the client for `config`, loading whatever session storage already holds.
pub fn make_client(config: &ClientConfig) -> AppClient {
    let session = SessionStore::open(AppStorage::new());
    ApiClient::new(HttpTransport::new(config.api.base_url.clone()), session).with_config(&config.api)
}

/// The current session. Updates whenever the store changes.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The shared API client.
pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the API client and session signal.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_hook(|| make_client(&config));
    let session = use_signal(|| client.session().snapshot());

    let subscription = use_hook(|| {
        client.session().subscribe(move |current: &Session| {
            let mut mirror = session;
            mirror.set(current.clone());
        })
    });
    {
        let client = client.clone();
        use_drop(move || client.session().unsubscribe(subscription));
    }

    use_context_provider(|| client.clone());
    use_context_provider(|| session);
    use_context_provider(|| config.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        document::Stylesheet { href: VIEWS_CSS }
        {children}
    }
}
