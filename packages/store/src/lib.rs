//! # Store crate: client-side persistence for the Akkor web client
//!
//! Everything the browser keeps between page loads lives behind this crate:
//! the signed-in session (bearer token plus a small profile snapshot) and the
//! client configuration.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`storage`] | The [`KeyValueStorage`] trait every backend implements. |
//! | [`session`] | [`Session`], [`Role`] and the observable [`SessionStore`]. |
//! | [`config`] | [`ClientConfig`], the `akkor.toml` document. |
//!
//! Backends: [`MemoryStorage`] (tests, native builds) and, on `wasm32` with the
//! `web` feature, [`LocalStorage`] over `window.localStorage`.

pub mod config;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use session::{ProfileSnapshot, Role, Session, SessionStore, Subscription};
pub use storage::KeyValueStorage;
