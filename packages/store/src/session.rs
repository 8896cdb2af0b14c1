//! # Session: who is signed in and what they may do
//!
//! [`Session`] is the denormalised snapshot every page reads: the bearer token
//! plus the username, avatar URL and [`Role`] fetched right after login.
//!
//! [`SessionStore`] is the single writer. It mirrors each field into a
//! [`KeyValueStorage`] under the keys in [`crate::storage`] and notifies
//! subscribers after every change, so no component ever writes storage
//! directly.
//!
//! A present token means "authenticated". There is no local expiry check: the
//! remote API rejects stale tokens on the next call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::{
    KeyValueStorage, AUTH_TOKEN_KEY, PROFILE_IMAGE_KEY, SESSION_KEYS, USERNAME_KEY,
    USER_ROLE_KEY,
};

/// Authorisation role as the backend spells it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a stored role; anything unrecognised is a plain user.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile fields stored next to the token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub username: String,
    pub profile_image_url: String,
    pub role: Role,
}

/// The current client session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: String,
    pub profile_image_url: String,
    pub role: Role,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }

    fn read_from(storage: &impl KeyValueStorage) -> Self {
        Self {
            token: storage.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty()),
            username: storage.get(USERNAME_KEY).unwrap_or_default(),
            profile_image_url: storage.get(PROFILE_IMAGE_KEY).unwrap_or_default(),
            role: storage
                .get(USER_ROLE_KEY)
                .map(|r| Role::parse(&r))
                .unwrap_or_default(),
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&Session)>;

struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Observable, storage-backed session.
///
/// Clones share state and listeners. The browser runs the UI on one thread,
/// so the shared state is `Rc<RefCell<_>>`.
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    session: Rc<RefCell<Session>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: KeyValueStorage + Clone> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            session: Rc::clone(&self.session),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<S: KeyValueStorage> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Open a store, loading whatever session the storage already holds.
    pub fn open(storage: S) -> Self {
        let session = Session::read_from(&storage);
        tracing::debug!(
            authenticated = session.is_authenticated(),
            role = %session.role,
            "session loaded"
        );
        Self {
            storage,
            session: Rc::new(RefCell::new(session)),
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn role(&self) -> Role {
        self.session.borrow().role
    }

    /// Store a freshly issued bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.storage.set(AUTH_TOKEN_KEY, &token);
        self.update(|s| s.token = Some(token));
    }

    /// Store the profile fetched after login.
    pub fn set_profile(&self, profile: ProfileSnapshot) {
        self.storage.set(USERNAME_KEY, &profile.username);
        self.storage.set(PROFILE_IMAGE_KEY, &profile.profile_image_url);
        self.storage.set(USER_ROLE_KEY, profile.role.as_str());
        self.update(|s| {
            s.username = profile.username;
            s.profile_image_url = profile.profile_image_url;
            s.role = profile.role;
        });
    }

    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.storage.set(USERNAME_KEY, &username);
        self.update(|s| s.username = username);
    }

    pub fn set_profile_image(&self, url: impl Into<String>) {
        let url = url.into();
        self.storage.set(PROFILE_IMAGE_KEY, &url);
        self.update(|s| s.profile_image_url = url);
    }

    pub fn set_role(&self, role: Role) {
        self.storage.set(USER_ROLE_KEY, role.as_str());
        self.update(|s| s.role = role);
    }

    /// Forget the session locally. The server is not told.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
        self.update(|s| *s = Session::default());
        tracing::info!("session cleared");
    }

    /// Register a listener called with the new session after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .borrow_mut()
            .entries
            .retain(|(id, _)| *id != subscription.0);
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        mutate(&mut self.session.borrow_mut());
        let current = self.snapshot();
        // Listeners may write back into the store, so no borrow is held while they run.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use std::cell::Cell;

    fn profile(username: &str, role: Role) -> ProfileSnapshot {
        ProfileSnapshot {
            username: username.to_string(),
            profile_image_url: format!("{username}.jpg"),
            role,
        }
    }

    #[test]
    fn test_open_empty_storage() {
        let store = SessionStore::open(MemoryStorage::new());
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert_eq!(session.role, Role::User);
        assert_eq!(session.username, "");
    }

    #[test]
    fn test_open_existing_session() {
        let storage = MemoryStorage::with_entries([
            ("authToken", "tok"),
            ("username", "bob"),
            ("profileImage", "bob.png"),
            ("userRole", "ADMIN"),
        ]);
        let store = SessionStore::open(storage);
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.role(), Role::Admin);
        assert!(store.snapshot().is_admin());
        assert_eq!(store.snapshot().profile_image_url, "bob.png");
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let storage = MemoryStorage::with_entries([("authToken", "")]);
        let store = SessionStore::open(storage);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_writes_are_persisted() {
        let storage = MemoryStorage::new();
        let store = SessionStore::open(storage.clone());

        store.set_token("fake-token");
        store.set_profile(profile("testuser", Role::User));

        assert_eq!(storage.get("authToken").as_deref(), Some("fake-token"));
        assert_eq!(storage.get("username").as_deref(), Some("testuser"));
        assert_eq!(storage.get("profileImage").as_deref(), Some("testuser.jpg"));
        assert_eq!(storage.get("userRole").as_deref(), Some("USER"));

        store.set_role(Role::Admin);
        assert_eq!(storage.get("userRole").as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_clear_removes_every_key() {
        let storage = MemoryStorage::new();
        let store = SessionStore::open(storage.clone());
        store.set_token("t");
        store.set_profile(profile("alice", Role::Admin));

        store.clear();

        for key in SESSION_KEYS {
            assert!(storage.get(key).is_none(), "{key} left behind");
        }
        assert_eq!(store.snapshot(), Session::default());
    }

    #[test]
    fn test_listeners_see_every_change() {
        let store = SessionStore::open(MemoryStorage::new());
        let calls = Rc::new(Cell::new(0));
        let last_user = Rc::new(RefCell::new(String::new()));

        let sub = {
            let calls = Rc::clone(&calls);
            let last_user = Rc::clone(&last_user);
            store.subscribe(move |s| {
                calls.set(calls.get() + 1);
                *last_user.borrow_mut() = s.username.clone();
            })
        };

        store.set_token("t");
        store.set_username("carol");
        assert_eq!(calls.get(), 2);
        assert_eq!(*last_user.borrow(), "carol");

        store.unsubscribe(sub);
        store.clear();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listener_may_write_back() {
        let store = SessionStore::open(MemoryStorage::new());
        let writer = store.clone();
        store.subscribe(move |s| {
            if s.is_authenticated() && s.username.is_empty() {
                writer.set_username("guest");
            }
        });

        store.set_token("t");
        assert_eq!(store.snapshot().username, "guest");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("USER"), Role::User);
        assert_eq!(Role::parse("undefined"), Role::User);
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }
}
