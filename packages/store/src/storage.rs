//! Key/value storage abstraction.

/// Well-known keys, shared with any other tab reading the same origin.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USERNAME_KEY: &str = "username";
pub const PROFILE_IMAGE_KEY: &str = "profileImage";
pub const USER_ROLE_KEY: &str = "userRole";

/// Every key the session owns, in the order they are cleared.
pub const SESSION_KEYS: [&str; 4] = [
    AUTH_TOKEN_KEY,
    USERNAME_KEY,
    PROFILE_IMAGE_KEY,
    USER_ROLE_KEY,
];

/// Synchronous string storage, shaped after the Web Storage API.
///
/// Writes are last-writer-wins and never fail loudly: a backend that cannot
/// persist (private browsing, quota) degrades to "nothing stored".
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
