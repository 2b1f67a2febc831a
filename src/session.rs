//! Admin session values and navigation seams used by the logout flow.

use std::collections::HashMap;

/// Key of the persisted admin auth token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Key of the persisted admin account identifier.
pub const ADMIN_ACCOUNT_KEY: &str = "adminEmail";
/// Where a confirmed logout lands.
pub const LOGIN_ROUTE: &str = "/admin-login";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);
}

pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// The admin's session, owned by whoever performs authentication
/// transitions.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn sign_in(&mut self, token: &str, account: &str) {
        self.store.set(ADMIN_TOKEN_KEY, token);
        self.store.set(ADMIN_ACCOUNT_KEY, account);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(ADMIN_TOKEN_KEY)
    }

    pub fn account(&self) -> Option<String> {
        self.store.get(ADMIN_ACCOUNT_KEY)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Drops both session values. Always succeeds.
    pub fn teardown(&mut self) {
        self.store.clear(ADMIN_TOKEN_KEY);
        self.store.clear(ADMIN_ACCOUNT_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
