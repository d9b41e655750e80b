//! Session Store
//!
//! Signed-in identity plus bearer token. The token is persisted in
//! `localStorage` so a reload can restore the session; the identity is
//! re-read from the API on startup.

use leptos::prelude::*;

use crate::api::{BookingApi, Gateway};
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, User};

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Where the bearer token survives page reloads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn remove(&self);
}

/// Browser localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ApiError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ApiError::Storage("localStorage disabled".into()))
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove(&self) {
        if let Ok(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

// ========================
// Lifecycle
// ========================

/// Persist the token from a login/register response
pub fn establish(store: &dyn TokenStore, auth: AuthResponse) -> ApiResult<Session> {
    store.save(&auth.access_token)?;
    log::info!("signed in as {}", auth.user.email);
    Ok(Session { user: auth.user, token: auth.access_token })
}

/// Turn a stored token back into a session. A token the server rejects is
/// dropped; a network failure keeps it for the next load.
pub async fn restore<A: BookingApi + ?Sized>(store: &dyn TokenStore, token: String, api: &A) -> Option<Session> {
    match api.current_user().await {
        Ok(user) => {
            log::info!("restored session for {}", user.email);
            Some(Session { user, token })
        }
        Err(ApiError::Http { status, .. }) => {
            log::warn!("stored token rejected ({}), signing out", status);
            store.remove();
            None
        }
        Err(e) => {
            log::warn!("could not restore session: {}", e);
            None
        }
    }
}

pub fn end(store: &dyn TokenStore) {
    store.remove();
    log::info!("signed out");
}

// ========================
// Context
// ========================

/// Session handle provided to every view through context
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    /// True until the startup restore finishes
    restoring: RwSignal<bool>,
    api_base_url: StoredValue<String>,
}

impl SessionContext {
    pub fn new(api_base_url: String) -> Self {
        Self {
            session: RwSignal::new(None),
            restoring: RwSignal::new(true),
            api_base_url: StoredValue::new(api_base_url),
        }
    }

    /// Read the stored token, if any, and resolve it against the API
    pub async fn restore_from_storage(&self) {
        let store = LocalTokenStore;
        if let Some(token) = store.load() {
            let gateway = Gateway::new(self.api_base_url.get_value(), Some(token.clone()));
            let restored = restore(&store, token, &gateway).await;
            self.session.set(restored);
        }
        self.restoring.set(false);
    }

    /// Gateway carrying the current token
    pub fn gateway(&self) -> Gateway {
        let token = self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        Gateway::new(self.api_base_url.get_value(), token)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring.get()
    }

    pub fn sign_in(&self, auth: AuthResponse) -> ApiResult<User> {
        let session = establish(&LocalTokenStore, auth)?;
        let user = session.user.clone();
        self.session.set(Some(session));
        Ok(user)
    }

    pub fn sign_out(&self) {
        end(&LocalTokenStore);
        self.session.set(None);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::Role;
    use crate::route::{guard, Route};

    #[derive(Default)]
    pub struct MemoryTokenStore(pub RefCell<Option<String>>);

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, token: &str) -> ApiResult<()> {
            *self.0.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn remove(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[tokio::test]
    async fn test_login_persists_token_and_logout_clears_it() {
        let api = FakeApi::new(Role::User);
        let store = MemoryTokenStore::default();

        let auth = api.login(&Default::default()).await.unwrap();
        let session = establish(&store, auth).unwrap();
        assert_eq!(session.token, "token-123");
        assert_eq!(store.load().as_deref(), Some("token-123"));
        assert_eq!(guard(Route::Dashboard, Some(&session.user)), Route::Dashboard);

        end(&store);
        assert_eq!(store.load(), None);
        assert_eq!(guard(Route::Dashboard, None), Route::Login);
        assert_eq!(guard(Route::Book, None), Route::Login);
    }

    #[tokio::test]
    async fn test_restore_resolves_identity() {
        let api = FakeApi::new(Role::Admin);
        let store = MemoryTokenStore(RefCell::new(Some("saved".into())));

        let session = restore(&store, "saved".into(), &api).await.unwrap();

        assert!(session.user.is_admin());
        assert_eq!(session.token, "saved");
        assert_eq!(store.load().as_deref(), Some("saved"));
    }

    #[tokio::test]
    async fn test_rejected_token_is_removed() {
        let api = FakeApi::new(Role::User);
        api.fail_with(401, Some("Token has expired"));
        let store = MemoryTokenStore(RefCell::new(Some("stale".into())));

        assert_eq!(restore(&store, "stale".into(), &api).await, None);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_network_failure_keeps_token() {
        let api = FakeApi::new(Role::User);
        api.fail_next_with(ApiError::Network("offline".into()));
        let store = MemoryTokenStore(RefCell::new(Some("saved".into())));

        assert_eq!(restore(&store, "saved".into(), &api).await, None);
        assert_eq!(store.load().as_deref(), Some("saved"));
        assert_eq!(api.call_count("current_user"), 1);
    }
}
