//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! service catalog, which the landing page and the booking wizard share.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::BookingApi;
use crate::models::Service;
use crate::notify::Notifier;
use crate::session::SessionContext;

pub const SERVICES_FAILED: &str = "Failed to load services";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Services from `GET /services`
    pub services: Vec<Service>,
    /// Whether the catalog has been fetched at least once
    pub services_loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the catalog
pub fn store_set_services(store: &AppStore, services: Vec<Service>) {
    *store.services().write() = services;
    store.services_loaded().set(true);
}

/// Fetch the catalog unless an earlier view already did
pub fn load_services_once(store: AppStore, session: SessionContext, notifier: Notifier) {
    if store.services_loaded().get_untracked() {
        return;
    }
    spawn_local(async move {
        match session.gateway().list_services().await {
            Ok(services) => {
                log::debug!("loaded {} services", services.len());
                store_set_services(&store, services);
            }
            Err(e) => notifier.error(e.user_message(SERVICES_FAILED)),
        }
    });
}
