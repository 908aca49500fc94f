//! Global Application Store
//!
//! Session identity and service endpoint, shared app-wide through
//! reactive_stores and persisted to the browser on change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config;
use crate::models::Session;

/// App-wide configuration state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active session, if someone is logged in
    pub session: Option<Session>,
    /// Configured Apps Script endpoint
    pub service_url: String,
}

impl AppState {
    /// Seed from whatever the browser remembered
    pub fn load() -> Self {
        Self {
            session: config::load_session(),
            service_url: config::load_service_url(),
        }
    }
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

/// Log in and remember the session across reloads
pub fn store_login(store: &AppStore, session: Session) {
    config::store_session(&session);
    store.session().set(Some(session));
}

/// Drop the session locally and from the browser
pub fn store_logout(store: &AppStore) {
    config::clear_session();
    store.session().set(None);
}

/// Persist a new endpoint; the shell reselects the data source reactively
pub fn store_set_service_url(store: &AppStore, url: String) {
    config::store_service_url(&url);
    store.service_url().set(url);
}
