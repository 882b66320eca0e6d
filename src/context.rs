//! Application Context
//!
//! Shared handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::i18n::{self, TextKey};
use crate::state::Intent;
use crate::store::{store_dispatch, AppStateStoreFields, AppStore};

/// App-wide handle given to every component
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Send a user intent to the controller
    pub fn dispatch(&self, intent: Intent) {
        store_dispatch(&self.store, intent);
    }

    /// Label for the configured locale (tracks the config field)
    pub fn text(&self, key: TextKey) -> &'static str {
        i18n::text(self.store.config().read().locale, key)
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
