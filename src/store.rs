//! Global Application State Store
//!
//! Uses Leptos reactive_stores so views track the todo state and the config
//! separately.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::error::TodoError;
use crate::state::{Intent, Outcome, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// List and dialog state, mutated only through `store_dispatch`
    pub todo: TodoState,
    /// Startup configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            todo: TodoState::new(config.title_policy),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply one intent to the todo state and log what happened
pub fn store_dispatch(store: &AppStore, intent: Intent) -> Outcome {
    let label = intent_label(&intent);
    let outcome = store.todo().write().apply(intent);
    match &outcome {
        Outcome::Rejected(err @ TodoError::ItemNotFound(_)) => {
            log::warn!("{} rejected: {}", label, err)
        }
        Outcome::Rejected(err) => log::info!("{} rejected: {}", label, err),
        Outcome::ItemAdded(id) => log::debug!("{}: item {} added", label, id),
        Outcome::ItemToggled { id, completed } => {
            log::debug!("{}: item {} completed={}", label, id, completed)
        }
        Outcome::DialogChanged | Outcome::Unchanged => log::debug!("{}: {:?}", label, outcome),
    }
    outcome
}

/// Short name for an intent; draft text is not written to the log
fn intent_label(intent: &Intent) -> &'static str {
    match intent {
        Intent::OpenAddDialog => "open",
        Intent::UpdateDraftText(_) => "draft",
        Intent::ClearDraftText => "clear",
        Intent::Save => "save",
        Intent::Cancel => "cancel",
        Intent::ToggleCompleted(_) => "toggle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use crate::state::TitlePolicy;

    #[test]
    fn test_store_dispatch_updates_state() {
        let store = Store::new(AppState::default());

        store_dispatch(&store, Intent::OpenAddDialog);
        store_dispatch(&store, Intent::UpdateDraftText("Buy milk".into()));
        let outcome = store_dispatch(&store, Intent::Save);

        assert_eq!(outcome, Outcome::ItemAdded(ItemId(1)));
        let todo = store.todo().read_untracked();
        assert_eq!(todo.todos.len(), 1);
        assert!(!todo.dialog.visible);
    }

    #[test]
    fn test_store_uses_configured_title_policy() {
        let config = AppConfig {
            title_policy: TitlePolicy::Trimmed,
            ..AppConfig::default()
        };
        let store = Store::new(AppState::new(config));

        store_dispatch(&store, Intent::OpenAddDialog);
        store_dispatch(&store, Intent::UpdateDraftText(" Walk dog ".into()));
        store_dispatch(&store, Intent::Save);

        let todo = store.todo().read_untracked();
        assert_eq!(todo.todos.items()[0].title(), "Walk dog");
    }
}
