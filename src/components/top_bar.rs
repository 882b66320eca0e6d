//! Top Bar Component
//!
//! Centered title with a completed/total counter.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::TextKey;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let counter = move || {
        store.todo().with(|todo| {
            let total = todo.todos.len();
            (total > 0).then(|| format!("{}/{}", todo.todos.completed_count(), total))
        })
    };

    view! {
        <header class="top-bar">
            <h1 class="top-bar-title">{move || ctx.text(TextKey::Todo)}</h1>
            <span class="top-bar-counter">{counter}</span>
        </header>
    }
}
