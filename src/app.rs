//! Todo App
//!
//! Root component: top bar, item list, floating add button and the add dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddButton, AddTodoDialog, TodoList, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config));

    // Provide store and context to all children
    provide_context(store);
    provide_context(AppContext::new(store));

    view! {
        <div class="app-layout">
            <TopBar />

            <main class="main-content">
                <TodoList />
            </main>

            <AddButton />
            <AddTodoDialog />
        </div>
    }
}
