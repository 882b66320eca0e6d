//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// All items in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store();

    let items = move || store.todo().with(|todo| todo.todos.items().to_vec());

    view! {
        <div class="todo-list">
            <For
                each=items
                // Completed is part of the key so a toggled row re-renders
                key=|item| (item.id, item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
