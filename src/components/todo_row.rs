//! Todo Row Component
//!
//! Title and checkbox for one item.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TodoItem;
use crate::state::Intent;

/// A single item row in the list
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <span class="todo-title">{item.title().to_string()}</span>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.dispatch(Intent::ToggleCompleted(id))
            />
        </div>
    }
}
