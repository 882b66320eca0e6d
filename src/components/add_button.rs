//! Floating Add Button

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::TextKey;
use crate::state::Intent;

/// Opens the add-todo dialog
#[component]
pub fn AddButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            class="fab"
            title=move || ctx.text(TextKey::Add)
            aria-label=move || ctx.text(TextKey::Add)
            on:click=move |_| ctx.dispatch(Intent::OpenAddDialog)
        >
            "+"
        </button>
    }
}
