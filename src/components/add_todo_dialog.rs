//! Add Todo Dialog Component
//!
//! Modal with a text field, a clear button, the validation message and
//! save/cancel actions. Pressing on the backdrop or Escape cancels, Enter in
//! the text field saves.

use leptos::html;
use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::i18n::TextKey;
use crate::state::{DialogPhase, Intent};
use crate::store::AppStateStoreFields;

/// Add dialog, rendered only while open
#[component]
pub fn AddTodoDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let visible = move || store.todo().with(|todo| todo.dialog.phase() != DialogPhase::Closed);

    view! {
        <Show when=visible>
            <DialogBody ctx=ctx />
        </Show>
    }
}

#[component]
fn DialogBody(ctx: AppContext) -> impl IntoView {
    let store = ctx.store();
    let input_ref = NodeRef::<html::Input>::new();

    let draft = move || store.todo().with(|todo| todo.dialog.draft_text.clone());
    let show_error = move || store.todo().with(|todo| todo.dialog.show_validation_error);

    // Focus the field when the dialog mounts
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_dialog_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(intent) = dialog_key_intent(&ev.key()) {
            ctx.dispatch(intent);
        }
    };

    let on_field_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(intent) = field_key_intent(&ev.key()) {
            ev.prevent_default();
            ctx.dispatch(intent);
        }
    };

    // Mousedown, not click: a drag from the field ending on the backdrop
    // must not dismiss the dialog
    view! {
        <div class="dialog-backdrop" on:mousedown=move |_| ctx.dispatch(Intent::Cancel)>
            <div
                class="dialog"
                role="dialog"
                on:mousedown=move |ev| ev.stop_propagation()
                on:keydown=on_dialog_keydown
            >
                <div class="dialog-field">
                    <span class="dialog-label">{move || ctx.text(TextKey::NewTodo)}</span>
                    <div class="dialog-input-row">
                        <input
                            type="text"
                            node_ref=input_ref
                            prop:value=draft
                            on:keydown=on_field_keydown
                            on:input=move |ev| ctx.dispatch(Intent::UpdateDraftText(event_target_value(&ev)))
                        />
                        <button
                            type="button"
                            class="clear-btn"
                            title=move || ctx.text(TextKey::Clear)
                            aria-label=move || ctx.text(TextKey::Clear)
                            on:click=move |_| ctx.dispatch(Intent::ClearDraftText)
                        >
                            "×"
                        </button>
                    </div>
                </div>

                <Show when=show_error>
                    <p class="dialog-error">{move || ctx.text(TextKey::PleaseEnterTodo)}</p>
                </Show>

                <div class="dialog-actions">
                    <button
                        type="button"
                        class="save-btn"
                        on:click=move |_| ctx.dispatch(Intent::Save)
                    >
                        {move || ctx.text(TextKey::Save)}
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| ctx.dispatch(Intent::Cancel)
                    >
                        {move || ctx.text(TextKey::Cancel)}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Keys handled anywhere inside the dialog
fn dialog_key_intent(key: &str) -> Option<Intent> {
    match key {
        "Escape" => Some(Intent::Cancel),
        _ => None,
    }
}

/// Keys handled only by the text field
fn field_key_intent(key: &str) -> Option<Intent> {
    match key {
        "Enter" => Some(Intent::Save),
        _ => None,
    }
}
