//! Todo Form Component
//!
//! The single text input shared between add and edit mode, plus the submit
//! button whose label and action follow the current mode.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Form for adding new todos (or committing an edit while the modal is open)
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut state = store.write();
        if state.editing.is_some() {
            state.commit_edit();
        } else {
            let draft = state.draft.clone();
            state.add(&draft);
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a new todo"
                prop:value=move || store.draft().get()
                on:input=move |ev| store.write().update_draft(&event_target_value(&ev))
            />
            <button type="submit" class="submit-btn">
                {move || if store.editing().get().is_some() { "Update Todo" } else { "Add Todo" }}
            </button>
        </form>
    }
}
