//! Edit Modal Component
//!
//! Modal dialog shown while a todo is being edited. Its input is bound to the
//! same draft as the main form.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields};

/// Modal editor for the currently targeted todo
#[component]
pub fn EditModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.editing().get().is_some()>
            <div class="modal-overlay">
                <div class="modal">
                    <h2 class="modal-title">"Edit Todo"</h2>
                    <input
                        type="text"
                        class="todo-input"
                        placeholder="Update your todo"
                        prop:value=move || store.draft().get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            store.write().update_draft(&input.value());
                        }
                    />
                    <div class="modal-actions">
                        <button class="submit-btn" on:click=move |_| store.write().commit_edit()>
                            "Update"
                        </button>
                        <button class="cancel-btn" on:click=move |_| store.write().cancel_edit()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
