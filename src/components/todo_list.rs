//! Todo List Component
//!
//! Scrollable list of todos. Tapping a row opens it for editing; each row
//! carries its own delete button.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Keyed todo list
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <For
                each=move || store.todos().get()
                // Text is part of the key so a committed edit re-renders its row
                key=|item| (item.id.clone(), item.text.clone())
                children=move |item| {
                    let edit_id = item.id.clone();
                    let edit_text = item.text.clone();
                    let remove_id = item.id.clone();

                    view! {
                        <div
                            class="todo-item"
                            on:click=move |_| store.write().begin_edit(&edit_id, &edit_text)
                        >
                            <span class="todo-text">{item.text.clone()}</span>
                            <button
                                class="delete-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    store.write().remove(&remove_id);
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
