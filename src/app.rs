//! Todo App Frontend
//!
//! Main application component: single screen with theme switch, shared
//! add/edit input, todo list, and the edit modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditModal, ThemeSwitch, TodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (dark_mode, set_dark_mode) = signal(false);

    // Provide the store to all children
    provide_context(store);

    // Log list changes
    Effect::new(move |_| {
        let count = store.todos().get().len();
        web_sys::console::log_1(&format!("[APP] {} todos", count).into());
    });

    let container_class = move || {
        if dark_mode.get() {
            "app-container dark"
        } else {
            "app-container light"
        }
    };

    view! {
        <div class=container_class>
            <h1 class="app-title">"Todo App"</h1>

            <ThemeSwitch dark_mode=dark_mode set_dark_mode=set_dark_mode />

            <TodoForm />

            <TodoList />

            <p class="item-count">{move || format!("{} items", store.todos().get().len())}</p>

            <EditModal />
        </div>
    }
}
