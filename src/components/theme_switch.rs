//! Theme Switch Component
//!
//! Light/dark mode toggle with its mode label. Display-only preference, kept
//! out of the todo store.

use leptos::prelude::*;

/// Dark mode toggle
#[component]
pub fn ThemeSwitch(
    dark_mode: ReadSignal<bool>,
    set_dark_mode: WriteSignal<bool>,
) -> impl IntoView {
    let toggle = move |_| set_dark_mode.update(|on| *on = !*on);

    view! {
        <div class="switch-row">
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || dark_mode.get()
                    on:change=toggle
                />
                <span class="slider"></span>
            </label>
            <span class="switch-label">
                {move || if dark_mode.get() { "Dark Mode" } else { "Light Mode" }}
            </span>
        </div>
    }
}
