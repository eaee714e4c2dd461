//! Inline error/success banners shown above page forms.

use leptos::prelude::*;

#[component]
pub fn Notice(error: RwSignal<String>, message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="notice notice--error">{move || error.get()}</p>
        </Show>
        <Show when=move || !message.get().is_empty()>
            <p class="notice notice--success">{move || message.get()}</p>
        </Show>
    }
}
