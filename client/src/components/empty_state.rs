//! Placeholder shown when a list or lane has nothing to render.

use leptos::prelude::*;

#[component]
pub fn EmptyState(title: &'static str, #[prop(optional)] hint: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3 class="empty-state__title">{title}</h3>
            <Show when=move || !hint.is_empty()>
                <p class="empty-state__hint">{hint}</p>
            </Show>
        </div>
    }
}
