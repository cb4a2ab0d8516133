use leptos::prelude::*;

/// Headline figure with a caption.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] note: &'static str,
    #[prop(optional)] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", if tone.is_empty() { "neutral" } else { tone })>
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            <Show when=move || !note.is_empty()>
                <span class="stat-card__note">{note}</span>
            </Show>
        </div>
    }
}
