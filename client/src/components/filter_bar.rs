//! Single-discriminator filter buttons with optional per-option counts.

use leptos::prelude::*;
use records::Filter;

/// Renders "All" plus one button per option. The active button follows
/// `filter`; clicking writes it back.
#[component]
pub fn FilterBar<V>(
    filter: RwSignal<Filter<V>>,
    options: Vec<(V, &'static str)>,
    /// Count shown next to an option; `None` selects the "All" total.
    #[prop(optional)]
    count: Option<Callback<Option<V>, usize>>,
) -> impl IntoView
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    let label_with_count = move |label: &'static str, key: Option<V>| match count {
        Some(count) => format!("{label} ({})", count.run(key)),
        None => label.to_owned(),
    };
    let all_label = label_with_count.clone();

    view! {
        <div class="filter-bar">
            <span class="filter-bar__label">"Filter:"</span>
            <button
                class="filter-bar__option"
                class:filter-bar__option--active=move || filter.with(Filter::is_all)
                on:click=move |_| filter.set(Filter::All)
            >
                {move || all_label("All", None)}
            </button>
            {options
                .into_iter()
                .map(|(value, label)| {
                    let active_value = value.clone();
                    let click_value = value.clone();
                    let label_with_count = label_with_count.clone();
                    view! {
                        <button
                            class="filter-bar__option"
                            class:filter-bar__option--active=move || {
                                filter.with(|f| matches!(f, Filter::Only(v) if *v == active_value))
                            }
                            on:click=move |_| filter.set(Filter::Only(click_value.clone()))
                        >
                            {move || label_with_count(label, Some(value.clone()))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
