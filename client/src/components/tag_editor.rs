//! Additive list editor for tags and specialties.

use leptos::prelude::*;

/// Chips for `tags` plus an input that appends on Enter or "Add".
/// Trimming and duplicate rejection live in `records::form::add_tag`.
#[component]
pub fn TagEditor(
    label: &'static str,
    tags: Signal<Vec<String>>,
    on_add: Callback<String>,
    on_remove: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let commit = move || {
        let value = input.get_untracked();
        if !value.trim().is_empty() {
            on_add.run(value);
        }
        input.set(String::new());
    };

    view! {
        <div class="dialog__label tag-editor">
            {label}
            <div class="tag-editor__row">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button class="btn" type="button" on:click=move |_| commit()>
                    "Add"
                </button>
            </div>
            <div class="tag-editor__chips">
                {move || {
                    tags.get()
                        .into_iter()
                        .map(|tag| {
                            let remove = tag.clone();
                            view! {
                                <span class="chip">
                                    {tag}
                                    <button
                                        class="chip__remove"
                                        type="button"
                                        title="Remove"
                                        on:click=move |_| on_remove.run(remove.clone())
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
