//! Labelled form inputs bound to an [`EntryForm`] draft.
//!
//! DESIGN
//! ======
//! [`draft_binding`] turns a getter/setter pair over the draft into a
//! `(Signal, Callback)` pair so every modal input is one line of markup. While
//! the form is closed the signal yields the type's default and writes are
//! dropped by [`EntryForm::edit_fn`].

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use leptos::prelude::*;
use records::{EntryForm, FormFields};

/// Read/write handles for one draft field.
pub fn draft_binding<F, T, R, W>(form: RwSignal<EntryForm<F>>, read: R, write: W) -> (Signal<T>, Callback<T>)
where
    F: FormFields + Send + Sync + 'static,
    T: Clone + Default + Send + Sync + 'static,
    R: Fn(&F) -> T + Send + Sync + 'static,
    W: Fn(&mut F, T) + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| f.draft().map(&read).unwrap_or_default()));
    let on_change = Callback::new(move |v: T| form.update(|f| f.edit_fn(|d| write(d, v))));
    (value, on_change)
}

/// Parse a whole-number input, treating junk as zero.
pub fn parse_number<N: std::str::FromStr + Default>(raw: &str) -> N {
    raw.trim().parse().unwrap_or_default()
}

/// Parse a money input. Decimals are kept; junk and non-finite values are zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or_default()
}

/// Parse a 0-100 score, clamping out-of-range entries and rounding decimals.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_score(raw: &str) -> u8 {
    let value = parse_amount(raw);
    value.clamp(0.0, 100.0).round() as u8
}

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <Show when=move || required>
                <span class="dialog__required">" *"</span>
            </Show>
            <input
                class="dialog__input"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(label: &'static str, value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <textarea
                class="dialog__input dialog__input--area"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Dropdown over `(value, label)` pairs. Values round-trip as strings.
///
/// With a `placeholder`, an empty-valued first option stands for "nothing
/// chosen yet" so a blank draft never shows a real option as selected.
#[component]
pub fn SelectField(
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <select
                class="dialog__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| {
                    view! { <option value="" selected=move || value.with(String::is_empty)>{text}</option> }
                })}
                {options
                    .into_iter()
                    .map(|(v, text)| view! { <option value=v selected=move || value.get() == v>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Same-value options for plain string lists.
pub fn same(options: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    options.iter().map(|o| (*o, *o)).collect()
}
