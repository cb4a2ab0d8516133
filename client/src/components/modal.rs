//! Modal frame shared by every entry form.

use leptos::prelude::*;

/// Backdrop plus dialog body. Clicking the backdrop or "Cancel" runs
/// `on_cancel`; the form's submit runs `on_submit`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] submit_label: Signal<String>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_cancel.run(())>
                        "✕"
                    </button>
                </div>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            {move || submit_label.get()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
