//! Delete confirmation dialog driven by a [`DeleteGate`].

use leptos::prelude::*;
use records::DeleteGate;

/// Shown while `gate` has a pending id. Cancel (or clicking the backdrop)
/// clears the gate; confirm hands control to `on_confirm`, which applies the
/// removal.
#[component]
pub fn ConfirmDialog(
    gate: RwSignal<DeleteGate>,
    title: &'static str,
    message: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let on_cancel = move || gate.update(DeleteGate::cancel);

    view! {
        <Show when=move || gate.with(|g| g.pending().is_some())>
            <div class="dialog-backdrop" on:click=move |_| on_cancel()>
                <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>{title}</h2>
                    <p class="dialog__danger">{message}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel()>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
