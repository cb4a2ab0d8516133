//! Auto-dismissing banner for save confirmations and absorbed errors.

use leptos::prelude::*;

use crate::state::flash::{FlashState, FlashTone};

/// Show `message` and schedule its dismissal.
pub fn flash(state: RwSignal<FlashState>, message: impl Into<String>, tone: FlashTone) {
    let Some(seq) = state.try_update(|f| f.show(message, tone)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::flash::FLASH_DISMISS_MS).await;
        state.update(|f| f.dismiss(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn FlashBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<FlashState>>();

    view! {
        <Show when=move || state.with(|f| f.message.is_some())>
            <div class=move || state.with(|f| f.tone.class()) role="status">
                <span>{move || state.with(|f| f.message.clone().unwrap_or_default())}</span>
                <button class="flash__close" title="Dismiss" on:click=move |_| state.update(|f| f.message = None)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
