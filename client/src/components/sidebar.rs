//! Collapsible left navigation.

use leptos::prelude::*;

use crate::state::shell::{AppScreen, Shell};
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.with(|u| u.sidebar_collapsed);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"⚙"</span>
                <Show when=move || !collapsed()>
                    <span class="sidebar__name">"GearGuard"</span>
                </Show>
            </div>
            <nav class="sidebar__nav">
                {AppScreen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || shell.get().screen() == Some(screen)
                                title=move || if collapsed() { screen.label() } else { "" }
                                on:click=move |_| {
                                    let applied = shell.try_update(|s| s.navigate(screen)).unwrap_or(false);
                                    if applied {
                                        ui.update(UiState::on_navigate);
                                        log::debug!("navigate: {}", screen.label());
                                    }
                                }
                            >
                                <span class="sidebar__glyph">{screen.glyph()}</span>
                                <Show when=move || !collapsed()>
                                    <span class="sidebar__label">{screen.label()}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="sidebar__collapse" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                {move || if collapsed() { "»" } else { "« Collapse" }}
            </button>
        </aside>
    }
}
