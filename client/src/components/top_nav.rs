//! Top bar: search, theme toggle, notifications bell, and user menu.

use leptos::prelude::*;

use crate::components::notifications_panel::NotificationsPanel;
use crate::state::notifications::NotificationsState;
use crate::state::settings::SettingsState;
use crate::state::shell::{AppScreen, Shell};
use crate::state::ui::UiState;
use crate::state::workspace::Workspace;

#[component]
pub fn TopNav() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = expect_context::<RwSignal<NotificationsState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let workspace = expect_context::<Workspace>();

    let on_logout = move |_| {
        shell.update(Shell::logout);
        ui.update(UiState::on_logout);
        workspace.reset();
        log::info!("signed out");
    };

    let open_settings = move |_| {
        if shell.try_update(|s| s.navigate(AppScreen::Settings)).unwrap_or(false) {
            ui.update(UiState::on_navigate);
        }
    };

    view! {
        <header class="top-nav">
            <input
                class="top-nav__search"
                type="search"
                placeholder="Search equipment, tasks, team..."
                prop:value=move || ui.with(|u| u.search_query.clone())
                on:input=move |ev| ui.update(|u| u.search_query = event_target_value(&ev))
            />
            <span class="top-nav__spacer"></span>
            <button
                class="btn top-nav__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
            </button>
            <div class="top-nav__bell-wrap">
                <button class="btn top-nav__bell" title="Notifications" on:click=move |_| ui.update(UiState::toggle_notifications)>
                    "🔔"
                    <Show when=move || { feed.with(|f| f.unread_count() > 0) }>
                        <span class="top-nav__badge">{move || feed.with(NotificationsState::unread_count)}</span>
                    </Show>
                </button>
                <Show when=move || ui.with(|u| u.notifications_open)>
                    <NotificationsPanel/>
                </Show>
            </div>
            <div class="top-nav__user-wrap">
                <button class="top-nav__user" on:click=move |_| ui.update(UiState::toggle_user_menu)>
                    <span class="avatar">{move || settings.with(|s| s.profile.initials())}</span>
                    <span class="top-nav__user-name">{move || settings.with(|s| s.profile.name.clone())}</span>
                </button>
                <Show when=move || ui.with(|u| u.user_menu_open)>
                    <div class="top-nav__menu">
                        <div class="top-nav__menu-header">
                            <span>{move || settings.with(|s| s.profile.name.clone())}</span>
                            <span class="top-nav__menu-email">{move || settings.with(|s| s.profile.email.clone())}</span>
                        </div>
                        <button class="top-nav__menu-item" on:click=open_settings>
                            "Settings"
                        </button>
                        <button class="top-nav__menu-item top-nav__menu-item--danger" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
