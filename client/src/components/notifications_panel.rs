//! Dropdown feed opened from the top bar bell.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let feed = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notifications-panel">
            <div class="notifications-panel__header">
                <div>
                    <h3>"Notifications"</h3>
                    <p class="notifications-panel__count">
                        {move || format!("{} unread", feed.with(NotificationsState::unread_count))}
                    </p>
                </div>
                <button class="notifications-panel__close" title="Close" on:click=move |_| ui.update(|u| u.notifications_open = false)>
                    "✕"
                </button>
            </div>
            <ul class="notifications-panel__list">
                {move || {
                    feed.get()
                        .items
                        .into_iter()
                        .map(|n| {
                            view! {
                                <li
                                    class=format!("notice notice--{}", n.kind.slug())
                                    class:notice--unread=n.unread
                                >
                                    <span class="notice__title">{n.title}</span>
                                    <span class="notice__message">{n.message}</span>
                                    <span class="notice__time">{n.time}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <button class="btn notifications-panel__mark" on:click=move |_| feed.update(NotificationsState::mark_all_read)>
                "Mark all as read"
            </button>
        </div>
    }
}
