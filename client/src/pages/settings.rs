//! Account settings: profile, notification preferences, password, and theme.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::flash_banner::flash;
use crate::state::flash::{FlashState, FlashTone};
use crate::state::settings::{NotificationPref, Profile, SettingsState, SettingsTab};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Check a password change form.
///
/// # Errors
///
/// Returns a user-facing message for a blank field or a mismatched
/// confirmation.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.trim().is_empty() {
        return Err("Enter your current password.");
    }
    if new.trim().is_empty() {
        return Err("Choose a new password.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let tab = move || settings.with(|s| s.tab);

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="page__subtitle">"Manage your account and preferences"</p>
                </div>
            </header>

            <div class="settings">
                <nav class="settings__tabs">
                    {SettingsTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="settings__tab"
                                    class:settings__tab--active=move || tab() == t
                                    on:click=move |_| settings.update(|s| s.tab = t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="settings__body">
                    {move || match tab() {
                        SettingsTab::Profile => view! { <ProfileTab/> }.into_any(),
                        SettingsTab::Notifications => view! { <NotificationsTab/> }.into_any(),
                        SettingsTab::Security => view! { <SecurityTab/> }.into_any(),
                        SettingsTab::Appearance => view! { <AppearanceTab/> }.into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let draft = RwSignal::new(settings.with_untracked(|s| s.profile.clone()));

    let field = move |label: &'static str, kind: &'static str, get: fn(&Profile) -> &String, set: fn(&mut Profile, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || draft.with(|p| get(p).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|p| set(p, value));
                    }
                />
            </label>
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = draft.get_untracked();
        if profile.name.trim().is_empty() || profile.email.trim().is_empty() {
            flash(banner, "Name and email are required", FlashTone::Warning);
            return;
        }
        settings.update(|s| s.profile = profile);
        log::debug!("profile updated");
        flash(banner, "Profile saved", FlashTone::Success);
    };

    view! {
        <form class="settings__panel" on:submit=on_save>
            <div class="settings__avatar">
                <span class="avatar avatar--large">{move || draft.with(Profile::initials)}</span>
            </div>
            {field("Full Name", "text", |p| &p.name, |p, v| p.name = v)}
            {field("Email", "email", |p| &p.email, |p, v| p.email = v)}
            {field("Company", "text", |p| &p.company, |p, v| p.company = v)}
            <label class="dialog__label">
                "Role"
                <input class="dialog__input" type="text" disabled=true prop:value=move || draft.with(|p| p.role.clone())/>
            </label>
            <div class="dialog__actions">
                <button class="btn btn--primary" type="submit">
                    "Save Changes"
                </button>
            </div>
        </form>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let banner = expect_context::<RwSignal<FlashState>>();

    view! {
        <div class="settings__panel">
            {NotificationPref::ALL
                .into_iter()
                .map(|pref| {
                    view! {
                        <div class="toggle-row">
                            <div>
                                <div class="toggle-row__label">{pref.label()}</div>
                                <div class="toggle-row__hint">{pref.description()}</div>
                            </div>
                            <button
                                class="toggle"
                                class:toggle--on=move || settings.with(|s| s.prefs.get(pref))
                                role="switch"
                                aria-checked=move || settings.with(|s| s.prefs.get(pref)).to_string()
                                on:click=move |_| settings.update(|s| s.prefs.toggle(pref))
                            ></button>
                        </div>
                    }
                })
                .collect_view()}
            <div class="dialog__actions">
                <button class="btn btn--primary" on:click=move |_| flash(banner, "Notification preferences saved", FlashTone::Success)>
                    "Save Preferences"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SecurityTab() -> impl IntoView {
    let banner = expect_context::<RwSignal<FlashState>>();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_password_change(&current.get_untracked(), &new.get_untracked(), &confirm.get_untracked()) {
            Ok(()) => {
                current.set(String::new());
                new.set(String::new());
                confirm.set(String::new());
                flash(banner, "Password updated", FlashTone::Success);
            }
            Err(message) => flash(banner, message, FlashTone::Warning),
        }
    };

    let input = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="password"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <form class="settings__panel" on:submit=on_submit>
            {input("Current Password", current)}
            {input("New Password", new)}
            {input("Confirm New Password", confirm)}
            <div class="dialog__actions">
                <button class="btn btn--primary" type="submit">
                    "Update Password"
                </button>
            </div>
        </form>
    }
}

#[component]
fn AppearanceTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let choose = move |dark: bool| {
        let applied = dark_mode::set(dark);
        ui.update(|u| u.dark_mode = applied);
    };

    view! {
        <div class="settings__panel">
            <p class="settings__hint">"Choose how GearGuard looks on this device."</p>
            <div class="theme-choice">
                <button
                    class="theme-choice__option"
                    class:theme-choice__option--active=move || !ui.with(|u| u.dark_mode)
                    on:click=move |_| choose(false)
                >
                    "☀ Light"
                </button>
                <button
                    class="theme-choice__option"
                    class:theme-choice__option--active=move || ui.with(|u| u.dark_mode)
                    on:click=move |_| choose(true)
                >
                    "☾ Dark"
                </button>
            </div>
        </div>
    }
}
