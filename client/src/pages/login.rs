//! Login screen. Any non-blank email and password signs in.

use leptos::prelude::*;

use crate::state::shell::{Shell, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok((email_value, _)) => {
                log::info!("signed in as {email_value}");
                shell.update(Shell::sign_in);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"GearGuard"</h1>
                <p class="login-card__subtitle">"Sign in to your maintenance dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Don't have an account? "
                    <button class="login-link" type="button" on:click=move |_| shell.update(Shell::show_register)>
                        "Create one"
                    </button>
                </p>
            </div>
        </div>
    }
}
