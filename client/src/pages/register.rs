//! Registration screen. Completing the required fields signs in.

use leptos::prelude::*;

use crate::state::shell::{Registration, Shell, validate_register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = Registration {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match validate_register(&form) {
            Ok(()) => {
                log::info!("registered {}", form.email.trim());
                shell.update(Shell::sign_in);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let input = move |value: RwSignal<String>, placeholder: &'static str, kind: &'static str| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <p class="login-card__subtitle">"Start tracking your equipment"</p>
                <form class="login-form" on:submit=on_submit>
                    {input(name, "Full name", "text")}
                    {input(email, "you@example.com", "email")}
                    {input(company, "Company (optional)", "text")}
                    {input(password, "Password", "password")}
                    {input(confirm_password, "Confirm password", "password")}
                    <button class="login-button" type="submit">
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <button class="login-link" type="button" on:click=move |_| shell.update(Shell::show_login)>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
