//! Auth Page
//!
//! Login and registration forms shown while signed out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterRequest};
use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::toast::use_toasts;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::Login);

    view! {
        <div class="auth-page">
            <h1 class="auth-title">"Split"</h1>
            {move || match mode.get() {
                AuthMode::Login => view! { <LoginForm /> }.into_any(),
                AuthMode::Register => view! { <RegisterForm /> }.into_any(),
            }}
            <button
                class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "auth-switch")
                on:click=move |_| set_mode.update(|m| {
                    *m = if *m == AuthMode::Login { AuthMode::Register } else { AuthMode::Login }
                })
            >
                {move || match mode.get() {
                    AuthMode::Login => "Need an account? Register",
                    AuthMode::Register => "Already registered? Log in",
                }}
            </button>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            toasts.warning("Email and password are required.");
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            if let Err(e) = auth.login(&api::client(), &email, &password).await {
                log::warn!("login failed: {}", e);
                toasts.error("Login failed. Check your email and password.");
            }
            // the form is gone once the session is set
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Log in"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=button_class(ButtonVariant::Primary, ButtonSize::Default, "")
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Logging in..." } else { "Log in" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let username = username.get().trim().to_string();
        let full_name = full_name.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || username.is_empty() || password.is_empty() {
            toasts.warning("Email, username and password are required.");
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            let request = RegisterRequest {
                email: &email,
                username: &username,
                password: &password,
                full_name: &full_name,
            };
            match auth.register(&api::client(), &request).await {
                Ok(()) => toasts.success("Welcome to Split!"),
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    toasts.error(e.user_message());
                }
            }
            // the form is gone once the session is set
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create an account"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Full name"
                prop:value=move || full_name.get()
                on:input=move |ev| set_full_name.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=button_class(ButtonVariant::Primary, ButtonSize::Default, "")
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Creating account..." } else { "Register" }}
            </button>
        </form>
    }
}
