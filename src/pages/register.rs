//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::json;

use crate::state::auth::{self, AuthState};
use crate::state::errors::ErrorsState;

/// Registration form. The API signs the new account in directly, so a
/// successful submit lands on the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |_| {
        if pending.get() {
            return;
        }
        let payload = json!({
            "username": username.get().trim(),
            "email": email.get().trim(),
            "first_name": first_name.get().trim(),
            "last_name": last_name.get().trim(),
            "password1": password1.get(),
            "password2": password2.get(),
        });
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::register(auth, errors, &payload).await;
            pending.set(false);
            if result.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <label class="register-page__label">
                "Username"
                <input
                    class="register-page__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "Email"
                <input
                    class="register-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "First name"
                <input
                    class="register-page__input"
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "Last name"
                <input
                    class="register-page__input"
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "Password"
                <input
                    class="register-page__input"
                    type="password"
                    prop:value=move || password1.get()
                    on:input=move |ev| password1.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "Repeat password"
                <input
                    class="register-page__input"
                    type="password"
                    prop:value=move || password2.get()
                    on:input=move |ev| password2.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=submit
            >
                {move || if pending.get() { "Creating..." } else { "Create account" }}
            </button>
            <p class="register-page__alt">
                "Already registered? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
