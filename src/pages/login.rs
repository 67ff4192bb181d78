//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::errors::ErrorsState;

/// Login page — exchanges credentials for tokens and navigates to the
/// dashboard on success. Failures land in the global error banner.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move || {
        if pending.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            return;
        }
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::login(auth, errors, email_value.trim(), &password_value).await;
            pending.set(false);
            if result.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    let submit_click = submit.clone();

    view! {
        <div class="login-page">
            <h1>"Taskboard"</h1>
            <p>"Sign in to your boards"</p>
            <label class="login-page__label">
                "Email"
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
            </label>
            <button
                class="btn btn--primary login-page__submit"
                disabled=move || pending.get()
                on:click=move |_| submit_click()
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="login-page__alt">
                "No account yet? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
