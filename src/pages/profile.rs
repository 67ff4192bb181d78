//! Profile page: account details, profile fields, password change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::json;

use crate::state::auth::{self, AuthState};
use crate::state::errors::ErrorsState;

/// Profile page. Fetches the user + profile pair on mount; saving patches
/// the profile endpoint and re-seeds from the server's response.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !auth.get().is_authenticated() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let saved = RwSignal::new(false);

    // Load the profile once and seed the form from the response.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(resp) = auth::fetch_profile(auth, errors).await {
                first_name.set(resp.user.first_name.unwrap_or_default());
                last_name.set(resp.user.last_name.unwrap_or_default());
                bio.set(resp.profile.bio.unwrap_or_default());
            }
        });
    });

    let on_save = move |_| {
        let patch = json!({
            "first_name": first_name.get().trim(),
            "last_name": last_name.get().trim(),
            "bio": bio.get(),
        });
        leptos::task::spawn_local(async move {
            saved.set(auth::update_profile(auth, errors, &patch).await.is_ok());
        });
    };

    let old_password = RwSignal::new(String::new());
    let new_password1 = RwSignal::new(String::new());
    let new_password2 = RwSignal::new(String::new());
    let password_changed = RwSignal::new(false);

    let on_change_password = move |_| {
        let old = old_password.get();
        let new1 = new_password1.get();
        let new2 = new_password2.get();
        if old.is_empty() || new1.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let ok = auth::change_password(errors, &old, &new1, &new2).await.is_ok();
            password_changed.set(ok);
            if ok {
                old_password.set(String::new());
                new_password1.set(String::new());
                new_password2.set(String::new());
            }
        });
    };

    let email = move || {
        auth.get()
            .user
            .and_then(|user| user.email)
            .unwrap_or_default()
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <a class="btn" href="/">"← Boards"</a>
                <h1>"Profile"</h1>
            </header>

            <section class="profile-page__section">
                <p class="profile-page__email">{email}</p>
                <label class="profile-page__label">
                    "First name"
                    <input
                        class="profile-page__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__label">
                    "Last name"
                    <input
                        class="profile-page__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__label">
                    "Bio"
                    <textarea
                        class="profile-page__textarea"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" on:click=on_save>
                    "Save profile"
                </button>
                <Show when=move || saved.get()>
                    <span class="profile-page__hint">"Saved."</span>
                </Show>
            </section>

            <section class="profile-page__section">
                <h2>"Change password"</h2>
                <label class="profile-page__label">
                    "Current password"
                    <input
                        class="profile-page__input"
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__label">
                    "New password"
                    <input
                        class="profile-page__input"
                        type="password"
                        prop:value=move || new_password1.get()
                        on:input=move |ev| new_password1.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__label">
                    "Repeat new password"
                    <input
                        class="profile-page__input"
                        type="password"
                        prop:value=move || new_password2.get()
                        on:input=move |ev| new_password2.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=on_change_password>
                    "Change password"
                </button>
                <Show when=move || password_changed.get()>
                    <span class="profile-page__hint">"Password changed."</span>
                </Show>
            </section>
        </div>
    }
}
