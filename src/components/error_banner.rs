//! Global dismissable banner for surfaced request errors.

use leptos::prelude::*;

use crate::state::errors::ErrorsState;

/// Renders the latest error message from the errors store, if any.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();

    view! {
        <Show when=move || errors.get().message.is_some()>
            <div class="error-banner">
                <span class="error-banner__message">
                    {move || errors.get().message.unwrap_or_default()}
                </span>
                <button
                    class="error-banner__dismiss"
                    on:click=move |_| errors.update(ErrorsState::clear)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
