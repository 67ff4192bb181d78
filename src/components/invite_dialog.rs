//! Dialog for inviting people to a board.
//!
//! Registered users are invited by username or email via the user-invite
//! endpoint; unknown addresses get an email invitation instead.

use leptos::prelude::*;

use crate::state::boards;
use crate::state::errors::ErrorsState;

/// Invite form: identifier, role, and whether to fall back to email.
#[component]
pub fn InviteDialog(board_id: i64, on_close: Callback<()>) -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();

    let identifier = RwSignal::new(String::new());
    let role = RwSignal::new("member".to_owned());
    let by_email = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let submit = move |_| {
        let who = identifier.get();
        let who = who.trim().to_owned();
        if who.is_empty() {
            return;
        }
        let role = role.get();
        let email = by_email.get();
        leptos::task::spawn_local(async move {
            let result = if email {
                boards::invite_email(errors, board_id, &who, &role).await
            } else {
                boards::invite_member(errors, board_id, &who, &role).await
            };
            if result.is_ok() {
                identifier.set(String::new());
                sent.set(true);
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Invite to board"</h2>
                <label class="dialog__label">
                    "Username or email"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__select"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="member" selected>"Member"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </label>
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || by_email.get()
                        on:change=move |_| by_email.update(|v| *v = !*v)
                    />
                    "Send as email invitation"
                </label>

                <Show when=move || sent.get()>
                    <p class="dialog__hint">"Invitation sent."</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Invite"
                    </button>
                </div>
            </div>
        </div>
    }
}
