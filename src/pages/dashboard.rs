//! Dashboard page: board grid, create-board dialog, pending invitations.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::board_card::BoardCard;
use crate::state::auth::{self, AuthState};
use crate::state::boards::{self, BoardsState};
use crate::state::errors::ErrorsState;
use crate::state::invitations::{self, InvitationResponse, InvitationsState};

/// Dashboard — shows the user's boards and pending invitations.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let invitations = expect_context::<RwSignal<InvitationsState>>();
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

    // Populate the board and invitation stores on mount.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = boards::fetch_boards(boards, errors).await;
            let _ = invitations::fetch_invitations(invitations, errors).await;
        });
    });

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                auth::logout(auth).await;
                navigate("/login", NavigateOptions::default());
            });
        }
    };

    let respond = move |id: i64, response: InvitationResponse| {
        leptos::task::spawn_local(async move {
            let _ = invitations::respond(invitations, errors, id, response).await;
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Boards"</h1>
                <span class="dashboard-page__spacer"></span>
                <span class="dashboard-page__user">{username}</span>
                <a class="btn" href="/profile">"Profile"</a>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Board"
                </button>
            </header>

            <div class="dashboard-page__grid">
                {move || {
                    boards
                        .get()
                        .boards
                        .into_iter()
                        .map(|board| view! { <BoardCard board=board/> })
                        .collect::<Vec<_>>()
                }}
                <button class="dashboard-page__new-card" on:click=on_create title="Create board">
                    "+"
                </button>
            </div>

            <Show when=move || !invitations.get().invitations.is_empty()>
                <section class="dashboard-page__invitations">
                    <h2>"Invitations"</h2>
                    <ul>
                        {move || {
                            invitations
                                .get()
                                .invitations
                                .into_iter()
                                .map(|inv| {
                                    let id = inv.id;
                                    let board = inv.board_title.unwrap_or_default();
                                    let from = inv.invited_by_username.unwrap_or_default();
                                    view! {
                                        <li class="invitation-row">
                                            <span class="invitation-row__board">{board}</span>
                                            <span class="invitation-row__from">{from}</span>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| respond(id, InvitationResponse::Accept)
                                            >
                                                "Accept"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| respond(id, InvitationResponse::Reject)
                                            >
                                                "Reject"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>

            <Show when=move || show_create.get()>
                <CreateBoardDialog on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new board.
#[component]
fn CreateBoardDialog(on_cancel: Callback<()>) -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());

    let submit = move || {
        let board_title = title.get();
        let board_title = board_title.trim().to_owned();
        if board_title.is_empty() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Ok(board) = boards::create_board(boards, errors, &board_title).await {
                navigate(&format!("/board/{}", board.id), NavigateOptions::default());
            }
        });
    };

    let submit_click = submit.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Board"</h2>
                <label class="dialog__label">
                    "Board Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit_click()>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
