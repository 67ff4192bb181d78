//! Board page — list columns, task modal, members panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::invite_dialog::InviteDialog;
use crate::components::list_column::ListColumn;
use crate::components::members_panel::MembersPanel;
use crate::components::task_modal::TaskModal;
use crate::state::auth::AuthState;
use crate::state::boards::{self, BoardsState};
use crate::state::errors::ErrorsState;
use crate::state::lists::{self, ListsState};
use crate::state::tasks::{self, TasksState};

/// Board page. Reads the board id from the route, loads the board with its
/// lists and tasks, and clears the list/task caches on unmount.
#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let lists = expect_context::<RwSignal<ListsState>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let board_id = move || {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    // Redirect to login if not authenticated.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !auth.get().is_authenticated() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    // Load board, lists, and each list's tasks when the route param changes.
    Effect::new(move || {
        let Some(id) = board_id() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let _ = boards::fetch_board(boards, errors, id).await;
            if let Ok(fetched) = lists::fetch_lists(lists, errors, id).await {
                for list in fetched {
                    let _ = tasks::fetch_tasks(tasks, errors, list.id).await;
                }
            }
        });
    });

    on_cleanup(move || {
        lists.update(ListsState::clear);
        tasks.update(TasksState::clear);
        boards.update(|s| s.current = None);
    });

    let show_invite = RwSignal::new(false);
    let show_members = RwSignal::new(false);
    let new_list_title = RwSignal::new(String::new());

    let board_title = move || {
        boards
            .get()
            .current
            .map(|board| board.title)
            .unwrap_or_else(|| "Loading...".to_owned())
    };

    let is_owner = move || {
        let state = boards.get();
        let Some(board) = state.current else {
            return false;
        };
        let owner = board.owner_username;
        owner.is_some()
            && owner
                == auth
                    .get()
                    .user
                    .map(|user| user.username)
    };

    let add_list = move || {
        let Some(id) = board_id() else {
            return;
        };
        let title = new_list_title.get();
        let title = title.trim().to_owned();
        if title.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            if lists::create_list(lists, errors, id, &title, None).await.is_ok() {
                new_list_title.set(String::new());
            }
        });
    };
    let add_list_click = add_list.clone();

    let on_delete_board = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = board_id() else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if boards::delete_board(boards, errors, id).await.is_ok() {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    let on_leave_board = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = board_id() else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if boards::leave_board(boards, errors, id).await.is_ok() {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <a class="btn" href="/">"← Boards"</a>
                <h1 class="board-page__title">{board_title}</h1>
                <span class="board-page__spacer"></span>
                <button class="btn" on:click=move |_| show_invite.set(true)>
                    "Invite"
                </button>
                <button class="btn" on:click=move |_| show_members.update(|v| *v = !*v)>
                    "Members"
                </button>
                <Show
                    when=is_owner
                    fallback=move || {
                        view! {
                            <button class="btn btn--danger" on:click=on_leave_board.clone()>
                                "Leave board"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--danger" on:click=on_delete_board.clone()>
                        "Delete board"
                    </button>
                </Show>
            </header>

            <div class="board-page__body">
                <div class="board-page__columns">
                    {move || {
                        lists
                            .get()
                            .lists
                            .into_iter()
                            .map(|list| view! { <ListColumn list=list/> })
                            .collect::<Vec<_>>()
                    }}

                    <div class="board-page__add-list">
                        <input
                            class="board-page__add-list-input"
                            type="text"
                            placeholder="Add a list..."
                            prop:value=move || new_list_title.get()
                            on:input=move |ev| new_list_title.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_list();
                                }
                            }
                        />
                        <button class="btn" on:click=move |_| add_list_click()>
                            "Add list"
                        </button>
                    </div>
                </div>

                <Show when=move || show_members.get()>
                    {move || {
                        board_id()
                            .map(|id| view! { <MembersPanel board_id=id/> })
                    }}
                </Show>
            </div>

            <Show when=move || show_invite.get()>
                {move || {
                    board_id()
                        .map(|id| {
                            let on_close = Callback::new(move |()| show_invite.set(false));
                            view! { <InviteDialog board_id=id on_close=on_close/> }
                        })
                }}
            </Show>

            <TaskModal/>
        </div>
    }
}
