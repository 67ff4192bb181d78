//! Task detail modal: edit, toggle completion, move, and delete.

use leptos::prelude::*;
use serde_json::json;

use crate::state::errors::ErrorsState;
use crate::state::lists::ListsState;
use crate::state::tasks::{self, TasksState};

/// Modal for the task currently open in the tasks store.
///
/// Inputs re-seed from the store whenever the server's representation of
/// the task replaces the cached one.
#[component]
pub fn TaskModal() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let lists = expect_context::<RwSignal<ListsState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let target_list = RwSignal::new(String::new());
    let target_position = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(task) = tasks.get().current {
            title.set(task.title);
            description.set(task.description.unwrap_or_default());
        }
    });

    let current_id = move || tasks.get().current.map(|t| t.id);

    let on_close = move |_| tasks::close_task(tasks);

    let on_save = move |_| {
        let Some(id) = current_id() else { return };
        let patch = json!({
            "title": title.get().trim(),
            "description": description.get(),
        });
        leptos::task::spawn_local(async move {
            let _ = tasks::update_task(tasks, errors, id, &patch).await;
        });
    };

    let on_toggle = move |_| {
        let Some(id) = current_id() else { return };
        leptos::task::spawn_local(async move {
            let _ = tasks::toggle_complete(tasks, errors, id).await;
        });
    };

    let on_delete = move |_| {
        let Some(id) = current_id() else { return };
        leptos::task::spawn_local(async move {
            let _ = tasks::delete_task(tasks, errors, id).await;
        });
    };

    let on_move = move |_| {
        let Some(id) = current_id() else { return };
        let new_list = target_list.get().parse::<i64>().ok();
        let new_position = target_position.get().parse::<i64>().ok();
        if new_list.is_none() && new_position.is_none() {
            return;
        }
        leptos::task::spawn_local(async move {
            let _ = tasks::move_task(tasks, errors, id, new_list, new_position).await;
        });
    };

    let toggle_label = move || {
        if tasks.get().current.is_some_and(|t| t.is_completed) {
            "Mark incomplete"
        } else {
            "Mark complete"
        }
    };

    view! {
        <Show when=move || tasks.get().modal_open>
            <div class="dialog-backdrop" on:click=on_close>
                <div class="dialog dialog--task" on:click=move |ev| ev.stop_propagation()>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__move">
                        <select
                            class="dialog__select"
                            on:change=move |ev| target_list.set(event_target_value(&ev))
                        >
                            <option value="">"Keep current list"</option>
                            {move || {
                                lists
                                    .get()
                                    .lists
                                    .into_iter()
                                    .map(|l| {
                                        let value = l.id.to_string();
                                        view! { <option value=value>{l.title}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <input
                            class="dialog__input dialog__input--position"
                            type="number"
                            placeholder="Position"
                            prop:value=move || target_position.get()
                            on:input=move |ev| target_position.set(event_target_value(&ev))
                        />
                        <button class="btn" on:click=on_move>
                            "Move"
                        </button>
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" on:click=on_toggle>
                            {toggle_label}
                        </button>
                        <button class="btn btn--danger" on:click=on_delete>
                            "Delete"
                        </button>
                        <span class="dialog__spacer"></span>
                        <button class="btn" on:click=on_close>
                            "Close"
                        </button>
                        <button class="btn btn--primary" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
