//! One list column on the board page: header, task cards, add-task form.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::types::List;
use crate::state::errors::ErrorsState;
use crate::state::lists::{self, ListsState};
use crate::state::tasks::{self, TasksState};

/// A kanban column for one list.
#[component]
pub fn ListColumn(list: List) -> impl IntoView {
    let lists = expect_context::<RwSignal<ListsState>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();

    let list_id = list.id;
    let new_title = RwSignal::new(String::new());

    let column_tasks = move || tasks.get().tasks_for(list_id);
    let header_style = list
        .color
        .as_deref()
        .map(|color| format!("background: {color}"))
        .unwrap_or_default();

    let add_task = move || {
        let title = new_title.get();
        let title = title.trim().to_owned();
        if title.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            if tasks::create_task(tasks, errors, list_id, &title).await.is_ok() {
                new_title.set(String::new());
            }
        });
    };

    let delete_list = move |_| {
        leptos::task::spawn_local(async move {
            let _ = lists::delete_list(lists, errors, list_id).await;
        });
    };

    view! {
        <div class="list-column">
            <div class="list-column__header" style=header_style>
                <span class="list-column__title">{list.title}</span>
                <span class="list-column__count">{move || column_tasks().len()}</span>
                <button class="list-column__delete" on:click=delete_list title="Delete list">
                    "×"
                </button>
            </div>

            <div class="list-column__tasks">
                {move || {
                    column_tasks()
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="list-column__add">
                <input
                    class="list-column__add-input"
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| new_title.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_task();
                        }
                    }
                />
                <button class="btn" on:click=move |_| add_task()>
                    "Add"
                </button>
            </div>
        </div>
    }
}
