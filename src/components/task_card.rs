//! A single task row inside a list column.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::errors::ErrorsState;
use crate::state::tasks::{self, TasksState};

/// Task card: completion checkbox plus a click target opening the modal.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();

    let task_id = task.id;
    let completed = task.is_completed;
    let class = if completed {
        "task-card task-card--completed"
    } else {
        "task-card"
    };

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        leptos::task::spawn_local(async move {
            let _ = tasks::toggle_complete(tasks, errors, task_id).await;
        });
    };

    let on_open = move |_| {
        leptos::task::spawn_local(async move {
            let _ = tasks::open_task(tasks, errors, task_id).await;
        });
    };

    view! {
        <div class=class on:click=on_open>
            <input
                type="checkbox"
                class="task-card__toggle"
                prop:checked=completed
                on:click=on_toggle
            />
            <span class="task-card__title">{task.title}</span>
            {task
                .due_date
                .map(|due| view! { <span class="task-card__due">{due}</span> })}
        </div>
    }
}
