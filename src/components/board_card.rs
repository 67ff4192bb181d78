//! Reusable card component for board entries on the dashboard.

use leptos::prelude::*;

use crate::net::types::Board;

/// A clickable card representing a board in the dashboard grid.
#[component]
pub fn BoardCard(board: Board) -> impl IntoView {
    let href = format!("/board/{}", board.id);
    let members = board
        .members_count
        .map(|count| format!("{count} members"))
        .unwrap_or_default();
    let style = board
        .color
        .as_deref()
        .map(|color| format!("border-top: 3px solid {color}"))
        .unwrap_or_default();

    view! {
        <a class="board-card" href=href style=style>
            <span class="board-card__title">{board.title}</span>
            <span class="board-card__members">{members}</span>
        </a>
    }
}
