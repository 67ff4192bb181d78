//! Reusable UI components shared across pages.

pub mod board_card;
pub mod error_banner;
pub mod invite_dialog;
pub mod list_column;
pub mod members_panel;
pub mod task_card;
pub mod task_modal;
