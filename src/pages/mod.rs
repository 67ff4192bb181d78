//! Top-level route views.

pub mod board;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
