//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by resource (`auth`, `boards`, `lists`, `tasks`,
//! `invitations`, `errors`) so pages can depend on small focused stores.
//! Each store is a plain struct held in an `RwSignal` provided via context,
//! plus async actions that issue one HTTP call and on success apply a
//! deterministic local edit. The edits are pure methods on the struct, so a
//! failed request never touches a cache and the edit semantics unit-test
//! natively.

pub mod auth;
pub mod boards;
pub mod errors;
pub mod invitations;
pub mod lists;
pub mod tasks;
