//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state shared across views and is owned by `App`.
//! `connect`, `brief`, and `toast` are view-local models kept free of Leptos
//! types so their transitions can be tested natively.

pub mod brief;
pub mod connect;
pub mod session;
pub mod toast;
