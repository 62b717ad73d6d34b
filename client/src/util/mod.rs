//! Helpers the pages lean on: timers, browser calls, and brief text.
//!
//! SYSTEM CONTEXT
//! ==============
//! `deferral` and `browser` are the only places that touch browser APIs, and
//! both degrade to no-ops or `Unavailable` without `hydrate`. `brief_text` is
//! pure string logic.

pub mod brief_text;
pub mod browser;
pub mod deferral;
