//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, badges, toasts) and brief
//! sections; pages compose them and own the state they read.

pub mod brand_header;
pub mod brief_section;
pub mod service_badge;
pub mod toast_host;
