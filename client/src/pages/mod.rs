//! Page modules, one per view.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-local state and timers and reports transitions to
//! `App` through callbacks; rendering details are delegated to `components`.

pub mod brief;
pub mod connect;
pub mod dashboard;
pub mod landing;
