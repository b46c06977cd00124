//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Layouts wrap a route group with its navigation chrome.

pub mod layouts;
pub mod placeholder;
pub mod sign_in;
