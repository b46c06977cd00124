//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`identity`, `menu`, `event_draft`) so components
//! depend on small focused models, and all of it is plain Rust that can be
//! tested without a reactive runtime.

pub mod event_draft;
pub mod identity;
pub mod identity_model;
pub mod menu;
