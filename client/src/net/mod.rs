//! Networking modules for the hosted auth + table backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the seams the UI depends on, `supabase` implements them
//! over REST, `types` defines the wire schema and `error` the failure taxonomy.

pub mod backend;
pub mod error;
pub mod supabase;
pub mod types;
