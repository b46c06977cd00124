//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (company header, student sidebar) and the
//! event form. The header owns the identity view-model for its page.

pub mod company_header;
pub mod event_form;
pub mod student_menu_bar;
