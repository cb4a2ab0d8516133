//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and the shared pieces of every list screen
//! (filter bar, modal fields, confirmation dialog, empty state) while reading
//! and writing state from Leptos context providers.

pub mod confirm_dialog;
pub mod empty_state;
pub mod field;
pub mod filter_bar;
pub mod flash_banner;
pub mod modal;
pub mod notifications_panel;
pub mod sidebar;
pub mod stat_card;
pub mod tag_editor;
pub mod top_nav;
