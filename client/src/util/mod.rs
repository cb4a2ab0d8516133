//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and display arithmetic from page
//! and component logic so both stay testable natively.

pub mod calendar;
pub mod dark_mode;
pub mod format;
