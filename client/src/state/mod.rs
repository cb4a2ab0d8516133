//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal` per state struct and provides it as context.
//! The structs are plain data with methods so every transition is testable
//! without a reactive runtime.

pub mod flash;
pub mod notifications;
pub mod settings;
pub mod shell;
pub mod ui;
pub mod workspace;
