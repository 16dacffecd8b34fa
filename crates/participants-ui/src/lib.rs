//! participants-ui - TUI components for the participant list viewer
//!
//! This crate hosts the participant row binder on ratatui: application
//! state, row type, components and key handling.

pub mod app;
pub mod components;
pub mod event;
pub mod row;

pub use app::*;
pub use event::*;
pub use row::*;
