//! participants-core - Core types and logic for participant lists
//!
//! This crate provides phone-number formatting, the participant list model,
//! call list loading and the row binder used by list views. It has no
//! terminal dependencies.

pub mod binder;
pub mod config;
pub mod errors;
pub mod format;
pub mod list;
pub mod types;

pub use binder::*;
pub use config::*;
pub use errors::ParticipantsError;
pub use format::*;
pub use list::*;
pub use types::*;
