//! UI components for the participant viewer

pub mod footer;
pub mod header;
pub mod list_pane;
pub mod overlays;
pub mod search;

pub use footer::*;
pub use header::*;
pub use list_pane::*;
pub use overlays::*;
pub use search::*;
