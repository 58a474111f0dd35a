//! Core controllers for the filter panel: selection edits and collapse state.

pub mod selection;
pub mod visibility;

pub use selection::{apply_edit, SelectionEdit, SelectionSink};
pub use visibility::{PanelVisibility, VisibilityController};
