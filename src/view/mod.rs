//! The view: registry of visual bindings, selection/edit state and the
//! layout/render orchestrator tying them to the surfaces.

pub mod provider;
pub mod registry;
pub mod state;

pub use provider::{EditOutcome, ViewProvider, SELECTED_CLASS};
pub use registry::{Registry, VisualBinding, COLLAPSED_GLYPH, EXPANDED_GLYPH};
pub use state::{adjust_scroll, EditPhase, ViewState, SCROLL_ENTER_MARGIN, SCROLL_LEAVE_MARGIN};
