//! Mindmap View - the interactive view layer of a mind-map editor
//!
//! This library keeps a rendering surface in sync with a logical node tree:
//! it binds visual elements to nodes, drives selection and inline editing,
//! lays out and redraws the tree, and keeps a bounded undo history.
//!
//! # Example
//!
//! ```rust
//! use mindmap_view::{
//!     HeadlessCanvas, HeadlessSurface, Mind, MindMap, MindMapOptions, Size,
//! };
//!
//! let mut mind = Mind::new("root", "Ideas");
//! mind.add_node(&"root".into(), "a", Some("First".to_string()), None).unwrap();
//!
//! let mut map = MindMap::new(
//!     mind,
//!     HeadlessSurface::new(Size::new(800.0, 600.0)),
//!     HeadlessCanvas::new(),
//!     MindMapOptions::default(),
//! );
//! map.init().unwrap();
//! map.update_node(&"a".into(), "Renamed").unwrap();
//! assert!(map.undo().unwrap());
//! assert_eq!(map.mind().get(&"a".into()).unwrap().topic.as_deref(), Some("First"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod mindmap;
pub mod model;
pub mod renderer;
pub mod surface;
pub mod undo;
pub mod view;

pub use config::{ConfigError, MindMapOptions};
pub use error::ViewError;
pub use layout::{LayoutConfig, LayoutProvider, Point, Size, TreeLayout};
pub use mindmap::{EditKind, Key, MindEvent, MindMap};
pub use model::{Direction, Mind, MindNode, ModelError, NodeId, NodeRecord, NodeTree};
pub use renderer::{render_svg, SvgConfig};
pub use surface::{HandleId, HeadlessCanvas, HeadlessSurface, LineCanvas, NodeSurface};
pub use undo::UndoManager;
pub use view::{EditOutcome, ViewProvider};

use thiserror::Error;

/// Errors that can occur while driving a mind map
#[derive(Debug, Error)]
pub enum MindMapError {
    /// The tree rejected an operation
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// A view invariant was broken
    #[error("view error: {0}")]
    View(#[from] ViewError),

    /// Options could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
