//! Logical mind-map tree
//!
//! The view never owns logical nodes. It reads them from a [`Mind`] and
//! keeps its own per-node records keyed by [`NodeId`]. Snapshots of the
//! whole tree are plain serde records ([`NodeTree`]) so they stay
//! independent of the live arena.

pub mod error;
pub mod mind;
pub mod node;
pub mod tree;

pub use error::ModelError;
pub use mind::Mind;
pub use node::{Direction, MindNode, NodeId, DEFAULT_LINE_COLOR};
pub use tree::{NodeRecord, NodeTree};
