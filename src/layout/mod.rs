//! Layout collaborator interface and the default tree layout
//!
//! The view only ever talks to a [`LayoutProvider`]. It hands over the
//! logical tree plus the sizes it measured on the surface and reads back
//! points in layout coordinates, where the root sits at the origin.

pub mod config;
pub mod tree;
pub mod types;

pub use config::LayoutConfig;
pub use tree::TreeLayout;
pub use types::*;

use crate::model::{Mind, NodeId};

/// Source of measured node sizes, implemented by the view's registry
pub trait MeasuredSizes {
    fn size_of(&self, id: &NodeId) -> Size;
}

/// Computes node and connector coordinates for a tree
pub trait LayoutProvider {
    /// Recompute all geometry for the visible part of `mind`
    fn layout(&mut self, mind: &Mind, sizes: &dyn MeasuredSizes);

    /// Smallest canvas that fits the laid-out tree (without margins)
    fn min_size(&self) -> Size;

    /// Signed extents of the last layout
    fn bounds(&self) -> Bounds;

    /// Top-left corner of a node's element
    fn node_point(&self, id: &NodeId) -> Point;

    /// Where the connector from the parent attaches to the node
    fn node_point_in(&self, id: &NodeId) -> Point;

    /// Where the connector towards `child` leaves `parent`
    fn node_point_out_with_destination(&self, parent: &NodeId, child: &NodeId) -> Point;

    /// Top-left corner of a node's expander control
    fn expander_point(&self, id: &NodeId) -> Point;
}
