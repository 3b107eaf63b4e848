//! Horizontal mind-map layout
//!
//! The root is centered on the origin. Its children are split into a right
//! and a left group by [`Direction`]; every group is stacked vertically by
//! the outer height of each subtree and centered on the point its connector
//! leaves the parent. Collapsed subtrees only take up their own node's
//! height, and hidden nodes get no geometry at all.
//!
//! A non-root node is drawn with an underline: the connector enters at the
//! bottom corner facing the root and leaves at the opposite bottom corner.

use std::collections::HashMap;

use crate::model::{Direction, Mind, MindNode, NodeId};

use super::config::LayoutConfig;
use super::types::{Bounds, Point, Size};
use super::{LayoutProvider, MeasuredSizes};

#[derive(Debug, Clone, Copy)]
struct NodeGeometry {
    size: Size,
    /// -1 for the left side, +1 for the right side
    sign: f64,
    is_root: bool,
    /// Entry point; the center for the root
    pin: Point,
}

impl NodeGeometry {
    fn top_left(&self) -> Point {
        let Size { width, height } = self.size;
        if self.is_root {
            Point::new(-width / 2.0, -height / 2.0)
        } else if self.sign > 0.0 {
            Point::new(self.pin.x, self.pin.y - height)
        } else {
            Point::new(self.pin.x - width, self.pin.y - height)
        }
    }

    fn exit(&self) -> Point {
        Point::new(self.pin.x + self.sign * self.size.width, self.pin.y)
    }
}

/// Default [`LayoutProvider`] implementation
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    config: LayoutConfig,
    geometry: HashMap<NodeId, NodeGeometry>,
    bounds: Bounds,
}

impl TreeLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            geometry: HashMap::new(),
            bounds: Bounds::default(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Whether the last layout produced geometry for this node
    pub fn is_placed(&self, id: &NodeId) -> bool {
        self.geometry.contains_key(id)
    }

    fn outer_height(&self, mind: &Mind, sizes: &dyn MeasuredSizes, node: &MindNode) -> f64 {
        let own = sizes.size_of(&node.id).height;
        if !node.expanded || !node.has_children() {
            return own;
        }
        let children: Vec<&MindNode> = node.children.iter().filter_map(|id| mind.get(id)).collect();
        let stacked: f64 = children
            .iter()
            .map(|child| self.outer_height(mind, sizes, child))
            .sum::<f64>()
            + self.config.v_space * children.len().saturating_sub(1) as f64;
        own.max(stacked)
    }

    fn place_children(
        &mut self,
        mind: &Mind,
        sizes: &dyn MeasuredSizes,
        children: &[&MindNode],
        sign: f64,
        exit: Point,
        gap: f64,
    ) {
        let heights: Vec<f64> = children
            .iter()
            .map(|child| self.outer_height(mind, sizes, child))
            .collect();
        let total = heights.iter().sum::<f64>()
            + self.config.v_space * children.len().saturating_sub(1) as f64;

        let x = exit.x + sign * gap;
        let mut top = exit.y - total / 2.0;
        for (child, outer) in children.iter().zip(heights) {
            let size = sizes.size_of(&child.id);
            let geometry = NodeGeometry {
                size,
                sign,
                is_root: false,
                pin: Point::new(x, top + outer / 2.0 + size.height / 2.0),
            };
            self.bounds.include(geometry.top_left(), size);
            self.geometry.insert(child.id.clone(), geometry);

            if child.expanded && child.has_children() {
                let grandchildren: Vec<&MindNode> =
                    child.children.iter().filter_map(|id| mind.get(id)).collect();
                let gap = self.config.expander_space + self.config.h_space;
                self.place_children(mind, sizes, &grandchildren, sign, geometry.exit(), gap);
            }
            top += outer + self.config.v_space;
        }
    }

    fn geometry_of(&self, id: &NodeId) -> Option<&NodeGeometry> {
        self.geometry.get(id)
    }
}

impl LayoutProvider for TreeLayout {
    fn layout(&mut self, mind: &Mind, sizes: &dyn MeasuredSizes) {
        self.geometry.clear();
        self.bounds = Bounds::default();

        let root = mind.root();
        let root_geometry = NodeGeometry {
            size: sizes.size_of(&root.id),
            sign: 1.0,
            is_root: true,
            pin: Point::default(),
        };
        self.bounds
            .include(root_geometry.top_left(), root_geometry.size);
        self.geometry.insert(root.id.clone(), root_geometry);

        if !root.expanded {
            return;
        }
        let (left, right): (Vec<&MindNode>, Vec<&MindNode>) = root
            .children
            .iter()
            .filter_map(|id| mind.get(id))
            .partition(|child| child.direction == Direction::Left);

        let half = root_geometry.size.width / 2.0;
        let gap = self.config.h_space;
        self.place_children(mind, sizes, &right, 1.0, Point::new(half, 0.0), gap);
        self.place_children(mind, sizes, &left, -1.0, Point::new(-half, 0.0), gap);
    }

    fn min_size(&self) -> Size {
        Size::new(
            self.bounds.width(),
            2.0 * (-self.bounds.north).max(self.bounds.south),
        )
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn node_point(&self, id: &NodeId) -> Point {
        self.geometry_of(id)
            .map(NodeGeometry::top_left)
            .unwrap_or_default()
    }

    fn node_point_in(&self, id: &NodeId) -> Point {
        self.geometry_of(id).map(|g| g.pin).unwrap_or_default()
    }

    fn node_point_out_with_destination(&self, parent: &NodeId, child: &NodeId) -> Point {
        let Some(parent_geometry) = self.geometry_of(parent) else {
            return Point::default();
        };
        if parent_geometry.is_root {
            let sign = self.geometry_of(child).map_or(1.0, |g| g.sign);
            Point::new(sign * parent_geometry.size.width / 2.0, 0.0)
        } else {
            parent_geometry.exit()
        }
    }

    fn expander_point(&self, id: &NodeId) -> Point {
        let Some(geometry) = self.geometry_of(id) else {
            return Point::default();
        };
        if geometry.is_root {
            return geometry.top_left();
        }
        let exit = geometry.exit();
        let space = self.config.expander_space;
        let x = if geometry.sign > 0.0 { exit.x } else { exit.x - space };
        Point::new(x, exit.y - space / 2.0)
    }
}
