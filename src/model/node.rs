//! Node identity and per-node data

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connector color used when a node carries no color of its own
pub const DEFAULT_LINE_COLOR: &str = "#555555";

/// Opaque, unique node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Side of the root a node grows towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
    /// Only the root is centered
    Center,
}

impl Direction {
    /// Horizontal sign for geometry: -1 for left, +1 otherwise
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right | Direction::Center => 1.0,
        }
    }
}

/// A logical node as stored by [`Mind`](super::Mind)
#[derive(Debug, Clone, PartialEq)]
pub struct MindNode {
    pub id: NodeId,
    /// `None` for image nodes, which cannot be edited inline
    pub topic: Option<String>,
    /// Back-reference by id; `None` only for the root
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub direction: Direction,
    pub color: Option<String>,
    pub expanded: bool,
}

impl MindNode {
    pub fn new(id: NodeId, topic: Option<String>) -> Self {
        Self {
            id,
            topic,
            parent: None,
            children: Vec::new(),
            direction: Direction::Right,
            color: None,
            expanded: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the node has text that can be edited inline
    pub fn is_editable(&self) -> bool {
        self.topic.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Color for the connectors drawn towards this node
    pub fn line_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_LINE_COLOR)
    }
}
