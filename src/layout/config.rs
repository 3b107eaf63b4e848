//! Configuration for the tree layout

use serde::Deserialize;

/// Spacing used by [`TreeLayout`](super::TreeLayout)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between a parent's exit point and its children
    pub h_space: f64,

    /// Vertical gap between sibling subtrees
    pub v_space: f64,

    /// Room reserved for the expander control next to a parent
    pub expander_space: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            h_space: 30.0,
            v_space: 20.0,
            expander_space: 13.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal spacing
    pub fn with_h_space(mut self, space: f64) -> Self {
        self.h_space = space;
        self
    }

    /// Set the vertical spacing between siblings
    pub fn with_v_space(mut self, space: f64) -> Self {
        self.v_space = space;
        self
    }

    /// Set the expander allowance
    pub fn with_expander_space(mut self, space: f64) -> Self {
        self.expander_space = space;
        self
    }
}
