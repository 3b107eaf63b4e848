//! Error types for tree mutations and snapshot decoding

use thiserror::Error;

use super::node::NodeId;

/// Errors raised by the logical tree
#[derive(Debug, Error)]
pub enum ModelError {
    /// No node with this id exists in the tree
    #[error("node '{0}' not found")]
    NodeNotFound(NodeId),

    /// A node with this id is already part of the tree
    #[error("duplicate node id '{0}'")]
    DuplicateId(NodeId),

    /// The root can be renamed but never removed
    #[error("the root node '{0}' cannot be removed")]
    RootRemoval(NodeId),

    /// Snapshot JSON could not be read or written
    #[error("invalid node tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

impl ModelError {
    /// Create a not-found error for the given id
    pub fn not_found(id: &NodeId) -> Self {
        Self::NodeNotFound(id.clone())
    }
}
