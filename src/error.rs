//! Error types for the view

use thiserror::Error;

use crate::model::NodeId;
use crate::surface::HandleId;

/// Broken view invariants
///
/// These are programming errors: they are detected before any state is
/// touched and abort the operation that hit them.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A node was bound twice
    #[error("node '{0}' already has a visual binding")]
    AlreadyBound(NodeId),

    /// A binding was requested for a node that is not loaded
    #[error("node '{0}' has no visual binding")]
    NotBound(NodeId),

    /// An element handle does not belong to any bound node
    #[error("element {0:?} is not bound to any node")]
    UnknownHandle(HandleId),
}

impl ViewError {
    /// Get the node the error is about, if any
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Self::AlreadyBound(id) | Self::NotBound(id) => Some(id),
            Self::UnknownHandle(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_bound_display() {
        let err = ViewError::AlreadyBound(NodeId::new("a"));
        assert!(err.to_string().contains("already has a visual binding"));
        assert_eq!(err.node(), Some(&NodeId::new("a")));
    }

    #[test]
    fn test_unknown_handle_has_no_node() {
        let err = ViewError::UnknownHandle(HandleId(7));
        assert_eq!(err.node(), None);
        assert!(err.to_string().contains("HandleId(7)"));
    }
}
