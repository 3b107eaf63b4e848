//! Arena holding the live logical tree

use std::collections::HashMap;

use super::error::ModelError;
use super::node::{Direction, MindNode, NodeId};

/// The logical tree, keyed by id and iterated in insertion order
#[derive(Debug, Clone)]
pub struct Mind {
    nodes: HashMap<NodeId, MindNode>,
    order: Vec<NodeId>,
    root: NodeId,
}

impl Mind {
    /// Create a tree holding only a root node
    pub fn new(root_id: impl Into<NodeId>, topic: impl Into<String>) -> Self {
        let root_id = root_id.into();
        let mut root = MindNode::new(root_id.clone(), Some(topic.into()));
        root.direction = Direction::Center;

        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), root);
        Self {
            nodes,
            order: vec![root_id.clone()],
            root: root_id,
        }
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    pub fn root(&self) -> &MindNode {
        &self.nodes[&self.root]
    }

    pub fn get(&self, id: &NodeId) -> Option<&MindNode> {
        self.nodes.get(id)
    }

    /// Look up a node, failing with [`ModelError::NodeNotFound`]
    pub fn node(&self, id: &NodeId) -> Result<&MindNode, ModelError> {
        self.nodes.get(id).ok_or_else(|| ModelError::not_found(id))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &MindNode> {
        self.order.iter().map(move |id| &self.nodes[id])
    }

    /// Add a new child under `parent_id`
    ///
    /// Children of the root take `direction` (defaulting to right); deeper
    /// nodes always grow towards the same side as their parent and inherit
    /// its color.
    pub fn add_node(
        &mut self,
        parent_id: &NodeId,
        id: impl Into<NodeId>,
        topic: Option<String>,
        direction: Option<Direction>,
    ) -> Result<&MindNode, ModelError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(ModelError::DuplicateId(id));
        }
        let parent = self.node(parent_id)?;

        let mut node = MindNode::new(id.clone(), topic);
        node.parent = Some(parent_id.clone());
        if parent.is_root() {
            node.direction = match direction.unwrap_or_default() {
                Direction::Center => Direction::Right,
                d => d,
            };
        } else {
            node.direction = parent.direction;
            node.color = parent.color.clone();
        }

        self.insert_child(parent_id, node);
        Ok(&self.nodes[&id])
    }

    pub(crate) fn insert_child(&mut self, parent_id: &NodeId, node: MindNode) {
        let id = node.id.clone();
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.push(id.clone());
        }
        self.nodes.insert(id.clone(), node);
        self.order.push(id);
    }

    /// Remove a node together with its whole subtree
    pub fn remove_node(&mut self, id: &NodeId) -> Result<MindNode, ModelError> {
        let node = self.node(id)?;
        if node.is_root() {
            return Err(ModelError::RootRemoval(id.clone()));
        }
        if let Some(parent_id) = node.parent.clone() {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|c| c != id);
            }
        }

        let doomed = self.subtree(id);
        for gone in &doomed[1..] {
            self.nodes.remove(gone);
        }
        self.order.retain(|n| !doomed.contains(n));
        self.nodes.remove(id).ok_or_else(|| ModelError::not_found(id))
    }

    /// Replace the topic of a node
    pub fn update_topic(&mut self, id: &NodeId, topic: impl Into<String>) -> Result<(), ModelError> {
        let node = self.node_mut(id)?;
        node.topic = Some(topic.into());
        Ok(())
    }

    pub fn set_expanded(&mut self, id: &NodeId, expanded: bool) -> Result<(), ModelError> {
        self.node_mut(id)?.expanded = expanded;
        Ok(())
    }

    pub fn set_color(&mut self, id: &NodeId, color: Option<String>) -> Result<(), ModelError> {
        self.node_mut(id)?.color = color;
        Ok(())
    }

    /// A node is visible unless one of its ancestors is collapsed
    pub fn is_visible(&self, id: &NodeId) -> bool {
        let mut current = self.nodes.get(id).and_then(|n| n.parent.as_ref());
        while let Some(parent_id) = current {
            match self.nodes.get(parent_id) {
                Some(parent) if !parent.expanded => return false,
                Some(parent) => current = parent.parent.as_ref(),
                None => return false,
            }
        }
        self.nodes.contains_key(id)
    }

    /// Whether `id` is `ancestor` itself or lies below it
    pub fn is_in_subtree(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.nodes.get(cur).and_then(|n| n.parent.as_ref());
        }
        false
    }

    /// Ids of a subtree in pre-order, starting with `id` itself
    pub fn subtree(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes.get(&cur) {
                stack.extend(node.children.iter().rev().cloned());
                out.push(cur);
            }
        }
        out
    }

    pub(crate) fn root_mut(&mut self) -> &mut MindNode {
        self.nodes
            .get_mut(&self.root)
            .expect("root is never removed")
    }

    fn node_mut(&mut self, id: &NodeId) -> Result<&mut MindNode, ModelError> {
        self.nodes.get_mut(id).ok_or_else(|| ModelError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mind {
        let mut mind = Mind::new("root", "Root");
        let root = NodeId::new("root");
        mind.add_node(&root, "a", Some("A".into()), None).unwrap();
        mind.add_node(&root, "b", Some("B".into()), Some(Direction::Left))
            .unwrap();
        mind.add_node(&NodeId::new("a"), "a1", Some("A1".into()), None)
            .unwrap();
        mind.add_node(&NodeId::new("a1"), "a1x", Some("A1x".into()), None)
            .unwrap();
        mind
    }

    #[test]
    fn test_new_mind_has_root() {
        let mind = Mind::new("root", "Root");
        assert_eq!(mind.len(), 1);
        assert!(mind.root().is_root());
        assert_eq!(mind.root().direction, Direction::Center);
    }

    #[test]
    fn test_children_inherit_direction() {
        let mind = sample();
        assert_eq!(mind.get(&"b".into()).unwrap().direction, Direction::Left);
        assert_eq!(mind.get(&"a1".into()).unwrap().direction, Direction::Right);
    }

    #[test]
    fn test_center_direction_becomes_right() {
        let mut mind = Mind::new("root", "Root");
        let node = mind
            .add_node(&"root".into(), "c", Some("C".into()), Some(Direction::Center))
            .unwrap();
        assert_eq!(node.direction, Direction::Right);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut mind = sample();
        let err = mind.add_node(&"root".into(), "a", None, None).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateId(_)));
    }

    #[test]
    fn test_missing_parent_rejected() {
        let mut mind = sample();
        let err = mind.add_node(&"nope".into(), "z", None, None).unwrap_err();
        assert!(matches!(err, ModelError::NodeNotFound(_)));
    }

    #[test]
    fn test_remove_subtree() {
        let mut mind = sample();
        let removed = mind.remove_node(&"a".into()).unwrap();
        assert_eq!(removed.id, NodeId::new("a"));
        assert_eq!(mind.len(), 2);
        assert!(!mind.contains(&"a1".into()));
        assert!(!mind.contains(&"a1x".into()));
        assert_eq!(mind.root().children, vec![NodeId::new("b")]);
    }

    #[test]
    fn test_remove_root_rejected() {
        let mut mind = sample();
        let err = mind.remove_node(&"root".into()).unwrap_err();
        assert!(matches!(err, ModelError::RootRemoval(_)));
    }

    #[test]
    fn test_visibility_follows_collapsed_ancestor() {
        let mut mind = sample();
        mind.set_expanded(&"a".into(), false).unwrap();
        assert!(mind.is_visible(&"a".into()));
        assert!(!mind.is_visible(&"a1".into()));
        assert!(!mind.is_visible(&"a1x".into()));
        assert!(mind.is_visible(&"b".into()));
    }

    #[test]
    fn test_subtree_preorder() {
        let mind = sample();
        let ids: Vec<String> = mind.subtree(&"root".into()).into_iter().map(|n| n.0).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "a1x", "b"]);
    }

    #[test]
    fn test_is_in_subtree() {
        let mind = sample();
        assert!(mind.is_in_subtree(&"a".into(), &"a1x".into()));
        assert!(mind.is_in_subtree(&"a".into(), &"a".into()));
        assert!(!mind.is_in_subtree(&"a".into(), &"b".into()));
    }
}
