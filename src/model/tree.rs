//! Plain-record snapshots of a whole tree
//!
//! A [`NodeTree`] shares nothing with the [`Mind`] it was taken from, which
//! makes it safe to keep on the undo stack and to serialize as JSON.

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::mind::Mind;
use super::node::{Direction, MindNode, NodeId};

/// Immutable deep copy of a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTree {
    pub root: NodeRecord,
}

/// One node and its descendants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default = "default_expanded")]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}

fn default_expanded() -> bool {
    true
}

impl NodeRecord {
    /// A text node with no children
    pub fn new(id: impl Into<NodeId>, topic: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topic: Some(topic.into()),
            direction: None,
            color: None,
            expanded: true,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: NodeRecord) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Number of records in this subtree
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NodeRecord::count).sum::<usize>()
    }
}

impl NodeTree {
    pub fn new(root: NodeRecord) -> Self {
        Self { root }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a record anywhere in the tree
    pub fn find(&self, id: &NodeId) -> Option<&NodeRecord> {
        let mut stack = vec![&self.root];
        while let Some(record) = stack.pop() {
            if &record.id == id {
                return Some(record);
            }
            stack.extend(record.children.iter());
        }
        None
    }
}

impl Mind {
    /// Take an independent snapshot of the current tree
    pub fn to_tree(&self) -> NodeTree {
        NodeTree::new(self.record_of(self.root()))
    }

    fn record_of(&self, node: &MindNode) -> NodeRecord {
        NodeRecord {
            id: node.id.clone(),
            topic: node.topic.clone(),
            direction: Some(node.direction),
            color: node.color.clone(),
            expanded: node.expanded,
            children: node
                .children
                .iter()
                .filter_map(|id| self.get(id))
                .map(|child| self.record_of(child))
                .collect(),
        }
    }

    /// Rebuild a live tree from a snapshot
    pub fn from_tree(tree: &NodeTree) -> Result<Self, ModelError> {
        let root = &tree.root;
        let mut mind = Mind::new(root.id.clone(), String::new());
        {
            let node = mind.root_mut();
            node.topic = root.topic.clone();
            node.color = root.color.clone();
            node.expanded = root.expanded;
        }
        for child in &root.children {
            mind.attach_record(&root.id, child, true)?;
        }
        Ok(mind)
    }

    fn attach_record(
        &mut self,
        parent_id: &NodeId,
        record: &NodeRecord,
        under_root: bool,
    ) -> Result<(), ModelError> {
        if self.contains(&record.id) {
            return Err(ModelError::DuplicateId(record.id.clone()));
        }
        let parent = self.node(parent_id)?;
        let direction = if under_root {
            match record.direction.unwrap_or_default() {
                Direction::Center => Direction::Right,
                d => d,
            }
        } else {
            parent.direction
        };

        let mut node = MindNode::new(record.id.clone(), record.topic.clone());
        node.parent = Some(parent_id.clone());
        node.direction = direction;
        node.color = record.color.clone();
        node.expanded = record.expanded;
        self.insert_child(parent_id, node);

        for child in &record.children {
            self.attach_record(&record.id, child, false)?;
        }
        Ok(())
    }
}
