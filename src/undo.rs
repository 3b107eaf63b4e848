//! Bounded undo stack of whole-tree snapshots
//!
//! A snapshot is pushed right before every mutating edit. Undo pops the
//! most recent one; the caller replaces the live tree with it. When the
//! stack is full the oldest snapshot is dropped first, so an unbounded
//! edit session keeps at most `limit` trees in memory.

use std::collections::VecDeque;

use tracing::debug;

use crate::model::NodeTree;

/// Default number of snapshots kept
pub const DEFAULT_UNDO_LIMIT: usize = 10_000;

#[derive(Debug, Clone)]
pub struct UndoManager {
    stack: VecDeque<NodeTree>,
    limit: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl UndoManager {
    /// Create a stack holding at most `limit` snapshots; zero disables it
    pub fn new(limit: usize) -> Self {
        Self {
            stack: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a snapshot, evicting the oldest one if the stack is full
    pub fn record_snapshot(&mut self, snapshot: NodeTree) {
        if self.limit == 0 {
            return;
        }
        while self.stack.len() >= self.limit {
            debug!(limit = self.limit, "undo stack full, dropping oldest snapshot");
            self.stack.pop_front();
        }
        self.stack.push_back(snapshot);
        debug!(depth = self.stack.len(), "undo snapshot recorded");
    }

    /// Pop the most recent snapshot
    ///
    /// An empty stack is a normal condition and yields `None`.
    pub fn undo(&mut self) -> Option<NodeTree> {
        let snapshot = self.stack.pop_back();
        if snapshot.is_none() {
            debug!("undo requested but the stack is empty");
        }
        snapshot
    }

    /// Most recent snapshot without removing it
    pub fn peek(&self) -> Option<&NodeTree> {
        self.stack.back()
    }

    /// Snapshots from oldest to newest
    pub fn snapshots(&self) -> impl Iterator<Item = &NodeTree> {
        self.stack.iter()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
