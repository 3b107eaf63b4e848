//! The mind-map facade
//!
//! [`MindMap`] owns the live tree, the layout, the view and the undo stack,
//! and exposes the operations a host application calls. Every mutating
//! operation is validated first, then announced with
//! [`MindEvent::BeforeEdit`] (which also records the undo snapshot), then
//! applied and re-laid out.

use tracing::{debug, warn};

use crate::config::MindMapOptions;
use crate::error::ViewError;
use crate::layout::{LayoutProvider, TreeLayout};
use crate::model::{Direction, Mind, ModelError, NodeId, NodeTree};
use crate::surface::{ElementKind, HandleId, LineCanvas, NodeSurface, TextFormatter};
use crate::undo::UndoManager;
use crate::view::{EditOutcome, ViewProvider};
use crate::MindMapError;

/// What a checkpointed mutation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    AddNode(NodeId),
    RemoveNode(NodeId),
    UpdateNode(NodeId),
    ShowNodeTree,
}

/// Notification delivered to listeners
#[derive(Debug, Clone, PartialEq)]
pub enum MindEvent<'a> {
    /// About to mutate; carries the tree as it is right now
    BeforeEdit(&'a NodeTree),
    /// A mutation has been applied and rendered
    AfterEdit(EditKind),
}

/// Keys the view reacts to while a node is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

type Listener = Box<dyn FnMut(&MindEvent<'_>)>;

pub struct MindMap<S, G> {
    options: MindMapOptions,
    mind: Mind,
    layout: Box<dyn LayoutProvider>,
    view: ViewProvider<S, G>,
    undo: UndoManager,
    listeners: Vec<Listener>,
}

impl<S: NodeSurface, G: LineCanvas> MindMap<S, G> {
    /// Create a mind map over `mind`; call [`init`](Self::init) before use
    pub fn new(mind: Mind, surface: S, canvas: G, options: MindMapOptions) -> Self {
        Self {
            layout: Box::new(TreeLayout::new(options.layout.clone())),
            view: ViewProvider::new(surface, canvas, &options),
            undo: UndoManager::new(options.undo_limit),
            mind,
            options,
            listeners: Vec::new(),
        }
    }

    /// Replace the default [`TreeLayout`]
    pub fn with_layout(mut self, layout: impl LayoutProvider + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// Replace the default plain-text topic formatter
    pub fn with_formatter(mut self, formatter: impl TextFormatter + 'static) -> Self {
        self.view = self.view.with_formatter(formatter);
        self
    }

    /// Apply the theme and render the tree for the first time
    pub fn init(&mut self) -> Result<(), MindMapError> {
        debug!(nodes = self.mind.len(), "mind map init");
        self.view.init();
        self.load()
    }

    /// Drop all visual state; the tree itself is kept
    pub fn reset(&mut self) {
        self.view.reset();
    }

    /// Rebuild the whole view from the current tree
    pub fn load(&mut self) -> Result<(), MindMapError> {
        self.view.reset();
        self.view.load(&self.mind)?;
        self.layout_again();
        Ok(())
    }

    pub fn options(&self) -> &MindMapOptions {
        &self.options
    }

    pub fn mind(&self) -> &Mind {
        &self.mind
    }

    /// Independent snapshot of the current tree
    pub fn node_tree(&self) -> NodeTree {
        self.mind.to_tree()
    }

    /// Replace the whole tree and reload the view
    pub fn show_node_tree(&mut self, tree: &NodeTree) -> Result<(), MindMapError> {
        let mind = Mind::from_tree(tree)?;
        self.before_edit();
        self.install(mind)?;
        self.after_edit(EditKind::ShowNodeTree);
        Ok(())
    }

    fn install(&mut self, mind: Mind) -> Result<(), MindMapError> {
        self.mind = mind;
        self.load()
    }

    /// Add a child under `parent`
    pub fn add_node(
        &mut self,
        parent: &NodeId,
        id: impl Into<NodeId>,
        topic: Option<String>,
        direction: Option<Direction>,
    ) -> Result<(), MindMapError> {
        let id = id.into();
        self.mind.node(parent)?;
        if self.mind.contains(&id) {
            return Err(ModelError::DuplicateId(id).into());
        }

        self.before_edit();
        let node = self.mind.add_node(parent, id.clone(), topic, direction)?;
        self.view.add_node(node)?;
        self.layout_again();
        self.after_edit(EditKind::AddNode(id));
        Ok(())
    }

    /// Remove a node and everything below it
    ///
    /// An edit running anywhere in the subtree is ended first.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        let node = self.mind.node(id)?;
        if node.is_root() {
            return Err(ModelError::RootRemoval(id.clone()).into());
        }
        let editing_inside = self
            .view
            .state()
            .editing()
            .is_some_and(|editing| self.mind.is_in_subtree(id, editing));
        if editing_inside {
            self.edit_node_end()?;
        }

        self.before_edit();
        self.view.remove_node(&self.mind, id)?;
        self.mind.remove_node(id)?;
        self.layout_again();
        self.after_edit(EditKind::RemoveNode(id.clone()));
        Ok(())
    }

    /// Rename a node
    ///
    /// Empty topics are refused. Renaming to the current topic only
    /// re-renders the node and records nothing.
    pub fn update_node(&mut self, id: &NodeId, topic: &str) -> Result<(), MindMapError> {
        let node = self.mind.node(id)?;
        if topic.trim().is_empty() {
            warn!(node = %id, "refusing to set an empty topic");
            return Ok(());
        }
        if node.topic.as_deref() == Some(topic) {
            self.view.update_node(node)?;
            self.layout_again();
            return Ok(());
        }

        self.before_edit();
        self.mind.update_topic(id, topic)?;
        self.view.update_node(self.mind.node(id)?)?;
        self.layout_again();
        self.after_edit(EditKind::UpdateNode(id.clone()));
        Ok(())
    }

    pub fn select_node(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        self.view.select_node(Some(id))?;
        Ok(())
    }

    pub fn select_clear(&mut self) {
        self.view.select_clear();
    }

    pub fn selected_node(&self) -> Option<&NodeId> {
        self.view.selected()
    }

    /// Start editing a node inline; nodes without a text topic are refused
    pub fn edit_node_begin(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        let outcome = self
            .view
            .edit_node_begin(&self.mind, self.layout.as_mut(), id)?;
        self.apply_outcome(outcome)
    }

    /// Finish the current inline edit, renaming the node if its text changed
    pub fn edit_node_end(&mut self) -> Result<(), MindMapError> {
        let outcome = self.view.edit_node_end(&self.mind, self.layout.as_mut())?;
        self.apply_outcome(outcome)
    }

    fn apply_outcome(&mut self, outcome: EditOutcome) -> Result<(), MindMapError> {
        match outcome {
            EditOutcome::Commit { id, topic } => self.update_node(&id, &topic),
            EditOutcome::Inactive | EditOutcome::Reverted(_) => Ok(()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.view.is_editing()
    }

    /// Re-fit the canvas to the current viewport
    pub fn resize(&mut self) {
        self.view.resize(&self.mind, self.layout.as_mut());
    }

    pub fn center_root(&mut self) {
        self.view.center_root(self.layout.as_ref());
    }

    /// Flip a node between expanded and collapsed
    pub fn toggle_node(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        let expanded = self.mind.node(id)?.expanded;
        self.set_expanded(id, !expanded)
    }

    pub fn expand_node(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        self.set_expanded(id, true)
    }

    pub fn collapse_node(&mut self, id: &NodeId) -> Result<(), MindMapError> {
        self.set_expanded(id, false)
    }

    /// Change the expand flag while keeping the node where it appears on
    /// screen
    fn set_expanded(&mut self, id: &NodeId, expanded: bool) -> Result<(), MindMapError> {
        let node = self.mind.node(id)?;
        if node.is_root() {
            debug!("the root cannot be collapsed");
            return Ok(());
        }
        if node.expanded == expanded {
            return Ok(());
        }
        let location = self.view.take_location(id)?;
        self.mind.set_expanded(id, expanded)?;
        self.layout_again();
        self.view.restore_location(id, location)?;
        Ok(())
    }

    /// Restore the tree from the most recent snapshot
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, MindMapError> {
        let Some(tree) = self.undo.undo() else {
            return Ok(false);
        };
        let mind = Mind::from_tree(&tree)?;
        self.install(mind)?;
        debug!(remaining = self.undo.len(), "undo applied");
        Ok(true)
    }

    pub fn undo_manager(&self) -> &UndoManager {
        &self.undo
    }

    /// Register a callback for [`MindEvent`]s
    pub fn add_listener(&mut self, listener: impl FnMut(&MindEvent<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn before_edit(&mut self) {
        let snapshot = self.mind.to_tree();
        let event = MindEvent::BeforeEdit(&snapshot);
        for listener in &mut self.listeners {
            listener(&event);
        }
        self.undo.record_snapshot(snapshot);
    }

    fn after_edit(&mut self, kind: EditKind) {
        let event = MindEvent::AfterEdit(kind);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    fn layout_again(&mut self) {
        self.view.layout_again(&self.mind, self.layout.as_mut());
    }

    fn node_element(&self, handle: HandleId) -> Result<Option<NodeId>, MindMapError> {
        match self.view.resolve(handle) {
            Some((id, ElementKind::Node)) => Ok(Some(id.clone())),
            Some((_, ElementKind::Expander)) => Ok(None),
            None => Err(ViewError::UnknownHandle(handle).into()),
        }
    }

    /// Key pressed on an element
    ///
    /// Enter without Shift, or Escape, on a node element ends the edit.
    /// Returns whether the key was consumed.
    pub fn handle_key_down(
        &mut self,
        handle: HandleId,
        key: Key,
        shift: bool,
    ) -> Result<bool, MindMapError> {
        if self.node_element(handle)?.is_none() {
            return Ok(false);
        }
        match key {
            Key::Enter if !shift => {}
            Key::Escape => {}
            _ => return Ok(false),
        }
        self.edit_node_end()?;
        Ok(true)
    }

    /// Key released; the edited node may have changed size
    pub fn handle_key_up(&mut self) -> Result<(), MindMapError> {
        self.view.remeasure_editing()?;
        self.layout_again();
        Ok(())
    }

    /// Text typed into an element
    pub fn handle_input(&mut self) -> Result<(), MindMapError> {
        self.handle_key_up()
    }

    /// An element lost focus
    pub fn handle_blur(&mut self, handle: HandleId) -> Result<(), MindMapError> {
        if self.node_element(handle)?.is_some() {
            self.edit_node_end()?;
        }
        Ok(())
    }

    /// Click on an element: expanders toggle, nodes get selected
    pub fn handle_click(&mut self, handle: HandleId) -> Result<(), MindMapError> {
        let Some((id, kind)) = self.view.resolve(handle) else {
            return Err(ViewError::UnknownHandle(handle).into());
        };
        let id = id.clone();
        match kind {
            ElementKind::Expander => self.toggle_node(&id),
            ElementKind::Node => self.select_node(&id),
        }
    }

    /// Double click on a node element starts editing it
    pub fn handle_double_click(&mut self, handle: HandleId) -> Result<(), MindMapError> {
        let Some(id) = self.node_element(handle)? else {
            return Ok(());
        };
        self.select_node(&id)?;
        self.edit_node_begin(&id)
    }

    pub fn view(&self) -> &ViewProvider<S, G> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewProvider<S, G> {
        &mut self.view
    }

    pub fn layout(&self) -> &dyn LayoutProvider {
        self.layout.as_ref()
    }
}
