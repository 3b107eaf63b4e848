//! Visual node registry
//!
//! Binds each loaded logical node to its element handles and caches the
//! size measured after the last render. A reverse index from handle to
//! node id lets input handlers resolve the node under an element without
//! walking the surface.

use std::collections::HashMap;

use crate::error::ViewError;
use crate::layout::{MeasuredSizes, Point, Size};
use crate::model::{Mind, MindNode, NodeId};
use crate::surface::{ElementKind, HandleId, NodeSurface, TextFormatter};

use super::state::ViewState;

/// Glyph shown on the expander of an expanded node
pub const EXPANDED_GLYPH: &str = "-";
/// Glyph shown on the expander of a collapsed node
pub const COLLAPSED_GLYPH: &str = "+";

/// Per-node visual record
#[derive(Debug, Clone, PartialEq)]
pub struct VisualBinding {
    pub element: HandleId,
    /// Absent for the root
    pub expander: Option<HandleId>,
    /// Size measured after the last render
    pub size: Size,
    /// Container-relative location set by the last layout
    pub location: Option<Point>,
    /// Whether the last layout displayed the node
    pub displayed: bool,
}

/// All bindings of the loaded tree
#[derive(Debug, Default)]
pub struct Registry {
    bindings: HashMap<NodeId, VisualBinding>,
    handles: HashMap<HandleId, (NodeId, ElementKind)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and attach the elements for a node
    ///
    /// Non-root nodes get their expander appended first, then the node
    /// element itself. Both start out hidden until the next layout places
    /// them.
    pub fn bind(
        &mut self,
        surface: &mut dyn NodeSurface,
        node: &MindNode,
        formatter: &dyn TextFormatter,
    ) -> Result<&VisualBinding, ViewError> {
        if self.bindings.contains_key(&node.id) {
            return Err(ViewError::AlreadyBound(node.id.clone()));
        }

        let expander = if node.is_root() {
            None
        } else {
            let handle = surface.create_element(ElementKind::Expander, &node.id);
            surface.set_content(handle, EXPANDED_GLYPH);
            surface.set_visible(handle, false);
            self.handles
                .insert(handle, (node.id.clone(), ElementKind::Expander));
            Some(handle)
        };

        let element = surface.create_element(ElementKind::Node, &node.id);
        if node.is_root() {
            surface.add_class(element, "root");
        }
        if let Some(topic) = &node.topic {
            surface.set_content(element, &formatter.render(topic));
        }
        surface.set_visible(element, false);
        self.handles
            .insert(element, (node.id.clone(), ElementKind::Node));

        let binding = self.bindings.entry(node.id.clone()).or_insert(VisualBinding {
            element,
            expander,
            size: Size::zero(),
            location: None,
            displayed: false,
        });
        Ok(binding)
    }

    /// Detach a node and its whole subtree, children first
    ///
    /// Every node of the subtree must be bound; this is checked before any
    /// element is touched.
    pub fn unbind(
        &mut self,
        surface: &mut dyn NodeSurface,
        mind: &Mind,
        id: &NodeId,
        state: &mut ViewState,
    ) -> Result<(), ViewError> {
        if let Some(missing) = mind.subtree(id).into_iter().find(|n| !self.is_bound(n)) {
            return Err(ViewError::NotBound(missing));
        }
        if !mind.contains(id) {
            return Err(ViewError::NotBound(id.clone()));
        }
        self.unbind_recursive(surface, mind, id, state);
        Ok(())
    }

    fn unbind_recursive(
        &mut self,
        surface: &mut dyn NodeSurface,
        mind: &Mind,
        id: &NodeId,
        state: &mut ViewState,
    ) {
        if let Some(node) = mind.get(id) {
            for child in &node.children {
                self.unbind_recursive(surface, mind, child, state);
            }
        }

        let Some(binding) = self.bindings.remove(id) else {
            return;
        };
        if state.selected() == Some(id) {
            state.clear_selection();
        }
        if state.editing() == Some(id) {
            surface.set_editable(binding.element, false);
            state.take_editing();
        }
        surface.detach(binding.element);
        self.handles.remove(&binding.element);
        if let Some(expander) = binding.expander {
            surface.detach(expander);
            self.handles.remove(&expander);
        }
    }

    /// Re-render a node's text and re-measure it; children are untouched
    pub fn update(
        &mut self,
        surface: &mut dyn NodeSurface,
        node: &MindNode,
        formatter: &dyn TextFormatter,
    ) -> Result<(), ViewError> {
        let binding = self.get_mut(&node.id)?;
        if let Some(topic) = &node.topic {
            surface.set_content(binding.element, &formatter.render(topic));
        }
        binding.size = surface.measure(binding.element);
        Ok(())
    }

    /// Re-measure one node
    pub fn remeasure(&mut self, surface: &dyn NodeSurface, id: &NodeId) -> Result<Size, ViewError> {
        let binding = self.get_mut(id)?;
        binding.size = surface.measure(binding.element);
        Ok(binding.size)
    }

    /// Measure every bound node once, after a bulk load
    pub fn measure_all(&mut self, surface: &dyn NodeSurface) {
        for binding in self.bindings.values_mut() {
            binding.size = surface.measure(binding.element);
        }
    }

    pub fn get(&self, id: &NodeId) -> Result<&VisualBinding, ViewError> {
        self.bindings
            .get(id)
            .ok_or_else(|| ViewError::NotBound(id.clone()))
    }

    pub(crate) fn get_mut(&mut self, id: &NodeId) -> Result<&mut VisualBinding, ViewError> {
        self.bindings
            .get_mut(id)
            .ok_or_else(|| ViewError::NotBound(id.clone()))
    }

    pub fn is_bound(&self, id: &NodeId) -> bool {
        self.bindings.contains_key(id)
    }

    /// Node id and element kind behind a handle
    pub fn resolve(&self, handle: HandleId) -> Option<(&NodeId, ElementKind)> {
        self.handles.get(&handle).map(|(id, kind)| (id, *kind))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.bindings.keys()
    }

    /// Forget every binding without touching the surface
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.handles.clear();
    }
}

impl MeasuredSizes for Registry {
    fn size_of(&self, id: &NodeId) -> Size {
        self.bindings.get(id).map(|b| b.size).unwrap_or_default()
    }
}
