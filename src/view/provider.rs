//! Layout/render orchestrator
//!
//! [`ViewProvider`] owns the registry, the transient [`ViewState`] and both
//! surfaces. It does not own the tree or the layout: every operation that
//! needs them borrows them from the caller, so the tree stays single-writer.
//!
//! Rendering is a three-step pass: the layout recomputes geometry from the
//! measured sizes, the canvas grows to fit the tree plus margins (never
//! smaller than the viewport), and then every node, expander and connector
//! is placed relative to a view offset that keeps the root centered.

use tracing::{debug, warn};

use crate::config::MindMapOptions;
use crate::error::ViewError;
use crate::layout::{BoundingBox, LayoutProvider, MeasuredSizes, Point, Size};
use crate::model::{Mind, MindNode, NodeId};
use crate::surface::{
    ElementKind, HandleId, LineCanvas, LineCap, NodeSurface, PlainTextFormatter, TextFormatter,
};

use super::registry::{Registry, VisualBinding, COLLAPSED_GLYPH, EXPANDED_GLYPH};
use super::state::{adjust_scroll, ViewState};

/// Class marking the selected node element
pub const SELECTED_CLASS: &str = "selected";

/// Result of ending an inline edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No edit was active
    Inactive,
    /// The text was empty or unchanged; the node shows its old topic again
    Reverted(NodeId),
    /// The node should be renamed to `topic`
    Commit { id: NodeId, topic: String },
}

/// Visual side of a mind map
pub struct ViewProvider<S, G> {
    surface: S,
    canvas: G,
    registry: Registry,
    state: ViewState,
    formatter: Box<dyn TextFormatter>,
    h_margin: f64,
    v_margin: f64,
    theme: Option<String>,
}

impl<S: NodeSurface, G: LineCanvas> ViewProvider<S, G> {
    pub fn new(surface: S, canvas: G, options: &MindMapOptions) -> Self {
        Self {
            surface,
            canvas,
            registry: Registry::new(),
            state: ViewState::new(),
            formatter: Box::new(PlainTextFormatter),
            h_margin: options.h_margin,
            v_margin: options.v_margin,
            theme: options.theme.clone(),
        }
    }

    /// Replace the topic formatter
    pub fn with_formatter(mut self, formatter: impl TextFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Prepare the container
    pub fn init(&mut self) {
        debug!("view init");
        self.reset_theme();
    }

    /// Drop every element, connector and binding
    pub fn reset(&mut self) {
        debug!(bound = self.registry.len(), "view reset");
        self.state.clear();
        self.canvas.clear();
        self.registry.clear();
        self.surface.clear_elements();
        self.reset_theme();
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Switch the styling namespace and apply it to the container
    pub fn set_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
        self.reset_theme();
    }

    /// Re-apply the configured theme class, or clear it if none is set
    pub fn reset_theme(&mut self) {
        let class = self
            .theme
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("theme-{}", t));
        self.surface.set_container_class(class.as_deref());
    }

    /// Bind every node of `mind` and measure them once
    ///
    /// Nothing is created if any node is already bound.
    pub fn load(&mut self, mind: &Mind) -> Result<(), ViewError> {
        if let Some(node) = mind.nodes().find(|n| self.registry.is_bound(&n.id)) {
            return Err(ViewError::AlreadyBound(node.id.clone()));
        }
        for node in mind.nodes() {
            self.registry
                .bind(&mut self.surface, node, self.formatter.as_ref())?;
        }
        self.registry.measure_all(&self.surface);
        debug!(nodes = self.registry.len(), "view loaded");
        Ok(())
    }

    /// Bind a node added after the initial load
    pub fn add_node(&mut self, node: &MindNode) -> Result<(), ViewError> {
        self.registry
            .bind(&mut self.surface, node, self.formatter.as_ref())?;
        self.registry.remeasure(&self.surface, &node.id)?;
        Ok(())
    }

    /// Unbind a node and its subtree; call before removing it from the tree
    ///
    /// An edit running inside the subtree is dropped without a commit, so
    /// callers end it with [`edit_node_end`](Self::edit_node_end) first.
    pub(crate) fn remove_node(&mut self, mind: &Mind, id: &NodeId) -> Result<(), ViewError> {
        self.registry
            .unbind(&mut self.surface, mind, id, &mut self.state)
    }

    /// Re-render a node after its topic changed
    pub fn update_node(&mut self, node: &MindNode) -> Result<(), ViewError> {
        self.registry
            .update(&mut self.surface, node, self.formatter.as_ref())
    }

    /// Select a node, or clear the selection with `None`
    ///
    /// The newly selected node is scrolled into view.
    pub fn select_node(&mut self, id: Option<&NodeId>) -> Result<(), ViewError> {
        let target = match id {
            Some(id) => Some(self.registry.get(id)?.clone()),
            None => None,
        };
        if let Some(previous) = self.state.select(id.cloned()) {
            if let Ok(binding) = self.registry.get(&previous) {
                self.surface.remove_class(binding.element, SELECTED_CLASS);
            }
        }
        if let Some(binding) = target {
            self.surface.add_class(binding.element, SELECTED_CLASS);
            self.adjust_scroll_bar(&binding);
        }
        Ok(())
    }

    pub fn select_clear(&mut self) {
        if let Some(previous) = self.state.select(None) {
            if let Ok(binding) = self.registry.get(&previous) {
                self.surface.remove_class(binding.element, SELECTED_CLASS);
            }
        }
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.state.selected()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    fn adjust_scroll_bar(&mut self, binding: &VisualBinding) {
        let Some(location) = binding.location.filter(|_| binding.displayed) else {
            debug!("selected node is not displayed, scroll unchanged");
            return;
        };
        let node = BoundingBox::at(location, binding.size);
        let scroll = adjust_scroll(node, self.surface.client_size(), self.state.scroll());
        if scroll != self.state.scroll() {
            debug!(x = scroll.x, y = scroll.y, "scroll adjusted");
        }
        self.set_scroll(scroll);
    }

    fn set_scroll(&mut self, scroll: Point) {
        self.state.set_scroll(scroll);
        self.surface.set_scroll(scroll);
    }

    /// Put a node into inline-edit mode
    ///
    /// Nodes without a text topic are refused and nothing changes. An edit
    /// already running on another node is ended first; its outcome is
    /// returned so the caller can apply a commit.
    pub fn edit_node_begin(
        &mut self,
        mind: &Mind,
        layout: &mut dyn LayoutProvider,
        id: &NodeId,
    ) -> Result<EditOutcome, ViewError> {
        let element = self.registry.get(id)?.element;
        let node = mind
            .get(id)
            .ok_or_else(|| ViewError::NotBound(id.clone()))?;
        let Some(topic) = node.topic.as_deref().filter(|_| node.is_editable()) else {
            warn!(node = %id, "refusing to edit a node without a text topic");
            return Ok(EditOutcome::Inactive);
        };

        let previous = if self.state.is_editing() {
            self.edit_node_end(mind, layout)?
        } else {
            EditOutcome::Inactive
        };

        debug!(node = %id, "edit begin");
        self.state.begin_edit(id.clone());
        self.surface.set_editable(element, true);
        self.surface.set_content(element, topic);
        self.registry.remeasure(&self.surface, id)?;
        self.surface.focus_and_select_all(element);
        self.layout_again(mind, layout);
        Ok(previous)
    }

    /// Leave inline-edit mode
    ///
    /// Empty, whitespace-only or unchanged text reverts the node to its
    /// topic and re-lays it out. Anything else is returned as a commit for
    /// the caller to apply as a rename.
    pub fn edit_node_end(
        &mut self,
        mind: &Mind,
        layout: &mut dyn LayoutProvider,
    ) -> Result<EditOutcome, ViewError> {
        let Some(id) = self.state.take_editing() else {
            return Ok(EditOutcome::Inactive);
        };
        let element = self.registry.get(&id)?.element;
        self.surface.set_editable(element, false);

        let text = self.surface.text(element);
        let current = mind.get(&id).and_then(|n| n.topic.as_deref());
        if text.trim().is_empty() || current == Some(text.as_str()) {
            if let Some(topic) = current {
                self.surface
                    .set_content(element, &self.formatter.render(topic));
            }
            self.registry.remeasure(&self.surface, &id)?;
            self.layout_again(mind, layout);
            debug!(node = %id, "edit reverted");
            return Ok(EditOutcome::Reverted(id));
        }

        debug!(node = %id, "edit committed");
        Ok(EditOutcome::Commit { id, topic: text })
    }

    /// Re-measure the node being edited, e.g. after the user typed
    pub fn remeasure_editing(&mut self) -> Result<(), ViewError> {
        if let Some(id) = self.state.editing().cloned() {
            self.registry.remeasure(&self.surface, &id)?;
        }
        Ok(())
    }

    /// Recompute geometry and redraw everything
    pub fn layout_again(&mut self, mind: &Mind, layout: &mut dyn LayoutProvider) {
        self.reveal_nodes(mind);
        layout.layout(mind, &self.registry);
        self.expand_size(layout);
        self.do_show(mind, layout);
    }

    /// Display and re-measure nodes hidden by the previous pass that are
    /// visible now; sizes cached while hidden are empty
    fn reveal_nodes(&mut self, mind: &Mind) {
        for node in mind.nodes() {
            if !mind.is_visible(&node.id) {
                continue;
            }
            let Ok(binding) = self.registry.get_mut(&node.id) else {
                continue;
            };
            if binding.displayed {
                continue;
            }
            self.surface.set_displayed(binding.element, true);
            binding.size = self.surface.measure(binding.element);
        }
    }

    fn expand_size(&mut self, layout: &dyn LayoutProvider) {
        let min = layout.min_size();
        let client = self.surface.client_size();
        let size = Size::new(
            client.width.max(min.width + self.h_margin * 2.0),
            client.height.max(min.height + self.v_margin * 2.0),
        );
        debug!(width = size.width, height = size.height, "canvas size");
        self.state.set_canvas(size);
    }

    fn do_show(&mut self, mind: &Mind, layout: &dyn LayoutProvider) {
        let size = self.state.canvas();
        self.canvas.set_size(size);
        self.surface.set_container_size(size);
        self.show_nodes(mind, layout);
        self.show_lines(mind, layout);
    }

    /// Offset from layout coordinates to container coordinates
    pub fn view_offset(&self, layout: &dyn LayoutProvider) -> Point {
        let bounds = layout.bounds();
        let size = self.state.canvas();
        Point::new((size.width - bounds.east - bounds.west) / 2.0, size.height / 2.0)
    }

    /// Shrink both surfaces and lay out again against the current viewport
    pub fn resize(&mut self, mind: &Mind, layout: &mut dyn LayoutProvider) {
        let collapsed = Size::new(1.0, 1.0);
        self.canvas.set_size(collapsed);
        self.surface.set_container_size(collapsed);
        self.layout_again(mind, layout);
    }

    /// Scroll so the root sits in the middle of the viewport
    pub fn center_root(&mut self, layout: &dyn LayoutProvider) {
        let client = self.surface.client_size();
        let size = self.state.canvas();
        let mut scroll = self.state.scroll();
        if size.width > client.width {
            scroll.x = (self.view_offset(layout).x - client.width / 2.0).max(0.0);
        }
        if size.height > client.height {
            scroll.y = ((size.height - client.height) / 2.0).max(0.0);
        }
        self.set_scroll(scroll);
    }

    /// Where a node currently appears inside the viewport
    pub fn take_location(&self, id: &NodeId) -> Result<Point, ViewError> {
        let location = self.registry.get(id)?.location.unwrap_or_default();
        Ok(location - self.state.scroll())
    }

    /// Scroll so a node appears at a location taken earlier
    pub fn restore_location(&mut self, id: &NodeId, location: Point) -> Result<(), ViewError> {
        let current = self.registry.get(id)?.location.unwrap_or_default();
        let scroll = current - location;
        self.set_scroll(Point::new(scroll.x.max(0.0), scroll.y.max(0.0)));
        Ok(())
    }

    fn show_nodes(&mut self, mind: &Mind, layout: &dyn LayoutProvider) {
        let offset = self.view_offset(layout);
        for node in mind.nodes() {
            let Ok(binding) = self.registry.get_mut(&node.id) else {
                debug!(node = %node.id, "skipping unbound node");
                continue;
            };
            let element = binding.element;
            let expander = binding.expander;

            if !mind.is_visible(&node.id) {
                binding.displayed = false;
                self.surface.set_displayed(element, false);
                if let Some(expander) = expander {
                    self.surface.set_displayed(expander, false);
                }
                continue;
            }

            let location = offset + layout.node_point(&node.id);
            binding.location = Some(location);
            binding.displayed = true;
            self.surface.set_position(element, location);
            self.surface.set_displayed(element, true);
            self.surface.set_visible(element, true);

            let Some(expander) = expander else {
                continue;
            };
            if node.has_children() {
                let glyph = if node.expanded {
                    EXPANDED_GLYPH
                } else {
                    COLLAPSED_GLYPH
                };
                self.surface
                    .set_position(expander, offset + layout.expander_point(&node.id));
                self.surface.set_displayed(expander, true);
                self.surface.set_visible(expander, true);
                self.surface.set_content(expander, glyph);
            } else {
                self.surface.set_displayed(expander, false);
                self.surface.set_visible(expander, false);
            }
        }
    }

    fn show_lines(&mut self, mind: &Mind, layout: &dyn LayoutProvider) {
        self.canvas.clear();
        let offset = self.view_offset(layout);
        for node in mind.nodes() {
            let Some(parent) = node.parent.as_ref() else {
                continue;
            };
            if !mind.is_visible(&node.id) {
                continue;
            }
            let color = node.line_color();
            let pin = layout.node_point_in(&node.id);
            let pout = layout.node_point_out_with_destination(parent, &node.id);
            self.canvas
                .draw_line(pout, pin, offset, color, LineCap::Round);

            // underline runs from the entry corner to the far side of the node
            let width = self.registry.size_of(&node.id).width;
            let stub = Point::new(pin.x + width * node.direction.sign(), pin.y);
            self.canvas.draw_line(stub, pin, offset, color, LineCap::Butt);
        }
    }

    /// Node id and element kind behind a handle
    pub fn resolve(&self, handle: HandleId) -> Option<(&NodeId, ElementKind)> {
        self.registry.resolve(handle)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn canvas(&self) -> &G {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut G {
        &mut self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, TreeLayout};
    use crate::model::{Direction, NodeRecord, NodeTree};
    use crate::surface::{HeadlessCanvas, HeadlessSurface};
    use pretty_assertions::assert_eq;

    type HeadlessView = ViewProvider<HeadlessSurface, HeadlessCanvas>;

    fn sample() -> Mind {
        Mind::from_tree(&NodeTree::new(
            NodeRecord::new("root", "Root")
                .with_child(NodeRecord::new("a", "Hello").with_child(NodeRecord::new("a1", "A1")))
                .with_child(NodeRecord::new("b", "B").with_direction(Direction::Left)),
        ))
        .unwrap()
    }

    fn loaded(mind: &Mind) -> (HeadlessView, TreeLayout) {
        let surface = HeadlessSurface::new(Size::new(800.0, 600.0));
        let mut view = ViewProvider::new(surface, HeadlessCanvas::new(), &MindMapOptions::default());
        let mut layout = TreeLayout::new(LayoutConfig::default());
        view.init();
        view.load(mind).unwrap();
        view.layout_again(mind, &mut layout);
        (view, layout)
    }

    fn element_of(view: &HeadlessView, id: &str) -> HandleId {
        view.registry().get(&id.into()).unwrap().element
    }

    #[test]
    fn test_load_binds_every_node() {
        let mind = sample();
        let (view, _) = loaded(&mind);
        let mut bound: Vec<&str> = view.registry().ids().map(NodeId::as_str).collect();
        bound.sort();
        assert_eq!(bound, vec!["a", "a1", "b", "root"]);
        // root has one element, every other node two
        assert_eq!(view.surface().element_count(), 7);
    }

    #[test]
    fn test_load_twice_fails_without_side_effects() {
        let mind = sample();
        let (mut view, _) = loaded(&mind);
        let err = view.load(&mind).unwrap_err();
        assert!(matches!(err, ViewError::AlreadyBound(_)));
        assert_eq!(view.surface().element_count(), 7);
    }

    #[test]
    fn test_canvas_never_smaller_than_viewport() {
        let mind = sample();
        let (view, _) = loaded(&mind);
        assert_eq!(view.state().canvas(), Size::new(800.0, 600.0));
        assert_eq!(view.canvas().size(), Size::new(800.0, 600.0));
        assert_eq!(view.surface().container_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_canvas_grows_with_margins() {
        let mind = sample();
        let surface = HeadlessSurface::new(Size::new(10.0, 10.0));
        let mut view = ViewProvider::new(surface, HeadlessCanvas::new(), &MindMapOptions::default());
        let mut layout = TreeLayout::new(LayoutConfig::default());
        view.load(&mind).unwrap();
        view.layout_again(&mind, &mut layout);
        let min = layout.min_size();
        assert_eq!(
            view.state().canvas(),
            Size::new(min.width + 200.0, min.height + 100.0)
        );
    }

    #[test]
    fn test_root_centered_horizontally() {
        let mind = sample();
        let (view, layout) = loaded(&mind);
        let bounds = layout.bounds();
        let offset = view.view_offset(&layout);
        assert_eq!(offset.x, (800.0 - bounds.east - bounds.west) / 2.0);
        assert_eq!(offset.y, 300.0);
        let root = view.surface().element(element_of(&view, "root")).unwrap();
        assert_eq!(root.position, Some(offset + layout.node_point(&"root".into())));
        assert!(root.is_shown());
    }

    #[test]
    fn test_expander_glyphs() {
        let mut mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        let a = view.registry().get(&"a".into()).unwrap().expander.unwrap();
        let b = view.registry().get(&"b".into()).unwrap().expander.unwrap();
        assert_eq!(view.surface().element(a).unwrap().content, "-");
        assert!(view.surface().element(a).unwrap().is_shown());
        // childless
        assert!(!view.surface().element(b).unwrap().is_shown());

        mind.set_expanded(&"a".into(), false).unwrap();
        view.layout_again(&mind, &mut layout);
        assert_eq!(view.surface().element(a).unwrap().content, "+");
        let a1 = element_of(&view, "a1");
        assert!(!view.surface().element(a1).unwrap().displayed);
    }

    #[test]
    fn test_two_segments_per_visible_child() {
        let mind = sample();
        let (view, _) = loaded(&mind);
        let lines = view.canvas().lines();
        assert_eq!(lines.len(), 6);
        let caps: Vec<LineCap> = lines.iter().map(|l| l.cap).collect();
        assert_eq!(
            caps,
            vec![
                LineCap::Round,
                LineCap::Butt,
                LineCap::Round,
                LineCap::Butt,
                LineCap::Round,
                LineCap::Butt
            ]
        );
    }

    #[test]
    fn test_underline_points_away_from_root() {
        let mind = sample();
        let (view, _) = loaded(&mind);
        let lines = view.canvas().lines();
        // "a" is on the right: the stub starts right of its entry point
        let a_stub = &lines[1];
        assert_eq!(a_stub.from.x - a_stub.to.x, 52.0);
        // "b" is on the left
        let b_stub = lines.iter().rev().find(|l| l.cap == LineCap::Butt).unwrap();
        assert_eq!(b_stub.from.x - b_stub.to.x, -20.0);
    }

    #[test]
    fn test_select_marks_and_unmarks() {
        let mind = sample();
        let (mut view, _) = loaded(&mind);
        view.select_node(Some(&"a".into())).unwrap();
        view.select_node(Some(&"b".into())).unwrap();
        let a = view.surface().element(element_of(&view, "a")).unwrap();
        let b = view.surface().element(element_of(&view, "b")).unwrap();
        assert!(!a.has_class(SELECTED_CLASS));
        assert!(b.has_class(SELECTED_CLASS));
        assert_eq!(view.selected(), Some(&NodeId::new("b")));

        view.select_clear();
        assert_eq!(view.selected(), None);
        let b = view.surface().element(element_of(&view, "b")).unwrap();
        assert!(!b.has_class(SELECTED_CLASS));
    }

    #[test]
    fn test_select_unbound_keeps_selection() {
        let mind = sample();
        let (mut view, _) = loaded(&mind);
        view.select_node(Some(&"a".into())).unwrap();
        assert!(view.select_node(Some(&"ghost".into())).is_err());
        assert_eq!(view.selected(), Some(&NodeId::new("a")));
    }

    #[test]
    fn test_edit_unchanged_reverts() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        let outcome = view
            .edit_node_begin(&mind, &mut layout, &"a".into())
            .unwrap();
        assert_eq!(outcome, EditOutcome::Inactive);
        let element = element_of(&view, "a");
        assert!(view.surface().element(element).unwrap().editable);
        assert_eq!(view.surface().focused(), Some(element));

        let outcome = view.edit_node_end(&mind, &mut layout).unwrap();
        assert_eq!(outcome, EditOutcome::Reverted("a".into()));
        assert!(!view.surface().element(element).unwrap().editable);
        assert!(!view.is_editing());
    }

    #[test]
    fn test_edit_whitespace_reverts() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        view.edit_node_begin(&mind, &mut layout, &"a".into()).unwrap();
        let element = element_of(&view, "a");
        view.surface_mut().type_text(element, "  \n ");
        let outcome = view.edit_node_end(&mind, &mut layout).unwrap();
        assert_eq!(outcome, EditOutcome::Reverted("a".into()));
        assert_eq!(view.surface().element(element).unwrap().content, "Hello");
    }

    #[test]
    fn test_edit_changed_commits() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        view.edit_node_begin(&mind, &mut layout, &"a".into()).unwrap();
        let element = element_of(&view, "a");
        view.surface_mut().type_text(element, "World");
        let outcome = view.edit_node_end(&mind, &mut layout).unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Commit {
                id: "a".into(),
                topic: "World".to_string()
            }
        );
    }

    #[test]
    fn test_begin_ends_previous_edit() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        view.edit_node_begin(&mind, &mut layout, &"a".into()).unwrap();
        let element = element_of(&view, "a");
        view.surface_mut().type_text(element, "Changed");
        let outcome = view
            .edit_node_begin(&mind, &mut layout, &"b".into())
            .unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Commit {
                id: "a".into(),
                topic: "Changed".to_string()
            }
        );
        assert_eq!(view.state().editing(), Some(&NodeId::new("b")));
    }

    #[test]
    fn test_image_node_is_not_editable() {
        let mut mind = sample();
        mind.add_node(&"root".into(), "img", None, None).unwrap();
        let (mut view, mut layout) = loaded(&mind);
        let outcome = view
            .edit_node_begin(&mind, &mut layout, &"img".into())
            .unwrap();
        assert_eq!(outcome, EditOutcome::Inactive);
        assert!(!view.is_editing());
        let element = element_of(&view, "img");
        assert!(!view.surface().element(element).unwrap().editable);
    }

    #[test]
    fn test_end_without_edit_is_inactive() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        assert_eq!(
            view.edit_node_end(&mind, &mut layout).unwrap(),
            EditOutcome::Inactive
        );
    }

    #[test]
    fn test_theme_class() {
        let mind = sample();
        let (mut view, _) = loaded(&mind);
        assert_eq!(view.surface().container_class(), None);
        view.set_theme(Some("dark".to_string()));
        assert_eq!(view.surface().container_class(), Some("theme-dark"));
        view.set_theme(None);
        assert_eq!(view.surface().container_class(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mind = sample();
        let (mut view, _) = loaded(&mind);
        view.select_node(Some(&"a".into())).unwrap();
        view.reset();
        assert!(view.registry().is_empty());
        assert_eq!(view.surface().element_count(), 0);
        assert!(view.canvas().lines().is_empty());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_location_roundtrip_through_scroll() {
        let mind = sample();
        let (mut view, mut layout) = loaded(&mind);
        let id = NodeId::new("a");
        let before = view.take_location(&id).unwrap();
        view.resize(&mind, &mut layout);
        view.restore_location(&id, before).unwrap();
        assert_eq!(view.take_location(&id).unwrap(), before);
    }
}
