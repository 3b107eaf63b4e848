//! Rendering-surface collaborators
//!
//! The view drives two surfaces: a [`NodeSurface`] holding one element per
//! node (plus expander controls) inside a scrollable container, and a
//! [`LineCanvas`] the connectors are drawn on. Elements are referenced by
//! opaque [`HandleId`]s; the view never inspects the surface's own
//! structure, so anything that can attach and detach an element can back
//! it.

pub mod headless;
pub mod text;

pub use headless::{DrawnLine, Element, HeadlessCanvas, HeadlessSurface, TextMetrics};
pub use text::{PlainTextFormatter, TextFormatter};

use crate::layout::{Point, Size};
use crate::model::NodeId;

/// Opaque reference to an element on a [`NodeSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u64);

/// What an element stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Expander,
}

/// Stroke cap for connector segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Butt,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
        }
    }
}

/// Container of node and expander elements
pub trait NodeSurface {
    /// Create an element for `node_id` and append it to the container
    fn create_element(&mut self, kind: ElementKind, node_id: &NodeId) -> HandleId;

    /// Remove an element from the container
    fn detach(&mut self, handle: HandleId);

    /// Remove every element at once
    fn clear_elements(&mut self);

    /// Replace the element's rendered content
    fn set_content(&mut self, handle: HandleId, content: &str);

    /// Current text of the element, including anything typed into it
    fn text(&self, handle: HandleId) -> String;

    fn set_editable(&mut self, handle: HandleId, editable: bool);

    /// Give the element input focus and select all of its content
    fn focus_and_select_all(&mut self, handle: HandleId);

    /// Rendered size; zero for elements that are not attached
    fn measure(&self, handle: HandleId) -> Size;

    /// Place the element relative to the container's top-left corner
    fn set_position(&mut self, handle: HandleId, position: Point);

    /// Whether the element takes part in rendering at all
    fn set_displayed(&mut self, handle: HandleId, displayed: bool);

    /// Whether a displayed element is painted
    fn set_visible(&mut self, handle: HandleId, visible: bool);

    fn add_class(&mut self, handle: HandleId, class: &str);

    fn remove_class(&mut self, handle: HandleId, class: &str);

    /// Styling namespace of the whole container; `None` restores the default
    fn set_container_class(&mut self, class: Option<&str>);

    fn set_container_size(&mut self, size: Size);

    /// Size of the visible viewport
    fn client_size(&self) -> Size;

    fn set_scroll(&mut self, scroll: Point);
}

/// Drawing surface for connectors
pub trait LineCanvas {
    fn set_size(&mut self, size: Size);

    /// Erase all drawn segments
    fn clear(&mut self);

    /// Draw a segment between two layout points, shifted by `offset`
    fn draw_line(&mut self, from: Point, to: Point, offset: Point, color: &str, cap: LineCap);
}
