//! In-memory surface with deterministic text metrics
//!
//! [`HeadlessSurface`] holds node elements and [`HeadlessCanvas`] records
//! connector segments. Used by the command-line tool to produce SVG and by tests to observe
//! exactly what the view did to its elements.

use std::collections::BTreeMap;

use crate::layout::{Point, Size};
use crate::model::NodeId;

use super::{ElementKind, HandleId, LineCap, LineCanvas, NodeSurface};

/// Fixed-width text measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 18.0,
            padding_x: 6.0,
            padding_y: 4.0,
        }
    }
}

impl TextMetrics {
    fn measure(&self, content: &str) -> Size {
        let longest = content.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = content.lines().count().max(1);
        Size::new(
            longest as f64 * self.char_width + 2.0 * self.padding_x,
            lines as f64 * self.line_height + 2.0 * self.padding_y,
        )
    }
}

/// One attached element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub node_id: NodeId,
    pub content: String,
    pub editable: bool,
    pub position: Option<Point>,
    pub displayed: bool,
    pub visible: bool,
    pub classes: Vec<String>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Displayed and painted
    pub fn is_shown(&self) -> bool {
        self.displayed && self.visible
    }
}

/// A connector segment with the view offset already applied
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLine {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub cap: LineCap,
}

/// Headless [`NodeSurface`]
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    metrics: TextMetrics,
    elements: BTreeMap<HandleId, Element>,
    next_handle: u64,
    detached: Vec<HandleId>,
    focused: Option<HandleId>,
    selection: Option<HandleId>,
    client: Size,
    container_size: Size,
    container_class: Option<String>,
    scroll: Point,
}

impl HeadlessSurface {
    /// Create a surface whose viewport has the given size
    pub fn new(client: Size) -> Self {
        Self {
            metrics: TextMetrics::default(),
            elements: BTreeMap::new(),
            next_handle: 1,
            detached: Vec::new(),
            focused: None,
            selection: None,
            client,
            container_size: Size::zero(),
            container_class: None,
            scroll: Point::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Simulate the host window changing the viewport size
    pub fn set_client_size(&mut self, client: Size) {
        self.client = client;
    }

    /// Simulate the user replacing the text of an element
    pub fn type_text(&mut self, handle: HandleId, text: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.content = text.to_string();
        }
    }

    pub fn element(&self, handle: HandleId) -> Option<&Element> {
        self.elements.get(&handle)
    }

    /// Attached elements in the order they were appended
    pub fn elements(&self) -> impl Iterator<Item = (HandleId, &Element)> {
        self.elements.iter().map(|(h, e)| (*h, e))
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Handles of every attached element belonging to a node
    pub fn handles_for(&self, node_id: &NodeId) -> Vec<HandleId> {
        self.elements
            .iter()
            .filter(|(_, e)| &e.node_id == node_id)
            .map(|(h, _)| *h)
            .collect()
    }

    /// Handles in the order they were detached
    pub fn detached(&self) -> &[HandleId] {
        &self.detached
    }

    pub fn focused(&self) -> Option<HandleId> {
        self.focused
    }

    /// Element whose whole content is currently selected
    pub fn selection(&self) -> Option<HandleId> {
        self.selection
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    pub fn container_class(&self) -> Option<&str> {
        self.container_class.as_deref()
    }

    fn blur(&mut self, handle: HandleId) {
        if self.focused == Some(handle) {
            self.focused = None;
        }
        if self.selection == Some(handle) {
            self.selection = None;
        }
    }
}

impl NodeSurface for HeadlessSurface {
    fn create_element(&mut self, kind: ElementKind, node_id: &NodeId) -> HandleId {
        let handle = HandleId(self.next_handle);
        self.next_handle += 1;
        self.elements.insert(
            handle,
            Element {
                kind,
                node_id: node_id.clone(),
                content: String::new(),
                editable: false,
                position: None,
                displayed: true,
                visible: true,
                classes: Vec::new(),
            },
        );
        handle
    }

    fn detach(&mut self, handle: HandleId) {
        if self.elements.remove(&handle).is_some() {
            self.blur(handle);
            self.detached.push(handle);
        }
    }

    fn clear_elements(&mut self) {
        self.elements.clear();
        self.focused = None;
        self.selection = None;
    }

    fn set_content(&mut self, handle: HandleId, content: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.content = content.to_string();
        }
    }

    fn text(&self, handle: HandleId) -> String {
        self.elements
            .get(&handle)
            .map(|e| e.content.clone())
            .unwrap_or_default()
    }

    fn set_editable(&mut self, handle: HandleId, editable: bool) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.editable = editable;
        }
        if !editable {
            self.blur(handle);
        }
    }

    fn focus_and_select_all(&mut self, handle: HandleId) {
        if self.elements.contains_key(&handle) {
            self.focused = Some(handle);
            self.selection = Some(handle);
        }
    }

    fn measure(&self, handle: HandleId) -> Size {
        match self.elements.get(&handle) {
            Some(element) if element.displayed => self.metrics.measure(&element.content),
            _ => Size::zero(),
        }
    }

    fn set_position(&mut self, handle: HandleId, position: Point) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.position = Some(position);
        }
    }

    fn set_displayed(&mut self, handle: HandleId, displayed: bool) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.displayed = displayed;
        }
    }

    fn set_visible(&mut self, handle: HandleId, visible: bool) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.visible = visible;
        }
    }

    fn add_class(&mut self, handle: HandleId, class: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, handle: HandleId, class: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.classes.retain(|c| c != class);
        }
    }

    fn set_container_class(&mut self, class: Option<&str>) {
        self.container_class = class.map(str::to_string);
    }

    fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }
}

/// Headless [`LineCanvas`] recording every segment drawn since the last clear
#[derive(Debug, Clone, Default)]
pub struct HeadlessCanvas {
    size: Size,
    lines: Vec<DrawnLine>,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }
}

impl LineCanvas for HeadlessCanvas {
    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn draw_line(&mut self, from: Point, to: Point, offset: Point, color: &str, cap: LineCap) {
        self.lines.push(DrawnLine {
            from: from + offset,
            to: to + offset,
            color: color.to_string(),
            cap,
        });
    }
}
