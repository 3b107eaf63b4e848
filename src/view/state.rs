//! Selection and edit state

use crate::layout::{BoundingBox, Point, Size};
use crate::model::NodeId;

/// Margin kept between a newly selected node and the edge it scrolled past
pub const SCROLL_ENTER_MARGIN: f64 = 10.0;
/// Extra room scrolled in when a node sticks out of the far edge
pub const SCROLL_LEAVE_MARGIN: f64 = 30.0;

/// Which node, if any, is the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase<'a> {
    Idle,
    Selected(&'a NodeId),
    /// Takes precedence over any selection
    Editing(&'a NodeId),
}

/// Transient UI state of one view
///
/// Selection and edit are tracked separately: at most one node is selected
/// and at most one is being edited.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    selected: Option<NodeId>,
    editing: Option<NodeId>,
    canvas: Size,
    scroll: Point,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn editing(&self) -> Option<&NodeId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn phase(&self) -> EditPhase<'_> {
        match (&self.editing, &self.selected) {
            (Some(id), _) => EditPhase::Editing(id),
            (None, Some(id)) => EditPhase::Selected(id),
            (None, None) => EditPhase::Idle,
        }
    }

    /// Canvas size computed by the last layout
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Replace the selection, returning the previous one
    pub(crate) fn select(&mut self, id: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.selected, id)
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start editing `id`; any previous edit must already have ended
    pub(crate) fn begin_edit(&mut self, id: NodeId) {
        debug_assert!(self.editing.is_none(), "previous edit was not ended");
        self.editing = Some(id);
    }

    pub(crate) fn take_editing(&mut self) -> Option<NodeId> {
        self.editing.take()
    }

    pub(crate) fn set_canvas(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    pub(crate) fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
        self.editing = None;
    }
}

/// Scroll offset that brings `node` fully into the viewport
///
/// Each edge is checked on its own. A node hidden past the left or top edge
/// is scrolled to with [`SCROLL_ENTER_MARGIN`] to spare; one reaching the
/// right or bottom edge is scrolled in by [`SCROLL_LEAVE_MARGIN`] beyond
/// its far side. Offsets never go negative.
pub fn adjust_scroll(node: BoundingBox, client: Size, scroll: Point) -> Point {
    let mut next = scroll;
    if next.x > node.x {
        next.x = (node.x - SCROLL_ENTER_MARGIN).max(0.0);
    }
    if node.right() >= next.x + client.width {
        next.x = (next.x + (node.right() + SCROLL_LEAVE_MARGIN - (next.x + client.width))).max(0.0);
    }
    if next.y > node.y {
        next.y = (node.y - SCROLL_ENTER_MARGIN).max(0.0);
    }
    if node.bottom() >= next.y + client.height {
        next.y = (next.y + (node.bottom() + SCROLL_LEAVE_MARGIN - (next.y + client.height))).max(0.0);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: Size = Size {
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_phase_transitions() {
        let mut state = ViewState::new();
        assert_eq!(state.phase(), EditPhase::Idle);

        state.select(Some(NodeId::new("a")));
        assert_eq!(state.phase(), EditPhase::Selected(&NodeId::new("a")));

        state.begin_edit(NodeId::new("a"));
        assert_eq!(state.phase(), EditPhase::Editing(&NodeId::new("a")));

        assert_eq!(state.take_editing(), Some(NodeId::new("a")));
        assert_eq!(state.phase(), EditPhase::Selected(&NodeId::new("a")));

        let previous = state.select(None);
        assert_eq!(previous, Some(NodeId::new("a")));
        assert_eq!(state.phase(), EditPhase::Idle);
    }

    #[test]
    fn test_scroll_unchanged_when_visible() {
        let node = BoundingBox::new(50.0, 20.0, 40.0, 20.0);
        let scroll = adjust_scroll(node, CLIENT, Point::new(0.0, 0.0));
        assert_eq!(scroll, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_scroll_left_with_margin() {
        let node = BoundingBox::new(100.0, 20.0, 40.0, 20.0);
        let scroll = adjust_scroll(node, CLIENT, Point::new(150.0, 0.0));
        assert_eq!(scroll, Point::new(90.0, 0.0));
    }

    #[test]
    fn test_scroll_right_with_margin() {
        // right edge 240 vs window end 200 -> shift by 240 + 30 - 200
        let node = BoundingBox::new(200.0, 20.0, 40.0, 20.0);
        let scroll = adjust_scroll(node, CLIENT, Point::new(0.0, 0.0));
        assert_eq!(scroll, Point::new(70.0, 0.0));
    }

    #[test]
    fn test_scroll_top_and_bottom_independent() {
        let above = BoundingBox::new(10.0, 5.0, 40.0, 20.0);
        assert_eq!(
            adjust_scroll(above, CLIENT, Point::new(0.0, 50.0)),
            Point::new(0.0, 0.0)
        );

        let below = BoundingBox::new(10.0, 150.0, 40.0, 20.0);
        assert_eq!(
            adjust_scroll(below, CLIENT, Point::new(0.0, 0.0)),
            Point::new(0.0, 100.0)
        );
    }

    #[test]
    fn test_scroll_never_negative() {
        let node = BoundingBox::new(3.0, 4.0, 10.0, 10.0);
        let scroll = adjust_scroll(node, CLIENT, Point::new(5.0, 6.0));
        assert_eq!(scroll, Point::new(0.0, 0.0));
    }
}
