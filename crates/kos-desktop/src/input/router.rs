//! Input router state machine

use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::DragState;

/// Input router managing drag state
///
/// Holds at most one interaction. Ending it takes the state out, so
/// nothing from a finished drag can leak into the next one.
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Get current drag state mutably
    #[inline]
    pub(crate) fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2, current: Rect) {
        self.drag = Some(DragState::MoveWindow { window_id, offset, current });
    }

    /// Start window resize operation
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_mouse,
            current: Rect::from_pos_size(start_pos, start_size),
        });
    }

    /// End current drag operation, returning its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.start_window_move(
            "contacts".to_string(),
            Vec2::new(10.0, 10.0),
            Rect::new(100.0, 100.0, 400.0, 300.0),
        );
        assert!(router.is_dragging());

        match router.drag_state() {
            Some(DragState::MoveWindow { window_id, .. }) => assert_eq!(window_id, "contacts"),
            other => panic!("Expected MoveWindow state, got {:?}", other),
        }
    }

    #[test]
    fn test_input_router_resize() {
        let mut router = InputRouter::new();

        router.start_window_resize(
            "contacts".to_string(),
            WindowRegion::ResizeSE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(500.0, 400.0),
        );

        assert!(router.is_dragging());
        let state = router.drag_state().unwrap();
        assert!(state.is_resize());
        assert_eq!(state.current(), Rect::new(100.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn test_end_drag_clears_state() {
        let mut router = InputRouter::new();
        router.start_window_move("contacts".to_string(), Vec2::ZERO, Rect::new(0.0, 0.0, 1.0, 1.0));

        let ended = router.end_drag();
        assert!(ended.is_some());
        assert!(!router.is_dragging());
        assert!(router.end_drag().is_none());
    }
}
