//! Drag state for an in-flight interaction

use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowId, WindowRegion};

/// Current drag operation state
///
/// `current` is the preview geometry the shell renders while the pointer
/// moves; it is committed to the window manager only on release.
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
        /// Geometry at the latest pointer position
        current: Rect,
    },
    /// Resizing a window
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: WindowRegion,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Mouse position at start
        start_mouse: Vec2,
        /// Geometry at the latest pointer position
        current: Rect,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Get the window being dragged
    pub fn window_id(&self) -> &str {
        match self {
            DragState::MoveWindow { window_id, .. } => window_id,
            DragState::ResizeWindow { window_id, .. } => window_id,
        }
    }

    /// Get the preview geometry
    pub fn current(&self) -> Rect {
        match self {
            DragState::MoveWindow { current, .. } => *current,
            DragState::ResizeWindow { current, .. } => *current,
        }
    }

    /// Replace the preview geometry
    pub(crate) fn set_current(&mut self, rect: Rect) {
        match self {
            DragState::MoveWindow { current, .. } => *current = rect,
            DragState::ResizeWindow { current, .. } => *current = rect,
        }
    }
}
