//! Input handling for pointer events and drag operations

use log::debug;
use crate::input::{calculate_resize, DragState, InputResult};
use crate::math::{Rect, Vec2};
use crate::persistence::GeometryStore;
use crate::window::WindowRegion;
use super::DesktopEngine;

impl<S: GeometryStore> DesktopEngine<S> {
    /// Start move drag from a title bar press
    ///
    /// Refused while another interaction is active, or when the window is
    /// missing, minimized or maximized.
    pub fn start_move_drag(&mut self, id: &str, x: f32, y: f32) -> bool {
        if !self.can_start_drag(id) {
            return false;
        }

        self.windows.bring_to_front(id);
        let rect = match self.windows.get(id) {
            Some(window) => window.rect(),
            None => return false,
        };

        let offset = Vec2::new(x, y) - rect.position();
        self.input.start_window_move(id.to_string(), offset, rect);
        debug!("[input] move started on {}", id);
        true
    }

    /// Start resize drag from an edge or corner handle
    pub fn start_resize_drag(&mut self, id: &str, handle: WindowRegion, x: f32, y: f32) -> bool {
        if !handle.is_resize() || !self.can_start_drag(id) {
            return false;
        }

        self.windows.bring_to_front(id);
        let rect = match self.windows.get(id) {
            Some(window) => window.rect(),
            None => return false,
        };

        self.input.start_window_resize(
            id.to_string(),
            handle,
            rect.position(),
            rect.size(),
            Vec2::new(x, y),
        );
        debug!("[input] resize ({:?}) started on {}", handle, id);
        true
    }

    /// Check whether a drag may begin on a window
    fn can_start_drag(&self, id: &str) -> bool {
        if self.input.is_dragging() {
            return false;
        }
        match self.windows.get(id) {
            Some(window) => !window.is_minimized() && !window.is_maximized(),
            None => false,
        }
    }

    /// Handle pointer move
    ///
    /// Only the preview geometry changes; nothing is persisted until release.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        let viewport = self.windows.config().viewport;
        let min_size = self.windows.config().min_window_size;

        let drag = match self.input.drag_state_mut() {
            Some(state) => state,
            None => return InputResult::Unhandled,
        };

        let rect = match drag {
            DragState::MoveWindow { offset, current, .. } => {
                // Keep the whole window inside the viewport
                let max = Vec2::new(viewport.width - current.width, viewport.height - current.height);
                let position = (pointer - *offset).clamp(Vec2::ZERO, max);
                Rect::from_pos_size(position, current.size())
            }
            DragState::ResizeWindow { handle, start_pos, start_size, start_mouse, .. } => {
                let delta = pointer - *start_mouse;
                let (position, size) = calculate_resize(*handle, *start_pos, *start_size, delta, min_size);
                Rect::from_pos_size(position, size)
            }
        };

        drag.set_current(rect);
        self.input_revision += 1;
        InputResult::Handled
    }

    /// Handle pointer up: end the interaction and commit its geometry
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let drag = match self.input.end_drag() {
            Some(drag) => drag,
            None => return InputResult::Unhandled,
        };

        let rect = drag.current();
        let kind = if drag.is_move() { "move" } else { "resize" };
        debug!("[input] {} ended on {}", kind, drag.window_id());
        self.windows
            .set_position(drag.window_id(), rect.position(), rect.size(), false);
        self.input_revision += 1;
        InputResult::Handled
    }
}
