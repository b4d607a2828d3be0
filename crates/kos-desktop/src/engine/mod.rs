//! Desktop engine coordinating the window manager and pointer input
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and drag/resize sessions
//! - `view`: Render snapshots for the UI shell

mod input;
mod view;

use crate::config::DesktopConfig;
use crate::input::InputRouter;
use crate::math::{Rect, Size, Vec2};
use crate::persistence::GeometryStore;
use crate::window::{WindowId, WindowManager};

pub use view::WindowView;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for the UI shell, managing:
/// - Window manager (lifecycle, focus, z-order, persistence)
/// - Input router (drag/resize state machine)
pub struct DesktopEngine<S: GeometryStore> {
    /// Window manager
    pub windows: WindowManager<S>,
    /// Input router
    pub input: InputRouter,
    /// Pointer moves applied to the current interaction
    pub(crate) input_revision: u64,
}

impl<S: GeometryStore> DesktopEngine<S> {
    /// Create a desktop engine, restoring persisted windows from `store`
    pub fn new(config: DesktopConfig, store: S) -> Self {
        Self {
            windows: WindowManager::new(config, store),
            input: InputRouter::new(),
            input_revision: 0,
        }
    }

    /// Open (or re-activate) a window from a desktop icon or the start menu
    pub fn open_window(&mut self, tag: &str, url: Option<&str>) -> Option<WindowId> {
        self.windows.open_window(tag, url)
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        self.cancel_drag_on(id);
        self.windows.close_window(id);
    }

    /// Minimize or restore a window
    pub fn minimize_window(&mut self, id: &str) {
        self.cancel_drag_on(id);
        self.windows.minimize_window(id);
    }

    /// Maximize or un-maximize a window
    pub fn maximize_window(&mut self, id: &str) {
        self.cancel_drag_on(id);
        self.windows.maximize_window(id);
    }

    /// Commit a window geometry supplied by the shell
    ///
    /// An interaction in flight on the window is dropped so its release
    /// cannot overwrite this geometry.
    pub fn set_position(&mut self, id: &str, position: Vec2, size: Size, maximized: bool) {
        self.cancel_drag_on(id);
        self.windows.set_position(id, position, size, maximized);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: &str) {
        self.windows.bring_to_front(id);
    }

    /// Taskbar button click: restore a minimized window, else bring it forward
    pub fn activate(&mut self, id: &str) {
        let minimized = match self.windows.get(id) {
            Some(window) => window.is_minimized(),
            None => return,
        };

        if minimized {
            self.windows.minimize_window(id);
        } else {
            self.windows.bring_to_front(id);
        }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.windows.set_viewport(Size::new(width, height));
    }

    /// Counter the shell can compare to skip redundant renders
    pub fn revision(&self) -> u64 {
        self.windows.revision() + self.input_revision
    }

    /// In-flight geometry of a window being dragged or resized
    pub fn preview(&self, id: &str) -> Option<Rect> {
        self.input
            .drag_state()
            .filter(|drag| drag.window_id() == id)
            .map(|drag| drag.current())
    }

    /// Drop an interaction on a window whose state is about to change
    fn cancel_drag_on(&mut self, id: &str) {
        if self.preview(id).is_some() {
            self.input.end_drag();
            self.input_revision += 1;
        }
    }
}
