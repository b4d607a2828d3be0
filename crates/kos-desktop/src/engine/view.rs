//! Render snapshots for the UI shell

use serde::Serialize;
use crate::app::ContentMode;
use crate::math::{Size, Vec2};
use crate::persistence::GeometryStore;
use crate::window::{Window, WindowState};
use super::DesktopEngine;

/// Everything the shell needs to draw one window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: String,
    pub app_type: String,
    pub title: String,
    pub icon: &'static str,
    pub position: Vec2,
    pub size: Size,
    pub state: WindowState,
    pub z_order: u32,
    pub focused: bool,
    /// Window is being dragged or resized
    pub dragging: bool,
    pub content: ContentMode,
}

impl WindowView {
    fn new(window: &Window, focused: bool) -> Self {
        Self {
            id: window.id.clone(),
            app_type: window.app.tag(),
            title: window.title.clone(),
            icon: window.icon,
            position: window.position,
            size: window.size,
            state: window.state,
            z_order: window.z_order,
            focused,
            dragging: false,
            content: window.content.clone(),
        }
    }
}

impl<S: GeometryStore> DesktopEngine<S> {
    /// Snapshot of all windows, back to front
    ///
    /// A window in the middle of a drag reports its preview geometry.
    pub fn snapshot(&self) -> Vec<WindowView> {
        let focused = self.windows.focused();
        self.windows
            .windows_by_z()
            .into_iter()
            .map(|window| {
                let mut view = WindowView::new(window, focused == Some(window.id.as_str()));
                if let Some(rect) = self.preview(&window.id) {
                    view.position = rect.position();
                    view.size = rect.size();
                    view.dragging = true;
                }
                view
            })
            .collect()
    }
}
