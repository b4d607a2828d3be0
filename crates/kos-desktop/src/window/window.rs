//! Window struct and state

use serde::{Deserialize, Serialize};
use crate::app::{AppType, ContentMode};
use crate::math::{Rect, Size, Vec2};
use super::WindowId;

/// Window state
///
/// Minimized and maximized are variants of one enum, so a window can never
/// be both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// A window on the desktop
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Hosted application
    pub app: AppType,
    /// Window title
    pub title: String,
    /// Icon reference
    pub icon: &'static str,
    /// Position of the top-left corner
    pub position: Vec2,
    /// Window size including frame
    pub size: Size,
    /// Current state
    pub state: WindowState,
    /// Z-order (higher = on top)
    pub z_order: u32,
    /// How the content is rendered
    pub content: ContentMode,
    /// Saved position/size for restore after maximize
    pub(crate) restore_rect: Option<Rect>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Geometry the window has when not maximized
    pub fn normal_rect(&self) -> Rect {
        match (self.state, self.restore_rect) {
            (WindowState::Maximized, Some(rect)) => rect,
            _ => self.rect(),
        }
    }

    /// Check if the window is minimized
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    /// Check if the window is maximized
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    /// Maximize into `bounds`, remembering the current geometry
    ///
    /// A minimized window is un-minimized on the way.
    pub(crate) fn maximize(&mut self, bounds: Rect) {
        if self.is_maximized() {
            return;
        }
        self.restore_rect = Some(self.rect());
        self.position = bounds.position();
        self.size = bounds.size();
        self.state = WindowState::Maximized;
    }

    /// Leave the maximized state, restoring the remembered geometry
    pub(crate) fn unmaximize(&mut self) {
        if !self.is_maximized() {
            return;
        }
        if let Some(rect) = self.restore_rect.take() {
            self.position = rect.position();
            self.size = rect.size();
        }
        self.state = WindowState::Normal;
    }

    /// Minimize, dropping any maximized state first
    pub(crate) fn minimize(&mut self) {
        self.unmaximize();
        self.state = WindowState::Minimized;
    }

    /// Make a minimized window visible again
    pub(crate) fn unminimize(&mut self) {
        if self.is_minimized() {
            self.state = WindowState::Normal;
        }
    }

    /// Apply a committed geometry
    ///
    /// With `maximized` set the rect becomes the restore geometry and the
    /// window fills `bounds`; otherwise the rect is applied directly.
    pub(crate) fn set_geometry(&mut self, rect: Rect, maximized: bool, bounds: Rect) {
        if maximized {
            self.restore_rect = Some(rect);
            self.position = bounds.position();
            self.size = bounds.size();
            self.state = WindowState::Maximized;
        } else {
            if self.is_maximized() {
                self.state = WindowState::Normal;
            }
            self.restore_rect = None;
            self.position = rect.position();
            self.size = rect.size();
        }
    }

    /// Re-fit a maximized window to new bounds
    pub(crate) fn refit(&mut self, bounds: Rect) {
        if self.is_maximized() {
            self.position = bounds.position();
            self.size = bounds.size();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: "contacts".to_string(),
            app: AppType::Contacts,
            title: "Test".to_string(),
            icon: "icons/test.png",
            position: Vec2::new(100.0, 100.0),
            size: Size::new(800.0, 600.0),
            state: WindowState::Normal,
            z_order: 1,
            content: ContentMode::Component,
            restore_rect: None,
        }
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 1920.0, 1052.0);

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 800.0).abs() < 0.001);
        assert!((r.height - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_maximize_unmaximize_restores_exactly() {
        let mut w = create_test_window();
        w.maximize(BOUNDS);
        assert_eq!(w.state, WindowState::Maximized);
        assert_eq!(w.rect(), BOUNDS);
        assert_eq!(w.normal_rect(), Rect::new(100.0, 100.0, 800.0, 600.0));

        w.unmaximize();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 800.0, 600.0));
        assert!(w.restore_rect.is_none());
    }

    #[test]
    fn test_maximize_twice_keeps_first_snapshot() {
        let mut w = create_test_window();
        w.maximize(BOUNDS);
        w.maximize(BOUNDS);
        w.unmaximize();
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 800.0, 600.0));
    }

    #[test]
    fn test_minimize_drops_maximized() {
        let mut w = create_test_window();
        w.maximize(BOUNDS);
        w.minimize();
        assert_eq!(w.state, WindowState::Minimized);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 800.0, 600.0));

        w.unminimize();
        assert_eq!(w.state, WindowState::Normal);
    }

    #[test]
    fn test_maximize_clears_minimized() {
        let mut w = create_test_window();
        w.minimize();
        w.maximize(BOUNDS);
        assert_eq!(w.state, WindowState::Maximized);
    }

    #[test]
    fn test_set_geometry_maximized_keeps_rect_for_restore() {
        let mut w = create_test_window();
        let rect = Rect::new(40.0, 50.0, 300.0, 200.0);
        w.set_geometry(rect, true, BOUNDS);
        assert!(w.is_maximized());
        assert_eq!(w.normal_rect(), rect);

        w.unmaximize();
        assert_eq!(w.rect(), rect);
    }

    #[test]
    fn test_set_geometry_leaves_maximized() {
        let mut w = create_test_window();
        w.maximize(BOUNDS);
        let rect = Rect::new(40.0, 50.0, 300.0, 200.0);
        w.set_geometry(rect, false, BOUNDS);
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.rect(), rect);
    }

    #[test]
    fn test_refit_only_maximized() {
        let mut w = create_test_window();
        let smaller = Rect::new(0.0, 0.0, 1024.0, 740.0);
        w.refit(smaller);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 800.0, 600.0));

        w.maximize(BOUNDS);
        w.refit(smaller);
        assert_eq!(w.rect(), smaller);
    }
}
