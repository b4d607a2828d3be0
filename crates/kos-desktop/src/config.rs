//! Desktop configuration supplied by the UI shell

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};

/// Configuration for a [`WindowManager`](crate::WindowManager)
///
/// Every field has a default, so the shell only needs to send the values it
/// wants to override (usually just the viewport).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Size of the browser viewport
    pub viewport: Size,
    /// Height of the taskbar docked at the bottom of the viewport
    pub taskbar_height: f32,
    /// First z-order value handed out
    pub initial_z: u32,
    /// Storage key holding the geometry records
    pub storage_key: String,
    /// Smallest size a resize may produce
    pub min_window_size: Size,
    /// Size of content windows with no static configuration
    pub dynamic_window_size: Size,
    /// Base position of content windows with no static configuration
    pub dynamic_window_origin: Vec2,
    /// Upper bound of the random offset added to `dynamic_window_origin`
    pub dynamic_window_jitter: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920.0, 1080.0),
            taskbar_height: 28.0,
            initial_z: 10,
            storage_key: "windowPositions".to_string(),
            min_window_size: Size::new(200.0, 150.0),
            dynamic_window_size: Size::new(800.0, 600.0),
            dynamic_window_origin: Vec2::new(300.0, 100.0),
            dynamic_window_jitter: 100.0,
        }
    }
}

impl DesktopConfig {
    /// Create a config for the given viewport, everything else default
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Area a maximized window fills: the viewport minus the taskbar
    pub fn maximize_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport.width,
            (self.viewport.height - self.taskbar_height).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DesktopConfig::default();
        assert_eq!(config.initial_z, 10);
        assert_eq!(config.storage_key, "windowPositions");
        assert!((config.taskbar_height - 28.0).abs() < 0.001);
    }

    #[test]
    fn test_maximize_bounds_excludes_taskbar() {
        let config = DesktopConfig::with_viewport(1280.0, 720.0);
        let bounds = config.maximize_bounds();
        assert!((bounds.x - 0.0).abs() < 0.001);
        assert!((bounds.y - 0.0).abs() < 0.001);
        assert!((bounds.width - 1280.0).abs() < 0.001);
        assert!((bounds.height - 692.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DesktopConfig =
            serde_json::from_str(r#"{"viewport":{"width":800,"height":600}}"#).unwrap();
        assert!((config.viewport.width - 800.0).abs() < 0.001);
        assert_eq!(config.initial_z, 10);
        assert_eq!(config.storage_key, "windowPositions");
    }

    #[test]
    fn test_camel_case_keys() {
        let config: DesktopConfig =
            serde_json::from_str(r#"{"taskbarHeight":40,"storageKey":"kos"}"#).unwrap();
        assert!((config.taskbar_height - 40.0).abs() < 0.001);
        assert_eq!(config.storage_key, "kos");
    }
}
