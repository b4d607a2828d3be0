//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the UI shell to drive windows directly. Geometry is persisted
//! to `window.localStorage`.

mod logger;

use log::warn;
use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::math::{Size, Vec2};
use crate::persistence::LocalStorageStore;
use crate::window::WindowRegion;

pub use logger::init_logging;

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine<LocalStorageStore>,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller, restoring windows left open last session
    ///
    /// `config_json` is a partial `DesktopConfig`; invalid JSON falls back
    /// to the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        let config = match config_json {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("[wasm] invalid desktop config, using defaults: {}", e);
                DesktopConfig::default()
            }),
            None => DesktopConfig::default(),
        };

        Self {
            engine: DesktopEngine::new(config, LocalStorageStore::new()),
        }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open (or re-activate) a window by application tag
    ///
    /// Returns the window ID, or undefined for an unknown tag.
    #[wasm_bindgen]
    pub fn open_window(&mut self, tag: &str, url: Option<String>) -> Option<String> {
        self.engine.open_window(tag, url.as_deref())
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    /// Toggle minimize
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.engine.minimize_window(id);
    }

    /// Toggle maximize
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.engine.maximize_window(id);
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn bring_to_front(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    /// Taskbar button click
    #[wasm_bindgen]
    pub fn activate(&mut self, id: &str) {
        self.engine.activate(id);
    }

    /// Commit a window geometry
    #[wasm_bindgen]
    pub fn set_position(&mut self, id: &str, x: f32, y: f32, w: f32, h: f32, maximized: bool) {
        self.engine
            .set_position(id, Vec2::new(x, y), Size::new(w, h), maximized);
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Title bar pressed
    #[wasm_bindgen]
    pub fn start_move_drag(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine.start_move_drag(id, x, y)
    }

    /// Resize handle pressed (`handle` is one of n, s, e, w, ne, nw, se, sw)
    #[wasm_bindgen]
    pub fn start_resize_drag(&mut self, id: &str, handle: &str, x: f32, y: f32) -> bool {
        match WindowRegion::from_handle(handle) {
            Some(region) => self.engine.start_resize_drag(id, region, x, y),
            None => {
                warn!("[wasm] unknown resize handle {:?}", handle);
                false
            }
        }
    }

    /// CSS cursor for a resize handle
    #[wasm_bindgen]
    pub fn get_resize_cursor(&self, handle: &str) -> Option<String> {
        WindowRegion::from_handle(handle).map(|region| region.cursor().to_string())
    }

    /// Pointer moved; returns true when a drag consumed it
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y).is_handled()
    }

    /// Pointer released; returns true when a drag was committed
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.handle_pointer_up().is_handled()
    }

    /// Browser viewport resized
    #[wasm_bindgen]
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get all windows as JSON, back to front
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.engine.snapshot()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<String> {
        self.engine.windows.focused().map(str::to_string)
    }

    /// Counter bumped whenever the rendered state may have changed
    #[wasm_bindgen]
    pub fn revision(&self) -> u64 {
        self.engine.revision()
    }
}
