//! Window manager for lifecycle, focus, z-order and persistence

use std::collections::HashMap;
use log::{debug, warn};
use crate::app::{app_config, AppType};
use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};
use crate::persistence::{decode_records, encode_records, GeometryRecord, GeometryStore, RecordError};
use super::{Window, WindowId, WindowState};

/// Window manager handling window lifecycle, z-order and focus
///
/// Every state change is written through to the geometry store. Store
/// failures are logged and otherwise ignored.
pub struct WindowManager<S: GeometryStore> {
    /// Open windows by ID
    windows: HashMap<WindowId, Window>,
    /// Cached geometry records, including closed windows
    records: Vec<GeometryRecord>,
    /// Focused window (never minimized)
    focused: Option<WindowId>,
    /// Next z-order value
    next_z: u32,
    /// Bumped on every state change
    revision: u64,
    config: DesktopConfig,
    store: S,
}

impl<S: GeometryStore> WindowManager<S> {
    /// Create a window manager, restoring windows left open last session
    pub fn new(config: DesktopConfig, store: S) -> Self {
        let mut manager = Self {
            windows: HashMap::new(),
            records: Vec::new(),
            focused: None,
            next_z: config.initial_z,
            revision: 0,
            config,
            store,
        };
        manager.restore();
        manager
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open (or re-activate) the window for an application tag
    ///
    /// `url` only matters for `project-<slug>` content windows. Unknown tags
    /// are logged and ignored.
    pub fn open_window(&mut self, tag: &str, url: Option<&str>) -> Option<WindowId> {
        match tag.parse::<AppType>() {
            Ok(app) => Some(self.open_app(app.with_url(url))),
            Err(e) => {
                warn!("[wm] ignoring open request: {}", e);
                None
            }
        }
    }

    /// Open (or re-activate) the window for an application
    pub fn open_app(&mut self, app: AppType) -> WindowId {
        let id = app.tag();

        if let Some(window) = self.windows.get_mut(&id) {
            window.unminimize();
            self.bring_to_front(&id);
            return id;
        }

        self.create(app)
    }

    /// Create a new window for an application with no open window
    fn create(&mut self, app: AppType) -> WindowId {
        let id = app.tag();
        let defaults = app_config(&app, self.config.viewport);
        let bounds = self.config.maximize_bounds();

        let (rect, state) = match self.open_record(&id) {
            Some(record) => (record.rect(), record.state()),
            None => {
                let position = defaults
                    .position
                    .unwrap_or_else(|| self.scattered_position());
                let size = defaults.size.unwrap_or(self.config.dynamic_window_size);
                (Rect::from_pos_size(position, size), WindowState::Normal)
            }
        };

        let z_order = self.take_z();
        let mut window = Window {
            id: id.clone(),
            app,
            title: defaults.title,
            icon: defaults.icon,
            position: rect.position(),
            size: rect.size(),
            state: WindowState::Normal,
            z_order,
            content: defaults.content,
            restore_rect: None,
        };
        match state {
            WindowState::Normal => {}
            WindowState::Minimized => window.minimize(),
            WindowState::Maximized => window.maximize(bounds),
        }

        debug!("[wm] opened {} (z={}, state={:?})", id, z_order, state);
        self.windows.insert(id.clone(), window);
        if state != WindowState::Minimized {
            self.focused = Some(id.clone());
        }
        self.commit(&id, true);
        id
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        let window = match self.windows.remove(id) {
            Some(window) => window,
            None => return,
        };

        debug!("[wm] closed {}", id);
        self.upsert_record(GeometryRecord::from_window(&window, false));
        self.write_records();

        if self.focused.as_deref() == Some(id) {
            self.focus_top();
        }
        self.revision += 1;
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    /// Toggle the minimized state (also used to restore from the taskbar)
    ///
    /// Restoring does not focus the window.
    pub fn minimize_window(&mut self, id: &str) {
        let window = match self.windows.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        if window.is_minimized() {
            window.unminimize();
        } else {
            window.minimize();
            if self.focused.as_deref() == Some(id) {
                self.focus_top();
            }
        }
        self.commit(id, true);
    }

    /// Toggle the maximized state and bring the window forward
    pub fn maximize_window(&mut self, id: &str) {
        let bounds = self.config.maximize_bounds();
        let window = match self.windows.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        if window.is_maximized() {
            window.unmaximize();
        } else {
            window.maximize(bounds);
        }
        self.raise(id);
        self.commit(id, true);
    }

    /// Bring a window to the front and focus it
    ///
    /// No-op when the window already has focus.
    pub fn bring_to_front(&mut self, id: &str) {
        if self.focused.as_deref() == Some(id) {
            return;
        }
        match self.windows.get_mut(id) {
            Some(window) => window.unminimize(),
            None => return,
        }
        self.raise(id);
        self.commit(id, true);
    }

    /// Commit the geometry at the end of a drag or resize
    ///
    /// Does not touch focus or z-order. Non-finite geometry is ignored and
    /// the size is clamped to the configured minimum.
    pub fn set_position(&mut self, id: &str, position: Vec2, size: Size, maximized: bool) {
        let finite = [position.x, position.y, size.width, size.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            warn!("[wm] ignoring non-finite geometry for {}", id);
            return;
        }

        let bounds = self.config.maximize_bounds();
        let size = size.at_least(self.config.min_window_size);
        let window = match self.windows.get_mut(id) {
            Some(window) => window,
            None => return,
        };

        window.set_geometry(Rect::from_pos_size(position, size), maximized, bounds);
        self.commit(id, true);
    }

    /// Update the viewport, re-fitting maximized windows
    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
        let bounds = self.config.maximize_bounds();
        for window in self.windows.values_mut() {
            window.refit(bounds);
        }
        self.revision += 1;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Check if a window is open
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Get the currently focused window ID
    #[inline]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Check if no window is open
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Z-order value the next raised window will get
    #[inline]
    pub fn next_z(&self) -> u32 {
        self.next_z
    }

    /// Counter bumped on every state change
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cached geometry records, as last written
    pub fn records(&self) -> &[GeometryRecord] {
        &self.records
    }

    /// Active configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Borrow the geometry store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning the geometry store
    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Hand out the next z-order value
    fn take_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Give a window the top z-order and focus, unless it is focused already
    fn raise(&mut self, id: &str) {
        if self.focused.as_deref() == Some(id) {
            return;
        }
        let z = self.take_z();
        if let Some(window) = self.windows.get_mut(id) {
            window.z_order = z;
            self.focused = Some(id.to_string());
        }
    }

    /// Focus the highest visible window, or nothing
    fn focus_top(&mut self) {
        self.focused = self
            .windows
            .values()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id.clone());
    }

    /// Record a state change of an open window
    fn commit(&mut self, id: &str, is_open: bool) {
        if let Some(window) = self.windows.get(id) {
            let record = GeometryRecord::from_window(window, is_open);
            self.upsert_record(record);
            self.write_records();
        }
        self.revision += 1;
    }

    /// Persisted record for a window that was open when last written
    fn open_record(&self, id: &str) -> Option<&GeometryRecord> {
        self.records
            .iter()
            .find(|r| r.window_id == id && r.is_open)
    }

    fn upsert_record(&mut self, record: GeometryRecord) {
        match self.records.iter_mut().find(|r| r.window_id == record.window_id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    fn write_records(&mut self) {
        let result = encode_records(&self.records)
            .and_then(|json| self.store.save(&self.config.storage_key, &json));
        if let Err(e) = result {
            warn!("[wm] failed to save window geometry: {}", e);
        }
    }

    /// Pick a position for a window with no configured default
    fn scattered_position(&self) -> Vec2 {
        let origin = self.config.dynamic_window_origin;
        let jitter = self.config.dynamic_window_jitter;

        let mut bytes = [0u8; 4];
        if let Err(e) = getrandom::getrandom(&mut bytes) {
            debug!("[wm] no entropy for window placement: {}", e);
            return origin;
        }
        let dx = f32::from(u16::from_le_bytes([bytes[0], bytes[1]])) / 65536.0;
        let dy = f32::from(u16::from_le_bytes([bytes[2], bytes[3]])) / 65536.0;
        origin + Vec2::new(dx * jitter, dy * jitter)
    }

    // =========================================================================
    // Restore
    // =========================================================================

    /// Rebuild the windows that were open when the records were last written
    fn restore(&mut self) {
        let stored = match self.store.load(&self.config.storage_key) {
            Ok(Some(json)) => decode_records(&json).unwrap_or_else(|e| {
                warn!("[wm] ignoring stored window geometry: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("[wm] failed to load window geometry: {}", e);
                Vec::new()
            }
        };

        for mut record in stored {
            // Legacy ids ("cv", "winamp") map onto the canonical tag
            if let Ok(app) = record.app_type.parse::<AppType>() {
                record.window_id = app.tag();
                record.app_type = app.tag();
            }
            self.upsert_record(record);
        }

        let mut open: Vec<GeometryRecord> = self
            .records
            .iter()
            .filter(|r| r.is_open)
            .cloned()
            .collect();
        open.sort_by_key(|r| r.z_order.unwrap_or(0));

        let bounds = self.config.maximize_bounds();
        for record in open {
            match self.window_from_record(&record, bounds) {
                Ok(window) => {
                    debug!("[wm] restored {} (z={})", window.id, window.z_order);
                    // Cached z must follow the renumbering or later raises sort wrong
                    self.upsert_record(GeometryRecord::from_window(&window, true));
                    self.windows.insert(window.id.clone(), window);
                }
                Err(e) => warn!("[wm] skipping stored window: {}", e),
            }
        }

        self.focus_top();
    }

    fn window_from_record(&mut self, record: &GeometryRecord, bounds: Rect) -> Result<Window, RecordError> {
        let app = record
            .app_type
            .parse::<AppType>()
            .map_err(|_| RecordError::UnknownApp(record.app_type.clone()))?
            .with_url(record.url.as_deref());
        let defaults = app_config(&app, self.config.viewport);

        let mut window = Window {
            id: app.tag(),
            app,
            title: defaults.title,
            icon: defaults.icon,
            position: record.position(),
            size: record.size(),
            state: WindowState::Normal,
            z_order: self.take_z(),
            content: defaults.content,
            restore_rect: None,
        };
        match record.state() {
            WindowState::Normal => {}
            WindowState::Minimized => window.minimize(),
            WindowState::Maximized => window.maximize(bounds),
        }
        Ok(window)
    }
}
