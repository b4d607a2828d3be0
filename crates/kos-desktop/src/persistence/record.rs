//! Persisted geometry record and its JSON encoding

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::math::{Rect, Size, Vec2};
use crate::window::{Window, WindowState};
use super::StoreError;

/// Error for a single record that cannot be restored
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record does not have the expected shape
    #[error("malformed geometry record: {0}")]
    Malformed(String),
    /// Record names an application that no longer exists
    #[error("geometry record for unknown application {0:?}")]
    UnknownApp(String),
}

/// Last-known geometry of a window, as stored between sessions
///
/// For a maximized window `x`/`y`/`width`/`height` hold the pre-maximize
/// rect, so un-maximizing after a reload lands on the remembered geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryRecord {
    pub window_id: String,
    pub app_type: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub is_open: bool,
    /// Stacking position at the time of the write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_order: Option<u32>,
    /// Frame URL of a content window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GeometryRecord {
    /// Build the record describing a window
    pub fn from_window(window: &Window, is_open: bool) -> Self {
        let rect = window.normal_rect();
        Self {
            window_id: window.id.clone(),
            app_type: window.app.tag(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            is_maximized: window.state == WindowState::Maximized,
            is_minimized: window.state == WindowState::Minimized,
            is_open,
            z_order: Some(window.z_order),
            url: window.content.url().map(str::to_string),
        }
    }

    /// Stored un-maximized rect
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Stored position
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Stored size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Window state encoded by the two flags
    ///
    /// Records written by older versions of the site can carry both flags;
    /// minimized wins since the window was hidden when it was saved.
    pub fn state(&self) -> WindowState {
        if self.is_minimized {
            WindowState::Minimized
        } else if self.is_maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    /// Check the record describes a usable window
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.window_id.trim().is_empty() {
            return Err(RecordError::Malformed("empty window id".to_string()));
        }
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(RecordError::Malformed(format!(
                "non-finite geometry for {}",
                self.window_id
            )));
        }
        if self.size().is_empty() {
            return Err(RecordError::Malformed(format!(
                "empty size for {}",
                self.window_id
            )));
        }
        Ok(())
    }
}

/// Decode stored records, skipping the ones that fail validation
///
/// Only a value that is not a JSON array at all is an error; a bad entry
/// never prevents the others from being restored.
pub fn decode_records(json: &str) -> Result<Vec<GeometryRecord>, StoreError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(values.len());

    for value in values {
        let record = match serde_json::from_value::<GeometryRecord>(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("[persistence] skipping record: {}", RecordError::Malformed(e.to_string()));
                continue;
            }
        };
        match record.validate() {
            Ok(()) => records.push(record),
            Err(e) => warn!("[persistence] skipping record: {}", e),
        }
    }

    Ok(records)
}

/// Encode records for storage
pub fn encode_records(records: &[GeometryRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> GeometryRecord {
        GeometryRecord {
            window_id: id.to_string(),
            app_type: id.to_string(),
            x: 10.0,
            y: 20.0,
            width: 400.0,
            height: 300.0,
            is_maximized: false,
            is_minimized: false,
            is_open: true,
            z_order: Some(12),
            url: None,
        }
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_string(&record("contacts")).unwrap();
        assert!(json.contains("\"windowId\""));
        assert!(json.contains("\"appType\""));
        assert!(json.contains("\"isMaximized\""));
        assert!(json.contains("\"isMinimized\""));
        assert!(json.contains("\"isOpen\""));
        assert!(json.contains("\"zOrder\""));
        assert!(!json.contains("\"url\""));
    }

    #[test]
    fn test_legacy_record_without_optional_fields() {
        let json = r#"[{"windowId":"cv","appType":"cv","x":10,"y":0,"width":600,"height":800,
            "isMaximized":false,"isMinimized":false,"isOpen":true}]"#;
        let records = decode_records(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].window_id, "cv");
        assert!(records[0].z_order.is_none());
        assert!(records[0].url.is_none());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"[
            {"windowId":"contacts","appType":"contacts","x":1,"y":2,"width":400,"height":300,
             "isMaximized":false,"isMinimized":false,"isOpen":true},
            {"windowId":"broken","x":"left"},
            42,
            {"windowId":"","appType":"projects","x":1,"y":2,"width":400,"height":300,
             "isMaximized":false,"isMinimized":false,"isOpen":true},
            {"windowId":"projects","appType":"projects","x":1,"y":2,"width":0,"height":300,
             "isMaximized":false,"isMinimized":false,"isOpen":true}
        ]"#;
        let records = decode_records(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].window_id, "contacts");
    }

    #[test]
    fn test_non_array_is_error() {
        assert!(decode_records("{\"windowId\":\"cv\"}").is_err());
        assert!(decode_records("not json").is_err());
    }

    #[test]
    fn test_state_from_flags() {
        let mut r = record("contacts");
        assert_eq!(r.state(), WindowState::Normal);

        r.is_maximized = true;
        assert_eq!(r.state(), WindowState::Maximized);

        r.is_minimized = true;
        assert_eq!(r.state(), WindowState::Minimized);
    }

    #[test]
    fn test_encode_decode_preserves_fields() {
        let mut r = record("project-demo");
        r.is_maximized = true;
        r.url = Some("https://demo.example".to_string());

        let json = encode_records(std::slice::from_ref(&r)).unwrap();
        let decoded = decode_records(&json).unwrap();
        assert_eq!(decoded, vec![r]);
    }
}
