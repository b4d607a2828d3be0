//! Window manager for the KittenOS desktop
//!
//! This crate provides the state behind the retro desktop shell:
//! - Window lifecycle (open, close, minimize, maximize)
//! - Focus and z-order
//! - Drag and resize sessions
//! - Write-through geometry persistence that survives a reload
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`config`]: Desktop configuration supplied by the shell
//! - [`app`]: Application types and their static window configuration
//! - [`window`]: Window state and the window manager
//! - [`input`]: Drag/resize state machine
//! - [`persistence`]: Geometry records and the store abstraction
//!
//! ## Example
//!
//! ```rust
//! use kos_desktop::{DesktopConfig, DesktopEngine, MemoryStore};
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::with_viewport(1280.0, 800.0), MemoryStore::new());
//! let id = engine.open_window("contacts", None).unwrap();
//!
//! engine.maximize_window(&id);
//! assert_eq!(engine.windows.focused(), Some("contacts"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Injected Storage**: Persistence goes through [`GeometryStore`], so tests use memory
//! 3. **Failures Stay Local**: Storage errors are logged, never surfaced to the shell

pub mod math;
pub mod config;
pub mod app;
pub mod window;
pub mod input;
pub mod persistence;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use config::DesktopConfig;
pub use app::{app_config, AppConfig, AppType, AppTypeError, ContentApp, ContentMode};
pub use window::{Window, WindowId, WindowManager, WindowRegion, WindowState};
pub use input::{DragState, InputResult, InputRouter};
pub use persistence::{GeometryRecord, GeometryStore, MemoryStore, RecordError, StoreError};

pub use engine::{DesktopEngine, WindowView};
