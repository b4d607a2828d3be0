//! Window management module
//!
//! Provides window lifecycle, focus and z-order tracking, and write-through
//! geometry persistence.

#[allow(clippy::module_inception)]
mod window;
mod region;
mod manager;

pub use window::{Window, WindowState};
pub use region::WindowRegion;
pub use manager::WindowManager;

/// Window identity: the canonical tag of the hosted application
pub type WindowId = String;
