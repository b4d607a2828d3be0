//! Geometry types for window placement
//!
//! All values are CSS pixels relative to the top-left corner of the desktop.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
