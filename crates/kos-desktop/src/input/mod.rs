//! Input routing module
//!
//! Provides the drag/resize interaction state machine.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Calculate new position and size after resize operation
///
/// Edges opposite the dragged handle stay put; when the minimum size is hit
/// on a north or west handle the position stops moving too.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min: Size,
) -> (Vec2, Size) {
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    let grow_n = matches!(handle, WindowRegion::ResizeN | WindowRegion::ResizeNE | WindowRegion::ResizeNW);
    let grow_s = matches!(handle, WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW);
    let grow_w = matches!(handle, WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW);
    let grow_e = matches!(handle, WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE);

    if grow_n {
        new_size.height = (start_size.height - delta.y).max(min.height);
        new_pos.y = start_pos.y + start_size.height - new_size.height;
    }
    if grow_s {
        new_size.height = (start_size.height + delta.y).max(min.height);
    }
    if grow_w {
        new_size.width = (start_size.width - delta.x).max(min.width);
        new_pos.x = start_pos.x + start_size.width - new_size.width;
    }
    if grow_e {
        new_size.width = (start_size.width + delta.x).max(min.width);
    }

    (new_pos, new_size)
}
