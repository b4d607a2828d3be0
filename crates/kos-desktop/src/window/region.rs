//! Window regions the shell can start an interaction from

/// Region of a window receiving a pointer press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (for interaction)
    Content,
    /// North (top) resize edge
    ResizeN,
    /// South (bottom) resize edge
    ResizeS,
    /// East (right) resize edge
    ResizeE,
    /// West (left) resize edge
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

impl WindowRegion {
    /// Parse a resize handle direction (`"n"`, `"se"`, ...)
    pub fn from_handle(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(WindowRegion::ResizeN),
            "s" => Some(WindowRegion::ResizeS),
            "e" => Some(WindowRegion::ResizeE),
            "w" => Some(WindowRegion::ResizeW),
            "ne" => Some(WindowRegion::ResizeNE),
            "nw" => Some(WindowRegion::ResizeNW),
            "se" => Some(WindowRegion::ResizeSE),
            "sw" => Some(WindowRegion::ResizeSW),
            _ => None,
        }
    }

    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        !matches!(self, WindowRegion::TitleBar | WindowRegion::Content)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::ResizeN | WindowRegion::ResizeS => "ns-resize",
            WindowRegion::ResizeE | WindowRegion::ResizeW => "ew-resize",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }
}
