//! Geometry snapshots
//!
//! Plain data read from a layout surface. Everything is in CSS pixels,
//! viewport-relative unless stated otherwise.

/// Axis-aligned rectangle, shaped like a DOMRect
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Snapshot of the trigger element's box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorGeometry {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    /// Rendered client width (content + padding)
    pub client_width: f64,
}

impl AnchorGeometry {
    /// Build from a bounding rect and the element's client width
    pub fn from_rect(rect: Rect, client_width: f64) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            width: rect.width,
            client_width,
        }
    }
}

/// Measured size of the floating element, only valid after insertion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatingGeometry {
    pub width: f64,
    pub height: f64,
}

impl FloatingGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Origin shift introduced by a transformed, positioned ancestor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AncestorCorrection {
    pub top: f64,
    pub left: f64,
}

impl AncestorCorrection {
    /// No correction
    pub const NONE: AncestorCorrection = AncestorCorrection { top: 0.0, left: 0.0 };

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Visible viewport size, passed explicitly instead of read from a global
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
