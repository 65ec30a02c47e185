//! Ease Placement - Tooltip positioning
//!
//! Pure, headless placement of a floating label next to an anchor:
//! centered horizontally, above or below vertically, pushed back inside the
//! viewport and corrected for a transformed, positioned ancestor.
//! Geometry comes in as plain data so any layout surface can drive it.

mod ancestor;
mod animation;
mod config;
mod content;
mod error;
mod geometry;
mod horizontal;
mod vertical;

pub use ancestor::{resolve_ancestor_correction, AncestorSource, CssPosition};
pub use animation::build_animation_value;
pub use config::{
    TooltipConfig, ATTR_ANIMATION, ATTR_ANIMATION_FN, ATTR_ANIMATION_MS, ATTR_CONTENT,
    ATTR_CONTENT_LONG, ATTR_DISABLED, ATTR_OFFSET, ATTR_POSITION,
};
pub use content::{is_blank, split_lines, LINE_MARKER};
pub use error::ConfigError;
pub use geometry::{AncestorCorrection, AnchorGeometry, FloatingGeometry, Rect, Viewport};
pub use horizontal::{compute_left, HorizontalPlacement};
pub use vertical::{compute_top, Side, UnknownSide};

/// Computed placement of the floating element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementResult {
    pub top: f64,
    pub left: f64,
    /// Width must be capped to the anchor and overflow ellipsized
    pub truncated: bool,
}

/// Run both passes for a measured floating element.
pub fn place(
    anchor: &AnchorGeometry,
    floating: FloatingGeometry,
    correction: AncestorCorrection,
    side: Side,
    offset_space: f64,
    viewport: Viewport,
) -> PlacementResult {
    let horizontal = compute_left(anchor, floating.width, correction, viewport.width);
    let top = compute_top(
        anchor,
        floating.height,
        offset_space,
        correction,
        side,
        viewport.height,
    );

    tracing::debug!(
        top,
        left = horizontal.left,
        truncated = horizontal.truncated,
        ?side,
        "placed floating element"
    );

    PlacementResult {
        top,
        left: horizontal.left,
        truncated: horizontal.truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_combines_passes() {
        let anchor = AnchorGeometry::from_rect(Rect::from_xywh(200.0, 300.0, 80.0, 30.0), 80.0);
        let result = place(
            &anchor,
            FloatingGeometry::new(120.0, 40.0),
            AncestorCorrection::NONE,
            Side::Top,
            5.0,
            Viewport::new(1024.0, 768.0),
        );

        assert_eq!(
            result,
            PlacementResult {
                top: 255.0,
                left: 180.0,
                truncated: false,
            }
        );
    }
}
