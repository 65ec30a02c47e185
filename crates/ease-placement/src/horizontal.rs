//! Horizontal Placement
//!
//! Centers the floating box over the anchor and pushes it back inside the
//! viewport when it is wider than the anchor.

use crate::geometry::{AncestorCorrection, AnchorGeometry};

/// Result of the horizontal pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HorizontalPlacement {
    /// Left offset with the ancestor correction already applied
    pub left: f64,
    /// Floating box is wider than the viewport and must be capped
    pub truncated: bool,
}

/// Compute the `left` offset of the floating box.
pub fn compute_left(
    anchor: &AnchorGeometry,
    floating_width: f64,
    correction: AncestorCorrection,
    viewport_width: f64,
) -> HorizontalPlacement {
    let half_overhang = (floating_width - anchor.client_width) / 2.0;
    let mut left = anchor.left - half_overhang - correction.left;

    if half_overhang > 0.0 {
        if left < 0.0 {
            // hug the left edge
            left += half_overhang;
        } else if anchor.left + floating_width > viewport_width {
            // hug the right edge
            left -= half_overhang;
        }
    }

    HorizontalPlacement {
        left,
        truncated: floating_width > viewport_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(left: f64, width: f64) -> AnchorGeometry {
        AnchorGeometry {
            top: 100.0,
            left,
            bottom: 130.0,
            width,
            client_width: width,
        }
    }

    #[test]
    fn test_centered() {
        let placed = compute_left(&anchor(200.0, 80.0), 120.0, AncestorCorrection::NONE, 1024.0);

        assert_eq!(placed.left, 180.0);
        assert!(!placed.truncated);
    }

    #[test]
    fn test_centered_with_correction() {
        let placed = compute_left(
            &anchor(200.0, 80.0),
            120.0,
            AncestorCorrection::new(0.0, 50.0),
            1024.0,
        );

        assert_eq!(placed.left, 130.0);
    }

    #[test]
    fn test_narrower_than_anchor_is_not_clamped() {
        // negative overhang: box sits inside the anchor, even off-screen
        let placed = compute_left(&anchor(-10.0, 100.0), 40.0, AncestorCorrection::NONE, 1024.0);

        assert_eq!(placed.left, 20.0);

        let placed = compute_left(&anchor(-100.0, 100.0), 40.0, AncestorCorrection::NONE, 1024.0);
        assert_eq!(placed.left, -70.0);
    }

    #[test]
    fn test_left_clamp() {
        let placed = compute_left(&anchor(10.0, 40.0), 140.0, AncestorCorrection::NONE, 1024.0);

        // unclamped -40, shifted right by 50
        assert_eq!(placed.left, 10.0);
    }

    #[test]
    fn test_right_clamp() {
        let placed = compute_left(&anchor(950.0, 60.0), 160.0, AncestorCorrection::NONE, 1024.0);

        // unclamped 900, shifted left by 50
        assert_eq!(placed.left, 850.0);
    }

    #[test]
    fn test_left_clamp_wins_over_right() {
        // both edges overflow: only the left push applies
        let placed = compute_left(&anchor(5.0, 20.0), 300.0, AncestorCorrection::NONE, 250.0);

        assert_eq!(placed.left, 5.0);
        assert!(placed.truncated);
    }

    #[test]
    fn test_exact_viewport_fit_is_not_clamped() {
        let placed = compute_left(&anchor(900.0, 84.0), 124.0, AncestorCorrection::NONE, 1024.0);

        assert_eq!(placed.left, 880.0);
    }

    #[test]
    fn test_centers_on_client_width() {
        // 80px border box, 76px client box
        let anchor = AnchorGeometry {
            client_width: 76.0,
            ..anchor(400.0, 80.0)
        };
        let placed = compute_left(&anchor, 51.0, AncestorCorrection::NONE, 1024.0);

        assert_eq!(placed.left, 412.5);

        let placed = compute_left(&anchor, 116.0, AncestorCorrection::NONE, 1024.0);
        assert_eq!(placed.left, 380.0);
    }

    #[test]
    fn test_truncated_when_wider_than_viewport() {
        let placed = compute_left(&anchor(100.0, 50.0), 400.0, AncestorCorrection::NONE, 320.0);

        assert!(placed.truncated);

        let placed = compute_left(&anchor(100.0, 50.0), 320.0, AncestorCorrection::NONE, 320.0);
        assert!(!placed.truncated);
    }
}
