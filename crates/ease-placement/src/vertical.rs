//! Vertical Placement
//!
//! Above the anchor by default, below when there is no room above or when
//! below is preferred. A preferred-below box that would overflow the bottom
//! edge goes back above, without re-checking the top edge.

use std::fmt;
use std::str::FromStr;

use crate::geometry::{AncestorCorrection, AnchorGeometry};

/// Preferred vertical side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Top,
    #[default]
    Bottom,
}

impl Side {
    /// Parse leniently: anything that is not `top` or `bottom` becomes `bottom`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "unknown tooltip position, falling back to bottom");
            Side::Bottom
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Unrecognized side keyword
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side: {0}")]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            _ => Err(UnknownSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the `top` offset of the floating box.
///
/// Only the above candidate has the correction subtracted; the below
/// candidate is used as-is.
pub fn compute_top(
    anchor: &AnchorGeometry,
    floating_height: f64,
    offset_space: f64,
    correction: AncestorCorrection,
    preferred: Side,
    viewport_height: f64,
) -> f64 {
    let above = anchor.top - floating_height - offset_space - correction.top;

    let mut side = Side::Top;
    let mut top = above;

    if above < 0.0 || preferred == Side::Bottom {
        side = Side::Bottom;
        top = anchor.bottom + offset_space;
    }

    if side == Side::Bottom && top + floating_height + correction.top > viewport_height {
        tracing::debug!(below = top, above, "bottom overflow, placing above");
        top = above;
    }

    top
}
