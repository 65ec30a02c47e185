//! Ease Tooltip - Hover tooltips for DOM anchors
//!
//! Binds a [`TooltipConfig`] to an anchor element. On pointer-enter the
//! floating label is rendered right after the anchor, measured, placed by
//! `ease-placement` and given its animation; on pointer-leave it is removed.

mod directive;
mod error;
mod host;
mod layer;
mod render;

pub use directive::Tooltip;
pub use error::{TooltipError, TooltipResult};
pub use host::{anchor_geometry, viewport, DomSurface};
pub use layer::TooltipLayer;
pub use render::{create_floating, render_content, ELLIPSIS_CLASS, FLOATING_TAG, TOOLTIP_CLASS};

pub use ease_placement::{PlacementResult, Side, TooltipConfig};
