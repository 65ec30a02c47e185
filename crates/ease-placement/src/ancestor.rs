//! Ancestor Correction Resolver
//!
//! An element positioned against a transformed ancestor is laid out in that
//! ancestor's box, while geometry reads stay viewport-relative. The resolver
//! walks up from the anchor and reports the origin shift, if any.

use crate::geometry::{AncestorCorrection, Rect};

/// Computed value of the CSS `position` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssPosition {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl CssPosition {
    /// Parse a computed `position` value. Unknown keywords compute to `static`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "relative" => Self::Relative,
            "absolute" => Self::Absolute,
            "fixed" => Self::Fixed,
            "sticky" => Self::Sticky,
            _ => Self::Static,
        }
    }

    /// `absolute` or `fixed`
    pub fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// Read access to the ancestor chain of a rendered node
pub trait AncestorSource {
    /// Node handle
    type Node: Copy + std::fmt::Debug;

    /// Parent of `node`, `None` past the root
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` is the document itself
    fn is_document(&self, node: Self::Node) -> bool;

    /// Computed `position`
    fn position(&self, node: Self::Node) -> CssPosition;

    /// Whether the computed `transform` is anything but `none`
    fn has_transform(&self, node: Self::Node) -> bool;

    /// Viewport-relative bounding box
    fn bounding_rect(&self, node: Self::Node) -> Rect;
}

/// Resolve the containing-block correction for `anchor`.
///
/// Stops at the first `relative` ancestor (no correction) or at the first
/// transformed `absolute`/`fixed` ancestor beyond the immediate parent (its
/// top/left become the correction). The document node ends the walk.
pub fn resolve_ancestor_correction<S: AncestorSource>(
    source: &S,
    anchor: S::Node,
) -> AncestorCorrection {
    let mut visited = 0usize;
    let mut current = source.parent(anchor);

    while let Some(node) = current {
        if source.is_document(node) {
            break;
        }

        let position = source.position(node);
        tracing::trace!(?node, ?position, visited, "walking ancestor");

        if position == CssPosition::Relative {
            return AncestorCorrection::NONE;
        }

        if position.is_out_of_flow() && visited > 0 && source.has_transform(node) {
            let rect = source.bounding_rect(node);
            tracing::debug!(?node, top = rect.top(), left = rect.left(), "transformed containing block");
            return AncestorCorrection::new(rect.top(), rect.left());
        }

        current = source.parent(node);
        visited += 1;
    }

    AncestorCorrection::NONE
}
