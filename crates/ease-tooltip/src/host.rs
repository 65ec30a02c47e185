//! Layout surface adapter
//!
//! Reads the facts the placement engine needs out of a [`Document`].

use ease_dom::{DOMRect, Document, NodeId};
use ease_placement::{AncestorSource, AnchorGeometry, CssPosition, Rect, Viewport};

/// Read-only view of a document as an ancestor chain
pub struct DomSurface<'a>(pub &'a Document);

impl AncestorSource for DomSurface<'_> {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.0.parent(node)
    }

    fn is_document(&self, node: NodeId) -> bool {
        self.0.is_document(node)
    }

    fn position(&self, node: NodeId) -> CssPosition {
        CssPosition::parse(&self.0.computed_value(node, "position"))
    }

    fn has_transform(&self, node: NodeId) -> bool {
        self.0.computed_value(node, "transform").trim() != "none"
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        to_rect(self.0.bounding_client_rect(node))
    }
}

pub fn to_rect(rect: DOMRect) -> Rect {
    Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

/// Snapshot the anchor's box and client width
pub fn anchor_geometry(doc: &Document, anchor: NodeId) -> AnchorGeometry {
    AnchorGeometry::from_rect(to_rect(doc.bounding_client_rect(anchor)), doc.client_width(anchor))
}

pub fn viewport(doc: &Document) -> Viewport {
    let (width, height) = doc.viewport();
    Viewport::new(width, height)
}
