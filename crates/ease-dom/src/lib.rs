//! Ease DOM - Headless Document Object Model
//!
//! Arena-based DOM with just enough layout to host floating elements:
//! inline styles, assigned boxes, measured text and a mutation journal.

mod document;
mod error;
mod events;
mod geometry;
mod measure;
mod node;
mod style;
mod tree;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use events::{DomEvent, DomEventType, PointerEvent, PointerEventType};
pub use geometry::{DOMRect, ElementGeometry};
pub use measure::{collect_lines, TextMetrics};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use style::{initial_value, parse_px, px, InlineStyle};
pub use tree::{Ancestors, Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
