//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Element required
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    /// Inserting a node into itself or one of its descendants
    #[error("hierarchy request error: {node:?} cannot be inserted under {parent:?}")]
    HierarchyRequest { parent: NodeId, node: NodeId },
    /// Reference node has no parent
    #[error("node {0:?} is not attached to a parent")]
    Detached(NodeId),
}
