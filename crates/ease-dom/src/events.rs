//! DOM Events
//!
//! Mutation records kept by the tree, and the pointer events a host feeds
//! into attached behaviors.

use crate::NodeId;

/// Mutation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventType {
    NodeInserted,
    NodeRemoved,
    AttrModified,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub related_node: Option<NodeId>,
    pub attr_name: Option<String>,
    pub prev_value: Option<String>,
    pub new_value: Option<String>,
}

impl DomEvent {
    /// Create node inserted event
    pub fn node_inserted(target: NodeId, parent: NodeId) -> Self {
        Self {
            event_type: DomEventType::NodeInserted,
            target,
            related_node: Some(parent),
            attr_name: None,
            prev_value: None,
            new_value: None,
        }
    }

    /// Create node removed event
    pub fn node_removed(target: NodeId, parent: NodeId) -> Self {
        Self {
            event_type: DomEventType::NodeRemoved,
            target,
            related_node: Some(parent),
            attr_name: None,
            prev_value: None,
            new_value: None,
        }
    }

    /// Create attribute modified event
    pub fn attr_modified(
        target: NodeId,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) -> Self {
        Self {
            event_type: DomEventType::AttrModified,
            target,
            related_node: None,
            attr_name: Some(name.to_string()),
            prev_value: old_value.map(str::to_string),
            new_value: new_value.map(str::to_string),
        }
    }
}

/// Pointer event types the tooltip layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    PointerEnter,
    PointerLeave,
}

/// Pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub event_type: PointerEventType,
    pub target: NodeId,
}

impl PointerEvent {
    pub fn enter(target: NodeId) -> Self {
        Self {
            event_type: PointerEventType::PointerEnter,
            target,
        }
    }

    pub fn leave(target: NodeId) -> Self {
        Self {
            event_type: PointerEventType::PointerLeave,
            target,
        }
    }
}
