//! Tooltip errors

use ease_dom::{DomError, NodeId};
use ease_placement::ConfigError;

/// Result type for tooltip operations
pub type TooltipResult<T> = Result<T, TooltipError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TooltipError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("invalid tooltip configuration: {0}")]
    Config(#[from] ConfigError),

    /// The anchor is not part of the document
    #[error("anchor {0} is not connected to the document")]
    DetachedAnchor(NodeId),
}
