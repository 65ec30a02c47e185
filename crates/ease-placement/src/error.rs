//! Configuration errors

/// Attribute value that cannot be interpreted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{attribute}: expected a number of pixels, got {value:?}")]
    InvalidNumber { attribute: String, value: String },

    #[error("{attribute}: expected true or false, got {value:?}")]
    InvalidFlag { attribute: String, value: String },
}
