//! Tooltip configuration
//!
//! Per-anchor inputs with their defaults, settable in code or from markup
//! attributes.

use crate::content::is_blank;
use crate::error::ConfigError;
use crate::vertical::Side;

/// Attribute carrying the content; its presence marks an anchor
pub const ATTR_CONTENT: &str = "tooltip";
/// Long form of [`ATTR_CONTENT`]
pub const ATTR_CONTENT_LONG: &str = "tooltip-content";
pub const ATTR_POSITION: &str = "tooltip-position";
pub const ATTR_ANIMATION: &str = "tooltip-animation";
pub const ATTR_ANIMATION_FN: &str = "tooltip-animation-fn";
pub const ATTR_ANIMATION_MS: &str = "tooltip-animation-ms";
pub const ATTR_OFFSET: &str = "tooltip-offset";
pub const ATTR_DISABLED: &str = "tooltip-disabled";

/// Configuration of one tooltip anchor
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Text to show, `\n` escapes split lines
    pub content: String,
    /// Preferred side
    pub position: Side,
    /// Space-separated animation names
    pub animation_names: String,
    pub animation_timing_function: String,
    /// Duration in milliseconds, copied verbatim into the declaration
    pub animation_duration_ms: String,
    /// Clearance between anchor and tooltip, in pixels
    pub offset_space_px: f64,
    pub disabled: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            position: Side::Bottom,
            animation_names: "scale-up fade-in".to_string(),
            animation_timing_function: "ease-out".to_string(),
            animation_duration_ms: "200".to_string(),
            offset_space_px: 5.0,
            disabled: false,
        }
    }
}

impl TooltipConfig {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Side) -> Self {
        self.position = position;
        self
    }

    pub fn with_animation(mut self, names: impl Into<String>) -> Self {
        self.animation_names = names.into();
        self
    }

    pub fn with_timing_function(mut self, timing: impl Into<String>) -> Self {
        self.animation_timing_function = timing.into();
        self
    }

    pub fn with_duration_ms(mut self, duration: impl Into<String>) -> Self {
        self.animation_duration_ms = duration.into();
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset_space_px = offset;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Nothing to show: blank content or disabled
    pub fn is_inert(&self) -> bool {
        self.disabled || is_blank(&self.content)
    }

    /// Apply one markup attribute. Unknown names are ignored.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            ATTR_CONTENT | ATTR_CONTENT_LONG => self.content = value.to_string(),
            ATTR_POSITION => self.position = Side::parse_lenient(value),
            ATTR_ANIMATION => self.animation_names = value.to_string(),
            ATTR_ANIMATION_FN => self.animation_timing_function = value.to_string(),
            ATTR_ANIMATION_MS => self.animation_duration_ms = value.trim().to_string(),
            ATTR_OFFSET => {
                self.offset_space_px = parse_length(value).ok_or_else(|| ConfigError::InvalidNumber {
                    attribute: name.to_string(),
                    value: value.to_string(),
                })?;
            }
            ATTR_DISABLED => {
                self.disabled = parse_flag(value).ok_or_else(|| ConfigError::InvalidFlag {
                    attribute: name.to_string(),
                    value: value.to_string(),
                })?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Build from `(name, value)` attribute pairs on top of the defaults.
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            config.apply_attribute(name, value)?;
        }
        Ok(config)
    }
}

/// Attribute length: `12`, `12.5`, `12px`. Unlike a CSS length the unit
/// may be left off.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim_end();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Boolean attribute: present-but-empty counts as set
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "disabled" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
