//! Inline styles and computed values
//!
//! Only inline declarations take part in the cascade here; anything not
//! declared computes to its initial value.

/// Ordered list of `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `style` attribute text
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                let value = value.trim();
                if !property.is_empty() && !value.is_empty() {
                    style.set(property, value);
                }
            }
        }
        style
    }

    /// Get a declared value
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration, keeping its original slot if already present
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Serialize back to attribute text
    pub fn to_css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Declared pixel length, e.g. `12px` or `0`
    pub fn get_px(&self, property: &str) -> Option<f64> {
        parse_px(self.get(property)?)
    }
}

/// Initial values for the properties the placement reads
pub fn initial_value(property: &str) -> &'static str {
    match property {
        "position" => "static",
        "transform" => "none",
        "max-width" => "none",
        "top" | "left" => "auto",
        _ => "",
    }
}

/// Parse a pixel length; unitless zero is accepted
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    if value == "0" {
        return Some(0.0);
    }
    value
        .strip_suffix("px")?
        .trim_end()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Format a pixel length the way style serialization does
pub fn px(value: f64) -> String {
    format!("{value}px")
}
