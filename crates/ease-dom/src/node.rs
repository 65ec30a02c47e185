//! DOM Node
//!
//! Nodes live in an arena and link to each other by [`NodeId`].

use crate::geometry::ElementGeometry;
use crate::style::InlineStyle;
use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(TextData {
            content: content.into(),
        }))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self.data, NodeData::Document)
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    /// Whether this is a `<br>` element
    pub fn is_line_break(&self) -> bool {
        self.as_element().is_some_and(|e| e.tag == "br")
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Default)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes other than `class` and `style`
    pub attrs: Vec<Attribute>,
    /// Class list, in insertion order
    pub classes: Vec<String>,
    /// Inline `style` declarations
    pub style: InlineStyle,
    /// Box assigned by the host layout, if any
    pub layout: Option<ElementGeometry>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value.to_string()));
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        None
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// `class` attribute text
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    fn set_class_name(&mut self, value: &str) {
        self.classes.clear();
        for class in value.split_whitespace() {
            self.add_class(class);
        }
    }

    /// Read any attribute, including the synthesized `class` and `style`
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "class" if !self.classes.is_empty() => Some(self.class_name()),
            "style" if !self.style.is_empty() => Some(self.style.to_css_text()),
            "class" | "style" => None,
            _ => self.get_attr(name).map(str::to_string),
        }
    }

    /// Write any attribute; `class` and `style` are parsed into their lists
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        let previous = self.attribute(name);
        match name {
            "class" => self.set_class_name(value),
            "style" => self.style = InlineStyle::parse(value),
            _ => {
                self.set_attr(name, value);
            }
        }
        previous
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}
