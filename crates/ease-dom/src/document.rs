//! Document - High-level document API
//!
//! Wraps the tree with the facts a layout surface exposes: viewport size,
//! computed styles, bounding boxes and client sizes.

use crate::events::DomEvent;
use crate::geometry::{DOMRect, ElementGeometry};
use crate::measure::{collect_lines, TextMetrics};
use crate::style::{initial_value, InlineStyle};
use crate::{DomError, DomResult, DomTree, ElementData, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    viewport_width: f64,
    viewport_height: f64,
    metrics: TextMetrics,
}

impl Document {
    /// Create a document with `<html><body>` and the given viewport size
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self::build(viewport_width, viewport_height)
            .expect("fresh <html>/<body> nodes attach under the document")
    }

    fn build(viewport_width: f64, viewport_height: f64) -> DomResult<Self> {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let body = tree.create_element("body");

        let root = tree.root();
        tree.append_child(root, html)?;
        tree.append_child(html, body)?;
        tree.take_mutations();

        let mut doc = Self {
            tree,
            html_element: html,
            body_element: body,
            viewport_width,
            viewport_height,
            metrics: TextMetrics::default(),
        };
        let full = DOMRect::from_xywh(0.0, 0.0, viewport_width, viewport_height);
        doc.set_layout(html, full)?;
        doc.set_layout(body, full)?;
        Ok(doc)
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Viewport `(width, height)`
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    // ------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.tree.create_text(content)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    /// Insert `node` immediately after `reference`
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> DomResult<NodeId> {
        self.tree.insert_after(reference, node)
    }

    /// Detach a node; returns false if it was already detached
    pub fn remove(&mut self, node: NodeId) -> DomResult<bool> {
        self.tree.remove(node)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.tree.next_sibling(node)
    }

    pub fn is_document(&self, node: NodeId) -> bool {
        self.tree.get(node).is_some_and(|n| n.is_document())
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.tree.is_connected(node)
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Mutation records since the last call
    pub fn take_mutations(&mut self) -> Vec<DomEvent> {
        self.tree.take_mutations()
    }

    /// Connected elements carrying `name`, in document order
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.root())
            .into_iter()
            .filter(|&n| self.element(n).is_ok_and(|e| e.attribute(name).is_some()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Attributes, classes, styles
    // ------------------------------------------------------------------

    /// Element data of `node`
    pub fn element(&self, node: NodeId) -> DomResult<&ElementData> {
        self.tree
            .get(node)
            .ok_or(DomError::NotFound(node))?
            .as_element()
            .ok_or(DomError::NotAnElement(node))
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut ElementData> {
        self.tree
            .get_mut(node)
            .ok_or(DomError::NotFound(node))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(node))
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).ok()?.attribute(name)
    }

    /// All attributes of an element, `class` and `style` included
    pub fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        let Ok(elem) = self.element(node) else {
            return Vec::new();
        };
        let mut attrs: Vec<(String, String)> = elem
            .attrs
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect();
        for name in ["class", "style"] {
            if let Some(value) = elem.attribute(name) {
                attrs.push((name.to_string(), value));
            }
        }
        attrs
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        let previous = self.element_mut(node)?.set_attribute(name, value);
        self.tree.record(DomEvent::attr_modified(
            node,
            name,
            previous.as_deref(),
            Some(value),
        ));
        Ok(())
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        let elem = self.element_mut(node)?;
        let previous = elem.attribute("class");
        if elem.add_class(class) {
            let current = elem.class_name();
            self.tree.record(DomEvent::attr_modified(
                node,
                "class",
                previous.as_deref(),
                Some(&current),
            ));
        }
        Ok(())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_ok_and(|e| e.has_class(class))
    }

    /// Set one inline style declaration
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()> {
        let elem = self.element_mut(node)?;
        let previous = elem.attribute("style");
        elem.style.set(property, value);
        let current = elem.style.to_css_text();
        self.tree.record(DomEvent::attr_modified(
            node,
            "style",
            previous.as_deref(),
            Some(&current),
        ));
        Ok(())
    }

    /// Inline style of an element
    pub fn style(&self, node: NodeId) -> Option<&InlineStyle> {
        self.element(node).ok().map(|e| &e.style)
    }

    /// Computed value of `property`; falls back to the initial value
    pub fn computed_value(&self, node: NodeId, property: &str) -> String {
        self.style(node)
            .and_then(|s| s.get(property))
            .unwrap_or_else(|| initial_value(property))
            .to_string()
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Assign the viewport-relative box of an element
    pub fn set_layout(&mut self, node: NodeId, rect: DOMRect) -> DomResult<()> {
        self.set_geometry(node, ElementGeometry::from_rect(rect))
    }

    /// Assign the full geometry of an element
    pub fn set_geometry(&mut self, node: NodeId, geometry: ElementGeometry) -> DomResult<()> {
        self.element_mut(node)?.layout = Some(geometry);
        Ok(())
    }

    /// Geometry of a connected element; laid-out boxes win, otherwise the
    /// element is measured from its content. Detached nodes measure zero.
    fn geometry(&self, node: NodeId) -> Option<ElementGeometry> {
        let elem = self.element(node).ok()?;
        if !self.is_connected(node) {
            return None;
        }
        if let Some(layout) = elem.layout {
            return Some(layout);
        }

        let lines = collect_lines(&self.tree, node);
        let (width, height) = self
            .metrics
            .measure_lines(&lines, elem.style.get_px("max-width"));
        let x = elem.style.get_px("left").unwrap_or(0.0);
        let y = elem.style.get_px("top").unwrap_or(0.0);
        Some(ElementGeometry::from_rect(DOMRect::from_xywh(x, y, width, height)))
    }

    /// getBoundingClientRect
    pub fn bounding_client_rect(&self, node: NodeId) -> DOMRect {
        self.geometry(node).map(|g| g.rect).unwrap_or_default()
    }

    /// Inline `left`/`top` with the measured size, in containing-block space
    pub fn offset_rect(&self, node: NodeId) -> DOMRect {
        let Some(geometry) = self.geometry(node) else {
            return DOMRect::default();
        };
        let style = self.style(node);
        let left = style.and_then(|s| s.get_px("left")).unwrap_or(0.0);
        let top = style.and_then(|s| s.get_px("top")).unwrap_or(0.0);
        DOMRect::from_xywh(left, top, geometry.rect.width, geometry.rect.height)
    }

    pub fn client_width(&self, node: NodeId) -> f64 {
        self.geometry(node).map(|g| g.client_width).unwrap_or(0.0)
    }

    pub fn client_height(&self, node: NodeId) -> f64 {
        self.geometry(node).map(|g| g.client_height).unwrap_or(0.0)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DomEventType;

    #[test]
    fn test_document_structure() {
        let doc = Document::new(800.0, 600.0);

        assert_eq!(doc.parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.parent(doc.document_element()), Some(doc.root()));
        assert!(doc.is_document(doc.root()));
        assert_eq!(doc.viewport(), (800.0, 600.0));
        assert_eq!(doc.bounding_client_rect(doc.body()).width, 800.0);
    }

    #[test]
    fn test_build_starts_with_empty_journal() {
        let mut doc = Document::build(320.0, 480.0).unwrap();

        assert!(doc.take_mutations().is_empty());
        assert_eq!(doc.tree().children(doc.root()).collect::<Vec<_>>(), vec![doc.document_element()]);
        assert_eq!(doc.client_width(doc.document_element()), 320.0);
    }

    #[test]
    fn test_computed_defaults() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        doc.append_child(doc.body(), div).unwrap();

        assert_eq!(doc.computed_value(div, "position"), "static");
        assert_eq!(doc.computed_value(div, "transform"), "none");

        doc.set_style(div, "position", "fixed").unwrap();
        doc.set_style(div, "transform", "translate(-50%, -50%)").unwrap();
        assert_eq!(doc.computed_value(div, "position"), "fixed");
        assert_eq!(doc.computed_value(div, "transform"), "translate(-50%, -50%)");
        assert_eq!(
            doc.get_attribute(div, "style"),
            Some("position: fixed; transform: translate(-50%, -50%);".to_string())
        );
    }

    #[test]
    fn test_laid_out_geometry() {
        let mut doc = Document::default();
        let button = doc.create_element("button");
        doc.append_child(doc.body(), button).unwrap();
        doc.set_geometry(
            button,
            ElementGeometry::from_rect(DOMRect::from_xywh(10.0, 20.0, 90.0, 30.0)).with_client_width(86.0),
        )
        .unwrap();

        assert_eq!(doc.bounding_client_rect(button).bottom(), 50.0);
        assert_eq!(doc.client_width(button), 86.0);
        assert_eq!(doc.client_height(button), 30.0);
    }

    #[test]
    fn test_measured_geometry_needs_connection() {
        let mut doc = Document::default();
        let p = doc.create_element("p");
        let text = doc.create_text("hello");
        doc.append_child(p, text).unwrap();

        assert_eq!(doc.client_width(p), 0.0);

        doc.append_child(doc.body(), p).unwrap();
        assert_eq!(doc.client_width(p), 51.0);
        assert_eq!(doc.client_height(p), 24.0);

        doc.set_style(p, "max-width", "40px").unwrap();
        assert_eq!(doc.client_width(p), 40.0);
    }

    #[test]
    fn test_offset_rect_follows_inline_position() {
        let mut doc = Document::default();
        let p = doc.create_element("p");
        let text = doc.create_text("hi");
        doc.append_child(p, text).unwrap();
        doc.append_child(doc.body(), p).unwrap();
        doc.set_style(p, "top", "12px").unwrap();
        doc.set_style(p, "left", "-4px").unwrap();

        assert_eq!(doc.offset_rect(p), DOMRect::from_xywh(-4.0, 12.0, 30.0, 24.0));
    }

    #[test]
    fn test_attribute_mutations() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        doc.append_child(doc.body(), div).unwrap();
        doc.take_mutations();

        doc.set_attribute(div, "tooltip", "Hi").unwrap();
        doc.add_class(div, "ease-tooltip").unwrap();
        doc.add_class(div, "ease-tooltip").unwrap();

        let mutations = doc.take_mutations();
        assert_eq!(mutations.len(), 2);
        assert!(mutations.iter().all(|m| m.event_type == DomEventType::AttrModified));
        assert_eq!(mutations[1].new_value.as_deref(), Some("ease-tooltip"));
    }

    #[test]
    fn test_elements_with_attribute() {
        let mut doc = Document::default();
        let a = doc.create_element("button");
        let b = doc.create_element("button");
        let c = doc.create_element("button");
        doc.append_child(doc.body(), a).unwrap();
        doc.append_child(doc.body(), b).unwrap();
        doc.set_attribute(a, "tooltip", "A").unwrap();
        doc.set_attribute(c, "tooltip", "C").unwrap();

        assert_eq!(doc.elements_with_attribute("tooltip"), vec![a]);
        assert_eq!(doc.attributes(a), vec![("tooltip".to_string(), "A".to_string())]);
    }

    #[test]
    fn test_element_errors() {
        let mut doc = Document::default();
        let text = doc.create_text("x");

        assert_eq!(doc.set_style(text, "top", "1px"), Err(DomError::NotAnElement(text)));
        assert_eq!(doc.set_attribute(NodeId(500), "a", "b"), Err(DomError::NotFound(NodeId(500))));
    }
}
