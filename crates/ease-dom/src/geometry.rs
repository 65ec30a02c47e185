//! Geometry APIs
//!
//! DOMRect and the client box of an element.

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }
}

/// Layout box assigned to an element by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    /// Viewport-relative border box
    pub rect: DOMRect,
    /// Client properties (content + padding, no border or scrollbar)
    pub client_width: f64,
    pub client_height: f64,
}

impl ElementGeometry {
    /// Client box equal to the border box
    pub fn from_rect(rect: DOMRect) -> Self {
        Self {
            rect,
            client_width: rect.width,
            client_height: rect.height,
        }
    }

    /// Override the client width (e.g. borders or a scrollbar)
    pub fn with_client_width(mut self, client_width: f64) -> Self {
        self.client_width = client_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_rect() {
        let rect = DOMRect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn test_element_geometry_client_box() {
        let geometry = ElementGeometry::from_rect(DOMRect::from_xywh(0.0, 0.0, 80.0, 30.0));
        assert_eq!(geometry.client_width, 80.0);
        assert_eq!(geometry.client_height, 30.0);

        let geometry = geometry.with_client_width(76.0);
        assert_eq!(geometry.client_width, 76.0);
    }
}
