//! Tooltip behavior bound to one anchor
//!
//! Pointer-enter creates, measures and places the floating element;
//! pointer-leave removes it. At most one floating element exists per anchor.

use ease_dom::{px, Document, NodeId, PointerEvent, PointerEventType};
use ease_placement::{
    build_animation_value, place, resolve_ancestor_correction, FloatingGeometry, PlacementResult,
    TooltipConfig,
};
use tracing::{debug, trace};

use crate::error::{TooltipError, TooltipResult};
use crate::host::{anchor_geometry, viewport, DomSurface};
use crate::render::{create_floating, render_content, ELLIPSIS_CLASS};

/// Tooltip attached to an anchor element
#[derive(Debug, Clone)]
pub struct Tooltip {
    anchor: NodeId,
    config: TooltipConfig,
    floating: Option<NodeId>,
}

impl Tooltip {
    pub fn new(anchor: NodeId, config: TooltipConfig) -> Self {
        Self {
            anchor,
            config,
            floating: None,
        }
    }

    /// Bind to `anchor`, reading the configuration from its attributes
    pub fn from_element(doc: &Document, anchor: NodeId) -> TooltipResult<Self> {
        doc.element(anchor)?;
        let attrs = doc.attributes(anchor);
        let config =
            TooltipConfig::from_attributes(attrs.iter().map(|(n, v)| (n.as_str(), v.as_str())))?;
        Ok(Self::new(anchor, config))
    }

    pub fn anchor(&self) -> NodeId {
        self.anchor
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Floating element currently shown
    pub fn floating(&self) -> Option<NodeId> {
        self.floating
    }

    pub fn is_showing(&self) -> bool {
        self.floating.is_some()
    }

    /// Route a pointer event; returns the placement when one was made
    pub fn handle(
        &mut self,
        doc: &mut Document,
        event: &PointerEvent,
    ) -> TooltipResult<Option<PlacementResult>> {
        match event.event_type {
            PointerEventType::PointerEnter => self.on_pointer_enter(doc),
            PointerEventType::PointerLeave => {
                self.on_pointer_leave(doc)?;
                Ok(None)
            }
        }
    }

    /// Show the tooltip. Returns `None` when there is nothing to show.
    pub fn on_pointer_enter(&mut self, doc: &mut Document) -> TooltipResult<Option<PlacementResult>> {
        // a stray double enter must not leave two floating elements behind
        self.on_pointer_leave(doc)?;

        if self.config.is_inert() {
            trace!(anchor = %self.anchor, disabled = self.config.disabled, "nothing to show");
            return Ok(None);
        }
        if !doc.is_connected(self.anchor) {
            return Err(TooltipError::DetachedAnchor(self.anchor));
        }

        let anchor = anchor_geometry(doc, self.anchor);

        let floating = create_floating(doc)?;
        render_content(doc, floating, self.anchor, &self.config.content)?;
        self.floating = Some(floating);

        let measured = FloatingGeometry::new(doc.client_width(floating), doc.client_height(floating));
        let correction = resolve_ancestor_correction(&DomSurface(doc), self.anchor);
        let placement = place(
            &anchor,
            measured,
            correction,
            self.config.position,
            self.config.offset_space_px,
            viewport(doc),
        );

        doc.set_style(floating, "top", &px(placement.top))?;
        doc.set_style(floating, "left", &px(placement.left))?;
        if placement.truncated {
            doc.set_style(floating, "max-width", &px(anchor.client_width))?;
            doc.add_class(floating, ELLIPSIS_CLASS)?;
        }
        let animation = build_animation_value(
            &self.config.animation_names,
            &self.config.animation_duration_ms,
            &self.config.animation_timing_function,
        );
        doc.set_style(floating, "animation", &animation)?;

        debug!(
            anchor = %self.anchor,
            floating = %floating,
            width = measured.width,
            height = measured.height,
            top = placement.top,
            left = placement.left,
            truncated = placement.truncated,
            "tooltip shown"
        );
        Ok(Some(placement))
    }

    /// Hide the tooltip. No-op when nothing is shown.
    pub fn on_pointer_leave(&mut self, doc: &mut Document) -> TooltipResult<()> {
        if let Some(floating) = self.floating.take() {
            doc.remove(floating)?;
            debug!(anchor = %self.anchor, floating = %floating, "tooltip removed");
        }
        Ok(())
    }
}
