//! Tooltip layer
//!
//! Owns one [`Tooltip`] per annotated anchor and routes pointer events to it.

use std::collections::BTreeMap;

use ease_dom::{Document, NodeId, PointerEvent};
use ease_placement::{PlacementResult, TooltipConfig, ATTR_CONTENT, ATTR_CONTENT_LONG};

use crate::directive::Tooltip;
use crate::error::TooltipResult;

/// Every tooltip bound in a document
#[derive(Debug, Default)]
pub struct TooltipLayer {
    tooltips: BTreeMap<NodeId, Tooltip>,
}

impl TooltipLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a tooltip to `anchor`, replacing any previous binding
    pub fn bind(&mut self, anchor: NodeId, config: TooltipConfig) -> Option<Tooltip> {
        self.tooltips.insert(anchor, Tooltip::new(anchor, config))
    }

    /// Bind every connected element carrying a tooltip attribute.
    /// Existing bindings are kept and anchors with malformed attributes are
    /// skipped with a warning. Returns how many were added.
    pub fn bind_all(&mut self, doc: &Document) -> usize {
        let mut added = 0;
        for attr in [ATTR_CONTENT, ATTR_CONTENT_LONG] {
            for anchor in doc.elements_with_attribute(attr) {
                if self.tooltips.contains_key(&anchor) {
                    continue;
                }
                match Tooltip::from_element(doc, anchor) {
                    Ok(tooltip) => {
                        self.tooltips.insert(anchor, tooltip);
                        added += 1;
                    }
                    Err(err) => tracing::warn!(%anchor, %err, "skipping tooltip anchor"),
                }
            }
        }
        tracing::debug!(added, total = self.tooltips.len(), "bound tooltip anchors");
        added
    }

    /// Remove the binding, hiding its tooltip first
    pub fn unbind(&mut self, doc: &mut Document, anchor: NodeId) -> TooltipResult<bool> {
        match self.tooltips.remove(&anchor) {
            Some(mut tooltip) => {
                tooltip.on_pointer_leave(doc)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Deliver a pointer event to the tooltip bound on its target
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        event: &PointerEvent,
    ) -> TooltipResult<Option<PlacementResult>> {
        match self.tooltips.get_mut(&event.target) {
            Some(tooltip) => tooltip.handle(doc, event),
            None => Ok(None),
        }
    }

    /// Hide every visible tooltip
    pub fn hide_all(&mut self, doc: &mut Document) -> TooltipResult<()> {
        for tooltip in self.tooltips.values_mut() {
            tooltip.on_pointer_leave(doc)?;
        }
        Ok(())
    }

    pub fn get(&self, anchor: NodeId) -> Option<&Tooltip> {
        self.tooltips.get(&anchor)
    }

    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    /// Anchors with a visible tooltip
    pub fn showing(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tooltips
            .values()
            .filter(|t| t.is_showing())
            .map(Tooltip::anchor)
    }
}
