//! Content rendering
//!
//! Fills the floating element and inserts it right after the anchor.

use ease_dom::{Document, DomResult, NodeId};
use ease_placement::split_lines;

/// Marker class on every floating element
pub const TOOLTIP_CLASS: &str = "ease-tooltip";
/// Added when the floating element is capped to the anchor's width
pub const ELLIPSIS_CLASS: &str = "ease-tooltip-ellipsis";
/// Tag of the floating element
pub const FLOATING_TAG: &str = "p";

/// Create a detached floating element with its marker class
pub fn create_floating(doc: &mut Document) -> DomResult<NodeId> {
    let floating = doc.create_element(FLOATING_TAG);
    doc.add_class(floating, TOOLTIP_CLASS)?;
    Ok(floating)
}

/// Populate `floating` with `text` and insert it after `anchor`.
///
/// Single-line text becomes one text node. Multi-line text becomes one text
/// node per line, each followed by a `<br>`.
pub fn render_content(doc: &mut Document, floating: NodeId, anchor: NodeId, text: &str) -> DomResult<()> {
    let lines = split_lines(text);

    if let [line] = lines.as_slice() {
        let node = doc.create_text(line);
        doc.append_child(floating, node)?;
    } else {
        for line in lines {
            let node = doc.create_text(line);
            doc.append_child(floating, node)?;
            let br = doc.create_element("br");
            doc.append_child(floating, br)?;
        }
    }

    doc.insert_after(anchor, floating)?;
    Ok(())
}
