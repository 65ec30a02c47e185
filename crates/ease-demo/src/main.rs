//! Ease Demo - Main Entry Point
//!
//! Usage: `ease-demo [viewport-width] [viewport-height]`

use anyhow::{Context, Result};
use ease_dom::{DOMRect, Document, NodeId, PointerEvent};
use ease_tooltip::{TooltipLayer, TOOLTIP_CLASS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let width = parse_arg(args.next(), 1024.0).context("invalid viewport width")?;
    let height = parse_arg(args.next(), 768.0).context("invalid viewport height")?;

    let (mut doc, anchors) = sample_page(width, height)?;
    let mut layer = TooltipLayer::new();
    let bound = layer.bind_all(&doc);
    tracing::info!(bound, width, height, "sample page ready");

    for &(name, anchor) in &anchors {
        match layer.dispatch(&mut doc, &PointerEvent::enter(anchor))? {
            Some(placement) => {
                let floating = layer
                    .get(anchor)
                    .and_then(|t| t.floating())
                    .context("tooltip shown without a floating element")?;
                tracing::info!(
                    anchor = name,
                    top = placement.top,
                    left = placement.left,
                    truncated = placement.truncated,
                    style = %doc.get_attribute(floating, "style").unwrap_or_default(),
                    "hovered"
                );
            }
            None => tracing::info!(anchor = name, "hovered, nothing to show"),
        }
        layer.dispatch(&mut doc, &PointerEvent::leave(anchor))?;
    }

    // hover everything without leaving, then dismiss in one go
    for &(_, anchor) in &anchors {
        layer.dispatch(&mut doc, &PointerEvent::enter(anchor))?;
    }
    tracing::info!(showing = layer.showing().count(), "all hovered");
    layer.hide_all(&mut doc)?;

    let leftovers = doc
        .tree()
        .descendants(doc.root())
        .into_iter()
        .filter(|&n| doc.has_class(n, TOOLTIP_CLASS))
        .count();
    tracing::info!(leftovers, "done");
    Ok(())
}

fn parse_arg(arg: Option<String>, default: f64) -> Result<f64> {
    match arg {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

/// A toolbar, a button hugging the right edge and a centered, transformed
/// modal dialog with its own buttons.
fn sample_page(width: f64, height: f64) -> Result<(Document, Vec<(&'static str, NodeId)>)> {
    let mut doc = Document::new(width, height);
    let body = doc.body();
    let mut anchors = Vec::new();

    let toolbar = doc.create_element("nav");
    doc.append_child(body, toolbar)?;
    doc.set_layout(toolbar, DOMRect::from_xywh(0.0, 0.0, width, 40.0))?;

    let buttons = [
        ("save", 8.0, "Save", &[][..]),
        ("help", 96.0, r"Keyboard shortcuts\nPress ? anywhere", &[("tooltip-position", "top")][..]),
        ("account", width - 48.0, "Signed in as administrator", &[][..]),
        ("locked", 184.0, "Locked", &[("tooltip-disabled", "true")][..]),
    ];
    for (name, left, content, extra) in buttons {
        let button = doc.create_element("button");
        doc.append_child(toolbar, button)?;
        doc.set_layout(button, DOMRect::from_xywh(left, 5.0, 80.0, 30.0))?;
        doc.set_attribute(button, "tooltip", content)?;
        for (attr, value) in extra {
            doc.set_attribute(button, attr, value)?;
        }
        anchors.push((name, button));
    }

    let modal = doc.create_element("div");
    let dialog = doc.create_element("div");
    doc.append_child(body, modal)?;
    doc.append_child(modal, dialog)?;
    let (modal_w, modal_h) = (480.0, 240.0);
    let (modal_x, modal_y) = ((width - modal_w) / 2.0, (height - modal_h) / 2.0);
    doc.set_layout(modal, DOMRect::from_xywh(modal_x, modal_y, modal_w, modal_h))?;
    doc.set_attribute(
        modal,
        "style",
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%)",
    )?;

    let confirm = doc.create_element("button");
    doc.append_child(dialog, confirm)?;
    doc.set_layout(
        confirm,
        DOMRect::from_xywh(modal_x + modal_w - 120.0, modal_y + modal_h - 50.0, 100.0, 32.0),
    )?;
    doc.set_attribute(confirm, "tooltip", "Apply and close")?;
    doc.set_attribute(confirm, "tooltip-position", "top")?;
    anchors.push(("modal-confirm", confirm));

    Ok((doc, anchors))
}
