//! Tree assembly.
//!
//! A single-pass, depth-first, synchronous walk over the DOM snapshot:
//! filter non-visual elements, resolve each element's style, compute its
//! box, and emit nested design nodes. Sibling blocks stack vertically via a
//! running offset cursor; there is no inline wrapping, margin collapsing or
//! float handling.
//!
//! The walk assumes the arena is a tree. A caller supplying a graph with
//! back-edges gets non-termination; cycle protection is out of contract.

use maquette_css::{EffectiveStyle, Stylesheet, extract_style_rules, resolve_style};
use maquette_dom::{DomTree, NodeId};

use crate::boxmodel::{ContentSignal, compute_box};
use crate::node::{DesignNode, LayoutBox, NodeKind, StyleOutput, Viewport};
use crate::output::build_style_output;

/// Tags that never produce a node, regardless of style.
const NON_VISUAL_TAGS: &[&str] = &["script", "style", "noscript", "meta", "link", "head"];

/// Tags classified as text nodes.
const TEXT_TAGS: &[&str] = &[
    "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "a", "label", "li",
];

/// Classify a tag name into a node kind. Tag name only; computed style
/// never participates.
#[must_use]
pub fn classify(tag: &str) -> NodeKind {
    let tag = tag.to_ascii_lowercase();
    if TEXT_TAGS.contains(&tag.as_str()) {
        NodeKind::Text
    } else if tag == "img" || tag == "picture" {
        NodeKind::Image
    } else if tag == "svg" {
        NodeKind::Svg
    } else {
        NodeKind::Frame
    }
}

/// Convert a whole DOM snapshot into a design tree.
///
/// The root is the document's `<body>`; when no body exists (or it produces
/// no node), the result is a viewport-sized white frame, the well-defined
/// "empty tree" output rather than an error.
#[must_use]
pub fn convert_dom(tree: &DomTree, viewport: Viewport) -> DesignNode {
    let stylesheet = extract_style_rules(tree);

    tree.find_body()
        .and_then(|body| build_node(tree, body, &stylesheet, viewport.width, 0.0, 0.0))
        .unwrap_or_else(|| empty_frame(viewport))
}

/// Build the design node for one element, recursing into its children.
///
/// Returns `None` for non-visual tags and for elements resolved to
/// `display: none` or `visibility: hidden`; the whole subtree is dropped
/// and the caller's vertical cursor does not advance.
///
/// `offset_x`/`offset_y` are global coordinates accumulated by the caller.
#[must_use]
pub fn build_node(
    tree: &DomTree,
    node_id: NodeId,
    stylesheet: &Stylesheet,
    parent_content_width: f64,
    offset_x: f64,
    offset_y: f64,
) -> Option<DesignNode> {
    let element = tree.as_element(node_id)?;
    let tag = element.tag_name.to_ascii_lowercase();
    if NON_VISUAL_TAGS.contains(&tag.as_str()) {
        return None;
    }

    let style = resolve_style(tree, node_id, stylesheet);
    if is_hidden(&style) {
        return None;
    }

    let text = tree.direct_text(node_id);
    let child_elements = tree.child_elements(node_id);
    let content = ContentSignal {
        text: &text,
        child_count: child_elements.len(),
    };
    let computed = compute_box(&style, content, parent_content_width, offset_x, offset_y);

    let kind = classify(&tag);
    let mut node = DesignNode::new(kind, &tag, computed.outer, build_style_output(&style));

    if kind == NodeKind::Text && !text.is_empty() {
        node.text = Some(text);
    }
    if kind == NodeKind::Image {
        node.src = element.attr("src").map(str::to_string);
    }
    node.id = element.id().cloned();
    let classes = element.class_list();
    if !classes.is_empty() {
        node.classes = Some(classes.into_iter().map(str::to_string).collect());
    }

    // Block-flow accumulation: the cursor starts at this node's own top
    // edge and advances past each child that produced a node. Hidden
    // children are skipped without consuming flow space.
    let mut cursor_y = computed.outer_y;
    let mut children = Vec::new();
    for child_id in child_elements {
        if let Some(child) = build_node(
            tree,
            child_id,
            stylesheet,
            computed.content_width,
            computed.outer_x,
            cursor_y,
        ) {
            cursor_y = f64::from(child.layout.y + child.layout.h);
            children.push(child);
        }
    }
    if !children.is_empty() {
        node.children = Some(children);
    }

    Some(node)
}

fn is_hidden(style: &EffectiveStyle) -> bool {
    style.get("display").is_some_and(|d| d.eq_ignore_ascii_case("none"))
        || style
            .get("visibility")
            .is_some_and(|v| v.eq_ignore_ascii_case("hidden"))
}

/// The minimal output for a document with no visible content: a white frame
/// covering the viewport.
#[must_use]
pub fn empty_frame(viewport: Viewport) -> DesignNode {
    let layout = LayoutBox::from_f64(0.0, 0.0, viewport.width, viewport.height);
    let style = StyleOutput {
        background: Some("#ffffff".to_string()),
        ..StyleOutput::default()
    };
    DesignNode::new(NodeKind::Frame, "body", layout, style)
}
