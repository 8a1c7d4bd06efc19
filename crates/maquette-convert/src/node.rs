//! The design-tree data model.
//!
//! A design tree is the JSON-serializable output of a conversion pass: one
//! [`DesignNode`] per visually relevant element, carrying absolute geometry
//! and a filtered style record. Everything here is created fresh per
//! conversion call and never shared across calls.

use maquette_css::{BorderSpec, SpacingQuad};
use serde::Serialize;
use strum_macros::Display;

/// The viewport a document is converted against.
///
/// Immutable input; the root frame and percentage-free block widths resolve
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// An absolutely positioned box, rounded to integer pixels.
///
/// Coordinates are in the ROOT viewport's space, not relative to the
/// parent. A node's box is not guaranteed to contain all of its children's
/// boxes exactly; height estimation is heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Outer width.
    pub w: i32,
    /// Outer height.
    pub h: i32,
}

impl LayoutBox {
    /// Round floating-point geometry to the nearest integer pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            w: w.round() as i32,
            h: h.round() as i32,
        }
    }
}

/// Node classification, decided purely from the tag name.
///
/// Computed style never influences the kind: a `<p style="display:flex">`
/// is still a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// Generic container (`div`, `section`, `body`, ...).
    Frame,
    /// Text-bearing element (`p`, `span`, `h1`..`h6`, `a`, `label`, `li`).
    Text,
    /// Raster image (`img`, `picture`).
    Image,
    /// Inline SVG root.
    Svg,
}

/// The filtered style record attached to a design node.
///
/// A projection of the effective style, not a new computation: every field
/// is either passed through or omitted when it equals the default a viewer
/// would assume anyway (`transparent` background, `inherit` color, `normal`
/// weight, `left` alignment, `block` display, opacity 1, all-zero spacing).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOutput {
    /// Background color. Omitted when transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Foreground color. Omitted when `inherit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Font size, passed through verbatim (e.g. `"32px"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Font family. Omitted when `inherit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font weight. Omitted when `normal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Text alignment. Omitted when `left`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Padding quad. Omitted when every side is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingQuad>,
    /// Margin quad. Omitted when every side is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingQuad>,
    /// Border record. Present when the width is positive, or when a
    /// `border-radius` was declared even with zero width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSpec>,
    /// Display mode. Omitted when `block`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// `flex-direction`, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    /// `justify-content`, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    /// `align-items`, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    /// `gap`, converted to pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// Opacity. Omitted when absent or exactly 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// One entry in the output tree: a visual element with geometry and style.
///
/// The tree assembler exclusively owns node construction; a node's
/// `children` vector is owned by the node and never aliased.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignNode {
    /// Node classification.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The source tag name.
    pub name: String,
    /// Absolute geometry, rounded.
    pub layout: LayoutBox,
    /// Filtered style record.
    pub style: StyleOutput,
    /// Direct (non-descendant) text content, trimmed. Text nodes only;
    /// omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image source URL. Image nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// The source element's `id` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The source element's class list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    /// Child nodes in document order. Attached only when at least one
    /// child produced a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DesignNode>>,
}

impl DesignNode {
    /// Construct a node with empty metadata; the assembler fills the rest.
    #[must_use]
    pub fn new(kind: NodeKind, name: &str, layout: LayoutBox, style: StyleOutput) -> Self {
        Self {
            kind,
            name: name.to_string(),
            layout,
            style,
            text: None,
            src: None,
            id: None,
            classes: None,
            children: None,
        }
    }
}
