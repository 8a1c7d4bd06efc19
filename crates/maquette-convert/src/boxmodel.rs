//! Simplified CSS box model.
//!
//! [CSS 2 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)
//!
//! No constraint solver: width resolves by a fixed priority ladder, height
//! is either explicit or estimated from text length, and position is
//! accumulated by the caller in global coordinates. Internal computation is
//! floating point; only the published [`LayoutBox`] is rounded.

use maquette_css::{EffectiveStyle, SpacingQuad, parse_border, parse_pixel_value, parse_spacing};

use crate::node::LayoutBox;

/// Intrinsic width stand-in for inline elements with no declared width.
/// No text measurement is performed; this constant is the whole estimate.
const INLINE_FALLBACK_WIDTH_PX: f64 = 100.0;

/// Line-height fallback multiplier for the document conversion pass.
///
/// The flex repositioner uses a DIFFERENT multiplier (1.2) with its own
/// fallback constant; the two call sites are intentionally distinct and
/// must not be unified.
const LINE_HEIGHT_FACTOR: f64 = 1.4;

/// What an element contains, as far as height estimation cares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSignal<'a> {
    /// Direct (non-descendant) text content, trimmed.
    pub text: &'a str,
    /// Number of child elements.
    pub child_count: usize,
}

/// A computed box: the rounded outer rectangle plus the floating-point
/// content-box figures children and the style builder consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedBox {
    /// Outer box in global coordinates, rounded.
    pub outer: LayoutBox,
    /// Unrounded left edge of the outer box.
    pub outer_x: f64,
    /// Unrounded top edge of the outer box.
    pub outer_y: f64,
    /// Content width: outer width minus horizontal padding and borders.
    pub content_width: f64,
}

/// [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
///
/// Compute an element's outer box.
///
/// Width priority: explicit pixel value, then percentage of
/// `parent_content_width`, then for block elements the parent content width
/// minus horizontal margins, then for inline elements a fixed 100px
/// fallback. Height is explicit or estimated from content (§ 10.6 analog,
/// heavily simplified).
///
/// `offset_x`/`offset_y` are the caller-accumulated global coordinates;
/// margins push the box inward from them.
#[must_use]
pub fn compute_box(
    style: &EffectiveStyle,
    content: ContentSignal<'_>,
    parent_content_width: f64,
    offset_x: f64,
    offset_y: f64,
) -> ComputedBox {
    let margin = resolve_spacing(style, "margin");
    let padding = resolve_spacing(style, "padding");
    let border_width = resolve_border_width(style);

    let width = resolve_width(style, &margin, parent_content_width);
    let content_width = (width - padding.horizontal() - 2.0 * border_width).max(0.0);

    let height = match style.get("height") {
        Some(value) if !value.eq_ignore_ascii_case("auto") => {
            let h = parse_pixel_value(value);
            if h > 0.0 {
                h
            } else {
                estimate_height(style, content, content_width)
            }
        }
        _ => estimate_height(style, content, content_width),
    };

    let x = offset_x + margin.left;
    let y = offset_y + margin.top;

    ComputedBox {
        outer: LayoutBox::from_f64(x, y, width, height),
        outer_x: x,
        outer_y: y,
        content_width,
    }
}

/// [§ 10.6 Calculating heights](https://www.w3.org/TR/CSS2/visudet.html#Computing_heights_and_margins)
///
/// Estimate an element's height when none is declared.
///
/// Line height is the explicit `line-height` in pixels, else
/// `fontSize × 1.4`. With direct text, the line count comes from a crude
/// average-glyph-width model (`fontSize × 0.5` per character); with child
/// elements only, one line per child; otherwise a single line. Vertical
/// padding is added on top.
#[must_use]
pub fn estimate_height(
    style: &EffectiveStyle,
    content: ContentSignal<'_>,
    content_width: f64,
) -> f64 {
    let font_size = resolved_font_size(style);
    let line_height = match style.get("lineHeight").map(parse_pixel_value) {
        Some(lh) if lh > 0.0 => lh,
        _ => font_size * LINE_HEIGHT_FACTOR,
    };

    let content_height = if !content.text.is_empty() {
        let chars_per_line = (content_width / (font_size * 0.5)).floor().max(1.0);
        #[allow(clippy::cast_precision_loss)]
        let lines = (content.text.chars().count() as f64 / chars_per_line)
            .ceil()
            .max(1.0);
        lines * line_height
    } else if content.child_count > 0 {
        #[allow(clippy::cast_precision_loss)]
        let rows = content.child_count as f64;
        (rows * line_height).max(line_height)
    } else {
        line_height
    };

    let padding = resolve_spacing(style, "padding");
    content_height + padding.vertical()
}

/// Resolve a spacing shorthand plus its per-side longhands.
///
/// The shorthand quad is parsed first and individual `-top`/`-right`/
/// `-bottom`/`-left` declarations overlay it.
#[must_use]
pub fn resolve_spacing(style: &EffectiveStyle, property: &str) -> SpacingQuad {
    let mut quad = style
        .get(property)
        .map(parse_spacing)
        .unwrap_or_default();

    let longhand = |suffix: &str| style.get(&format!("{property}{suffix}")).map(parse_pixel_value);
    if let Some(v) = longhand("Top") {
        quad.top = v;
    }
    if let Some(v) = longhand("Right") {
        quad.right = v;
    }
    if let Some(v) = longhand("Bottom") {
        quad.bottom = v;
    }
    if let Some(v) = longhand("Left") {
        quad.left = v;
    }

    quad
}

fn resolve_width(style: &EffectiveStyle, margin: &SpacingQuad, parent_content_width: f64) -> f64 {
    if let Some(value) = style.get("width") {
        if !value.eq_ignore_ascii_case("auto") {
            if let Some(pct) = value.strip_suffix('%') {
                let ratio = pct.trim().parse::<f64>().unwrap_or(0.0) / 100.0;
                return (parent_content_width * ratio).max(0.0);
            }
            let w = parse_pixel_value(value);
            if w > 0.0 {
                return w;
            }
        }
    }

    if style.get_or("display", "block").starts_with("inline") {
        INLINE_FALLBACK_WIDTH_PX
    } else {
        (parent_content_width - margin.horizontal()).max(0.0)
    }
}

fn resolve_border_width(style: &EffectiveStyle) -> f64 {
    if let Some(value) = style.get("borderWidth") {
        return parse_pixel_value(value);
    }
    style
        .get("border")
        .map(|v| parse_border(v).width)
        .unwrap_or(0.0)
}

/// Font size in pixels, with the 16px root default when absent or
/// unparseable.
#[must_use]
pub fn resolved_font_size(style: &EffectiveStyle) -> f64 {
    let size = style.get("fontSize").map(parse_pixel_value).unwrap_or(0.0);
    if size > 0.0 { size } else { 16.0 }
}
