//! Style output projection.
//!
//! Filters an effective style down to the record a design node carries:
//! values equal to what a viewer would assume anyway are dropped rather
//! than rewritten. No computation happens here beyond pixel conversion of
//! `gap` and float parsing of `opacity`.

use maquette_css::{EffectiveStyle, parse_border, parse_pixel_value};

use crate::boxmodel::resolve_spacing;
use crate::node::StyleOutput;

/// Project an effective style onto the output record.
///
/// Omit rules: `transparent` background, `inherit` color and font family,
/// `normal` weight, `left` alignment, all-zero spacing quads, zero-width
/// borders (unless a radius forces an otherwise-empty border object),
/// `block` display, and opacity exactly 1.
#[must_use]
pub fn build_style_output(style: &EffectiveStyle) -> StyleOutput {
    let mut out = StyleOutput::default();

    let background = style.get("background").or_else(|| style.get("backgroundColor"));
    if let Some(bg) = background {
        if !bg.eq_ignore_ascii_case("transparent") {
            out.background = Some(bg.to_string());
        }
    }

    out.color = non_default(style, "color", "inherit");
    out.font_size = style.get("fontSize").map(str::to_string);
    out.font_family = non_default(style, "fontFamily", "inherit");
    out.font_weight = non_default(style, "fontWeight", "normal");
    out.text_align = non_default(style, "textAlign", "left");

    let padding = resolve_spacing(style, "padding");
    if !padding.is_zero() {
        out.padding = Some(padding);
    }
    let margin = resolve_spacing(style, "margin");
    if !margin.is_zero() {
        out.margin = Some(margin);
    }

    let mut border = style.get("border").map(parse_border);
    if let Some(radius) = style.get("borderRadius") {
        let spec = border.get_or_insert_with(maquette_css::BorderSpec::default);
        spec.radius = Some(parse_pixel_value(radius));
    }
    out.border = border.filter(|b| b.width > 0.0 || b.radius.is_some());

    out.display = non_default(style, "display", "block");
    out.flex_direction = style.get("flexDirection").map(str::to_string);
    out.justify_content = style.get("justifyContent").map(str::to_string);
    out.align_items = style.get("alignItems").map(str::to_string);
    out.gap = style.get("gap").map(parse_pixel_value);

    if let Some(opacity) = style.get("opacity") {
        if opacity.trim() != "1" {
            if let Ok(value) = opacity.trim().parse::<f64>() {
                out.opacity = Some(value);
            }
        }
    }

    out
}

fn non_default(style: &EffectiveStyle, property: &str, default: &str) -> Option<String> {
    style
        .get(property)
        .filter(|v| !v.eq_ignore_ascii_case(default))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_from(pairs: &[(&str, &str)]) -> EffectiveStyle {
        let mut style = EffectiveStyle::new();
        for (name, value) in pairs {
            style.set(name, value);
        }
        style
    }

    #[test]
    fn transparent_background_is_omitted() {
        let out = build_style_output(&style_from(&[("background", "transparent")]));
        assert!(out.background.is_none());
    }

    #[test]
    fn background_color_is_the_fallback_source() {
        let out = build_style_output(&style_from(&[("backgroundColor", "#fafafa")]));
        assert_eq!(out.background.as_deref(), Some("#fafafa"));
    }

    #[test]
    fn inherit_and_normal_defaults_are_omitted() {
        let out = build_style_output(&style_from(&[
            ("color", "inherit"),
            ("fontFamily", "inherit"),
            ("fontWeight", "normal"),
            ("textAlign", "left"),
            ("display", "block"),
        ]));
        assert!(out.color.is_none());
        assert!(out.font_family.is_none());
        assert!(out.font_weight.is_none());
        assert!(out.text_align.is_none());
        assert!(out.display.is_none());
    }

    #[test]
    fn zero_width_border_with_radius_still_emits_border() {
        let out = build_style_output(&style_from(&[("borderRadius", "8px")]));
        let border = out.border.expect("radius should force a border object");
        assert_eq!(border.width, 0.0);
        assert_eq!(border.radius, Some(8.0));
    }

    #[test]
    fn zero_width_border_without_radius_is_omitted() {
        let out = build_style_output(&style_from(&[("border", "none")]));
        assert!(out.border.is_none());
    }

    #[test]
    fn opacity_one_is_omitted() {
        assert!(build_style_output(&style_from(&[("opacity", "1")])).opacity.is_none());
        assert_eq!(
            build_style_output(&style_from(&[("opacity", "0.5")])).opacity,
            Some(0.5)
        );
    }

    #[test]
    fn gap_is_converted_to_pixels() {
        let out = build_style_output(&style_from(&[("gap", "1em")]));
        assert_eq!(out.gap, Some(16.0));
    }

    #[test]
    fn zero_spacing_is_omitted() {
        let out = build_style_output(&style_from(&[("margin", "0"), ("padding", "0")]));
        assert!(out.margin.is_none());
        assert!(out.padding.is_none());
    }
}
