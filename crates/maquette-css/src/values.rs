//! CSS textual value parsing.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Converts raw value strings (`"12px"`, `"1.5em"`, `"10% 5px"`, border
//! shorthands) into pixel numbers and structured records. The error policy
//! is total degradation: no input ever raises an error, unparseable values
//! fall back to the documented defaults.
//!
//! # Known Simplifications (part of the contract)
//!
//! - `em`/`rem` resolve against a FIXED 16 px root size, never the element's
//!   own font size.
//! - Percentages resolve to 0 here; only the box model resolves `%` widths,
//!   against the parent content width.
//! - Border shorthands with multi-word colors (`rgb(…)` survives because it
//!   serializes without spaces, but e.g. named colors with spaces do not).

use serde::Serialize;

/// Fixed root font size used to resolve `em`/`rem`.
///
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
/// "Initial: medium" — medium is 16px per common browser convention. The
/// converter never tracks per-element font sizes for unit resolution.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// Per-side spacing in pixels, produced from 1–4 space-separated shorthand
/// values. Negative declared values pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SpacingQuad {
    /// Top side, px.
    pub top: f64,
    /// Right side, px.
    pub right: f64,
    /// Bottom side, px.
    pub bottom: f64,
    /// Left side, px.
    pub left: f64,
}

impl SpacingQuad {
    /// A quad with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// True when every side is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Sum of left and right sides.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom sides.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// [CSS Backgrounds and Borders Level 3 § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// Border record from the `border` shorthand plus an optional
/// `border-radius`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderSpec {
    /// Border width, px. Defaults to 0.
    pub width: f64,
    /// Border style keyword. Defaults to `"none"`.
    pub style: String,
    /// Border color string. Defaults to `"transparent"`.
    pub color: String,
    /// Corner radius, px, attached from `border-radius` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: "none".to_string(),
            color: "transparent".to_string(),
            radius: None,
        }
    }
}

/// [§ 4.2 border-style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "Each of these keywords denotes a specific border style."
const BORDER_STYLE_KEYWORDS: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Convert a CSS length string to pixels.
///
/// - `"Npx"` → N
/// - `"Nem"` / `"Nrem"` → N × 16 (fixed root size, not configurable)
/// - `"N%"` → 0 (percentages are resolved later, by the box model, or not
///   at all — a known simplification)
/// - bare numeric → the number
/// - anything else, or empty input → 0
#[must_use]
pub fn parse_pixel_value(value: &str) -> f64 {
    let v = value.trim();
    if v.is_empty() {
        return 0.0;
    }
    if let Some(n) = v.strip_suffix("px") {
        return n.trim().parse().unwrap_or(0.0);
    }
    // rem before em: "1rem" also ends in "em".
    if let Some(n) = v.strip_suffix("rem") {
        return n.trim().parse::<f64>().map_or(0.0, |x| x * ROOT_FONT_SIZE_PX);
    }
    if let Some(n) = v.strip_suffix("em") {
        return n.trim().parse::<f64>().map_or(0.0, |x| x * ROOT_FONT_SIZE_PX);
    }
    if v.ends_with('%') {
        return 0.0;
    }
    v.parse().unwrap_or(0.0)
}

/// Parse a 1–4 value spacing shorthand into a [`SpacingQuad`].
///
/// [CSS Box Model § Margin shorthand](https://www.w3.org/TR/css-box-4/#margin-shorthand)
/// - 1 value → all sides
/// - 2 values → vertical / horizontal
/// - 3 values → top / horizontal / bottom
/// - 4 values → top / right / bottom / left
///
/// `"auto"` or empty input yields an all-zero quad.
#[must_use]
pub fn parse_spacing(value: &str) -> SpacingQuad {
    let v = value.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("auto") {
        return SpacingQuad::default();
    }

    let parts: Vec<f64> = v.split_whitespace().map(parse_pixel_value).collect();
    match parts.as_slice() {
        [all] => SpacingQuad::uniform(*all),
        [vertical, horizontal] => SpacingQuad {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        },
        [top, horizontal, bottom] => SpacingQuad {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        },
        [top, right, bottom, left, ..] => SpacingQuad {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        },
        [] => SpacingQuad::default(),
    }
}

/// Parse a `border` shorthand into a [`BorderSpec`].
///
/// [§ 4.4 border shorthand](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
///
/// Token classification:
/// - ends in `px`, or purely numeric → width
/// - a border-style keyword → style
/// - anything else → color; the LAST such token wins when several appear.
///   Multi-word color names are not supported (each word classifies
///   independently).
#[must_use]
pub fn parse_border(value: &str) -> BorderSpec {
    let mut border = BorderSpec::default();

    for token in value.split_whitespace() {
        let lower = token.to_ascii_lowercase();
        if lower.ends_with("px") || token.parse::<f64>().is_ok() {
            border.width = parse_pixel_value(token);
        } else if BORDER_STYLE_KEYWORDS.contains(&lower.as_str()) {
            border.style = lower;
        } else {
            border.color = token.to_string();
        }
    }

    border
}
