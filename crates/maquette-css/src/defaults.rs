//! Default (user-agent) style seeds.
//!
//! [HTML § 15 Rendering — The CSS user agent style sheet](https://html.spec.whatwg.org/multipage/rendering.html)
//!
//! Every element starts from the map returned here before any author rule
//! applies, so heading sizes, paragraph margins and the body canvas defaults
//! survive even for documents with no stylesheet at all.

use crate::style::EffectiveStyle;

/// Tags rendered inline by default.
///
/// [§ 15.3.3 Non-replaced phrasing content](https://html.spec.whatwg.org/multipage/rendering.html#phrasing-content-3)
const INLINE_TAGS: &[&str] = &["span", "a", "strong", "em", "b", "i", "label"];

/// Build the default style record for `tag`.
///
/// The base seed applies to every element; heading, paragraph and body
/// entries then layer their UA metrics on top. Font sizes for headings come
/// from the conventional `medium` scale (h1 = 2em of 16px, and so on down),
/// pre-resolved to pixels.
#[must_use]
pub fn default_style(tag: &str) -> EffectiveStyle {
    let mut style = EffectiveStyle::new();
    style.set("display", "block");
    style.set("margin", "0");
    style.set("padding", "0");
    style.set("color", "inherit");
    style.set("backgroundColor", "transparent");
    style.set("fontSize", "16px");
    style.set("fontWeight", "normal");
    style.set("fontFamily", "inherit");
    style.set("textAlign", "left");

    let tag = tag.to_ascii_lowercase();
    if INLINE_TAGS.contains(&tag.as_str()) {
        style.set("display", "inline");
    }

    match tag.as_str() {
        "h1" => heading(&mut style, "32px", "0.67em 0"),
        "h2" => heading(&mut style, "24px", "0.83em 0"),
        "h3" => heading(&mut style, "18.72px", "1em 0"),
        "h4" => heading(&mut style, "16px", "1.33em 0"),
        "h5" => heading(&mut style, "13.28px", "1.67em 0"),
        "h6" => heading(&mut style, "10.72px", "2.33em 0"),
        "p" => style.set("margin", "1em 0"),
        "body" => {
            style.set("margin", "8px");
            style.set("backgroundColor", "#ffffff");
            style.set("color", "#000000");
        }
        _ => {}
    }

    style
}

fn heading(style: &mut EffectiveStyle, font_size: &str, margin: &str) {
    style.set("fontSize", font_size);
    style.set("fontWeight", "bold");
    style.set("margin", margin);
}
