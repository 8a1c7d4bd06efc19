//! Value-parser behavior, including the documented degradation rules.

use maquette_css::{SpacingQuad, parse_border, parse_pixel_value, parse_spacing};

#[test]
fn pixel_values() {
    assert_eq!(parse_pixel_value("12px"), 12.0);
    assert_eq!(parse_pixel_value("  24px "), 24.0);
    assert_eq!(parse_pixel_value("1.5px"), 1.5);
}

#[test]
fn em_and_rem_resolve_against_fixed_root() {
    assert_eq!(parse_pixel_value("2em"), 32.0);
    assert_eq!(parse_pixel_value("1rem"), 16.0);
    assert_eq!(parse_pixel_value("0.5em"), 8.0);
}

#[test]
fn percentages_resolve_to_zero() {
    assert_eq!(parse_pixel_value("50%"), 0.0);
    assert_eq!(parse_pixel_value("100%"), 0.0);
}

#[test]
fn bare_numbers_and_garbage() {
    assert_eq!(parse_pixel_value("42"), 42.0);
    assert_eq!(parse_pixel_value(""), 0.0);
    assert_eq!(parse_pixel_value("auto"), 0.0);
    assert_eq!(parse_pixel_value("bogus"), 0.0);
}

#[test]
fn spacing_one_value() {
    assert_eq!(
        parse_spacing("10px"),
        SpacingQuad {
            top: 10.0,
            right: 10.0,
            bottom: 10.0,
            left: 10.0
        }
    );
}

#[test]
fn spacing_two_values() {
    assert_eq!(
        parse_spacing("10px 20px"),
        SpacingQuad {
            top: 10.0,
            right: 20.0,
            bottom: 10.0,
            left: 20.0
        }
    );
}

#[test]
fn spacing_three_values() {
    assert_eq!(
        parse_spacing("1px 2px 3px"),
        SpacingQuad {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 2.0
        }
    );
}

#[test]
fn spacing_four_values() {
    assert_eq!(
        parse_spacing("1px 2px 3px 4px"),
        SpacingQuad {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0
        }
    );
}

#[test]
fn spacing_auto_and_empty_are_zero() {
    assert_eq!(parse_spacing("auto"), SpacingQuad::default());
    assert_eq!(parse_spacing(""), SpacingQuad::default());
}

#[test]
fn spacing_mixed_units() {
    let quad = parse_spacing("1em 50%");
    assert_eq!(quad.top, 16.0);
    assert_eq!(quad.right, 0.0);
}

#[test]
fn border_full_shorthand() {
    let border = parse_border("1px solid #333");
    assert_eq!(border.width, 1.0);
    assert_eq!(border.style, "solid");
    assert_eq!(border.color, "#333");
    assert_eq!(border.radius, None);
}

#[test]
fn border_token_order_does_not_matter() {
    let border = parse_border("red dashed 2px");
    assert_eq!(border.width, 2.0);
    assert_eq!(border.style, "dashed");
    assert_eq!(border.color, "red");
}

#[test]
fn border_defaults_when_parts_missing() {
    let border = parse_border("solid");
    assert_eq!(border.width, 0.0);
    assert_eq!(border.style, "solid");
    assert_eq!(border.color, "transparent");
}

#[test]
fn border_last_color_token_wins() {
    let border = parse_border("1px solid red blue");
    assert_eq!(border.color, "blue");
}
