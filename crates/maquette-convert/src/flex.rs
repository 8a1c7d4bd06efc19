//! Flex repositioning pass.
//!
//! [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! A standalone post-processing step over a container's already-built
//! children. It is NOT invoked by the tree assembler's main pass; callers
//! that want flex arrangement apply it explicitly per container. Only
//! single-line distribution is implemented: no wrapping, no grow/shrink.

use maquette_css::parse_pixel_value;

use crate::node::DesignNode;

/// Main-axis size stand-in when a child's recorded size is zero.
///
/// Paired with a 1.2 line-height multiplier when the child carries a font
/// size. The document conversion pass uses 1.4 with a different fallback;
/// the two call sites are intentionally distinct.
const FLEX_FALLBACK_LINE_HEIGHT_PX: f64 = 18.0;

/// Flex main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Reposition `children` along the container's main axis.
///
/// [§ 8.2 Axis alignment](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// The main axis follows `flex-direction` (`row`/`row-reverse` horizontal,
/// `column`/`column-reverse` vertical); starting offset and inter-item
/// spacing follow `justify-content`; cross-axis position follows
/// `align-items`. A `-reverse` direction reverses the positioned array
/// order, visual only.
///
/// Children keep their sizes; only `layout.x`/`layout.y` change. Geometry
/// is recomputed in floating point and re-rounded.
pub fn apply_flex_layout(container: &DesignNode, children: &mut Vec<DesignNode>) {
    if children.is_empty() {
        return;
    }

    let direction = container
        .style
        .flex_direction
        .as_deref()
        .unwrap_or("row");
    let (axis, reverse) = match direction {
        "column" => (Axis::Vertical, false),
        "column-reverse" => (Axis::Vertical, true),
        "row-reverse" => (Axis::Horizontal, true),
        _ => (Axis::Horizontal, false),
    };

    let (main_start, main_size, cross_start, cross_size) = container_bounds(container, axis);
    let gap = container.style.gap.unwrap_or(0.0);

    let sizes: Vec<f64> = children.iter().map(|c| main_axis_size(c, axis)).collect();
    #[allow(clippy::cast_precision_loss)]
    let n = children.len() as f64;
    let occupied: f64 = sizes.iter().sum::<f64>() + gap * (n - 1.0);
    let available = main_size - occupied;

    let justify = container
        .style
        .justify_content
        .as_deref()
        .unwrap_or("flex-start");
    let (mut main_pos, between_extra) = match justify {
        "center" => (main_start + available / 2.0, 0.0),
        "flex-end" => (main_start + available, 0.0),
        "space-between" => {
            let extra = if n > 1.0 { available / (n - 1.0) } else { 0.0 };
            (main_start, extra)
        }
        "space-around" => (main_start + available / (2.0 * n), 0.0),
        "space-evenly" => (main_start + available / (n + 1.0), 0.0),
        _ => (main_start, 0.0),
    };

    let align = container
        .style
        .align_items
        .as_deref()
        .unwrap_or("flex-start");

    for (child, size) in children.iter_mut().zip(&sizes) {
        let child_cross = cross_axis_size(child, axis);
        let cross_pos = match align {
            "center" => cross_start + (cross_size - child_cross) / 2.0,
            "flex-end" => cross_start + cross_size - child_cross,
            _ => cross_start,
        };

        #[allow(clippy::cast_possible_truncation)]
        match axis {
            Axis::Horizontal => {
                child.layout.x = main_pos.round() as i32;
                child.layout.y = cross_pos.round() as i32;
            }
            Axis::Vertical => {
                child.layout.y = main_pos.round() as i32;
                child.layout.x = cross_pos.round() as i32;
            }
        }

        main_pos += size + gap + between_extra;
    }

    if reverse {
        children.reverse();
    }
}

/// Content-box bounds of the container on the given axis:
/// `(main_start, main_size, cross_start, cross_size)`.
fn container_bounds(container: &DesignNode, axis: Axis) -> (f64, f64, f64, f64) {
    let padding = container.style.padding.unwrap_or_default();
    let x = f64::from(container.layout.x) + padding.left;
    let y = f64::from(container.layout.y) + padding.top;
    let w = (f64::from(container.layout.w) - padding.horizontal()).max(0.0);
    let h = (f64::from(container.layout.h) - padding.vertical()).max(0.0);
    match axis {
        Axis::Horizontal => (x, w, y, h),
        Axis::Vertical => (y, h, x, w),
    }
}

fn main_axis_size(child: &DesignNode, axis: Axis) -> f64 {
    let recorded = match axis {
        Axis::Horizontal => f64::from(child.layout.w),
        Axis::Vertical => f64::from(child.layout.h),
    };
    if recorded > 0.0 {
        return recorded;
    }
    // Zero-sized child: estimate one text line. 1.2, not the document
    // pass's 1.4.
    child
        .style
        .font_size
        .as_deref()
        .map(parse_pixel_value)
        .filter(|size| *size > 0.0)
        .map_or(FLEX_FALLBACK_LINE_HEIGHT_PX, |size| size * 1.2)
}

fn cross_axis_size(child: &DesignNode, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => f64::from(child.layout.h),
        Axis::Vertical => f64::from(child.layout.w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LayoutBox, NodeKind, StyleOutput};

    fn frame(x: i32, y: i32, w: i32, h: i32) -> DesignNode {
        DesignNode::new(
            NodeKind::Frame,
            "div",
            LayoutBox { x, y, w, h },
            StyleOutput::default(),
        )
    }

    fn container(w: i32, h: i32, justify: Option<&str>, align: Option<&str>) -> DesignNode {
        let mut node = frame(0, 0, w, h);
        node.style.display = Some("flex".to_string());
        node.style.justify_content = justify.map(str::to_string);
        node.style.align_items = align.map(str::to_string);
        node
    }

    #[test]
    fn row_flex_start_packs_from_the_left() {
        let container = container(300, 50, None, None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        assert_eq!(children[0].layout.x, 0);
        assert_eq!(children[1].layout.x, 40);
    }

    #[test]
    fn row_center_splits_leftover_space() {
        let container = container(300, 50, Some("center"), None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        // leftover = 300 - 100 = 200, start at 100
        assert_eq!(children[0].layout.x, 100);
        assert_eq!(children[1].layout.x, 140);
    }

    #[test]
    fn space_between_pushes_items_to_the_edges() {
        let container = container(300, 50, Some("space-between"), None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        assert_eq!(children[0].layout.x, 0);
        assert_eq!(children[1].layout.x + children[1].layout.w, 300);
    }

    #[test]
    fn flex_end_packs_against_the_far_edge() {
        let container = container(300, 50, Some("flex-end"), None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        assert_eq!(children[0].layout.x, 200);
        assert_eq!(children[1].layout.x + children[1].layout.w, 300);
    }

    #[test]
    fn space_around_offsets_by_half_a_share() {
        let container = container(300, 50, Some("space-around"), None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        // leftover = 200, start at 200 / (2 x 2)
        assert_eq!(children[0].layout.x, 50);
        assert_eq!(children[1].layout.x, 90);
    }

    #[test]
    fn space_evenly_offsets_by_a_fraction_of_leftover() {
        let container = container(300, 50, Some("space-evenly"), None);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        // leftover = 200, start at 200 / 3
        assert_eq!(children[0].layout.x, 67);
    }

    #[test]
    fn align_items_center_centers_on_the_cross_axis() {
        let container = container(300, 50, None, Some("center"));
        let mut children = vec![frame(0, 0, 40, 20)];
        apply_flex_layout(&container, &mut children);
        assert_eq!(children[0].layout.y, 15);
    }

    #[test]
    fn align_items_flex_end_is_flush_with_the_bottom() {
        let container = container(300, 50, None, Some("flex-end"));
        let mut children = vec![frame(0, 0, 40, 20)];
        apply_flex_layout(&container, &mut children);
        assert_eq!(children[0].layout.y, 30);
    }

    #[test]
    fn row_reverse_reverses_positioned_order() {
        let mut container = container(300, 50, None, None);
        container.style.flex_direction = Some("row-reverse".to_string());
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&container, &mut children);
        // Second source child was positioned at x=40, now listed first.
        assert_eq!(children[0].layout.x, 40);
        assert_eq!(children[0].layout.w, 60);
        assert_eq!(children[1].layout.x, 0);
    }

    #[test]
    fn column_direction_stacks_vertically() {
        let mut node = container(100, 300, None, None);
        node.style.flex_direction = Some("column".to_string());
        let mut children = vec![frame(0, 0, 80, 30), frame(0, 0, 80, 50)];
        apply_flex_layout(&node, &mut children);
        assert_eq!(children[0].layout.y, 0);
        assert_eq!(children[1].layout.y, 30);
    }

    #[test]
    fn gap_spaces_items_apart() {
        let mut node = container(300, 50, None, None);
        node.style.gap = Some(10.0);
        let mut children = vec![frame(0, 0, 40, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&node, &mut children);
        assert_eq!(children[1].layout.x, 50);
    }

    #[test]
    fn zero_sized_child_gets_line_height_estimate() {
        let node = container(300, 50, None, None);
        let mut children = vec![frame(0, 0, 0, 20), frame(0, 0, 60, 20)];
        apply_flex_layout(&node, &mut children);
        // No font size recorded: 18px fallback main size.
        assert_eq!(children[1].layout.x, 18);
    }
}
