//! Color palette extraction.
//!
//! A derived artifact alongside the design tree: the unique color strings
//! it references, collected pre-order in first-seen order. Values are
//! compared as strings; `"#fff"` and `"#ffffff"` count as two colors.

use std::collections::HashSet;

use crate::node::DesignNode;

/// Collect the unique colors of a design tree.
///
/// Sources, per node: `style.background`, `style.color`, and
/// `style.border.color` (skipping `transparent` border colors, which are
/// the unset default). Deterministic for a fixed tree, so repeated runs
/// yield the identical list.
#[must_use]
pub fn extract_palette(root: &DesignNode) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut palette = Vec::new();
    collect(root, &mut seen, &mut palette);
    palette
}

fn collect(node: &DesignNode, seen: &mut HashSet<String>, palette: &mut Vec<String>) {
    let mut push = |color: &str| {
        if seen.insert(color.to_string()) {
            palette.push(color.to_string());
        }
    };

    if let Some(background) = &node.style.background {
        push(background);
    }
    if let Some(color) = &node.style.color {
        push(color);
    }
    if let Some(border) = &node.style.border {
        if !border.color.eq_ignore_ascii_case("transparent") {
            push(&border.color);
        }
    }

    if let Some(children) = &node.children {
        for child in children {
            collect(child, seen, palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LayoutBox, NodeKind, StyleOutput};

    fn node_with(background: Option<&str>, color: Option<&str>) -> DesignNode {
        let style = StyleOutput {
            background: background.map(str::to_string),
            color: color.map(str::to_string),
            ..StyleOutput::default()
        };
        DesignNode::new(NodeKind::Frame, "div", LayoutBox::default(), style)
    }

    #[test]
    fn collects_pre_order_first_seen() {
        let mut root = node_with(Some("#ffffff"), Some("#000000"));
        root.children = Some(vec![
            node_with(Some("#ff0000"), Some("#000000")),
            node_with(Some("#ffffff"), Some("#00ff00")),
        ]);
        assert_eq!(
            extract_palette(&root),
            vec!["#ffffff", "#000000", "#ff0000", "#00ff00"]
        );
    }

    #[test]
    fn radius_only_border_contributes_no_color() {
        use maquette_css::BorderSpec;

        let mut node = node_with(Some("#ffffff"), None);
        node.style.border = Some(BorderSpec {
            radius: Some(8.0),
            ..BorderSpec::default()
        });
        assert_eq!(extract_palette(&node), vec!["#ffffff"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut root = node_with(Some("#abc"), None);
        root.children = Some(vec![node_with(None, Some("red"))]);
        assert_eq!(extract_palette(&root), extract_palette(&root));
    }
}
