//! Style resolution (the cascade).
//!
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! Resolution for an element proceeds in three layers:
//!
//! 1. the user-agent defaults for its tag name,
//! 2. every matching stylesheet rule, in document order,
//! 3. the inline `style` attribute.
//!
//! # Known Deviations
//!
//! Within layer 2 the LAST matching declaration wins regardless of selector
//! specificity. `#id { color: red }` loses to a later `p { color: blue }`.
//! This trades spec-accurate cascading for predictable rule ordering;
//! documents relying on specificity must reorder their rules.

use maquette_common::warning::warn_once;
use maquette_dom::{DomTree, NodeId, NodeType};

use crate::defaults::default_style;
use crate::parser::{CSSParser, Stylesheet};
use crate::selector::parse_selector;
use crate::style::EffectiveStyle;
use crate::tokenizer::CSSTokenizer;

/// Collect the contents of every `<style>` element in the document and
/// parse the concatenation as one stylesheet.
///
/// [HTML § 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
///
/// Source order is document order, so later `<style>` blocks cascade over
/// earlier ones under the last-match-wins rule.
#[must_use]
pub fn extract_style_rules(tree: &DomTree) -> Stylesheet {
    let mut css = String::new();
    collect_style_text(tree, NodeId::ROOT, &mut css);
    parse_stylesheet_text(&css)
}

/// Parse raw CSS text into a [`Stylesheet`].
#[must_use]
pub fn parse_stylesheet_text(css: &str) -> Stylesheet {
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run();
    CSSParser::new(tokenizer.into_tokens()).parse_stylesheet()
}

fn collect_style_text(tree: &DomTree, node_id: NodeId, out: &mut String) {
    if let Some(element) = tree.as_element(node_id) {
        if element.tag_name.eq_ignore_ascii_case("style") {
            out.push_str(&tree.direct_text(node_id));
            out.push('\n');
            return;
        }
    }
    for &child in tree.children(node_id) {
        collect_style_text(tree, child, out);
    }
}

/// Resolve the effective style for one element.
///
/// [§ 6.1 Cascade sorting order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Seeds the record from [`default_style`], folds every matching rule over
/// it in document order, then overlays the inline `style` attribute, which
/// always wins. Selectors the matcher cannot represent (pseudo-classes,
/// attribute selectors, sibling combinators) are reported once per distinct
/// selector and their rules skipped.
///
/// Non-element nodes resolve to the generic defaults.
#[must_use]
pub fn resolve_style(tree: &DomTree, node_id: NodeId, stylesheet: &Stylesheet) -> EffectiveStyle {
    let Some(NodeType::Element(element)) = tree.get(node_id).map(|n| &n.node_type) else {
        return default_style("");
    };

    let mut style = default_style(&element.tag_name);

    // STEP 1: author rules, document order, last match wins.
    for rule in stylesheet.style_rules() {
        let mut matched = false;
        for selector in &rule.selectors {
            match parse_selector(&selector.text) {
                Some(parsed) => {
                    if parsed.matches_in_tree(tree, node_id) {
                        matched = true;
                        break;
                    }
                }
                None => {
                    warn_once(
                        "css",
                        &format!("skipping unsupported selector: {}", selector.text),
                    );
                }
            }
        }
        if matched {
            for declaration in &rule.declarations {
                style = style.apply(&declaration.name, &declaration.value);
            }
        }
    }

    // STEP 2: the inline style attribute overrides everything.
    if let Some(inline) = element.attr("style") {
        let mut tokenizer = CSSTokenizer::new(inline);
        tokenizer.run();
        let declarations = CSSParser::new(tokenizer.into_tokens()).parse_declaration_list();
        for declaration in &declarations {
            style = style.apply(&declaration.name, &declaration.value);
        }
    }

    style
}
