//! CSS tokenizer, rule parser, selector matching, value parsing, and
//! effective-style resolution for the maquette converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   subset: idents, functions, at-keywords, hashes, strings, numbers,
//!   dimensions, percentages, punctuation, comments
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   producing style rules whose declaration values stay flat strings
//! - **Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   subset: type, class, ID, universal, compounds, descendant and child
//!   combinators — anything richer fails the parse and the rule is skipped
//! - **Value Parsers**: pixel values, spacing shorthands, border shorthands
//!   with degrade-to-default error policy (no value ever raises an error)
//! - **Effective Style Resolution**: built-in tag defaults, then matched
//!   rules folded in stylesheet order with last-match-wins (deliberately no
//!   specificity), then the inline `style` attribute
//!
//! # Known Deviations
//!
//! - Cascade specificity and source-order weighting are NOT implemented;
//!   the last matching rule in natural order wins. Downstream consumers
//!   depend on this behavior, so it is pinned by tests rather than fixed.
//! - Percentages resolve to 0 at the value-parsing stage; the box model
//!   resolves percentage widths itself against the parent content width.
//! - External stylesheets (`<link rel="stylesheet">`) are not fetched; only
//!   `<style>` blocks and inline `style` attributes participate.

/// Effective-style resolution: defaults + matched rules + inline styles.
pub mod cascade;
/// Built-in element defaults keyed by tag name.
pub mod defaults;
/// CSS rule parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Selector parsing and arena-tree matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// The flat effective-style record.
pub mod style;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// CSS textual value parsing: pixels, spacing quads, border shorthands.
pub mod values;

pub use cascade::{extract_style_rules, parse_stylesheet_text, resolve_style};
pub use defaults::default_style;
pub use parser::{CSSParser, Declaration, Rule, StyleRule, Stylesheet};
pub use selector::{ParsedSelector, parse_selector};
pub use style::EffectiveStyle;
pub use tokenizer::{CSSToken, CSSTokenizer};
pub use values::{
    BorderSpec, ROOT_FONT_SIZE_PX, SpacingQuad, parse_border, parse_pixel_value, parse_spacing,
};
