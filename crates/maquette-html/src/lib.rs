//! HTML tokenizer and tree builder for the maquette converter.
//!
//! # Scope
//!
//! A deliberately compact subset of
//! [WHATWG § 13.2 Parsing HTML documents](https://html.spec.whatwg.org/multipage/parsing.html):
//! - start/end tags with quoted, unquoted, and valueless attributes
//! - comments and DOCTYPE (both skipped during tree construction)
//! - RAWTEXT handling for `<script>` and `<style>` so stylesheet text
//!   survives verbatim
//! - void elements per [§ 13.1.2](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
//!
//! # Not Implemented
//!
//! Character references, implicit `<html>`/`<head>`/`<body>` synthesis,
//! foster parenting, the adoption agency algorithm, quirks mode. Documents
//! are converted as written; a document with no `<body>` element yields the
//! converter's empty-frame fallback downstream.

/// Tree construction from a token stream.
pub mod parser;
/// Tokenizer converting input text into tags, text runs, and comments.
pub mod tokenizer;

pub use parser::HTMLParser;
pub use tokenizer::{Attribute, HTMLTokenizer, Token};

use maquette_dom::DomTree;

/// Parse an HTML string into a DOM snapshot.
///
/// Convenience wrapper over the tokenizer → parser pipeline.
#[must_use]
pub fn parse_html(html: &str) -> DomTree {
    let mut tokenizer = HTMLTokenizer::new(html.to_string());
    tokenizer.run();
    let parser = HTMLParser::new(tokenizer.into_tokens());
    parser.run()
}
