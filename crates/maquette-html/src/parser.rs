//! HTML tree construction.
//!
//! [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
//!
//! A stack-of-open-elements builder without insertion modes: tags nest as
//! written, end tags close the nearest matching open element, and unmatched
//! end tags are dropped. This is sufficient for the well-formed documents the
//! converter consumes; no implicit `<html>`/`<head>`/`<body>` are synthesized.

use maquette_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::Token;

/// [§ 13.1.2 Void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified."
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Tree builder consuming a token stream into a [`DomTree`] snapshot.
pub struct HTMLParser {
    tokens: Vec<Token>,
}

impl HTMLParser {
    /// Create a parser over a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Build the DOM snapshot.
    ///
    /// [§ 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
    /// "...the user agent must insert the node at the appropriate place for
    /// inserting a node" — here always the current node on the stack of open
    /// elements.
    #[must_use]
    pub fn run(self) -> DomTree {
        let mut tree = DomTree::new();
        // Stack of open elements; the document root is always at the bottom.
        let mut open: Vec<NodeId> = vec![tree.root()];

        for token in self.tokens {
            let current = *open.last().unwrap_or(&NodeId::ROOT);
            match token {
                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                } => {
                    let mut attrs = AttributesMap::new();
                    for attr in attributes {
                        // First occurrence wins, matching the spec's duplicate
                        // attribute parse-error handling.
                        let _ = attrs.entry(attr.name).or_insert(attr.value);
                    }
                    let is_void = VOID_ELEMENTS.contains(&name.as_str());
                    let id = tree.alloc(NodeType::Element(ElementData {
                        tag_name: name,
                        attrs,
                    }));
                    tree.append_child(current, id);
                    if !is_void && !self_closing {
                        open.push(id);
                    }
                }

                Token::EndTag { name } => {
                    // Close the nearest matching open element; drop the end
                    // tag if nothing on the stack matches.
                    let matched = open.iter().rposition(|&id| {
                        tree.as_element(id)
                            .is_some_and(|e| e.tag_name == name)
                    });
                    if let Some(index) = matched {
                        open.truncate(index);
                    }
                }

                Token::Text(text) => {
                    // Whitespace-only runs between tags carry no content.
                    if !text.trim().is_empty() {
                        let id = tree.alloc(NodeType::Text(text));
                        tree.append_child(current, id);
                    }
                }

                Token::Comment(text) => {
                    let id = tree.alloc(NodeType::Comment(text));
                    tree.append_child(current, id);
                }

                Token::Doctype | Token::EOF => {}
            }
        }

        tree
    }
}
