//! CSS selector parsing and matching.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! A reduced grammar: type, class, ID, and universal simple selectors,
//! compounds, and the descendant and child combinators. Everything richer
//! (pseudo-classes, pseudo-elements, attribute selectors, sibling
//! combinators) fails the parse, which makes the resolver skip the rule —
//! the same outcome as a throwing `matches()` capability, never a fatal
//! error.

use maquette_dom::{DomTree, ElementData, NodeId};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// Examples: `div`, `p`, `body`
    Type(String),
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// Examples: `.highlight`, `.nav-item`
    Class(String),
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// Examples: `#main`, `#header`
    Id(String),
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// Example: `*`
    Universal,
}

impl SimpleSelector {
    /// Check whether this simple selector matches the element directly.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            SimpleSelector::Type(tag) => element.tag_name.eq_ignore_ascii_case(tag),
            SimpleSelector::Class(name) => element.has_class(name),
            SimpleSelector::Id(id) => element.id().is_some_and(|v| v == id),
            SimpleSelector::Universal => true,
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// The simple selectors that must all match one element.
    pub simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    fn matches(&self, element: &ElementData) -> bool {
        self.simple_selectors.iter().all(|s| s.matches(element))
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// `A B` — B is an arbitrary descendant of A.
    Descendant,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B` — B is a direct child of A.
    Child,
}

/// A parsed selector ready for matching against the DOM snapshot.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
/// "The elements represented by a complex selector are the elements matched
/// by the last compound selector in the complex selector."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelector {
    /// The rightmost compound selector (the subject).
    pub subject: CompoundSelector,
    /// Chain of (combinator, compound) pairs going left from the subject.
    /// Right-to-left order because matching walks from the subject upward.
    pub combinators: Vec<(Combinator, CompoundSelector)>,
}

impl ParsedSelector {
    /// [§ 4.1 Match a selector against an element](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// Match this selector against the element at `node_id`, walking the
    /// snapshot for combinator context.
    #[must_use]
    pub fn matches_in_tree(&self, tree: &DomTree, node_id: NodeId) -> bool {
        let Some(element) = tree.as_element(node_id) else {
            return false;
        };
        if !self.subject.matches(element) {
            return false;
        }

        let mut current_id = node_id;
        for (combinator, compound) in &self.combinators {
            match combinator {
                // "A B" — any ancestor may satisfy the left side.
                Combinator::Descendant => {
                    let matched = tree.ancestors(current_id).find(|&ancestor_id| {
                        tree.as_element(ancestor_id)
                            .is_some_and(|e| compound.matches(e))
                    });
                    match matched {
                        Some(ancestor_id) => current_id = ancestor_id,
                        None => return false,
                    }
                }
                // "A > B" — only the immediate parent may satisfy it.
                Combinator::Child => {
                    let Some(parent_id) = tree.parent(current_id) else {
                        return false;
                    };
                    let parent_matches = tree
                        .as_element(parent_id)
                        .is_some_and(|e| compound.matches(e));
                    if !parent_matches {
                        return false;
                    }
                    current_id = parent_id;
                }
            }
        }
        true
    }
}

/// Parse a selector string into a [`ParsedSelector`].
///
/// Returns `None` for any syntax outside the supported grammar; callers
/// treat the owning rule as non-matching.
#[must_use]
pub fn parse_selector(text: &str) -> Option<ParsedSelector> {
    // Compounds in left-to-right order, paired with the combinator that
    // FOLLOWS each of them (i.e. connects it to the next compound).
    let mut compounds: Vec<(CompoundSelector, Option<Combinator>)> = Vec::new();
    let mut chars = text.trim().chars().peekable();

    loop {
        let compound = parse_compound(&mut chars)?;

        // Determine the combinator to the next compound, if any.
        let mut saw_space = false;
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            let _ = chars.next();
            saw_space = true;
        }
        match chars.peek() {
            None => {
                compounds.push((compound, None));
                break;
            }
            Some('>') => {
                let _ = chars.next();
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    let _ = chars.next();
                }
                compounds.push((compound, Some(Combinator::Child)));
            }
            Some(_) if saw_space => {
                compounds.push((compound, Some(Combinator::Descendant)));
            }
            // Adjacent unsupported syntax (e.g. ':', '[', '+', '~').
            Some(_) => return None,
        }
    }

    // Reverse into subject-outward order.
    let (subject, _) = compounds.pop()?;
    let mut combinators = Vec::new();
    while let Some((compound, following)) = compounds.pop() {
        // `following` connects this compound to the one on its right.
        combinators.push((following?, compound));
    }

    Some(ParsedSelector {
        subject,
        combinators,
    })
}

/// Parse one compound selector: a run of simple selectors with no
/// intervening whitespace.
fn parse_compound(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<CompoundSelector> {
    let mut simple_selectors = Vec::new();

    loop {
        match chars.peek() {
            Some('*') => {
                let _ = chars.next();
                simple_selectors.push(SimpleSelector::Universal);
            }
            Some('.') => {
                let _ = chars.next();
                let name = parse_identifier(chars)?;
                simple_selectors.push(SimpleSelector::Class(name));
            }
            Some('#') => {
                let _ = chars.next();
                let name = parse_identifier(chars)?;
                simple_selectors.push(SimpleSelector::Id(name));
            }
            Some(c) if c.is_ascii_alphanumeric() || *c == '_' || *c == '-' => {
                let name = parse_identifier(chars)?;
                simple_selectors.push(SimpleSelector::Type(name.to_ascii_lowercase()));
            }
            // Whitespace or '>' ends the compound; anything else (pseudo,
            // attribute bracket, sibling combinator) is unsupported.
            Some(c) if c.is_whitespace() || *c == '>' => break,
            None => break,
            Some(_) => return None,
        }
    }

    if simple_selectors.is_empty() {
        None
    } else {
        Some(CompoundSelector { simple_selectors })
    }
}

/// Parse a CSS identifier (letters, digits, `-`, `_`).
fn parse_identifier(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
            let _ = chars.next();
        } else {
            break;
        }
    }
    if name.is_empty() { None } else { Some(name) }
}
