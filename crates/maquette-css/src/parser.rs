//! CSS rule parser.
//!
//! [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing)
//!
//! "The input to the parsing stage is a stream of tokens from the
//! tokenization stage." Declaration values are kept as flat strings because
//! the effective-style record the resolver builds maps property names to
//! string values; the parser re-serializes component tokens rather than
//! preserving them structurally.

use crate::tokenizer::CSSToken;

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g. `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name as written (kebab-case, not yet normalized).
    pub name: String,
    /// The property value serialized to a flat string.
    pub value: String,
    /// Whether the declaration carried `!important`.
    ///
    /// Recorded but not weighted: the resolver applies declarations in
    /// natural order regardless of importance (documented deviation).
    pub important: bool,
}

/// A selector as raw text, matched later by the selector module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Raw selector text.
    pub text: String,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A style rule: selector list plus declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The comma-separated selectors of this rule.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block.
    pub declarations: Vec<Declaration>,
}

/// [§ 5.3.3 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
///
/// A CSS rule. At-rules are parsed for stream correctness but ignored by
/// the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A style rule (qualified rule).
    Style(StyleRule),
    /// An at-rule, identified by name; prelude and block are discarded.
    At(String),
}

/// [§ 5.3.2 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed stylesheet: rules in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The list of rules, in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Iterate over the style rules only, in source order.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Style(style_rule) => Some(style_rule),
            Rule::At(_) => None,
        })
    }
}

/// CSS parser over a token stream.
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    position: usize,
}

impl CSSParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Whitespace) => {
                    let _ = self.consume();
                }
                None | Some(CSSToken::EOF) => break,
                Some(CSSToken::AtKeyword(_)) => {
                    if let Some(name) = self.consume_at_rule() {
                        rules.push(Rule::At(name));
                    }
                }
                Some(_) => {
                    if let Some(rule) = self.consume_qualified_rule() {
                        rules.push(Rule::Style(rule));
                    }
                }
            }
        }

        Stylesheet { rules }
    }

    /// [§ 5.3.6 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Entry point for inline `style` attributes.
    pub fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        self.consume_list_of_declarations()
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    ///
    /// The prelude and block are consumed and dropped; only the name is kept.
    fn consume_at_rule(&mut self) -> Option<String> {
        let name = match self.consume() {
            Some(CSSToken::AtKeyword(name)) => name.clone(),
            _ => return None,
        };

        loop {
            match self.peek() {
                // "<semicolon-token>" — "Return the at-rule."
                Some(CSSToken::Semicolon) => {
                    let _ = self.consume();
                    return Some(name);
                }
                // "<EOF-token>" — "This is a parse error. Return the at-rule."
                None | Some(CSSToken::EOF) => return Some(name),
                // "<{-token>" — consume the block, then the rule is complete.
                Some(CSSToken::LeftBrace) => {
                    self.skip_block();
                    return Some(name);
                }
                Some(_) => {
                    let _ = self.consume();
                }
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Option<StyleRule> {
        let mut prelude_tokens = Vec::new();

        loop {
            match self.peek() {
                // "<EOF-token>" — "This is a parse error. Return nothing."
                None | Some(CSSToken::EOF) => return None,

                Some(CSSToken::LeftBrace) => {
                    let _ = self.consume(); // {

                    // [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
                    // "A selector list is a comma-separated list of selectors"
                    let selectors = split_selector_list(&prelude_tokens);
                    let declarations = self.consume_list_of_declarations();

                    if self.peek() == Some(&CSSToken::RightBrace) {
                        let _ = self.consume();
                    }

                    return Some(StyleRule {
                        selectors,
                        declarations,
                    });
                }

                Some(_) => {
                    if let Some(token) = self.consume().cloned() {
                        prelude_tokens.push(token);
                    }
                }
            }
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    fn consume_list_of_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => {
                    let _ = self.consume();
                }
                None | Some(CSSToken::EOF) | Some(CSSToken::RightBrace) => {
                    return declarations;
                }
                Some(CSSToken::AtKeyword(_)) => {
                    // At-rules inside declaration lists are skipped.
                    let _ = self.consume_at_rule();
                }
                Some(CSSToken::Ident(_)) => {
                    if let Some(decl) = self.consume_declaration() {
                        declarations.push(decl);
                    }
                }
                // "anything else" — "This is a parse error." Discard until
                // the next semicolon or block end.
                Some(_) => {
                    let _ = self.consume();
                    while !matches!(
                        self.peek(),
                        None | Some(
                            CSSToken::Semicolon | CSSToken::RightBrace | CSSToken::EOF
                        )
                    ) {
                        let _ = self.consume();
                    }
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Option<Declaration> {
        let name = match self.consume() {
            Some(CSSToken::Ident(name)) => name.clone(),
            _ => return None,
        };

        while self.peek() == Some(&CSSToken::Whitespace) {
            let _ = self.consume();
        }

        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error. Return nothing."
        if self.peek() != Some(&CSSToken::Colon) {
            return None;
        }
        let _ = self.consume(); // :

        while self.peek() == Some(&CSSToken::Whitespace) {
            let _ = self.consume();
        }

        let mut value_tokens = Vec::new();
        while !matches!(
            self.peek(),
            None | Some(CSSToken::EOF | CSSToken::Semicolon | CSSToken::RightBrace)
        ) {
            if let Some(token) = self.consume().cloned() {
                value_tokens.push(token);
            }
        }

        // [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
        let important = strip_important(&mut value_tokens);
        let value = tokens_to_string(&value_tokens);

        Some(Declaration {
            name,
            value,
            important,
        })
    }

    /// Skip a `{ ... }` block, honoring nesting.
    fn skip_block(&mut self) {
        let _ = self.consume(); // {
        let mut depth = 1usize;
        while depth > 0 {
            match self.consume() {
                Some(CSSToken::LeftBrace) => depth += 1,
                Some(CSSToken::RightBrace) => depth -= 1,
                None | Some(CSSToken::EOF) => return,
                Some(_) => {}
            }
        }
    }

    fn consume(&mut self) -> Option<&CSSToken> {
        if self.position < self.tokens.len() {
            let token = &self.tokens[self.position];
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }
}

/// [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// Split prelude tokens into selectors, separated by commas.
fn split_selector_list(tokens: &[CSSToken]) -> Vec<Selector> {
    let mut selectors = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        if matches!(token, CSSToken::Comma) {
            let text = tokens_to_string(&current);
            if !text.is_empty() {
                selectors.push(Selector { text });
            }
            current.clear();
        } else {
            current.push(token.clone());
        }
    }

    let text = tokens_to_string(&current);
    if !text.is_empty() {
        selectors.push(Selector { text });
    }

    selectors
}

/// [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
///
/// Simplified serialization of a token run back to a string, used for both
/// selector preludes and declaration values. Not spec-complete; covers the
/// token types this parser produces.
fn tokens_to_string(tokens: &[CSSToken]) -> String {
    let mut s = String::new();
    for token in tokens {
        match token {
            CSSToken::Ident(v) | CSSToken::AtKeyword(v) => s.push_str(v),
            CSSToken::Hash(v) => {
                s.push('#');
                s.push_str(v);
            }
            CSSToken::String(v) => {
                s.push('"');
                s.push_str(v);
                s.push('"');
            }
            CSSToken::Number(n) => s.push_str(&format_number(*n)),
            CSSToken::Dimension { value, unit } => {
                s.push_str(&format_number(*value));
                s.push_str(unit);
            }
            CSSToken::Percentage(n) => {
                s.push_str(&format_number(*n));
                s.push('%');
            }
            CSSToken::Function(name) => {
                s.push_str(name);
                s.push('(');
            }
            CSSToken::Delim(c) => s.push(*c),
            CSSToken::Colon => s.push(':'),
            CSSToken::Comma => s.push(','),
            CSSToken::Whitespace => s.push(' '),
            CSSToken::LeftParen => s.push('('),
            CSSToken::RightParen => s.push(')'),
            CSSToken::LeftBracket => s.push('['),
            CSSToken::RightBracket => s.push(']'),
            CSSToken::LeftBrace => s.push('{'),
            CSSToken::RightBrace => s.push('}'),
            CSSToken::Semicolon => s.push(';'),
            CSSToken::EOF => {}
        }
    }
    s.trim().to_string()
}

/// Serialize a number without a trailing `.0` for integral values.
fn format_number(n: f64) -> String {
    if (n - n.trunc()).abs() < f64::EPSILON {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if... the last two (non-whitespace,
/// non-comment) tokens in its value are a <delim-token> with the value '!'
/// followed by an <ident-token>... 'important'."
///
/// Removes the annotation from the token list and returns whether it was
/// present.
fn strip_important(tokens: &mut Vec<CSSToken>) -> bool {
    while matches!(tokens.last(), Some(CSSToken::Whitespace)) {
        let _ = tokens.pop();
    }

    let is_important = matches!(
        tokens.last(),
        Some(CSSToken::Ident(s)) if s.eq_ignore_ascii_case("important")
    );
    if !is_important {
        return false;
    }
    let _ = tokens.pop(); // "important"

    while matches!(tokens.last(), Some(CSSToken::Whitespace)) {
        let _ = tokens.pop();
    }

    if matches!(tokens.last(), Some(CSSToken::Delim('!'))) {
        let _ = tokens.pop();
        while matches!(tokens.last(), Some(CSSToken::Whitespace)) {
            let _ = tokens.pop();
        }
        true
    } else {
        // Bare "important" ident was a real value token; put it back.
        tokens.push(CSSToken::Ident("important".to_string()));
        false
    }
}
