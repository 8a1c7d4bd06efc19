//! CSS tokenizer.
//!
//! [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
//!
//! "Implementations must act as if they used the following algorithms to
//! tokenize CSS." This is a compact subset covering the token types that
//! appear in style rules and declaration values; escape sequences and
//! scientific-notation numbers are not handled.

/// [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
///
/// Token types produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// `<ident-token>`
    Ident(String),
    /// `<function-token>`: the name, with the `(` consumed.
    Function(String),
    /// `<at-keyword-token>`: the name, without the `@`.
    AtKeyword(String),
    /// `<hash-token>`: the value, without the `#`.
    Hash(String),
    /// `<string-token>`: the value, without the quotes.
    String(String),
    /// `<number-token>`
    Number(f64),
    /// `<dimension-token>`: numeric value plus unit.
    Dimension {
        /// The numeric value.
        value: f64,
        /// The unit ident (`px`, `em`, ...).
        unit: String,
    },
    /// `<percentage-token>`: the numeric value, without the `%`.
    Percentage(f64),
    /// `<delim-token>`
    Delim(char),
    /// `<colon-token>`
    Colon,
    /// `<semicolon-token>`
    Semicolon,
    /// `<comma-token>`
    Comma,
    /// `<{-token>`
    LeftBrace,
    /// `<}-token>`
    RightBrace,
    /// `<(-token>`
    LeftParen,
    /// `<)-token>`
    RightParen,
    /// `<[-token>`
    LeftBracket,
    /// `<]-token>`
    RightBracket,
    /// `<whitespace-token>`: consecutive whitespace coalesced.
    Whitespace,
    /// `<EOF-token>`
    EOF,
}

/// CSS tokenizer over an in-memory stylesheet string.
pub struct CSSTokenizer {
    input: Vec<char>,
    position: usize,
    tokens: Vec<CSSToken>,
}

impl CSSTokenizer {
    /// Create a tokenizer over the given CSS text.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Run the tokenizer to completion.
    ///
    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    pub fn run(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                // "Consume comments."
                '/' if self.peek_at(1) == Some('*') => self.consume_comment(),

                // "<whitespace-token>" — "Consume as much whitespace as possible."
                c if c.is_whitespace() => {
                    while self.peek().is_some_and(char::is_whitespace) {
                        self.position += 1;
                    }
                    self.tokens.push(CSSToken::Whitespace);
                }

                '"' | '\'' => self.consume_string(c),

                // "<hash-token>" — "If the next input code point is an ident
                // code point... create a <hash-token>."
                '#' => {
                    self.position += 1;
                    let name = self.consume_ident_sequence();
                    if name.is_empty() {
                        self.tokens.push(CSSToken::Delim('#'));
                    } else {
                        self.tokens.push(CSSToken::Hash(name));
                    }
                }

                '@' => {
                    self.position += 1;
                    let name = self.consume_ident_sequence();
                    if name.is_empty() {
                        self.tokens.push(CSSToken::Delim('@'));
                    } else {
                        self.tokens.push(CSSToken::AtKeyword(name));
                    }
                }

                '{' => self.push_simple(CSSToken::LeftBrace),
                '}' => self.push_simple(CSSToken::RightBrace),
                '(' => self.push_simple(CSSToken::LeftParen),
                ')' => self.push_simple(CSSToken::RightParen),
                '[' => self.push_simple(CSSToken::LeftBracket),
                ']' => self.push_simple(CSSToken::RightBracket),
                ':' => self.push_simple(CSSToken::Colon),
                ';' => self.push_simple(CSSToken::Semicolon),
                ',' => self.push_simple(CSSToken::Comma),

                // "<number-token>" and friends
                c if c.is_ascii_digit() => self.consume_numeric(),
                '+' | '-' | '.' if self.starts_number() => self.consume_numeric(),

                // "<ident-token>" / "<function-token>"
                c if is_ident_start(c) => {
                    let name = self.consume_ident_sequence();
                    if self.peek() == Some('(') {
                        self.position += 1;
                        self.tokens.push(CSSToken::Function(name));
                    } else {
                        self.tokens.push(CSSToken::Ident(name));
                    }
                }

                // "anything else" — "Return a <delim-token> with its value
                // set to the current input code point."
                c => self.push_simple(CSSToken::Delim(c)),
            }
        }
        self.tokens.push(CSSToken::EOF);
    }

    /// Consume the produced token stream.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CSSToken> {
        self.tokens
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    /// Comments produce no token.
    fn consume_comment(&mut self) {
        self.position += 2; // "/*"
        while self.position < self.input.len() {
            if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                self.position += 2;
                return;
            }
            self.position += 1;
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string(&mut self, quote: char) {
        self.position += 1; // opening quote
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c == quote {
                self.position += 1;
                break;
            }
            // Unescaped newline ends the string per the spec's error recovery.
            if c == '\n' {
                break;
            }
            value.push(c);
            self.position += 1;
        }
        self.tokens.push(CSSToken::String(value));
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric(&mut self) {
        let mut repr = String::new();
        if matches!(self.peek(), Some('+' | '-')) {
            repr.push(self.input[self.position]);
            self.position += 1;
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                repr.push(c);
                self.position += 1;
            } else {
                break;
            }
        }
        let value: f64 = repr.parse().unwrap_or(0.0);

        if self.peek() == Some('%') {
            self.position += 1;
            self.tokens.push(CSSToken::Percentage(value));
        } else if self.peek().is_some_and(is_ident_start) {
            let unit = self.consume_ident_sequence();
            self.tokens.push(CSSToken::Dimension { value, unit });
        } else {
            self.tokens.push(CSSToken::Number(value));
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                name.push(c);
                self.position += 1;
            } else {
                break;
            }
        }
        name
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn starts_number(&self) -> bool {
        match self.peek() {
            Some('+' | '-') => matches!(self.peek_at(1), Some(c) if c.is_ascii_digit() || c == '.'),
            Some('.') => matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn push_simple(&mut self, token: CSSToken) {
        self.position += 1;
        self.tokens.push(token);
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions — ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || !c.is_ascii()
}

/// [§ 4.2 Definitions — ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}
