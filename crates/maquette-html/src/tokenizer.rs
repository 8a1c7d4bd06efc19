//! HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "The output of the tokenization step is a series of zero or more of the
//! following tokens: DOCTYPE, start tag, end tag, comment, character,
//! end-of-file." Character tokens are coalesced into text runs here, which
//! is equivalent for tree construction and far cheaper.

use strum_macros::Display;

/// An attribute on a start tag token.
///
/// Per [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// Tokens emitted to the tree construction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A DOCTYPE token. The converter ignores its contents.
    Doctype,
    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes"
    StartTag {
        /// "a tag name" (ASCII-lowercased)
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },
    /// An end tag token. Attributes on end tags are dropped.
    EndTag {
        /// The tag name (ASCII-lowercased).
        name: String,
    },
    /// A comment token.
    Comment(String),
    /// A coalesced run of character tokens.
    Text(String),
    /// End of input.
    EOF,
}

/// Tokenizer states, a compact subset of
/// [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum State {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// RAWTEXT consumption for `<script>`/`<style>` contents.
    RawText,
}

/// Elements whose contents are consumed as raw text until the matching
/// end tag.
///
/// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML tokenizer over an in-memory document string.
pub struct HTMLTokenizer {
    input: Vec<char>,
    position: usize,
    state: State,
    /// Tag name whose end tag terminates the current RAWTEXT run.
    raw_text_tag: String,
    tokens: Vec<Token>,
}

impl HTMLTokenizer {
    /// Create a tokenizer over the given document text.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            state: State::Data,
            raw_text_tag: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Run the tokenizer to completion.
    pub fn run(&mut self) {
        loop {
            match self.state {
                State::Data => {
                    if !self.step_data() {
                        break;
                    }
                }
                State::RawText => self.step_raw_text(),
            }
        }
        self.tokens.push(Token::EOF);
    }

    /// Consume the produced token stream.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// One iteration of the data state. Returns false at end of input.
    fn step_data(&mut self) -> bool {
        let Some(c) = self.peek() else {
            return false;
        };

        if c == '<' {
            self.consume_markup();
        } else {
            let text = self.consume_until('<');
            if !text.is_empty() {
                self.tokens.push(Token::Text(text));
            }
        }
        true
    }

    /// RAWTEXT: everything up to the matching `</tag` is one text run.
    fn step_raw_text(&mut self) {
        let close = format!("</{}", self.raw_text_tag);
        let mut text = String::new();

        while self.position < self.input.len() {
            if self.peek() == Some('<') && self.lookahead_matches(&close) {
                break;
            }
            text.push(self.input[self.position]);
            self.position += 1;
        }

        if !text.is_empty() {
            self.tokens.push(Token::Text(text));
        }
        self.state = State::Data;
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn consume_markup(&mut self) {
        self.position += 1; // consume '<'

        match self.peek() {
            // "<!--" comment, "<!DOCTYPE", or bogus markup declaration
            Some('!') => {
                self.position += 1;
                if self.lookahead_matches("--") {
                    self.position += 2;
                    self.consume_comment();
                } else {
                    // DOCTYPE and bogus declarations: skip to '>'
                    let _ = self.consume_until('>');
                    self.position += 1; // '>'
                    self.tokens.push(Token::Doctype);
                }
            }

            // "</" end tag open state
            Some('/') => {
                self.position += 1;
                let name = self.consume_tag_name();
                let _ = self.consume_until('>');
                if self.peek() == Some('>') {
                    self.position += 1;
                }
                if !name.is_empty() {
                    self.tokens.push(Token::EndTag { name });
                }
            }

            // Tag name must start with an ASCII letter; anything else is text
            Some(c) if c.is_ascii_alphabetic() => self.consume_start_tag(),

            _ => {
                // Lone '<' is character data per the spec's parse-error recovery
                self.tokens.push(Token::Text("<".to_string()));
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    /// and the attribute states: consume one start tag including attributes.
    fn consume_start_tag(&mut self) {
        let name = self.consume_tag_name();
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('>') => {
                    self.position += 1;
                    break;
                }
                Some('/') => {
                    self.position += 1;
                    if self.peek() == Some('>') {
                        self.position += 1;
                        self_closing = true;
                        break;
                    }
                }
                None => break,
                Some(_) => {
                    if let Some(attr) = self.consume_attribute() {
                        attributes.push(attr);
                    }
                }
            }
        }

        // [§ 13.2.5.3](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
        // Switch to RAWTEXT for script/style so their text is preserved.
        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.state = State::RawText;
            self.raw_text_tag.clone_from(&name);
        }

        self.tokens.push(Token::StartTag {
            name,
            self_closing,
            attributes,
        });
    }

    /// [§ 13.2.5.32 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn consume_attribute(&mut self) -> Option<Attribute> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            name.push(c.to_ascii_lowercase());
            self.position += 1;
        }
        if name.is_empty() {
            // Stray character where an attribute was expected; drop it.
            self.position += 1;
            return None;
        }

        self.skip_whitespace();
        if self.peek() != Some('=') {
            // Valueless attribute: "the value is the empty string"
            return Some(Attribute {
                name,
                value: String::new(),
            });
        }
        self.position += 1; // '='
        self.skip_whitespace();

        // [§ 13.2.5.36–38 Attribute value states](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-double-quoted-state)
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.position += 1;
                let v = self.consume_until(quote);
                if self.peek() == Some(quote) {
                    self.position += 1;
                }
                v
            }
            _ => {
                let mut v = String::new();
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '>' {
                        break;
                    }
                    v.push(c);
                    self.position += 1;
                }
                v
            }
        };

        Some(Attribute { name, value })
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn consume_comment(&mut self) {
        let mut text = String::new();
        while self.position < self.input.len() {
            if self.lookahead_matches("-->") {
                self.position += 3;
                break;
            }
            text.push(self.input[self.position]);
            self.position += 1;
        }
        self.tokens.push(Token::Comment(text));
    }

    /// Consume an ASCII-lowercased tag name.
    fn consume_tag_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                name.push(c.to_ascii_lowercase());
                self.position += 1;
            } else {
                break;
            }
        }
        name
    }

    /// Consume characters until (not including) the given terminator.
    fn consume_until(&mut self, end: char) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == end {
                break;
            }
            out.push(c);
            self.position += 1;
        }
        out
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Case-insensitive lookahead at the current position.
    fn lookahead_matches(&self, needle: &str) -> bool {
        let mut pos = self.position;
        for expected in needle.chars() {
            match self.input.get(pos) {
                Some(c) if c.eq_ignore_ascii_case(&expected) => pos += 1,
                _ => return false,
            }
        }
        true
    }
}
