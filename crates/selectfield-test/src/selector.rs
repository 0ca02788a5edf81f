//! CSS-like selector parsing for element queries.
//!
//! Supports:
//! - `"select"` - by tag
//! - `"#fruit"` - by ID
//! - `".select-field__select"` - by class
//! - `"[data-testid='picker']"` - by test ID
//! - `"[selected]"`, `"[value='b']"` - by attribute presence or value
//! - `"option[value='b']"` - compound
//! - `"select option"`, `"select > option"` - descendant and child

use selectfield_core::Element;
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name
    Type(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by class (e.g., `.my-class`)
    Class(String),
    /// Match by attribute, with or without a value
    Attribute {
        /// Attribute name
        name: String,
        /// Required value (None: presence only)
        value: Option<String>,
    },
    /// All parts must match the same element
    Compound(Vec<Selector>),
    /// Descendant combinator (e.g., `select option`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `select > option`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches `element`.
    ///
    /// `ancestors` lists the element's ancestors from the root down to its
    /// parent.
    #[must_use]
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        match self {
            Self::Type(tag) => element.tag() == tag,
            Self::Id(id) => element.attribute("id") == Some(id.as_str()),
            Self::TestId(id) => element.attribute("data-testid") == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attribute { name, value } => match value {
                Some(value) => element.attribute(name) == Some(value.as_str()),
                None => element.has_attribute(name),
            },
            Self::Compound(parts) => parts.iter().all(|part| part.matches(element, ancestors)),
            Self::Descendant(ancestor, inner) => {
                inner.matches(element, ancestors)
                    && (0..ancestors.len())
                        .any(|i| ancestor.matches(ancestors[i], &ancestors[..i]))
            }
            Self::Child(parent, inner) => {
                inner.matches(element, ancestors)
                    && ancestors.split_last().is_some_and(|(last, rest)| parent.matches(last, rest))
            }
        }
    }

    /// Collect every element in `root` (inclusive) matching this selector,
    /// in document order.
    #[must_use]
    pub fn select_all<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        let mut results = Vec::new();
        let mut ancestors = Vec::new();
        self.walk(root, &mut ancestors, &mut results);
        results
    }

    fn walk<'a>(
        &self,
        element: &'a Element,
        ancestors: &mut Vec<&'a Element>,
        results: &mut Vec<&'a Element>,
    ) {
        if self.matches(element, ancestors) {
            results.push(element);
        }
        ancestors.push(element);
        for child in element.child_elements() {
            self.walk(child, ancestors, results);
        }
        ancestors.pop();
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_compound()?;
        loop {
            let had_space = self.skip_whitespace();
            match self.peek_char() {
                None => return Ok(selector),
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let inner = self.parse_compound()?;
                    selector = Selector::Child(Box::new(selector), Box::new(inner));
                }
                Some(_) if had_space => {
                    let inner = self.parse_compound()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(inner));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    fn parse_compound(&mut self) -> Result<Selector, SelectorError> {
        let first = self.peek_char().ok_or(SelectorError::Empty)?;
        let mut parts = Vec::new();

        if first.is_alphabetic() {
            parts.push(Selector::Type(self.read_identifier()?));
        }

        while let Some(c) = self.peek_char() {
            match c {
                '#' => parts.push(self.parse_id()?),
                '.' => parts.push(self.parse_class()?),
                '[' => parts.push(self.parse_attribute()?),
                _ => break,
            }
        }

        match parts.len() {
            0 => Err(SelectorError::UnexpectedChar(first)),
            1 => Ok(parts.remove(0)),
            _ => Ok(Selector::Compound(parts)),
        }
    }

    fn parse_id(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '#'
        Ok(Selector::Id(self.read_identifier()?))
    }

    fn parse_class(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '.'
        Ok(Selector::Class(self.read_identifier()?))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['

        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if name.is_empty() {
            return Err(SelectorError::InvalidAttribute);
        }

        let value = if self.peek_char() == Some('=') {
            self.advance();
            let quote = self.peek_char().filter(|&c| c == '\'' || c == '"');
            let value = if let Some(quote) = quote {
                self.advance();
                let value = self.read_until_any(&[quote]);
                if self.peek_char() != Some(quote) {
                    return Err(SelectorError::UnclosedAttribute);
                }
                self.advance();
                value
            } else {
                self.read_until_any(&[']'])
            };
            Some(value)
        } else {
            None
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match (name.as_str(), value) {
            ("data-testid", Some(value)) => Ok(Selector::TestId(value)),
            (_, value) => Ok(Selector::Attribute { name, value }),
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
}
