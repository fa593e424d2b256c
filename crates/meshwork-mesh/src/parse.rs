//! Brace-literal tokenizer.
//!
//! Grammar, with the delimiters taken from a [`TextFormat`]:
//!
//! ```text
//! literal := open [ item ( separator item )* ] close
//! item    := literal | leaf
//! ```
//!
//! Whitespace around items is ignored. Inside a leaf, text between two
//! quote characters is taken verbatim (delimiters included) and the quotes
//! are dropped. Siblings must all be leaves or all be literals, and the
//! result must be rectangular.

use std::iter::Peekable;
use std::str::CharIndices;

use meshwork_core::{MeshError, ParseError, Shape};

use crate::format::TextFormat;
use crate::nested::Nested;

/// A tokenized literal: its shape and its leaf tokens in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Literal {
    shape: Shape,
    leaves: Vec<String>,
}

impl Literal {
    pub(crate) fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub(crate) fn leaves(&self) -> &[String] {
        &self.leaves
    }
}

/// Tokenize `text` and infer its shape.
pub(crate) fn parse_literal(text: &str, format: &TextFormat) -> Result<Literal, MeshError> {
    format.validate()?;
    if text.trim().is_empty() {
        return Err(ParseError::Empty.into());
    }
    let mut parser = Parser {
        chars: text.char_indices().peekable(),
        format,
    };
    parser.skip_whitespace();
    let root = parser.literal(1)?;
    parser.skip_whitespace();
    if let Some(&(position, found)) = parser.chars.peek() {
        let err = if found == format.close {
            ParseError::UnbalancedBraces { position }
        } else {
            ParseError::UnexpectedCharacter { position, found }
        };
        return Err(err.into());
    }
    let (shape, leaves) = root.into_shape_and_cells()?;
    Ok(Literal { shape, leaves })
}

enum Item {
    Leaf(String),
    Literal(Nested<String>),
}

struct Parser<'t> {
    chars: Peekable<CharIndices<'t>>,
    format: &'t TextFormat,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn literal(&mut self, depth: usize) -> Result<Nested<String>, MeshError> {
        let open_at = match self.chars.next() {
            Some((position, c)) if c == self.format.open => position,
            Some((position, found)) => {
                return Err(ParseError::UnexpectedCharacter { position, found }.into())
            }
            None => return Err(ParseError::Empty.into()),
        };
        if depth > self.format.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.format.max_depth,
            }
            .into());
        }

        let close = self.format.close;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.chars.next_if(|&(_, c)| c == close).is_some() {
            return Ok(Nested::Cells(Vec::new()));
        }
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                None => return Err(ParseError::UnbalancedBraces { position: open_at }.into()),
                Some(&(_, c)) if c == self.format.open => {
                    items.push(Item::Literal(self.literal(depth + 1)?));
                }
                Some(&(position, c)) if c == self.format.separator || c == self.format.close => {
                    return Err(ParseError::EmptyElement { position }.into());
                }
                Some(_) => items.push(Item::Leaf(self.leaf()?)),
            }
            self.skip_whitespace();
            match self.chars.next() {
                None => return Err(ParseError::UnbalancedBraces { position: open_at }.into()),
                Some((_, c)) if c == self.format.separator => continue,
                Some((_, c)) if c == self.format.close => break,
                Some((position, found)) => {
                    return Err(ParseError::UnexpectedCharacter { position, found }.into())
                }
            }
        }
        collect_items(items)
    }

    /// Read one leaf, stopping before the next unquoted delimiter.
    fn leaf(&mut self) -> Result<String, MeshError> {
        let format = self.format;
        let mut token = String::new();
        let mut significant = 0;
        let mut open_quote: Option<usize> = None;
        while let Some(&(position, c)) = self.chars.peek() {
            if open_quote.is_some() {
                self.chars.next();
                if c == format.quote {
                    open_quote = None;
                } else {
                    token.push(c);
                }
                significant = token.len();
                continue;
            }
            if c == format.open || c == format.close || c == format.separator {
                break;
            }
            self.chars.next();
            if c == format.quote {
                open_quote = Some(position);
                significant = token.len();
                continue;
            }
            token.push(c);
            if !c.is_whitespace() {
                significant = token.len();
            }
        }
        if let Some(position) = open_quote {
            return Err(ParseError::UnexpectedCharacter {
                position,
                found: format.quote,
            }
            .into());
        }
        token.truncate(significant);
        Ok(token)
    }
}

fn collect_items(items: Vec<Item>) -> Result<Nested<String>, MeshError> {
    let mut leaves = Vec::new();
    let mut rows = Vec::new();
    for item in items {
        match item {
            Item::Leaf(leaf) => leaves.push(leaf),
            Item::Literal(row) => rows.push(row),
        }
    }
    match (leaves.is_empty(), rows.is_empty()) {
        (_, true) => Ok(Nested::Cells(leaves)),
        (true, false) => Ok(Nested::Rows(rows)),
        (false, false) => Err(MeshError::InvalidShape {
            reason: "literal mixes leaves and nested literals".to_string(),
        }),
    }
}
