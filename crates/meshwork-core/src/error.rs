//! Error types for mesh construction, traversal, arithmetic, and parsing.
//!
//! Every failure is local and synchronous. None of them is retryable: a
//! caller that needs atomicity must copy the mesh before the operation.

use std::error::Error;
use std::fmt;

use crate::index::{Index, Shape};

/// Errors from mesh and crawler operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// An operand does not conform to the receiver's shape.
    ///
    /// Raised before any crawler advances, so the receiver is untouched.
    ShapeMismatch {
        /// Shape of the receiver.
        expected: Shape,
        /// Shape of the offending operand.
        actual: Shape,
    },
    /// A shape is structurally invalid (empty, ragged, or rank mismatch).
    InvalidShape {
        /// What went wrong.
        reason: String,
    },
    /// An index component lies outside its dimension, or the index has
    /// the wrong number of components.
    IndexOutOfRange {
        /// The offending index.
        index: Index,
        /// Extents of the mesh (or crawler bounds) it was checked against.
        shape: Shape,
    },
    /// `advance()` was called with no unvisited cell remaining.
    IteratorExhausted,
    /// The crawler was read or written before its first `advance()`
    /// or `set_position()`.
    NotPositioned,
    /// No scalar storage kind matches the runtime element type.
    UnsupportedElementType {
        /// Rust type name of the rejected element type.
        type_name: &'static str,
    },
    /// Brace-literal text could not be parsed.
    Parse(ParseError),
    /// Storage for the requested shape could not be allocated.
    Allocation {
        /// What went wrong.
        reason: String,
    },
    /// An integral division met a zero divisor.
    DivisionByZero,
    /// A configuration value failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl MeshError {
    /// Shorthand for a [`MeshError::ShapeMismatch`] between two shapes.
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: Shape::from_slice(expected),
            actual: Shape::from_slice(actual),
        }
    }

    /// Shorthand for a [`MeshError::IndexOutOfRange`].
    pub fn index_out_of_range(index: &[usize], shape: &[usize]) -> Self {
        Self::IndexOutOfRange {
            index: Index::from_slice(index),
            shape: Shape::from_slice(shape),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "shape mismatch: expected {:?}, got {:?}",
                    expected.as_slice(),
                    actual.as_slice()
                )
            }
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::IndexOutOfRange { index, shape } => {
                write!(
                    f,
                    "index {:?} out of range for shape {:?}",
                    index.as_slice(),
                    shape.as_slice()
                )
            }
            Self::IteratorExhausted => write!(f, "crawler has no more cells"),
            Self::NotPositioned => write!(f, "crawler is not positioned on a cell"),
            Self::UnsupportedElementType { type_name } => {
                write!(f, "unsupported element type: {type_name}")
            }
            Self::Parse(err) => write!(f, "parse error: {err}"),
            Self::Allocation { reason } => write!(f, "allocation failed: {reason}"),
            Self::DivisionByZero => write!(f, "integral division by zero"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for MeshError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for MeshError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Errors from tokenizing and typing brace-literal text.
///
/// Positions are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains nothing but whitespace.
    Empty,
    /// A closing brace has no matching opening brace, or the input ends
    /// with braces still open.
    UnbalancedBraces {
        /// Where the imbalance was detected.
        position: usize,
    },
    /// A character appeared where the grammar does not allow it.
    UnexpectedCharacter {
        /// Offset of the character.
        position: usize,
        /// The character found.
        found: char,
    },
    /// Two separators (or a brace and a separator) enclose no element.
    EmptyElement {
        /// Offset just past the empty slot.
        position: usize,
    },
    /// Braces nest deeper than the configured limit.
    TooDeep {
        /// The configured limit.
        max_depth: usize,
    },
    /// A leaf token does not parse as the requested element type.
    InvalidElement {
        /// The token text.
        token: String,
        /// Name of the element type it was parsed as.
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::UnbalancedBraces { position } => {
                write!(f, "unbalanced braces at offset {position}")
            }
            Self::UnexpectedCharacter { position, found } => {
                write!(f, "unexpected character {found:?} at offset {position}")
            }
            Self::EmptyElement { position } => write!(f, "empty element at offset {position}"),
            Self::TooDeep { max_depth } => {
                write!(f, "nesting exceeds maximum depth {max_depth}")
            }
            Self::InvalidElement { token, expected } => {
                write!(f, "cannot parse {token:?} as {expected}")
            }
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_display_lists_both_shapes() {
        let err = MeshError::shape_mismatch(&[2, 2], &[2, 3]);
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected [2, 2], got [2, 3]"
        );
    }

    #[test]
    fn parse_error_is_source() {
        let err = MeshError::from(ParseError::EmptyElement { position: 3 });
        let source = err.source().expect("parse errors carry a source");
        assert_eq!(source.to_string(), "empty element at offset 3");
    }

    #[test]
    fn non_parse_errors_have_no_source() {
        assert!(MeshError::IteratorExhausted.source().is_none());
        assert!(MeshError::DivisionByZero.source().is_none());
    }
}
