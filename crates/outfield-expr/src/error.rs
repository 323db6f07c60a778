//! Parse errors.

use std::error::Error;
use std::fmt;

/// Errors produced while compiling expression source text.
///
/// Positions are byte offsets into the source.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The source contains no tokens.
    Empty,
    /// A character that cannot start any token.
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        pos: usize,
    },
    /// A token that does not fit the grammar at this point.
    UnexpectedToken {
        /// Description of the token found.
        found: String,
        /// Byte offset of the token.
        pos: usize,
    },
    /// The source ended while more input was required.
    UnexpectedEnd,
    /// A numeric literal that does not parse as `f64`.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// Byte offset of the literal.
        pos: usize,
    },
    /// Parentheses, calls, signs or exponents nested past
    /// [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
    TooDeep {
        /// Byte offset where the limit was reached.
        pos: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty expression"),
            Self::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character '{ch}' at offset {pos}")
            }
            Self::UnexpectedToken { found, pos } => {
                write!(f, "unexpected {found} at offset {pos}")
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of expression"),
            Self::InvalidNumber { text, pos } => {
                write!(f, "invalid number '{text}' at offset {pos}")
            }
            Self::TooDeep { pos } => {
                write!(f, "expression nested too deeply at offset {pos}")
            }
        }
    }
}

impl Error for ParseError {}
