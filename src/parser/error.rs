//! Parser error types.

use std::fmt;

use crate::parser::types::PairId;

/// Errors that can occur within [`crate::parser::Parser`].
#[derive(Debug)]
#[non_exhaustive]
pub enum ParserError {
    /// An operation named a pair id that was not supplied at construction.
    UnknownPair(PairId),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::UnknownPair(pair) => write!(f, "unknown pair: {pair}"),
        }
    }
}

impl std::error::Error for ParserError {}
