//! Error types for tame parsing
//!
//! A grammar failure aborts the entire parse; there is no partial recovery
//! or partial document. Interpolation failures are scope-local in cause but
//! whole-parse in effect: the first unresolvable placeholder fails the
//! parse.

use std::fmt;

use crate::lexer::TokenSpan;
use crate::parser::grammar::GrammarError;
use crate::parser::{Position, SourceLocation};

/// Errors produced by [`parse`](crate::parse)
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The grammar could not consume the entire input. Carries the furthest
    /// position reached and a description of the offending token.
    Syntax { position: Position, message: String },
    /// A `{name}` placeholder in the value of `key` names a key that is not
    /// defined in the same scope.
    UnresolvedReference { key: String, name: String },
    /// A `{name}` placeholder in the value of `key` names a key whose own
    /// value is interpolated. Substitution draws only on literal values, so
    /// chained interpolation is rejected rather than resolved.
    ChainedReference { key: String, name: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { position, message } => {
                write!(f, "syntax error at {}: {}", position, message)
            }
            ParseError::UnresolvedReference { key, name } => write!(
                f,
                "value of `{}` references `{}`, which is not defined in its scope",
                key, name
            ),
            ParseError::ChainedReference { key, name } => write!(
                f,
                "value of `{}` references `{}`, whose value is itself interpolated; \
                 chained interpolation is not supported",
                key, name
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Convert grammar errors into a single positioned syntax error.
///
/// The grammar reports one error per failed alternative; the one that got
/// furthest into the input is the most useful diagnostic, so that one wins.
pub(crate) fn syntax_error(source: &str, errors: Vec<GrammarError>) -> ParseError {
    let location = SourceLocation::new(source);

    let furthest = errors.into_iter().max_by_key(|error| offset_of(error, source));
    let (offset, message) = match furthest {
        Some(error) => {
            let message = match error.found() {
                Some((token, _)) => format!("unexpected {}", token.describe()),
                None => "unexpected end of input".to_string(),
            };
            (offset_of(&error, source), message)
        }
        // The grammar never fails without producing an error; cover it anyway
        None => (source.len(), "invalid input".to_string()),
    };

    ParseError::Syntax {
        position: location.position(offset),
        message,
    }
}

/// The byte offset of a grammar error: the offending token's span start, or
/// the end of the input when the grammar ran out of tokens
fn offset_of(error: &GrammarError, source: &str) -> usize {
    error
        .found()
        .map(|token: &TokenSpan| token.1.start)
        .unwrap_or(source.len())
}
