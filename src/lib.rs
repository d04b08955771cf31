//! # tame
//!
//! A parser for the tame configuration format: a small, human-writable text
//! format of `key: value` assignments, optional named sections one level
//! deep, and `{key}` interpolation between values in the same scope.
//!
//! ```text
//! pet: parrot
//! this_is: a dead {pet}
//!
//! shopkeeper:
//!     claim = it's resting
//!     retort = it's pining for the fjords
//! ```
//!
//! Parsing is a pure, synchronous function of the input string. The pipeline
//! runs one way: tokens ([`lexer`]) → concrete parse tree → entries
//! ([`parser`]) → resolved document ([`resolver`]). The resulting
//! [`Document`] is ordered, read-only and case-insensitive.
//!
//! ```
//! let doc = tame::parse("pet: parrot\nthis_is: a dead {pet}\n").unwrap();
//! assert_eq!(doc.get_str("this_is"), Some("a dead parrot"));
//! assert_eq!(doc.get_str("THIS_IS"), Some("a dead parrot"));
//! ```

pub mod document;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use document::{Document, Value};
pub use error::ParseError;
pub use parser::{Entry, Position};

/// Parse a configuration text into a resolved [`Document`].
///
/// This is the primary entry point. The entire input must conform to the
/// grammar; on failure the error carries the furthest position the grammar
/// reached. Interpolation placeholders are fully substituted before the
/// document is returned; an unresolvable placeholder fails the parse.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let tokens = lexer::lex(source);
    let tree = parser::parse_tree(tokens).map_err(|errors| error::syntax_error(source, errors))?;
    let entries = parser::reduce(source, &tree);
    resolver::resolve(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_pair() {
        let doc = parse("foo: bar").unwrap();
        assert_eq!(doc.get_str("foo"), Some("bar"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_parse_rejects_leading_indentation() {
        assert!(matches!(
            parse("    foo: bar"),
            Err(ParseError::Syntax { .. })
        ));
    }
}
