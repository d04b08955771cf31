//! Lexer module for the tame format
//!
//! Tokenization is handled by logos; see [`tokens`] for the token set.
//! The [`indentation_transform`] pass marks line-leading whitespace so the
//! grammar can discriminate section-scoped lines from top-level lines.

pub mod indentation_transform;
pub mod lexer_impl;
pub mod tokens;

pub use indentation_transform::mark_indentation;
pub use lexer_impl::{lex, tokenize, tokenize_with_spans, TokenSpan};
pub use tokens::Token;
