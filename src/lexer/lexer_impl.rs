//! Implementation of the tame lexer
//!
//! This module provides convenience functions for tokenizing tame text.
//! The actual tokenization is handled entirely by logos; the only extra work
//! is the indentation transform applied by [`lex`].

use crate::lexer::indentation_transform::mark_indentation;
use crate::lexer::tokens::Token;
use logos::Logos;

/// A token paired with its byte span into the source text
pub type TokenSpan = (Token, std::ops::Range<usize>);

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<TokenSpan> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Tokenize a string and apply the indentation transform.
///
/// This is the token stream the grammar consumes: identical to
/// [`tokenize_with_spans`] except that whitespace at the start of a line is
/// marked as [`Token::Indent`].
pub fn lex(source: &str) -> Vec<TokenSpan> {
    mark_indentation(tokenize_with_spans(source))
}
