//! Indentation transformation for the tame lexer
//!
//! logos tokenizes without line context, so a run of spaces at the start of a
//! line and a run of spaces between a key and its value both come out as
//! `Whitespace`. The grammar needs to tell them apart: leading whitespace is
//! the only thing that marks a line as belonging to a section. This pass
//! rewrites line-leading `Whitespace` tokens into `Indent` tokens.

use crate::lexer::lexer_impl::TokenSpan;
use crate::lexer::tokens::Token;

/// Rewrite `Whitespace` tokens at the start of a line into `Indent` tokens.
///
/// A token is at the start of a line when it is the first token of the input
/// or directly follows a `Newline`. Spans are preserved; the indentation
/// width is insignificant to the grammar.
pub fn mark_indentation(tokens: Vec<TokenSpan>) -> Vec<TokenSpan> {
    let mut at_line_start = true;

    tokens
        .into_iter()
        .map(|(token, span)| {
            let token = match token {
                Token::Whitespace if at_line_start => Token::Indent,
                other => other,
            };
            at_line_start = matches!(token, Token::Newline);
            (token, span)
        })
        .collect()
}
