//! Grammar for the tame format, built from chumsky combinators
//!
//! The grammar recognizes the complete input or fails; a partial match with
//! trailing unconsumed tokens is a failure, not a success. Alternatives are
//! ordered so that blank-line rules are tried before content rules, which
//! lets whitespace-only lines act as no-ops at every structural position.
//!
//! The parsers work on `(Token, Range<usize>)` pairs so that leaf nodes of
//! the resulting [`CstNode`] tree carry byte spans back into the source.

use chumsky::prelude::*;

use super::tree::{CstNode, Span};
use crate::lexer::{Token, TokenSpan};

/// The error type produced by the grammar
pub type GrammarError = Simple<TokenSpan>;

/// Match a specific token kind, ignoring its span
fn token(t: Token) -> impl Parser<TokenSpan, (), Error = GrammarError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

/// Optional inline whitespace around keys, operators and values
fn inline_ws() -> impl Parser<TokenSpan, (), Error = GrammarError> + Clone {
    token(Token::Whitespace).or_not().ignored()
}

/// A line terminator: an explicit newline, or the end of the input
fn line_end() -> impl Parser<TokenSpan, (), Error = GrammarError> + Clone {
    token(Token::Newline).or(end())
}

/// A key: a single `Word` token (`[A-Za-z0-9][A-Za-z0-9_]*`)
fn key() -> impl Parser<TokenSpan, Span, Error = GrammarError> + Clone {
    filter(|(tok, _): &TokenSpan| matches!(tok, Token::Word)).map(|(_, span)| span)
}

/// The assignment operator: `:` and `=` are interchangeable
fn operator() -> impl Parser<TokenSpan, (), Error = GrammarError> + Clone {
    token(Token::Colon).or(token(Token::Equals))
}

/// A value: everything up to the end of the line, with at least one
/// non-whitespace character.
///
/// The first token must be non-whitespace; the rest of the line is taken
/// verbatim, trailing whitespace included. The resulting span runs from the
/// first to the last token and is trimmed during reduction, so interior
/// whitespace survives exactly as written.
fn value() -> impl Parser<TokenSpan, Span, Error = GrammarError> + Clone {
    let content = filter(|(tok, _): &TokenSpan| {
        !matches!(tok, Token::Newline | Token::Whitespace | Token::Indent)
    });
    let rest = filter(|(tok, _): &TokenSpan| !matches!(tok, Token::Newline));

    content
        .then(rest.repeated())
        .map(|((_, first), rest): (TokenSpan, Vec<TokenSpan>)| {
            let end = rest.last().map(|(_, span)| span.end).unwrap_or(first.end);
            first.start..end
        })
}

/// One `key: value` assignment, without its line terminator
fn assignment() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    key()
        .then_ignore(inline_ws())
        .then_ignore(operator())
        .then_ignore(inline_ws())
        .then(value())
        .map(|(key, value)| {
            CstNode::Assignment(vec![CstNode::Key(key), CstNode::Value(value)])
        })
}

/// A section header: a key, a colon and nothing else on the line.
///
/// Headers accept only `:`, never `=`. The newline is mandatory: a header
/// cannot be the last line of the input because a section must own at least
/// one assignment.
fn header() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    key()
        .then_ignore(inline_ws())
        .then_ignore(token(Token::Colon))
        .then_ignore(inline_ws())
        .then_ignore(token(Token::Newline))
        .map(|name| CstNode::Header(vec![CstNode::Key(name)]))
}

/// A whitespace-only line, insignificant at every structural position
fn blank_line() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    token(Token::Indent)
        .then_ignore(line_end())
        .or(token(Token::Newline))
        .to(CstNode::Blank)
}

/// An unindented assignment line
fn top_assignment_line() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    assignment().then_ignore(line_end())
}

/// An indented assignment line, owned by the enclosing section
fn indented_assignment_line() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    token(Token::Indent)
        .ignore_then(assignment())
        .then_ignore(line_end())
}

/// A section: a header followed by one or more indented assignment lines,
/// each possibly preceded by blank lines
fn section() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> + Clone {
    let item = blank_line()
        .repeated()
        .then(indented_assignment_line())
        .map(|(mut nodes, assignment)| {
            nodes.push(assignment);
            nodes
        });

    header()
        .then(item.repeated().at_least(1).map(concat_groups))
        .map(|(header, body)| {
            let mut children = vec![header];
            children.extend(body);
            CstNode::Section(children)
        })
}

/// A complete configuration: top-level assignments strictly before sections,
/// blank lines allowed everywhere, the entire input consumed
fn config() -> impl Parser<TokenSpan, CstNode, Error = GrammarError> {
    let top_item = blank_line()
        .repeated()
        .then(top_assignment_line())
        .map(append_group);
    let section_item = blank_line().repeated().then(section()).map(append_group);

    top_item
        .repeated()
        .map(concat_groups)
        .then(section_item.repeated().map(concat_groups))
        .then(blank_line().repeated())
        .then_ignore(end())
        .map(|((mut children, sections), trailing)| {
            children.extend(sections);
            children.extend(trailing);
            CstNode::Config(children)
        })
}

fn append_group((mut nodes, node): (Vec<CstNode>, CstNode)) -> Vec<CstNode> {
    nodes.push(node);
    nodes
}

fn concat_groups(groups: Vec<Vec<CstNode>>) -> Vec<CstNode> {
    groups.into_iter().flatten().collect()
}

/// Run the grammar over a token stream, producing the concrete parse tree
/// or the list of grammar errors
pub fn parse_tree(tokens: Vec<TokenSpan>) -> Result<CstNode, Vec<GrammarError>> {
    config().parse(tokens)
}
