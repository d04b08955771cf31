//! Concrete parse tree for the tame format
//!
//! The grammar produces this tree and the reducer consumes it; it never
//! escapes a parse call. Leaf nodes hold byte spans into the source text
//! rather than extracted strings, so text extraction (and value trimming)
//! happens in exactly one place, the reducer.

/// A byte range into the source text
pub type Span = std::ops::Range<usize>;

/// A node of the concrete parse tree
#[derive(Debug, Clone, PartialEq)]
pub enum CstNode {
    /// The whole input: blank lines, top-level assignments, then sections
    Config(Vec<CstNode>),
    /// A section header followed by its indented assignments
    Section(Vec<CstNode>),
    /// A section header line; holds the section name as a `Key` child
    Header(Vec<CstNode>),
    /// One `key: value` (or `key = value`) line; holds `Key` and `Value` children
    Assignment(Vec<CstNode>),
    /// A key or section name
    Key(Span),
    /// The raw value text, spanning from the first to the last value token
    Value(Span),
    /// A whitespace-only line; discarded by the reducer
    Blank,
}
