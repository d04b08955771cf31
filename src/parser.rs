//! Parser module for the tame format
//!
//! Parsing runs in two stages, both pure functions:
//!
//! 1. [`grammar`] recognizes the token stream and produces a concrete parse
//!    tree ([`CstNode`]), or rejects the input with positioned errors.
//! 2. [`reduce`] walks that tree and reduces it to the ordered
//!    [`Entry`] sequence the interpolation resolver consumes.
//!
//! The concrete tree never leaves a parse call; only entries survive.

pub mod entry;
pub mod grammar;
pub mod reduce;
pub mod source_location;
pub mod tree;

pub use entry::Entry;
pub use grammar::{parse_tree, GrammarError};
pub use reduce::{flatten, reduce, Piece};
pub use source_location::{Position, SourceLocation};
pub use tree::{CstNode, Span};
