//! Tree reducer: concrete parse tree to ordered entry sequences
//!
//! The reducer walks the [`CstNode`] tree bottom-up. Leaf nodes become
//! single-field pieces, interior nodes either bubble their non-trivial
//! children up or merge them into a tagged [`Entry`]. Nesting introduced by
//! the grammar's repetition rules is removed by [`flatten`], so callers see
//! one flat, declaration-ordered list per scope.
//!
//! Reduction is a pure function of the tree and the source text it points
//! into; text extraction and value trimming happen here and nowhere else.

use super::entry::Entry;
use super::tree::CstNode;

/// An intermediate reduction result, bubbled up from child nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    /// A node that matched nothing of interest (blank lines)
    Empty,
    /// An unordered bundle of child results, flattened away by [`flatten`]
    Group(Vec<Piece>),
    /// A key or section name leaf
    Key(String),
    /// A value leaf, already trimmed
    Value(String),
    /// A fully reduced entry
    Entry(Entry),
}

/// Flatten a nested piece into a flat sequence with no empty entries.
///
/// Groups are inlined recursively and `Empty` pieces are dropped; leaves
/// come out in the order they appear in the tree.
pub fn flatten(piece: Piece) -> Vec<Piece> {
    match piece {
        Piece::Empty => Vec::new(),
        Piece::Group(children) => children.into_iter().flat_map(flatten).collect(),
        leaf => vec![leaf],
    }
}

/// Reduce a parse tree to the ordered entry sequence of the top-level scope
pub fn reduce(source: &str, tree: &CstNode) -> Vec<Entry> {
    flatten(reduce_node(source, tree))
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Entry(entry) => Some(entry),
            _ => None,
        })
        .collect()
}

fn reduce_node(source: &str, node: &CstNode) -> Piece {
    match node {
        CstNode::Blank => Piece::Empty,
        CstNode::Key(span) => Piece::Key(source[span.clone()].to_string()),
        // Leading/trailing inline whitespace is insignificant; interior
        // whitespace is part of the value and survives verbatim
        CstNode::Value(span) => Piece::Value(source[span.clone()].trim().to_string()),
        CstNode::Header(children) => Piece::Group(reduce_children(source, children)),
        CstNode::Assignment(children) => {
            let pieces = flatten(Piece::Group(reduce_children(source, children)));
            let key = pieces.iter().find_map(|piece| match piece {
                Piece::Key(key) => Some(key.clone()),
                _ => None,
            });
            let value = pieces.into_iter().find_map(|piece| match piece {
                Piece::Value(value) => Some(value),
                _ => None,
            });
            match (key, value) {
                (Some(key), Some(value)) => Piece::Entry(Entry::Assignment { key, value }),
                // The grammar guarantees both children are present
                _ => Piece::Empty,
            }
        }
        CstNode::Section(children) => {
            let pieces = flatten(Piece::Group(reduce_children(source, children)));
            let mut name = None;
            let mut entries = Vec::new();
            for piece in pieces {
                match piece {
                    // The header's key, bubbled up as the section name
                    Piece::Key(key) if name.is_none() => name = Some(key),
                    Piece::Entry(entry) => entries.push(entry),
                    _ => {}
                }
            }
            match name {
                Some(name) => Piece::Entry(Entry::Section { name, entries }),
                None => Piece::Empty,
            }
        }
        CstNode::Config(children) => Piece::Group(reduce_children(source, children)),
    }
}

fn reduce_children(source: &str, children: &[CstNode]) -> Vec<Piece> {
    children
        .iter()
        .map(|child| reduce_node(source, child))
        .collect()
}
