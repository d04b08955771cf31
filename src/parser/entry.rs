//! The reduced representation of a parsed configuration
//!
//! An [`Entry`] is the unit the interpolation resolver works with. The
//! variant is decided at construction time by the reducer; nothing
//! downstream ever probes a node to guess its shape.

/// One entry of a scope, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A single `key: value` declaration
    Assignment { key: String, value: String },
    /// A named group of assignments, exactly one nesting level deep.
    /// `entries` holds only `Assignment` variants; the grammar does not
    /// admit a section inside a section.
    Section { name: String, entries: Vec<Entry> },
}

impl Entry {
    /// Construct an assignment entry
    pub fn assignment(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::Assignment {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Construct a section entry
    pub fn section(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Entry::Section {
            name: name.into(),
            entries,
        }
    }
}
