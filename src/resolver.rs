//! Interpolation resolver
//!
//! Resolves `{key}` placeholders within one scope, then recurses into
//! sections. Resolution is two-phase per scope:
//!
//! 1. Partition the scope's assignments into literals (no placeholder) and
//!    pending values (at least one placeholder). The literal map is complete
//!    before any substitution happens, which is what makes forward
//!    references work: a placeholder may name a key declared later in the
//!    same scope.
//! 2. Substitute every placeholder occurrence in every pending value from
//!    the literal map, and build the scope's mapping in declaration order.
//!
//! Substitution draws only on the literal map. A placeholder naming a key
//! whose own value is interpolated fails with
//! [`ParseError::ChainedReference`]; a placeholder naming a key absent from
//! the scope fails with [`ParseError::UnresolvedReference`]. Both abort the
//! whole parse: no partial document is ever returned. Placeholders never
//! cross scope boundaries; each section resolves against its own
//! assignments only.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::document::{Document, Value};
use crate::error::ParseError;
use crate::parser::Entry;

/// A `{name}` placeholder inside a value
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Resolve one scope's entries into a document, recursing into sections
pub fn resolve(entries: &[Entry]) -> Result<Document, ParseError> {
    let mut literals: HashMap<String, String> = HashMap::new();
    let mut pending_keys: HashSet<String> = HashSet::new();

    for entry in entries {
        if let Entry::Assignment { key, value } = entry {
            if PLACEHOLDER.is_match(value) {
                pending_keys.insert(key.to_lowercase());
            } else {
                // Later assignments overwrite earlier ones before any
                // substitution, so every reference sees the final literal
                literals.insert(key.to_lowercase(), value.clone());
            }
        }
    }

    let mut document = Document::new();
    for entry in entries {
        match entry {
            Entry::Assignment { key, value } => {
                let resolved = if PLACEHOLDER.is_match(value) {
                    substitute(key, value, &literals, &pending_keys)?
                } else {
                    value.clone()
                };
                document.insert(key, Value::String(resolved));
            }
            Entry::Section { name, entries } => {
                document.insert(name, Value::Section(resolve(entries)?));
            }
        }
    }

    Ok(document)
}

/// Substitute every placeholder occurrence in one pending value
fn substitute(
    key: &str,
    value: &str,
    literals: &HashMap<String, String>,
    pending_keys: &HashSet<String>,
) -> Result<String, ParseError> {
    let mut resolved = String::with_capacity(value.len());
    let mut tail = 0;

    for placeholder in PLACEHOLDER.find_iter(value) {
        // The match is `{name}`; strip the braces to get the name
        let name = &value[placeholder.start() + 1..placeholder.end() - 1];
        let folded = name.to_lowercase();

        resolved.push_str(&value[tail..placeholder.start()]);
        match literals.get(&folded) {
            Some(replacement) => resolved.push_str(replacement),
            None if pending_keys.contains(&folded) => {
                return Err(ParseError::ChainedReference {
                    key: key.to_string(),
                    name: name.to_string(),
                })
            }
            None => {
                return Err(ParseError::UnresolvedReference {
                    key: key.to_string(),
                    name: name.to_string(),
                })
            }
        }
        tail = placeholder.end();
    }

    resolved.push_str(&value[tail..]);
    Ok(resolved)
}
