//! Property-based tests for parsing and resolution
//!
//! These pin the format's core guarantees: declaration order must not affect
//! resolved values, lookup is case-insensitive, and literal values round-trip
//! exactly (interior whitespace included).

use proptest::prelude::*;

/// A legal key: alphanumeric start, alphanumeric/underscore continuation
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_]{0,7}"
}

/// A literal value with no placeholders and no boundary whitespace
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,18}[a-zA-Z0-9]"
}

proptest! {
    #[test]
    fn prop_declaration_order_is_irrelevant(
        pairs in prop::collection::hash_map(key_strategy(), value_strategy(), 1..6)
    ) {
        let pairs: Vec<(String, String)> = pairs.into_iter().collect();
        let forward: String = pairs
            .iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect();
        let backward: String = pairs
            .iter()
            .rev()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect();

        let first = tame::parse(&forward).unwrap();
        let second = tame::parse(&backward).unwrap();
        for (key, value) in &pairs {
            prop_assert_eq!(first.get_str(key), Some(value.as_str()));
            prop_assert_eq!(second.get_str(key), Some(value.as_str()));
        }
    }

    #[test]
    fn prop_lookup_is_case_insensitive(
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let doc = tame::parse(&format!("{}: {}\n", key, value)).unwrap();
        prop_assert_eq!(doc.get_str(&key), Some(value.as_str()));
        prop_assert_eq!(doc.get_str(&key.to_uppercase()), Some(value.as_str()));
    }

    #[test]
    fn prop_literal_values_round_trip(
        key in key_strategy(),
        words in prop::collection::vec("[a-zA-Z0-9]{1,6}", 1..5),
        tabs in any::<bool>(),
    ) {
        // Interior whitespace, tabs included, must survive verbatim
        let separator = if tabs { "\t" } else { " " };
        let value = words.join(separator);
        let doc = tame::parse(&format!("{}:   {}  \n", key, value)).unwrap();
        prop_assert_eq!(doc.get_str(&key), Some(value.as_str()));
    }

    #[test]
    fn prop_forward_and_backward_references_resolve_identically(
        value in value_strategy(),
    ) {
        let forward = format!("greeting: 'ello {{name}}\nname: {}\n", value);
        let backward = format!("name: {}\ngreeting: 'ello {{name}}\n", value);
        let first = tame::parse(&forward).unwrap();
        let second = tame::parse(&backward).unwrap();
        prop_assert_eq!(first.get_str("greeting"), second.get_str("greeting"));
        let expected = format!("'ello {}", value);
        prop_assert_eq!(first.get_str("greeting"), Some(expected.as_str()));
    }

    #[test]
    fn prop_parsing_is_pure(
        pairs in prop::collection::hash_map(key_strategy(), value_strategy(), 0..5)
    ) {
        let source: String = pairs
            .iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect();
        prop_assert_eq!(tame::parse(&source).unwrap(), tame::parse(&source).unwrap());
    }
}
