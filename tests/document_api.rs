//! Integration tests for the document consumer contract
//!
//! The document is a read-only, ordered, case-insensitive mapping: any-case
//! lookup normalizes to lower case, iteration yields lower-cased keys in
//! declaration order, and sections are nested documents of the same shape.

use tame::{parse, Value};

const SHOP_SKETCH: &str = "\
owner: Mr Praline
pet: Norwegian Blue

parrot:
    complaint: it is dead
    hypothesis: it's pining

shopkeeper:
    claim: it's resting
";

#[test]
fn test_iteration_yields_lowercase_keys_in_order() {
    let doc = parse(SHOP_SKETCH).unwrap();
    assert_eq!(
        doc.keys().collect::<Vec<_>>(),
        vec!["owner", "pet", "parrot", "shopkeeper"]
    );
}

#[test]
fn test_iter_pairs() {
    let doc = parse(SHOP_SKETCH).unwrap();
    let strings: Vec<(&str, &str)> = doc
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|v| (key, v)))
        .collect();
    assert_eq!(
        strings,
        vec![("owner", "Mr Praline"), ("pet", "Norwegian Blue")]
    );
}

#[test]
fn test_len_counts_sections_and_strings() {
    let doc = parse(SHOP_SKETCH).unwrap();
    assert_eq!(doc.len(), 4);
    assert!(!doc.is_empty());
}

#[test]
fn test_contains_key_any_case() {
    let doc = parse(SHOP_SKETCH).unwrap();
    assert!(doc.contains_key("OWNER"));
    assert!(doc.contains_key("Parrot"));
    assert!(!doc.contains_key("till"));
}

#[test]
fn test_get_str_returns_none_for_sections() {
    let doc = parse(SHOP_SKETCH).unwrap();
    assert_eq!(doc.get_str("parrot"), None);
    assert!(doc.section("parrot").is_some());
}

#[test]
fn test_section_lookup_is_case_insensitive_at_both_levels() {
    let doc = parse(SHOP_SKETCH).unwrap();
    let parrot = doc.section("PARROT").unwrap();
    assert_eq!(parrot.get_str("Complaint"), Some("it is dead"));
}

#[test]
fn test_index_and_match_on_value() {
    let doc = parse(SHOP_SKETCH).unwrap();
    match &doc["shopkeeper"] {
        Value::Section(section) => {
            assert_eq!(section.get_str("claim"), Some("it's resting"));
        }
        Value::String(value) => panic!("expected a section, got {:?}", value),
    }
}

#[test]
fn test_document_survives_the_parse_call() {
    // The document owns its data; nothing borrows from the source text
    let doc = {
        let source = String::from("pet: parrot\n");
        parse(&source).unwrap()
    };
    assert_eq!(doc.get_str("pet"), Some("parrot"));
}

#[test]
fn test_json_rendering() {
    let doc = parse("pet: parrot\nparrot:\n    complaint: it is dead\n").unwrap();
    insta::assert_snapshot!(tame::formats::to_json(&doc), @r#"
    {
      "pet": "parrot",
      "parrot": {
        "complaint": "it is dead"
      }
    }
    "#);
}
