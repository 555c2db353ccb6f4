//! End-to-end behaviour of the search engine over a small catalogue.

mod fixtures;

use fixtures::{Product, catalogue, ids};
use std::sync::Arc;
use trie_search::{
    ReplacePattern, SearchOptions, Stringifier, StringifyMode, Tokenizer, TrieSearch,
};

fn engine_with(options: SearchOptions) -> TrieSearch<Product> {
    let mut engine = TrieSearch::with_options(options).unwrap();
    engine.add_many(catalogue()).unwrap();
    engine
}

fn default_engine() -> TrieSearch<Product> {
    engine_with(SearchOptions::default())
}

#[test]
fn test_adds_and_searches_with_defaults() {
    let engine = default_engine();
    assert_eq!(ids(&engine.search("apple")), vec![1, 2, 6]);
    assert_eq!(ids(&engine.search("appl")), vec![1, 2, 6]);
    assert!(engine.search("aple").is_empty());
    assert_eq!(ids(&engine.search("apple chips")), vec![6]);
}

#[test]
fn test_ignores_added_duplicates() {
    let mut engine: TrieSearch<Product> = TrieSearch::new();
    let handles = engine.add_many(catalogue()).unwrap();
    engine.add(Arc::clone(&handles[0])).unwrap();

    let result = engine.search("549");
    assert_eq!(ids(&result), vec![1]);
    assert!(Arc::ptr_eq(&result[0], &handles[0]));
    assert_eq!(engine.len(), catalogue().len());
}

#[test]
fn test_distinct_instances_are_both_stored() {
    let mut engine = default_engine();
    engine.add(catalogue().remove(0)).unwrap();
    assert_eq!(ids(&engine.search("549")), vec![1, 1]);
}

#[test]
fn test_ignores_case_by_default() {
    let engine = default_engine();
    let r1 = ids(&engine.search("chip"));
    let r2 = ids(&engine.search("cHiP"));
    let r3 = ids(&engine.search("Chip"));
    assert_eq!(r1, vec![6, 3]);
    assert_eq!(r1, r2);
    assert_eq!(r2, r3);
}

#[test]
fn test_complete_words_only() {
    let engine = engine_with(SearchOptions {
        exclude_partial: true,
        ..Default::default()
    });
    assert_eq!(ids(&engine.search("apple")), vec![1, 2, 6]);
    assert!(engine.search("appl").is_empty());
}

#[test]
fn test_case_sensitive() {
    let engine = engine_with(SearchOptions {
        case_sensitive: true,
        ..Default::default()
    });
    assert_eq!(ids(&engine.search("apple")), vec![1, 6]);
    assert_eq!(ids(&engine.search("Apple")), vec![2]);
    assert_eq!(ids(&engine.search("Orchard")), vec![1, 2, 6]);
    assert!(engine.search("orchard").is_empty());
}

#[test]
fn test_multiple_words() {
    let engine = default_engine();
    assert_eq!(engine.search("oil").len(), 4);
    assert_eq!(ids(&engine.search("perfume oil")), vec![5, 7]);
    assert_eq!(ids(&engine.search("non alcoholic perfume oil")), vec![7]);
}

#[test]
fn test_custom_stringify() {
    let mut engine: TrieSearch<Product> = TrieSearch::builder()
        .stringifier(Stringifier::from_fn(|p: &Product| format!("{} {}", p.id, p.brand)))
        .build()
        .unwrap();
    engine.add_many(catalogue()).unwrap();

    assert!(engine.search("oil").is_empty());
    assert_eq!(engine.search("orchard").len(), 3);
    assert_eq!(ids(&engine.search("1 orchard")), vec![1]);
    assert_eq!(ids(&engine.search("orchard 2")), vec![2]);
}

#[test]
fn test_custom_word_pattern_ignores_digits() {
    let mut engine: TrieSearch<Product> = TrieSearch::builder()
        .tokenizer(Tokenizer::regex("[a-z]+").unwrap())
        .build()
        .unwrap();
    engine.add_many(catalogue()).unwrap();

    assert_eq!(
        engine.search("239485238384758234765apple34598763956396534956").len(),
        3
    );
    assert!(engine.search("1").is_empty());
}

#[test]
fn test_custom_tokenizer_closure() {
    let mut engine: TrieSearch<Product> = TrieSearch::builder()
        .stringifier(Stringifier::from_fn(|p: &Product| p.name.to_string()))
        .tokenizer(Tokenizer::custom(|text| {
            text.split(' ').map(|w| w.chars().rev().collect()).collect()
        }))
        .build()
        .unwrap();
    engine.add_many(catalogue()).unwrap();

    // Queries are reversed too, so prefix matching becomes suffix matching
    assert_eq!(engine.search("oil").len(), 4);
    assert_eq!(engine.search("il").len(), 4);
    assert!(engine.search("oi").is_empty());
}

#[test]
fn test_international_characters() {
    let engine = default_engine();
    for query in ["åpple", "äpplé", "àpplê", "ápplè", "âpplë", "ãpple", "ÅPPLE"] {
        assert_eq!(ids(&engine.search(query)), vec![1, 2, 6], "query {query}");
    }
}

#[test]
fn test_non_latin_scripts() {
    let mut engine: TrieSearch<&str> = TrieSearch::new();
    engine.add("東京タワー").unwrap();
    engine.add("Москва река").unwrap();

    assert_eq!(engine.search("москва").len(), 1);
    assert_eq!(engine.search("моск").len(), 1);
    assert_eq!(engine.search("東京").len(), 1);
}

#[test]
fn test_custom_replace_patterns() {
    let engine = engine_with(SearchOptions {
        replace_patterns: Some(vec![ReplacePattern::new("pp", "p")]),
        ..Default::default()
    });
    let r1 = ids(&engine.search("apple"));
    let r2 = ids(&engine.search("aple"));
    assert_eq!(r1.len(), 3);
    assert_eq!(r2, r1);
}

#[test]
fn test_custom_replace_patterns_drop_diacritic_defaults() {
    let engine = engine_with(SearchOptions {
        replace_patterns: Some(vec![ReplacePattern::new("pp", "p")]),
        ..Default::default()
    });
    assert!(engine.search("äple").is_empty());
}

#[test]
fn test_ignore_keys() {
    let keyed = default_engine();
    assert_eq!(keyed.search("brand").len(), catalogue().len());

    let values_only = engine_with(SearchOptions {
        stringify: StringifyMode::JsonValuesOnly,
        ..Default::default()
    });
    assert!(values_only.search("brand").is_empty());
    assert_eq!(ids(&values_only.search("apple")), vec![1, 2, 6]);
}

#[test]
fn test_missing_token_is_ignored() {
    let engine = default_engine();
    assert_eq!(ids(&engine.search("xyzzy chips")), vec![6, 3]);
}

#[test]
fn test_found_but_empty_token_empties_result() {
    let engine = engine_with(SearchOptions {
        exclude_partial: true,
        ..Default::default()
    });
    // "chi" is a path in the trie but nothing ends there
    assert!(engine.search("chips chi").is_empty());
    assert!(engine.search("chi xyzzy chips").is_empty());
}

#[test]
fn test_query_without_words() {
    let engine = default_engine();
    assert!(engine.search("").is_empty());
    assert!(engine.search(" &&  !? ").is_empty());
}

#[test]
fn test_clear_and_reuse() {
    let mut engine = default_engine();
    engine.clear();
    assert!(engine.is_empty());
    assert!(engine.search("apple").is_empty());

    engine.add_many(catalogue()).unwrap();
    assert_eq!(ids(&engine.search("apple")), vec![1, 2, 6]);
}

#[test]
fn test_options_from_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, r#"{"exclude_partial": true}"#).unwrap();

    let engine = engine_with(SearchOptions::load(&path).unwrap());
    assert!(engine.search("appl").is_empty());
}
