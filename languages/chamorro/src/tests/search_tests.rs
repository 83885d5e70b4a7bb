use crate::{all_entries, search};

fn translations(query: &str) -> Vec<&'static str> {
    search(query).iter().map(|e| e.translation()).collect()
}

#[test]
fn test_search_hello_finds_both_hellos() {
    let found = translations("hello");
    assert!(found.contains(&"Hello"));
    assert!(found.contains(&"Hello (casual)"));
}

#[test]
fn test_search_is_case_insensitive() {
    assert_eq!(search("hello"), search("HELLO"));
    assert_eq!(search("hello"), search("HeLlO"));
}

#[test]
fn test_search_chamorro_term() {
    let terms: Vec<&str> = search("håfa").iter().map(|e| e.term()).collect();
    assert_eq!(terms, vec!["Håfa Adai"]);
}

#[test]
fn test_search_decomposed_query() {
    let terms: Vec<&str> = search("ha\u{30A}fa").iter().map(|e| e.term()).collect();
    assert_eq!(terms, vec!["Håfa Adai"]);
}

#[test]
fn test_search_empty_query_returns_everything() {
    assert_eq!(search("").len(), all_entries().len());
}

#[test]
fn test_search_no_match_is_empty() {
    assert!(search("zzz-not-a-term").is_empty());
    assert!(search("xyz123notaword").is_empty());
}

#[test]
fn test_search_keeps_catalog_order() {
    let found = translations("/");
    assert_eq!(
        found,
        vec![
            "To make good / Harmony",
            "Long live / Hurray",
            "Mother / Mom",
            "Father / Dad",
        ]
    );
}
