use hafa_config::format::FormatConfig;

use crate::{
    ChamorroLoader, all_entries, catalog, count, format_entry, format_entry_with_config,
    random_entry,
};

#[test]
fn test_reference_catalog_has_twelve_words() {
    assert_eq!(count(), 12);
    assert_eq!(count(), all_entries().len());
}

#[test]
fn test_metadata() {
    let meta = catalog().metadata();
    assert_eq!(meta.name, "Chamorro");
    assert_eq!(meta.language, "ch");
    assert_eq!(meta.entry_count, 12);
}

#[test]
fn test_all_entries_keeps_insertion_order() {
    let entries = all_entries();
    assert_eq!(entries.first().unwrap().term(), "Håfa Adai");
    assert_eq!(entries[5].term(), "Adios");
    assert_eq!(entries.last().unwrap().term(), "Hafa tatatmanu hao?");
}

#[test]
fn test_every_field_is_filled() {
    for entry in all_entries() {
        assert!(!entry.term().is_empty());
        assert!(!entry.translation().is_empty());
        assert!(!entry.pronunciation().is_empty());
        assert!(!entry.usage().is_empty());
        assert!(!entry.example().is_empty());
    }
}

#[test]
fn test_terms_are_unique() {
    let mut terms: Vec<&str> = all_entries().iter().map(|e| e.term()).collect();
    terms.sort_unstable();
    terms.dedup();
    assert_eq!(terms.len(), count());
}

#[test]
fn test_random_entry_is_member() {
    for _ in 0..50 {
        assert!(all_entries().contains(random_entry()));
    }
}

#[test]
fn test_format_entry_contains_one_word() {
    let text = format_entry();
    assert!(text.contains("Pronunciation: "));
    assert!(text.contains("Example: "));

    let shown = all_entries().iter().find(|e| {
        text.contains(e.term())
            && text.contains(e.translation())
            && text.contains(e.pronunciation())
            && text.contains(e.example())
    });
    assert!(shown.is_some(), "no catalog word in {text:?}");
}

#[test]
fn test_format_entry_with_usage() {
    let config = FormatConfig {
        show_usage: true,
        ..FormatConfig::default()
    };
    let text = format_entry_with_config(&config);
    assert!(text.starts_with("\n📚 "));
    assert!(all_entries().iter().any(|e| text.contains(&format!("Usage: {}\n", e.usage()))));
}

#[test]
fn test_loader_builds_fresh_equal_catalog() {
    let loaded = ChamorroLoader::load_embedded().unwrap();
    assert_eq!(loaded.all_entries(), all_entries());
}
