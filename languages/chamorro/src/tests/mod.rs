mod catalog_tests;
mod search_tests;
