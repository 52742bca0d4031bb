// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 合并、排序与域名限流三个阶段串联后的行为

use metasearch::domain::models::search_result::{SearchResult, DEFAULT_DESCRIPTION};
use metasearch::domain::search::source::SourceKind;
use metasearch::domain::services::domain_limiter::DomainLimiter;
use metasearch::domain::services::relevance_scorer::rank_results;
use metasearch::infrastructure::search::aggregator::merge_contributions;

fn pipeline(query: &str, contributions: Vec<Vec<SearchResult>>) -> Vec<SearchResult> {
    let merged = merge_contributions(contributions);
    let ranked = rank_results(query, merged);
    DomainLimiter::with_default_caps(query).limit(ranked)
}

#[test]
fn test_source_weight_breaks_ties_between_equal_matches() {
    let results = pipeline(
        "tokio",
        vec![
            vec![SearchResult::new(
                "tokio",
                "https://openlibrary.org/works/1",
                None,
                SourceKind::OpenLibrary,
            )],
            vec![SearchResult::new(
                "tokio",
                "https://en.wikipedia.org/wiki/Tokio",
                None,
                SourceKind::Wikipedia,
            )],
        ],
    );

    assert_eq!(results[0].source, SourceKind::Wikipedia);
    assert_eq!(results[1].source, SourceKind::OpenLibrary);
}

#[test]
fn test_duplicate_urls_keep_first_source() {
    let results = pipeline(
        "serde",
        vec![
            vec![SearchResult::new(
                "serde-rs/serde",
                "https://github.com/serde-rs/serde",
                None,
                SourceKind::GitHub,
            )],
            vec![SearchResult::new(
                "Serde is great",
                "https://github.com/serde-rs/serde/",
                None,
                SourceKind::HackerNews,
            )],
        ],
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, SourceKind::GitHub);
    assert_eq!(results[0].description, DEFAULT_DESCRIPTION);
}

#[test]
fn test_unrelated_domain_keeps_only_its_best_result() {
    let blog = |title: &str, path: &str| {
        SearchResult::new(
            title,
            format!("https://blog.example.org/{}", path),
            None,
            SourceKind::HackerNews,
        )
    };
    let results = pipeline(
        "axum",
        vec![vec![
            blog("Notes", "notes"),
            blog("Axum middleware deep dive", "axum"),
            blog("Misc", "misc"),
        ]],
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Axum middleware deep dive");
}
