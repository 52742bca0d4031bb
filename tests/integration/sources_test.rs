// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 来源适配器契约测试
//!
//! 使用 wiremock 模拟各来源接口，验证请求参数、响应解析与失败处理

use metasearch::domain::search::engine::{SearchEngine, SearchError};
use metasearch::domain::search::source::SourceKind;
use metasearch::infrastructure::search::domain_guess::DomainGuessEngine;
use metasearch::infrastructure::search::github::GitHubSearchEngine;
use metasearch::infrastructure::search::hackernews::HackerNewsSearchEngine;
use metasearch::infrastructure::search::openlibrary::OpenLibrarySearchEngine;
use metasearch::infrastructure::search::stackexchange::StackExchangeSearchEngine;
use metasearch::infrastructure::search::wikipedia::WikipediaSearchEngine;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn test_wikipedia_parses_search_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "search": [
                    {
                        "title": "Rust (programming language)",
                        "snippet": "<span class=\"searchmatch\">Rust</span> is a &quot;systems&quot; language"
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = WikipediaSearchEngine::new(client(), mock_server.uri());
    let results = engine
        .search("rust", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Rust (programming language)");
    assert_eq!(
        results[0].url,
        format!("{}/wiki/Rust%20%28programming%20language%29", mock_server.uri())
    );
    assert_eq!(results[0].description, "Rust is a \"systems\" language");
    assert_eq!(results[0].source, SourceKind::Wikipedia);
}

#[tokio::test]
async fn test_github_sorts_by_stars_and_fills_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "tokio"))
        .and(query_param("sort", "stars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "full_name": "tokio-rs/tokio",
                    "html_url": "https://github.com/tokio-rs/tokio",
                    "description": "A runtime for writing reliable asynchronous applications"
                },
                {
                    "full_name": "someone/tokio-fork",
                    "html_url": "https://github.com/someone/tokio-fork",
                    "description": null
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let engine = GitHubSearchEngine::new(client(), mock_server.uri());
    let results = engine.fetch("tokio", &CancellationToken::new()).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].domain, "github.com");
    assert_eq!(results[1].description, "No description available");
}

#[tokio::test]
async fn test_stackexchange_strips_markup_from_titles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.3/search/advanced"))
        .and(query_param("site", "stackoverflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "title": "How do I borrow &amp; move?",
                    "link": "https://stackoverflow.com/questions/1",
                    "body_markdown": "I have a struct..."
                },
                {
                    "title": "Lifetimes question",
                    "link": "https://stackoverflow.com/questions/2"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let engine = StackExchangeSearchEngine::new(client(), mock_server.uri());
    let results = engine.fetch("borrow", &CancellationToken::new()).await;

    assert_eq!(results[0].title, "How do I borrow & move?");
    assert_eq!(results[0].description, "I have a struct...");
    assert_eq!(results[1].description, "Lifetimes question");
}

#[tokio::test]
async fn test_hackernews_links_discussion_when_url_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("tags", "story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [
                { "title": "Show HN: a thing", "url": "https://thing.dev", "objectID": "1" },
                { "title": "Ask HN: anything?", "url": null, "story_text": "Curious", "objectID": "42" },
                { "title": null, "url": "https://comment.example", "objectID": "7" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let engine = HackerNewsSearchEngine::new(client(), mock_server.uri());
    let results = engine.fetch("hn", &CancellationToken::new()).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].url, "https://news.ycombinator.com/item?id=42");
    assert_eq!(results[1].description, "Curious");
}

#[tokio::test]
async fn test_openlibrary_describes_authors_and_year() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [
                {
                    "title": "Dune",
                    "key": "/works/OL893415W",
                    "author_name": ["Frank Herbert"],
                    "first_publish_year": 1965
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let engine = OpenLibrarySearchEngine::new(client(), mock_server.uri());
    let results = engine.fetch("dune", &CancellationToken::new()).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, format!("{}/works/OL893415W", mock_server.uri()));
    assert_eq!(results[0].description, "By Frank Herbert - 1965");
}

#[tokio::test]
async fn test_server_error_contributes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let engine = GitHubSearchEngine::new(client(), mock_server.uri());
    let cancel = CancellationToken::new();

    assert!(matches!(
        engine.search("rust", &cancel).await,
        Err(SearchError::ProviderUnavailable(_))
    ));
    assert!(engine.fetch("rust", &cancel).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let engine = WikipediaSearchEngine::new(client(), mock_server.uri());
    let cancel = CancellationToken::new();

    assert!(matches!(
        engine.search("rust", &cancel).await,
        Err(SearchError::Parse(_))
    ));
    assert!(engine.fetch("rust", &cancel).await.is_empty());
}

#[tokio::test]
async fn test_cancelled_request_returns_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "hits": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let engine = HackerNewsSearchEngine::new(client(), mock_server.uri());
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    assert_eq!(
        engine.search("rust", &cancel).await,
        Err(SearchError::Cancelled)
    );
}

#[tokio::test]
async fn test_domain_guess_reports_answering_hosts() {
    let mock_server = MockServer::start().await;

    // Any status counts as a live host.
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let engine = DomainGuessEngine::new(
        client(),
        vec!["com".to_string(), "dev".to_string()],
        Duration::from_millis(500),
    )
    .with_check_template(format!("{}/{{domain}}", mock_server.uri()));

    let results = engine
        .search("Rust Lang!", &CancellationToken::new())
        .await
        .unwrap();

    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["https://rustlang.com", "https://rustlang.dev"]);
    assert!(results.iter().all(|r| r.source == SourceKind::DomainGuess));
}

#[tokio::test]
async fn test_domain_guess_skips_unreachable_hosts() {
    let engine = DomainGuessEngine::new(
        client(),
        vec!["com".to_string()],
        Duration::from_millis(500),
    )
    .with_check_template("http://127.0.0.1:1/{domain}");

    let results = engine
        .search("rust", &CancellationToken::new())
        .await
        .unwrap();

    assert!(results.is_empty());
}
