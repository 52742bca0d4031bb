// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::source::SourceKind;
use crate::infrastructure::search::http::{get_text, parse_json};

pub const DEFAULT_OPENLIBRARY_URL: &str = "https://openlibrary.org";

#[derive(Debug, Deserialize)]
struct OpenLibraryResponse {
    #[serde(default)]
    docs: Vec<OpenLibraryDoc>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryDoc {
    title: String,
    key: String,
    #[serde(default)]
    author_name: Vec<String>,
    first_publish_year: Option<i32>,
}

/// 书目来源：Open Library 检索
pub struct OpenLibrarySearchEngine {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibrarySearchEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: OpenLibraryResponse = parse_json(body)?;

        Ok(response
            .docs
            .into_iter()
            .map(|doc| {
                let url = format!("{}{}", self.base_url, doc.key);
                let description = describe_book(&doc.author_name, doc.first_publish_year);
                SearchResult::new(doc.title, url, description, SourceKind::OpenLibrary)
            })
            .collect())
    }
}

/// "By A, B - 1954"; missing parts are left out.
fn describe_book(authors: &[String], first_publish_year: Option<i32>) -> Option<String> {
    let mut parts = Vec::new();
    if !authors.is_empty() {
        parts.push(format!("By {}", authors.join(", ")));
    }
    if let Some(year) = first_publish_year {
        parts.push(year.to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}

#[async_trait]
impl SearchEngine for OpenLibrarySearchEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search.json", self.base_url);
        let params = [("q", query)];

        let body = get_text(&self.client, &url, &params, cancel).await?;
        self.parse_response(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::OpenLibrary
    }
}
