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
use crate::infrastructure::search::http::{get_text, parse_json, strip_html};

pub const DEFAULT_WIKIPEDIA_URL: &str = "https://en.wikipedia.org";

#[derive(Debug, Deserialize)]
struct WikipediaResponse {
    query: WikipediaQuery,
}

#[derive(Debug, Deserialize)]
struct WikipediaQuery {
    #[serde(default)]
    search: Vec<WikipediaPage>,
}

#[derive(Debug, Deserialize)]
struct WikipediaPage {
    title: String,
    #[serde(default)]
    snippet: String,
}

/// 百科来源：MediaWiki 全文搜索接口
pub struct WikipediaSearchEngine {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaSearchEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: WikipediaResponse = parse_json(body)?;

        Ok(response
            .query
            .search
            .into_iter()
            .map(|page| {
                let url = format!(
                    "{}/wiki/{}",
                    self.base_url,
                    urlencoding::encode(&page.title)
                );
                SearchResult::new(
                    page.title,
                    url,
                    Some(strip_html(&page.snippet)),
                    SourceKind::Wikipedia,
                )
            })
            .collect())
    }
}

#[async_trait]
impl SearchEngine for WikipediaSearchEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/w/api.php", self.base_url);
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("format", "json"),
            ("origin", "*"),
        ];

        let body = get_text(&self.client, &url, &params, cancel).await?;
        self.parse_response(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Wikipedia
    }
}
