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

pub const DEFAULT_HACKERNEWS_URL: &str = "https://hn.algolia.com";

const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Deserialize)]
struct HackerNewsResponse {
    #[serde(default)]
    hits: Vec<HackerNewsHit>,
}

#[derive(Debug, Deserialize)]
struct HackerNewsHit {
    title: Option<String>,
    url: Option<String>,
    story_text: Option<String>,
    #[serde(rename = "objectID")]
    object_id: String,
}

/// 链接聚合来源：Hacker News（Algolia 搜索接口）
///
/// 没有外链的帖子指向讨论页本身。
pub struct HackerNewsSearchEngine {
    client: reqwest::Client,
    base_url: String,
}

impl HackerNewsSearchEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: HackerNewsResponse = parse_json(body)?;

        Ok(response
            .hits
            .into_iter()
            .filter_map(|hit| {
                let title = hit.title.filter(|t| !t.trim().is_empty())?;
                let url = hit
                    .url
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or_else(|| format!("{}{}", ITEM_URL, hit.object_id));
                let description = hit
                    .story_text
                    .as_deref()
                    .map(strip_html)
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| title.clone());
                Some(SearchResult::new(
                    title,
                    url,
                    Some(description),
                    SourceKind::HackerNews,
                ))
            })
            .collect())
    }
}

#[async_trait]
impl SearchEngine for HackerNewsSearchEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/api/v1/search", self.base_url);
        let params = [("query", query), ("tags", "story")];

        let body = get_text(&self.client, &url, &params, cancel).await?;
        self.parse_response(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::HackerNews
    }
}
