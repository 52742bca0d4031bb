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

pub const DEFAULT_STACKEXCHANGE_URL: &str = "https://api.stackexchange.com";

#[derive(Debug, Deserialize)]
struct StackExchangeResponse {
    #[serde(default)]
    items: Vec<StackExchangeQuestion>,
}

#[derive(Debug, Deserialize)]
struct StackExchangeQuestion {
    title: String,
    link: String,
    body_markdown: Option<String>,
}

/// 问答来源：Stack Overflow 高级搜索
pub struct StackExchangeSearchEngine {
    client: reqwest::Client,
    base_url: String,
}

impl StackExchangeSearchEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: StackExchangeResponse = parse_json(body)?;

        Ok(response
            .items
            .into_iter()
            .map(|question| {
                // Titles come back HTML-encoded
                let title = strip_html(&question.title);
                let description = question
                    .body_markdown
                    .as_deref()
                    .map(strip_html)
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| title.clone());
                SearchResult::new(
                    title,
                    question.link,
                    Some(description),
                    SourceKind::StackExchange,
                )
            })
            .collect())
    }
}

#[async_trait]
impl SearchEngine for StackExchangeSearchEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/2.3/search/advanced", self.base_url);
        let params = [("q", query), ("site", "stackoverflow"), ("pagesize", "10")];

        let body = get_text(&self.client, &url, &params, cancel).await?;
        self.parse_response(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::StackExchange
    }
}
