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

pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";

const MISSING_DESCRIPTION: &str = "No description available";

#[derive(Debug, Deserialize)]
struct GitHubResponse {
    #[serde(default)]
    items: Vec<GitHubRepository>,
}

#[derive(Debug, Deserialize)]
struct GitHubRepository {
    full_name: String,
    html_url: String,
    description: Option<String>,
}

/// 代码托管来源：GitHub 仓库搜索，按 star 数排序
pub struct GitHubSearchEngine {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubSearchEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn parse_response(&self, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: GitHubResponse = parse_json(body)?;

        Ok(response
            .items
            .into_iter()
            .map(|repo| {
                let description = repo
                    .description
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| MISSING_DESCRIPTION.to_string());
                SearchResult::new(
                    repo.full_name,
                    repo.html_url,
                    Some(description),
                    SourceKind::GitHub,
                )
            })
            .collect())
    }
}

#[async_trait]
impl SearchEngine for GitHubSearchEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search/repositories", self.base_url);
        let params = [("q", query), ("sort", "stars")];

        let body = get_text(&self.client, &url, &params, cancel).await?;
        self.parse_response(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::GitHub
    }
}
