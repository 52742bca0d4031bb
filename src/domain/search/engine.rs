// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::source::SourceKind;
use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed payload: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
    #[error("Cancelled")]
    Cancelled,
    #[error("Aggregation failed: {0}")]
    AggregationFailure(String),
}

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Query the provider and map its response to search results.
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Which provider this adapter talks to
    fn kind(&self) -> SourceKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Like [`SearchEngine::search`] but never fails: any provider error
    /// becomes an empty contribution.
    async fn fetch(&self, query: &str, cancel: &CancellationToken) -> Vec<SearchResult> {
        match self.search(query, cancel).await {
            Ok(results) => {
                debug!("Source {} returned {} results", self.name(), results.len());
                results
            }
            Err(SearchError::Cancelled) => {
                debug!("Source {} cancelled", self.name());
                Vec::new()
            }
            Err(e) => {
                warn!("Source {} failed: {}", self.name(), e);
                metrics::counter!("search_source_failures_total", "source" => self.name())
                    .increment(1);
                Vec::new()
            }
        }
    }
}
