// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::domain::models::search_result::{SearchResult, DEFAULT_DESCRIPTION};
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::guard::with_timeout;

pub const DEFAULT_SOURCE_TIMEOUT_MS: u64 = 800;

pub struct SearchAggregator {
    engines: Vec<Arc<dyn SearchEngine>>,
    timeout: Duration,
}

impl SearchAggregator {
    pub fn new(engines: Vec<Arc<dyn SearchEngine>>, timeout_ms: u64) -> Self {
        Self {
            engines,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Query every source concurrently and merge their contributions.
    ///
    /// Each source runs on its own task under the per-call budget. Slow,
    /// failing or cancelled sources contribute nothing; only a crashed
    /// source task is reported as an error.
    pub async fn aggregate(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let started = Instant::now();

        let handles = self.engines.iter().map(|engine| {
            let engine = engine.clone();
            let query = query.to_string();
            let cancel = cancel.clone();
            let timeout = self.timeout;

            tokio::spawn(async move {
                let name = engine.name();
                with_timeout(name, engine.fetch(&query, &cancel), timeout, &cancel).await
            })
        });

        let mut contributions = Vec::with_capacity(self.engines.len());
        for outcome in join_all(handles).await {
            match outcome {
                Ok(results) => contributions.push(results),
                Err(e) if e.is_panic() => {
                    error!("Source task panicked: {}", e);
                    return Err(SearchError::AggregationFailure(e.to_string()));
                }
                Err(_) => contributions.push(Vec::new()),
            }
        }

        let merged = merge_contributions(contributions);
        info!(
            "Aggregated {} results from {} sources in {:?}",
            merged.len(),
            self.engines.len(),
            started.elapsed()
        );
        metrics::histogram!("search_aggregate_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        Ok(merged)
    }
}

/// Flatten contributions in source order, drop empty entries, fill missing
/// descriptions and keep only the first result for each URL.
pub fn merge_contributions(contributions: Vec<Vec<SearchResult>>) -> Vec<SearchResult> {
    let mut seen_urls = HashSet::new();

    contributions
        .into_iter()
        .flatten()
        .filter(|result| !result.url.trim().is_empty() && !result.title.trim().is_empty())
        .map(|mut result| {
            if !result.has_description() {
                result.description = DEFAULT_DESCRIPTION.to_string();
            }
            result
        })
        .filter(|result| seen_urls.insert(normalize_url(&result.url)))
        .collect()
}

fn normalize_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or(url);
    without_fragment.trim_end_matches('/').to_lowercase()
}
