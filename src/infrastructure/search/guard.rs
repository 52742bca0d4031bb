// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::SearchError;

/// 在时间预算与会话取消下运行一次来源调用
///
/// 计时器先到返回 `SearchError::Timeout`，会话被取消返回 `SearchError::Cancelled`，
/// 两种情况下进行中的调用都会被丢弃。
pub async fn within_budget<F>(
    contribution: F,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResult>, SearchError>
where
    F: Future<Output = Vec<SearchResult>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SearchError::Cancelled),
        outcome = tokio::time::timeout(timeout, contribution) => {
            outcome.map_err(|_| SearchError::Timeout)
        }
    }
}

/// 为单个来源的调用设置时间预算
///
/// 超时或取消都得到空结果，本函数从不向调用方报错。
pub async fn with_timeout<F>(
    source: &'static str,
    contribution: F,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Vec<SearchResult>
where
    F: Future<Output = Vec<SearchResult>>,
{
    match within_budget(contribution, timeout, cancel).await {
        Ok(results) => results,
        Err(SearchError::Cancelled) => {
            debug!("Source {} abandoned: session cancelled", source);
            Vec::new()
        }
        Err(e) => {
            warn!("Source {}: {} after {:?}", source, e, timeout);
            metrics::counter!("search_source_timeouts_total", "source" => source).increment(1);
            Vec::new()
        }
    }
}
