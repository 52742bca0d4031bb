// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::settings::SearchSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::services::domain_limiter::{
    DomainLimiter, DEFAULT_DOMAIN_CAP, MATCHED_DOMAIN_CAP,
};
use crate::domain::services::relevance_scorer::RelevanceScorer;
use crate::infrastructure::cache::{ResultCache, DEFAULT_CACHE_CAPACITY};
use crate::infrastructure::search::aggregator::SearchAggregator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchServiceError {
    #[error("Invalid page: {0}")]
    InvalidPage(u32),
    #[error("Aggregation failed: {0}")]
    AggregationFailure(String),
}

/// 查询会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryState {
    Idle,
    Fetching,
    CachedHit,
    Aggregating,
    Ranking,
    Limiting,
    Caching,
    Delivered,
    Cancelled,
    Failed,
}

/// 交付给展示层的结果：完整的排序结果与总数，由调用方按页切分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub page: u32,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub from_cache: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Delivered(SearchPage),
    /// 空查询，未做任何处理
    Empty,
    /// 会话被更新的查询或显式取消所取代
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SearchServiceConfig {
    pub cache_capacity: usize,
    pub default_domain_cap: usize,
    pub matched_domain_cap: usize,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            default_domain_cap: DEFAULT_DOMAIN_CAP,
            matched_domain_cap: MATCHED_DOMAIN_CAP,
        }
    }
}

impl From<&SearchSettings> for SearchServiceConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            cache_capacity: settings.cache_capacity,
            default_domain_cap: settings.default_domain_cap,
            matched_domain_cap: settings.matched_domain_cap,
        }
    }
}

/// Cancels the session if the caller stops polling before it completes.
///
/// Completed, failed and superseded sessions are no longer current, so
/// dropping the guard is then a no-op.
struct AbandonGuard<'a> {
    service: &'a SearchService,
    session_id: Uuid,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.service.inner.lock();
        if !inner.is_current(self.session_id) {
            return;
        }
        if let Some(session) = inner.session.take() {
            session.cancel.cancel();
            inner.state = QueryState::Cancelled;
            debug!("Session {} abandoned by caller", session.id);
        }
    }
}

struct Session {
    id: Uuid,
    cancel: CancellationToken,
}

struct ServiceState {
    cache: ResultCache,
    session: Option<Session>,
    state: QueryState,
    current_results: Vec<SearchResult>,
}

impl ServiceState {
    fn is_current(&self, id: Uuid) -> bool {
        self.session.as_ref().is_some_and(|s| s.id == id)
    }
}

/// 查询编排器
///
/// 独占结果缓存与当前会话：新查询先取消上一个会话，再查缓存，
/// 未命中时依次执行聚合、排序、域名限流与写缓存。
/// 迟到的结果按会话ID判定是否过期，过期结果直接丢弃。
pub struct SearchService {
    aggregator: Arc<SearchAggregator>,
    config: SearchServiceConfig,
    inner: Mutex<ServiceState>,
}

impl SearchService {
    pub fn new(aggregator: impl Into<Arc<SearchAggregator>>, config: SearchServiceConfig) -> Self {
        let cache = ResultCache::new(config.cache_capacity);
        Self {
            aggregator: aggregator.into(),
            config,
            inner: Mutex::new(ServiceState {
                cache,
                session: None,
                state: QueryState::Idle,
                current_results: Vec::new(),
            }),
        }
    }

    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchOutcome, SearchServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Empty);
        }
        if page == 0 {
            return Err(SearchServiceError::InvalidPage(page));
        }

        metrics::counter!("search_requests_total").increment(1);
        let key = ResultCache::cache_key(query, page);

        let (session_id, cancel, cached) = {
            let mut inner = self.inner.lock();
            if let Some(previous) = inner.session.take() {
                previous.cancel.cancel();
                inner.state = QueryState::Cancelled;
                debug!("Session {} superseded", previous.id);
            }

            let session = Session {
                id: Uuid::new_v4(),
                cancel: CancellationToken::new(),
            };
            let handle = (session.id, session.cancel.clone());
            inner.session = Some(session);
            inner.state = QueryState::Fetching;

            let cached = inner.cache.get(&key);
            if cached.is_some() {
                inner.state = QueryState::CachedHit;
            }
            (handle.0, handle.1, cached)
        };
        let _abandon = AbandonGuard {
            service: self,
            session_id,
        };

        if let Some(results) = cached {
            info!("Cache hit for {}", key);
            metrics::counter!("search_cache_hits_total").increment(1);
            return Ok(self.deliver(session_id, query, page, results, None));
        }

        if !self.advance(session_id, QueryState::Aggregating) {
            return Ok(SearchOutcome::Cancelled);
        }
        let aggregated = match self.aggregator.aggregate(query, &cancel).await {
            Ok(results) => results,
            Err(e) => return self.fail(session_id, e.to_string()),
        };

        if !self.advance(session_id, QueryState::Ranking) {
            debug!("Discarding stale results for {:?}", query);
            return Ok(SearchOutcome::Cancelled);
        }
        let ranked = RelevanceScorer::new(query).rank(aggregated);

        if !self.advance(session_id, QueryState::Limiting) {
            return Ok(SearchOutcome::Cancelled);
        }
        let limited = DomainLimiter::new(
            query,
            self.config.default_domain_cap,
            self.config.matched_domain_cap,
        )
        .limit(ranked);

        Ok(self.deliver(session_id, query, page, limited, Some(key)))
    }

    /// Cancel the in-flight session, if any.
    pub fn cancel(&self) {
        let mut inner = self.inner.lock();
        if let Some(session) = inner.session.take() {
            session.cancel.cancel();
            inner.state = QueryState::Cancelled;
            info!("Session {} cancelled", session.id);
        }
    }

    pub fn state(&self) -> QueryState {
        self.inner.lock().state
    }

    /// 最近一次成功交付的结果
    pub fn current_results(&self) -> Vec<SearchResult> {
        self.inner.lock().current_results.clone()
    }

    pub fn cached_entries(&self) -> usize {
        self.inner.lock().cache.len()
    }

    pub fn is_cached(&self, query: &str, page: u32) -> bool {
        self.inner
            .lock()
            .cache
            .contains(&ResultCache::cache_key(query, page))
    }

    fn advance(&self, session_id: Uuid, next: QueryState) -> bool {
        let mut inner = self.inner.lock();
        if !inner.is_current(session_id) {
            return false;
        }
        debug!("Session {} -> {:?}", session_id, next);
        inner.state = next;
        true
    }

    /// Cache (when `cache_key` is given) and publish results, unless the
    /// session has been superseded in the meantime.
    fn deliver(
        &self,
        session_id: Uuid,
        query: &str,
        page: u32,
        results: Vec<SearchResult>,
        cache_key: Option<String>,
    ) -> SearchOutcome {
        let mut inner = self.inner.lock();
        if !inner.is_current(session_id) {
            debug!("Discarding stale results for {:?}", query);
            return SearchOutcome::Cancelled;
        }

        let from_cache = cache_key.is_none();
        if let Some(key) = cache_key {
            inner.state = QueryState::Caching;
            inner.cache.put(key, results.clone());
        }

        inner.current_results = results.clone();
        inner.state = QueryState::Delivered;
        inner.session = None;

        metrics::histogram!("search_results_returned").record(results.len() as f64);
        SearchOutcome::Delivered(SearchPage {
            query: query.to_string(),
            page,
            total_results: results.len(),
            results,
            from_cache,
        })
    }

    fn fail(&self, session_id: Uuid, reason: String) -> Result<SearchOutcome, SearchServiceError> {
        let mut inner = self.inner.lock();
        if !inner.is_current(session_id) {
            return Ok(SearchOutcome::Cancelled);
        }
        error!("Search failed: {}", reason);
        inner.state = QueryState::Failed;
        inner.session = None;
        Err(SearchServiceError::AggregationFailure(reason))
    }
}
