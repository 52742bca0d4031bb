// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use metasearch::domain::models::search_result::SearchResult;
use metasearch::domain::search::engine::{SearchEngine, SearchError};
use metasearch::domain::search::source::SourceKind;
use metasearch::domain::services::search_service::{SearchService, SearchServiceConfig};
use metasearch::domain::services::search_sessions::{SearchSessions, DEFAULT_MAX_CLIENTS};
use metasearch::infrastructure::search::SearchAggregator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const TEST_TIMEOUT_MS: u64 = 800;

#[derive(Clone)]
enum Behaviour {
    /// 返回一条由查询生成的结果
    Echo,
    /// 返回固定结果
    Fixed(Vec<SearchResult>),
    Fail,
    /// 查询等于给定值时任务崩溃
    PanicOn(String),
}

/// 可控的来源适配器，用于驱动编排器场景
#[derive(Clone)]
pub struct MockEngine {
    kind: SourceKind,
    behaviour: Behaviour,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    completions: Arc<AtomicUsize>,
}

impl MockEngine {
    fn with(kind: SourceKind, behaviour: Behaviour) -> Self {
        Self {
            kind,
            behaviour,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
            completions: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn echo(kind: SourceKind) -> Self {
        Self::with(kind, Behaviour::Echo)
    }

    pub fn fixed(kind: SourceKind, results: Vec<SearchResult>) -> Self {
        Self::with(kind, Behaviour::Fixed(results))
    }

    pub fn failing(kind: SourceKind) -> Self {
        Self::with(kind, Behaviour::Fail)
    }

    pub fn panicking_on(kind: SourceKind, query: &str) -> Self {
        Self::with(kind, Behaviour::PanicOn(query.to_string()))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    /// 未被取消、完整跑完的调用次数
    pub fn completions(&self) -> Arc<AtomicUsize> {
        self.completions.clone()
    }
}

#[async_trait]
impl SearchEngine for MockEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::select! {
                _ = cancel.cancelled() => return Err(SearchError::Cancelled),
                _ = tokio::time::sleep(self.delay) => {}
            }
        }
        self.completions.fetch_add(1, Ordering::SeqCst);

        match &self.behaviour {
            Behaviour::Echo => Ok(vec![echo_result(query, self.kind)]),
            Behaviour::Fixed(results) => Ok(results.clone()),
            Behaviour::Fail => Err(SearchError::ProviderUnavailable("503".to_string())),
            Behaviour::PanicOn(trigger) => {
                if trigger == query {
                    panic!("adapter crashed on {}", query);
                }
                Ok(vec![echo_result(query, self.kind)])
            }
        }
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }
}

pub fn echo_result(query: &str, kind: SourceKind) -> SearchResult {
    SearchResult::new(
        format!("{} result", query),
        format!("https://{}.example.com/{}", kind, query),
        None,
        kind,
    )
}

fn aggregator_with(engines: Vec<MockEngine>) -> SearchAggregator {
    let engines: Vec<Arc<dyn SearchEngine>> = engines
        .into_iter()
        .map(|engine| Arc::new(engine) as Arc<dyn SearchEngine>)
        .collect();
    SearchAggregator::new(engines, TEST_TIMEOUT_MS)
}

pub fn service_with(engines: Vec<MockEngine>) -> Arc<SearchService> {
    Arc::new(SearchService::new(
        aggregator_with(engines),
        SearchServiceConfig::default(),
    ))
}

pub fn sessions_with(engines: Vec<MockEngine>) -> Arc<SearchSessions> {
    Arc::new(SearchSessions::new(
        aggregator_with(engines),
        SearchServiceConfig::default(),
        DEFAULT_MAX_CLIENTS,
    ))
}
