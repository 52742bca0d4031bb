// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::settings::{SearchSettings, SourceSettings};
use crate::domain::search::engine::SearchEngine;
use crate::domain::search::source::{SourceKind, UnknownSource};
use crate::infrastructure::search::domain_guess::DomainGuessEngine;
use crate::infrastructure::search::github::GitHubSearchEngine;
use crate::infrastructure::search::hackernews::HackerNewsSearchEngine;
use crate::infrastructure::search::http::build_client;
use crate::infrastructure::search::openlibrary::OpenLibrarySearchEngine;
use crate::infrastructure::search::stackexchange::StackExchangeSearchEngine;
use crate::infrastructure::search::wikipedia::WikipediaSearchEngine;

/// 内容来源工厂
///
/// 根据配置创建启用的来源适配器，所有适配器共享同一个HTTP客户端
pub struct SearchEngineFactory {
    client: reqwest::Client,
    enabled: Vec<SourceKind>,
    sources: SourceSettings,
}

impl SearchEngineFactory {
    /// 使用配置创建工厂
    ///
    /// 配置中出现未知来源名称时返回错误
    pub fn from_settings(
        search: &SearchSettings,
        sources: &SourceSettings,
    ) -> Result<Self, UnknownSource> {
        let enabled = sources
            .enabled
            .iter()
            .map(|name| name.parse::<SourceKind>())
            .collect::<Result<Vec<_>, _>>()?;

        // The per-call budget in the aggregator bounds every request; the
        // client timeout only catches stragglers outliving their session.
        let client = build_client(
            &search.user_agent,
            Duration::from_millis(search.timeout_ms.saturating_mul(4)),
        );

        Ok(Self {
            client,
            enabled,
            sources: sources.clone(),
        })
    }

    pub fn enabled_sources(&self) -> &[SourceKind] {
        &self.enabled
    }

    /// 创建指定类型的来源适配器
    pub fn create(&self, kind: SourceKind) -> Arc<dyn SearchEngine> {
        let client = self.client.clone();
        match kind {
            SourceKind::DomainGuess => Arc::new(
                DomainGuessEngine::new(
                    client,
                    self.sources.domain_tlds.clone(),
                    Duration::from_millis(self.sources.check_timeout_ms),
                )
                .with_check_template(self.sources.check_url_template.clone()),
            ),
            SourceKind::Wikipedia => Arc::new(WikipediaSearchEngine::new(
                client,
                self.sources.wikipedia_url.clone(),
            )),
            SourceKind::GitHub => Arc::new(GitHubSearchEngine::new(
                client,
                self.sources.github_url.clone(),
            )),
            SourceKind::StackExchange => Arc::new(StackExchangeSearchEngine::new(
                client,
                self.sources.stackexchange_url.clone(),
            )),
            SourceKind::HackerNews => Arc::new(HackerNewsSearchEngine::new(
                client,
                self.sources.hackernews_url.clone(),
            )),
            SourceKind::OpenLibrary => Arc::new(OpenLibrarySearchEngine::new(
                client,
                self.sources.openlibrary_url.clone(),
            )),
        }
    }

    /// 创建所有启用的来源适配器
    pub fn create_enabled_engines(&self) -> Vec<Arc<dyn SearchEngine>> {
        let engines: Vec<Arc<dyn SearchEngine>> =
            self.enabled.iter().map(|kind| self.create(*kind)).collect();
        info!(
            "Registered sources: {:?}",
            engines.iter().map(|e| e.name()).collect::<Vec<_>>()
        );
        engines
    }
}
