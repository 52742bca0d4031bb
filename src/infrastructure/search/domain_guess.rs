// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::source::SourceKind;

pub const DEFAULT_TLDS: [&str; 7] = ["com", "net", "org", "io", "app", "dev", "games"];
pub const DEFAULT_CHECK_TEMPLATE: &str = "https://{domain}";
pub const DEFAULT_CHECK_TIMEOUT_MS: u64 = 1000;

/// 域名猜测来源
///
/// 不调用任何搜索接口：把查询压缩成 `[a-z0-9]` 组成的标签，
/// 对每个顶级域名并发发送 HEAD 探测。只要收到任何HTTP响应（无论状态码），
/// 即认为该域名存在；连接失败或探测超时则认为不存在。
pub struct DomainGuessEngine {
    client: reqwest::Client,
    tlds: Vec<String>,
    check_template: String,
    check_timeout: Duration,
}

impl DomainGuessEngine {
    pub fn new(client: reqwest::Client, tlds: Vec<String>, check_timeout: Duration) -> Self {
        Self {
            client,
            tlds,
            check_template: DEFAULT_CHECK_TEMPLATE.to_string(),
            check_timeout,
        }
    }

    /// HEAD check URL template; `{domain}` is replaced with the candidate domain.
    pub fn with_check_template(mut self, template: impl Into<String>) -> Self {
        self.check_template = template.into();
        self
    }

    /// Candidate domains for a query, in TLD order.
    pub fn candidate_domains(&self, query: &str) -> Vec<String> {
        let label = clean_label(query);
        if label.is_empty() {
            return Vec::new();
        }
        self.tlds
            .iter()
            .map(|tld| format!("{}.{}", label, tld.trim_start_matches('.')))
            .collect()
    }

    async fn check(&self, domain: &str) -> bool {
        let check_url = self.check_template.replace("{domain}", domain);
        match self
            .client
            .head(&check_url)
            .timeout(self.check_timeout)
            .send()
            .await
        {
            Ok(response) => {
                debug!("HEAD check {} answered {}", domain, response.status());
                true
            }
            Err(e) => {
                debug!("HEAD check {} failed: {}", domain, e);
                false
            }
        }
    }

    fn synthesize(domain: &str) -> SearchResult {
        SearchResult::new(
            domain,
            format!("https://{}", domain),
            None,
            SourceKind::DomainGuess,
        )
    }
}

fn clean_label(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[async_trait]
impl SearchEngine for DomainGuessEngine {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let candidates = self.candidate_domains(query);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let checks = join_all(candidates.iter().map(|domain| self.check(domain)));
        let reachable = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            reachable = checks => reachable,
        };

        Ok(candidates
            .iter()
            .zip(reachable)
            .filter(|(_, ok)| *ok)
            .map(|(domain, _)| Self::synthesize(domain))
            .collect())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::DomainGuess
    }
}
