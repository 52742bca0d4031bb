// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::domain::search::engine::SearchError;

pub const DEFAULT_USER_AGENT: &str = concat!("metasearch/", env!("CARGO_PKG_VERSION"));

/// 构建来源适配器共用的HTTP客户端
pub fn build_client(user_agent: &str, timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// 发送可取消的GET请求并返回响应正文
///
/// 令牌触发时丢弃进行中的请求（连接随之中止），返回 `SearchError::Cancelled`。
pub async fn get_text(
    client: &reqwest::Client,
    url: &str,
    params: &[(&str, &str)],
    cancel: &CancellationToken,
) -> Result<String, SearchError> {
    let request = async {
        let response = client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::ProviderUnavailable(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SearchError::Cancelled),
        body = request => body,
    }
}

pub fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))
}

/// Reduce an HTML fragment to its text content.
///
/// Entities are decoded exactly once, by the HTML parser.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}
