// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::search::source::SourceKind;

/// 来源未提供描述时使用的占位文本
pub const DEFAULT_DESCRIPTION: &str = "This website has no description.";

/// 聚合后的统一搜索结果
///
/// `domain` 始终由 `url` 推导，`relevance` 为来源的基础权重，
/// `score` 在排序阶段计算。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub domain: String,
    pub relevance: f64,
    pub score: f64,
    pub source: SourceKind,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: Option<String>,
        source: SourceKind,
    ) -> Self {
        let url = url.into();
        Self {
            title: title.into(),
            domain: extract_domain(&url),
            description: description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            url,
            relevance: source.base_relevance(),
            score: 0.0,
            source,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// 从URL中提取域名（小写，去掉前导 `www.`）
///
/// 无法解析的URL退化为按 `/` 切分后的第三段，再不行则返回原串。
pub fn extract_domain(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(|h| h.to_string()),
        Err(_) => url.split('/').nth(2).map(|s| s.to_string()),
    };

    let host = host
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| url.to_string())
        .to_lowercase();

    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}
