// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 内容来源类型
///
/// 每种来源带有固定的基础相关度权重，反映来源的权威程度：
/// 直接域名猜测最高，百科次之，代码/问答/链接聚合居中，书目最低。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[serde(rename = "domain")]
    DomainGuess,
    Wikipedia,
    GitHub,
    StackExchange,
    HackerNews,
    OpenLibrary,
}

impl SourceKind {
    pub const ALL: [SourceKind; 6] = [
        SourceKind::DomainGuess,
        SourceKind::Wikipedia,
        SourceKind::GitHub,
        SourceKind::StackExchange,
        SourceKind::HackerNews,
        SourceKind::OpenLibrary,
    ];

    pub fn base_relevance(&self) -> f64 {
        match self {
            SourceKind::DomainGuess => 100.0,
            SourceKind::Wikipedia => 70.0,
            SourceKind::GitHub => 60.0,
            SourceKind::StackExchange => 50.0,
            SourceKind::HackerNews => 30.0,
            SourceKind::OpenLibrary => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::DomainGuess => "domain",
            SourceKind::Wikipedia => "wikipedia",
            SourceKind::GitHub => "github",
            SourceKind::StackExchange => "stackexchange",
            SourceKind::HackerNews => "hackernews",
            SourceKind::OpenLibrary => "openlibrary",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown source: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or(UnknownSource(name))
    }
}
