// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

use crate::domain::models::search_result::SearchResult;

pub const DEFAULT_CACHE_CAPACITY: usize = 20;

/// 有界的搜索结果缓存
///
/// 按插入顺序淘汰（FIFO）：读取不会刷新条目位置，更新已有键也保持其原位置。
/// 底层的 `LruCache` 只通过 `peek`/`peek_mut` 访问，因此其顺序即插入顺序。
pub struct ResultCache {
    entries: LruCache<String, Vec<SearchResult>>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// 生成缓存键：规范化查询 + `-` + 页码
    pub fn cache_key(query: &str, page: u32) -> String {
        format!("{}-{}", normalize_query(query), page)
    }

    pub fn get(&self, key: &str) -> Option<Vec<SearchResult>> {
        self.entries.peek(key).cloned()
    }

    pub fn put(&mut self, key: String, value: Vec<SearchResult>) {
        if let Some(existing) = self.entries.peek_mut(&key) {
            *existing = value;
            return;
        }

        if let Some((evicted, _)) = self.entries.push(key, value) {
            debug!("Evicted oldest cache entry: {}", evicted);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

/// Trim, lower-case and collapse internal whitespace.
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
