// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use crate::domain::models::search_result::SearchResult;

pub const DEFAULT_DOMAIN_CAP: usize = 1;
pub const MATCHED_DOMAIN_CAP: usize = 50;

/// 按来源域名限制结果数量
///
/// 保持排序顺序单次遍历；域名与查询词文本匹配时使用放宽的上限，
/// 避免对被查询站点本身的命中只保留一条。
pub struct DomainLimiter {
    terms: Vec<String>,
    default_cap: usize,
    matched_cap: usize,
}

impl DomainLimiter {
    pub fn new(query: &str, default_cap: usize, matched_cap: usize) -> Self {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Self {
            terms,
            default_cap,
            matched_cap,
        }
    }

    pub fn with_default_caps(query: &str) -> Self {
        Self::new(query, DEFAULT_DOMAIN_CAP, MATCHED_DOMAIN_CAP)
    }

    /// 域名包含某个查询词，或查询词包含域名
    pub fn matches_query(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        if domain.is_empty() {
            return false;
        }
        self.terms
            .iter()
            .any(|term| domain.contains(term.as_str()) || term.contains(domain.as_str()))
    }

    pub fn cap_for(&self, domain: &str) -> usize {
        if self.matches_query(domain) {
            self.matched_cap
        } else {
            self.default_cap
        }
    }

    pub fn limit(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        results
            .into_iter()
            .filter(|result| {
                let domain = result.domain.to_lowercase();
                let cap = self.cap_for(&domain);
                let count = counts.entry(domain).or_insert(0);
                if *count >= cap {
                    return false;
                }
                *count += 1;
                true
            })
            .collect()
    }
}
