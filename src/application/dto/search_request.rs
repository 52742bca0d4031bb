// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::pagination::PageWindow;
use crate::domain::models::search_result::SearchResult;

/// 搜索请求（查询字符串参数）
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[validate(length(min = 1, max = 512, message = "Query cannot be empty"))]
    pub q: String,
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// 搜索响应：当前页的结果与分页导航窗口
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
    pub total_results: usize,
    pub from_cache: bool,
    pub results: Vec<SearchResult>,
    pub pagination: PageWindow,
}
