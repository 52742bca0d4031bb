// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Number of pages shown on each side of the current page.
const WINDOW_RADIUS: u32 = 2;

/// 分页导航窗口
///
/// 以当前页为中心的页码区间（±2），并夹取到 `[1, total_pages]`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn new(total_results: usize, results_per_page: u32, current_page: u32) -> Self {
        let per_page = results_per_page.max(1) as usize;
        let total_pages = total_results.div_ceil(per_page) as u32;

        let first = current_page.saturating_sub(WINDOW_RADIUS).max(1);
        let last = total_pages.min(current_page.saturating_add(WINDOW_RADIUS));
        let pages = (first..=last).collect();

        Self {
            current_page,
            total_pages,
            pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

/// 返回指定页的结果切片，超出范围时返回空切片
pub fn page_slice<T>(results: &[T], page: u32, results_per_page: u32) -> &[T] {
    let per_page = results_per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    if start >= results.len() {
        return &[];
    }
    let end = (start + per_page).min(results.len());
    &results[start..end]
}
