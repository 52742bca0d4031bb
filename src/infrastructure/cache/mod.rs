// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供按 (查询, 页码) 存储排序结果的有界缓存
pub mod result_cache;

pub use result_cache::{normalize_query, ResultCache, DEFAULT_CACHE_CAPACITY};
