// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含相关度排序、域名限流、查询编排与按客户端划分的会话
pub mod domain_limiter;
pub mod relevance_scorer;
pub mod search_service;
pub mod search_sessions;
