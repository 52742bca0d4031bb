// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含结果缓存、指标导出以及各内容来源的适配器
pub mod cache;
pub mod metrics;
pub mod search;
