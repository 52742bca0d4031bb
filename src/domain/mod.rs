// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 包含搜索结果模型、内容来源抽象与领域服务
pub mod models;
pub mod search;
pub mod services;
