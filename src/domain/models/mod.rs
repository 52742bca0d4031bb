// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索结果（search_result）：各来源归一化后的统一结果形态
/// - 分页（pagination）：结果切片与导航页码窗口
pub mod pagination;
pub mod search_result;
