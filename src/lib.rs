// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含HTTP接口使用的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置
pub mod config;

/// 领域模块
///
/// 包含搜索结果模型、内容来源抽象、排序与查询编排
pub mod domain;

/// 基础设施模块
///
/// 提供结果缓存、指标导出与内容来源适配器
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化
pub mod utils;
