// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义内容来源的类型与适配器接口
/// 各来源适配器的具体实现位于基础设施层
pub mod engine;
pub mod source;
