// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP处理器模块
///
/// 定义处理HTTP请求的处理器函数
pub mod search_handler;
