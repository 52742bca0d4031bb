// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod aggregator;
/// 内容来源模块
///
/// 提供各内容来源的适配器实现
/// 包括域名猜测、维基百科、GitHub、Stack Overflow、Hacker News、Open Library
/// 以及带超时与取消的并发聚合器
pub mod domain_guess;
pub mod factory;
pub mod github;
pub mod guard;
pub mod hackernews;
pub mod http;
pub mod openlibrary;
pub mod stackexchange;
pub mod wikipedia;

pub use aggregator::SearchAggregator;
pub use factory::SearchEngineFactory;
