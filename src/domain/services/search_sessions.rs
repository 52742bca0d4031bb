// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::services::search_service::{SearchService, SearchServiceConfig};
use crate::infrastructure::search::aggregator::SearchAggregator;

pub const DEFAULT_MAX_CLIENTS: usize = 256;

/// 客户端标识缺失时使用的共享会话
pub const ANONYMOUS_CLIENT: &str = "anonymous";

/// 按客户端划分的查询编排器
///
/// 每个客户端拥有独立的会话与结果缓存：同一客户端的新查询取代其旧查询，
/// 不同客户端之间互不影响。所有编排器共享同一组来源适配器。
/// 客户端数量有上限，超出时淘汰最久未使用的客户端。
pub struct SearchSessions {
    aggregator: Arc<SearchAggregator>,
    config: SearchServiceConfig,
    services: Mutex<LruCache<String, Arc<SearchService>>>,
}

impl SearchSessions {
    pub fn new(aggregator: SearchAggregator, config: SearchServiceConfig, max_clients: usize) -> Self {
        let capacity = NonZeroUsize::new(max_clients).unwrap_or(NonZeroUsize::MIN);
        Self {
            aggregator: Arc::new(aggregator),
            config,
            services: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// 获取指定客户端的编排器，不存在时创建
    pub fn for_client(&self, client_id: &str) -> Arc<SearchService> {
        let mut services = self.services.lock();
        if let Some(service) = services.get(client_id) {
            return service.clone();
        }

        debug!("Creating search session for client {}", client_id);
        let service = Arc::new(SearchService::new(
            self.aggregator.clone(),
            self.config.clone(),
        ));
        if let Some((evicted, _)) = services.push(client_id.to_string(), service.clone()) {
            debug!("Evicted idle client {}", evicted);
        }
        service
    }

    pub fn client_count(&self) -> usize {
        self.services.lock().len()
    }
}
