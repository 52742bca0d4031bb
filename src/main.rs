// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use metasearch::config::settings::Settings;
use metasearch::domain::services::search_service::SearchServiceConfig;
use metasearch::domain::services::search_sessions::SearchSessions;
use metasearch::infrastructure::metrics;
use metasearch::infrastructure::search::{SearchAggregator, SearchEngineFactory};
use metasearch::presentation::routes;
use metasearch::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting metasearch...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);

    // 3. Initialize Prometheus metrics
    metrics::init_metrics(&settings.metrics)?;

    // 4. Register sources
    let factory = SearchEngineFactory::from_settings(&settings.search, &settings.sources)?;
    let aggregator = SearchAggregator::new(
        factory.create_enabled_engines(),
        settings.search.timeout_ms,
    );
    info!(
        "Aggregating {} sources with a {:?} budget each",
        aggregator.engine_count(),
        aggregator.timeout()
    );

    // 5. Per-client orchestrators sharing the sources
    let sessions = Arc::new(SearchSessions::new(
        aggregator,
        SearchServiceConfig::from(&settings.search),
        settings.search.max_clients,
    ));

    // 6. Serve
    let app = routes::routes(sessions, settings.clone());
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
