// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 安装 Prometheus 导出器
///
/// 导出器安装失败（例如端口被占用）只记录警告，不影响搜索服务
pub fn init_metrics(settings: &MetricsSettings) -> anyhow::Result<()> {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return Ok(());
    }

    let addr: SocketAddr = settings.listen_addr.parse()?;
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => info!("Metrics exporter listening on {}", addr),
        Err(e) => warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        ),
    }
    Ok(())
}
