// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{routing::get, Extension, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::settings::Settings;
use crate::domain::services::search_sessions::SearchSessions;
use crate::presentation::handlers::search_handler;

/// 创建应用路由
///
/// # 参数
///
/// * `sessions` - 按客户端划分的查询编排器
/// * `settings` - 应用配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(sessions: Arc<SearchSessions>, settings: Arc<Settings>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let search_routes = Router::new()
        .route("/v1/search", get(search_handler::search))
        .layer(Extension(sessions))
        .layer(Extension(settings));

    Router::new()
        .merge(public_routes)
        .merge(search_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
