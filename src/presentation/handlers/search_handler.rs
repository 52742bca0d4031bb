// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::{
    application::dto::search_request::{SearchRequestDto, SearchResponseDto},
    config::settings::Settings,
    domain::{
        models::pagination::{page_slice, PageWindow},
        services::search_service::SearchOutcome,
        services::search_sessions::{SearchSessions, ANONYMOUS_CLIENT},
    },
    presentation::errors::AppError,
};

/// 标识调用方的请求头；同一标识的新查询会取代其尚未完成的旧查询
pub const CLIENT_ID_HEADER: &str = "x-client-id";

const MAX_CLIENT_ID_LEN: usize = 128;

/// 处理搜索请求
///
/// 会话按 `X-Client-Id` 请求头划分，缺失或无效时归入共享的匿名会话。
///
/// # 参数
///
/// * `sessions` - 按客户端划分的查询编排器
/// * `settings` - 应用配置（默认每页结果数）
/// * `headers` - 请求头（客户端标识）
/// * `params` - 查询参数 `q`、`page`、`per_page`
///
/// # 返回值
///
/// * `200` - 当前页结果与分页窗口
/// * `204` - 查询被同一客户端更新的查询取代
///
/// # 错误
///
/// - 查询为空或参数校验失败时返回 400
/// - 聚合失败时返回 502
pub async fn search(
    Extension(sessions): Extension<Arc<SearchSessions>>,
    Extension(settings): Extension<Arc<Settings>>,
    headers: HeaderMap,
    Query(params): Query<SearchRequestDto>,
) -> Result<Response, AppError> {
    params.validate()?;
    let service = sessions.for_client(client_id(&headers));

    let page = params.page.unwrap_or(1);
    let per_page = params
        .per_page
        .unwrap_or(settings.search.results_per_page);

    match service.search(&params.q, page).await? {
        SearchOutcome::Empty => Err(AppError::bad_request("Query cannot be empty")),
        SearchOutcome::Cancelled => {
            debug!("Query {:?} superseded", params.q);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        SearchOutcome::Delivered(delivered) => {
            let results = page_slice(&delivered.results, page, per_page).to_vec();
            let response = SearchResponseDto {
                query: delivered.query,
                page,
                per_page,
                total_results: delivered.total_results,
                from_cache: delivered.from_cache,
                results,
                pagination: PageWindow::new(delivered.total_results, per_page, page),
            };
            Ok((StatusCode::OK, Json(response)).into_response())
        }
    }
}

fn client_id(headers: &HeaderMap) -> &str {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_CLIENT_ID_LEN)
        .unwrap_or(ANONYMOUS_CLIENT)
}
