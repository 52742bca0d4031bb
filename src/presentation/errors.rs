// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

use crate::domain::services::search_service::SearchServiceError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(anyhow::Error::new(BadRequest(message.into())))
    }

    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<BadRequest>().is_some()
            || self.0.downcast_ref::<ValidationErrors>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }
        match self.0.downcast_ref::<SearchServiceError>() {
            Some(SearchServiceError::InvalidPage(_)) => StatusCode::BAD_REQUEST,
            Some(SearchServiceError::AggregationFailure(_)) => StatusCode::BAD_GATEWAY,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct BadRequest(String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
