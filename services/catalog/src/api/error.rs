//! API 错误映射

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tienda_errors::AppError;
use tracing::error;

/// API 层错误包装
///
/// 接口契约规定"不存在"渲染为空体 404；
/// 其余错误按状态码渲染 RFC 7807 Problem Details
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if matches!(self.0, AppError::NotFound(_)) {
            return status.into_response();
        }

        error!(error = %self.0, "Request failed");
        (status, Json(self.0.to_problem_details())).into_response()
    }
}
