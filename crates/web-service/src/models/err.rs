use crate::models::common::{Reply, INTERNAL_ERROR_CODE, INVALID_PARAM_CODE};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use thiserror::Error;
use tracing::{error, warn};

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码和统一返回格式 [`Reply`]
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体不是合法的json，或者缺少字段，转换为400
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] JsonRejection),

    /// 评论ID不是整数，转换为400
    #[error("Invalid ID: {0:?}")]
    InvalidId(String),

    /// 仓库层数据库错误，转换为500
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reply) = match &self {
            AppError::InvalidInput(err) => {
                warn!("⚠️ 请求体解析失败: {err}");
                (StatusCode::BAD_REQUEST, Reply::failure(INVALID_PARAM_CODE, "Invalid input"))
            }
            AppError::InvalidId(id) => {
                warn!("⚠️ 非法的评论ID: {id:?}");
                (StatusCode::BAD_REQUEST, Reply::failure(INVALID_PARAM_CODE, "Invalid ID"))
            }
            // 具体的数据库错误只记录日志，不返回给调用方
            AppError::RepositoryError(err) => {
                error!("❌ 数据库操作失败: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, Reply::failure(INTERNAL_ERROR_CODE, "Internal error"))
            }
        };

        (status, Json(reply)).into_response()
    }
}
