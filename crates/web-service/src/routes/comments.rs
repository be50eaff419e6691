//! 评论相关接口
//!
//! 三个接口互相独立，除了数据库之外没有任何共享状态。

use crate::models::comments::{CommentCreate, CommentDeleteQuery, CommentInfo, CommentListQuery, CommentPage};
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use database::Pagination;
use tracing::debug;

/// 分页查询评论
///
/// 查询参数参考 [`CommentListQuery`]，`size=-1` 时忽略分页返回全部评论。
///
/// 参数解析失败时不会报错，而是按 `0` 处理，这时返回的是空列表和评论总数。
#[utoipa::path(get,
    path = "/comment/get",
    tag = "comments",
    params(CommentListQuery),
    responses(
        (status = 200, description = "Comment page", body = Reply<CommentPage>)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    query: Result<Query<CommentListQuery>, QueryRejection>,
) -> Result<Json<Reply<CommentPage>>, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let pagination = query.pagination();
    debug!("🔍 查询评论 {:?} -> {:?}", query, pagination);

    let repo = state.comment_repository.as_ref();

    // total始终是整张表的数量，和当前页无关
    let total = repo.count_comments().await?;
    let comments = match pagination {
        // 只有一页也没有数据时不需要再查询
        Pagination::Window { limit: 0, .. } => Vec::new(),
        _ => repo.list_comments(pagination).await?,
    };

    Ok(Json(Reply::success(CommentPage {
        total,
        comments: comments.into_iter().map(Into::into).collect(),
    })))
}

/// 新建评论
///
/// 请求体必须是包含 `name` 和 `content` 两个字符串字段的json，否则返回400。
/// 不会对内容做其他校验（比如空字符串）。
#[utoipa::path(post,
    path = "/comment/add",
    tag = "comments",
    request_body = CommentCreate,
    responses(
        (status = 200, description = "Created comment", body = Reply<CommentInfo>),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn add_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentCreate>, JsonRejection>,
) -> Result<Json<Reply<CommentInfo>>, AppError> {
    let Json(comment) = payload?;
    debug!("📝 新建评论 {:#?}", comment);

    let comment = state.comment_repository.create_comment(comment.into()).await?;

    Ok(Json(Reply::success(comment.into())))
}

/// 删除指定的评论
///
/// 评论不存在时同样返回成功，调用方无法区分两种情况。
#[utoipa::path(post,
    path = "/comment/delete",
    tag = "comments",
    params(CommentDeleteQuery),
    responses(
        (status = 200, description = "Comment deleted (or did not exist)"),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    query: Result<Query<CommentDeleteQuery>, QueryRejection>,
) -> Result<Json<Reply<()>>, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let id = query
        .parse_id()
        .ok_or_else(|| AppError::InvalidId(query.id.clone().unwrap_or_default()))?;
    debug!("🗑️ 删除评论 {}", id);

    state.comment_repository.delete_comment(id).await?;

    Ok(Json(Reply::success(())))
}
