//! 评论仓库 trait 定义
//!
//! 定义评论数据库操作的抽象接口

use crate::models::comment::{CommentCreate, CommentInfo, Pagination};
use crate::DatabaseResult;

/// 评论仓库trait定义
///
/// 定义了评论相关的数据库操作接口，支持：
/// - 评论创建
/// - 评论计数
/// - 评论列表（分页）
/// - 评论删除
#[async_trait::async_trait]
pub trait CommentRepositoryTrait: Send + Sync + 'static {
    /// 创建新评论
    ///
    /// # 返回值
    /// 返回写入后的评论，包含数据库分配的 `id`
    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo>;

    /// 评论总数
    async fn count_comments(&self) -> DatabaseResult<i64>;

    /// 按 `id` 升序查询评论列表
    ///
    /// # 参数
    /// - `pagination`: 分页方式，参考 [`Pagination`]
    async fn list_comments(&self, pagination: Pagination) -> DatabaseResult<Vec<CommentInfo>>;

    /// 删除评论
    ///
    /// 评论不存在时不报错。
    ///
    /// # 返回值
    /// 实际删除的行数（0 或 1）
    async fn delete_comment(&self, id: i64) -> DatabaseResult<u64>;
}
