//! 评论仓库
//!
//! 负责评论相关的数据库操作

use crate::models::comment::{CommentCreate, CommentInfo, Pagination};
use crate::repositories::traits::CommentRepositoryTrait;
use crate::{DatabasePool, DatabaseResult};
use tracing::debug;

/// 评论仓库结构体
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: DatabasePool,
}

impl CommentRepository {
    /// 创建新的评论仓库实例
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommentRepositoryTrait for CommentRepository {
    /// 创建新评论
    ///
    /// 使用 `RETURNING` 在一条语句里拿到数据库分配的 `id`，不需要再查询一次。
    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo> {
        debug!("📝 创建评论: {:#?}", comment);

        let comment_info = sqlx::query_as::<_, CommentInfo>(
            r#"
            INSERT INTO comments (name, content)
            VALUES (?, ?)
            RETURNING id, name, content;
            "#,
        )
        .bind(comment.name)
        .bind(comment.content)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 评论创建成功: {:#?}", comment_info);
        Ok(comment_info)
    }

    async fn count_comments(&self) -> DatabaseResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// 查询评论列表
    ///
    /// 结果始终按 `id` 升序排列，也就是创建顺序。
    ///
    /// # 参数
    /// - `pagination`: [`Pagination::All`] 返回全部评论，[`Pagination::Window`] 按偏移量和数量分页
    async fn list_comments(&self, pagination: Pagination) -> DatabaseResult<Vec<CommentInfo>> {
        debug!("🔍 查询评论 - 分页: {:?}", pagination);

        let comments = match pagination {
            Pagination::All => {
                sqlx::query_as::<_, CommentInfo>("SELECT id, name, content FROM comments ORDER BY id ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Pagination::Window { offset, limit } => {
                // SQLite中负数的LIMIT表示不限制数量，这里统一收敛到 >= 0
                sqlx::query_as::<_, CommentInfo>(
                    r#"
                    SELECT id, name, content
                    FROM comments
                    ORDER BY id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(limit.max(0))
                .bind(offset.max(0))
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!("✅ 查询完成 - 找到 {} 条评论", comments.len());
        Ok(comments)
    }

    async fn delete_comment(&self, id: i64) -> DatabaseResult<u64> {
        debug!("🗑️ 删除评论: {}", id);

        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("✅ 评论删除完成，影响 {} 行", result.rows_affected());
        Ok(result.rows_affected())
    }
}
