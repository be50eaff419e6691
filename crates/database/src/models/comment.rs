//! 评论数据库模型
//!
//! 定义评论相关的数据库模型结构体

/// 评论信息结构体，对应 `comments` 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentInfo {
    pub id: i64,
    pub name: String,
    pub content: String,
}

/// 评论创建参数
///
/// 不校验是否为空，也不截断 `name`，原样写入数据库。
#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub name: String,
    pub content: String,
}

/// 分页方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// 返回全部评论，忽略偏移量和数量
    All,

    /// 跳过 `offset` 条之后最多返回 `limit` 条
    Window { offset: i64, limit: i64 },
}
