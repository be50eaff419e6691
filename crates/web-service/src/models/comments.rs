use database::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// `size` 取这个值时返回全部评论
pub const ALL_COMMENTS: i64 = -1;

/// 评论列表查询参数
///
/// 两个参数都按字符串接收，再自行解析：缺失或者不是整数时按 `0` 处理，不会返回错误。
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    /// 页码，从1开始
    #[param(example = "1")]
    pub page: Option<String>,

    /// 每页数量，`-1` 表示返回全部评论
    #[param(example = "10")]
    pub size: Option<String>,
}

impl CommentListQuery {
    /// 把页码和每页数量转换为数据库分页方式
    ///
    /// - `size == -1`: [`Pagination::All`]
    /// - 其他情况: 偏移量 `(page - 1) * size`，小于0时从头开始；`size` 小于0时返回空列表
    pub fn pagination(&self) -> Pagination {
        let page = parse_or_zero(self.page.as_deref());
        let size = parse_or_zero(self.size.as_deref());

        if size == ALL_COMMENTS {
            return Pagination::All;
        }

        // 使用saturating运算，避免超大参数导致溢出
        let offset = page.saturating_sub(1).saturating_mul(size).max(0);

        Pagination::Window {
            offset,
            limit: size.max(0),
        }
    }
}

/// 删除评论的查询参数
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentDeleteQuery {
    /// 评论ID
    #[param(example = "1")]
    pub id: Option<String>,
}

impl CommentDeleteQuery {
    /// 解析评论ID，缺失或者不是整数时返回 `None`
    pub fn parse_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }
}

fn parse_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// 新建评论的请求体
#[derive(Deserialize, Debug, ToSchema)]
pub struct CommentCreate {
    #[schema(example = "alice")]
    /// 评论者名称
    pub name: String,

    #[schema(example = "hi")]
    /// 评论内容
    pub content: String,
}

impl From<CommentCreate> for database::CommentCreate {
    fn from(comment: CommentCreate) -> Self {
        Self {
            name: comment.name,
            content: comment.content,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize, Clone, PartialEq, Eq)]
pub struct CommentInfo {
    #[schema(example = 1)]
    /// 评论ID
    pub id: i64,

    #[schema(example = "alice")]
    /// 评论者名称
    pub name: String,

    #[schema(example = "hi")]
    /// 评论内容
    pub content: String,
}

impl From<database::CommentInfo> for CommentInfo {
    fn from(comment: database::CommentInfo) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            content: comment.content,
        }
    }
}

/// 评论列表
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct CommentPage {
    #[schema(example = 146)]
    /// 评论总数（整张表，不是当前页）
    pub total: i64,

    /// 当前页的评论
    pub comments: Vec<CommentInfo>,
}
