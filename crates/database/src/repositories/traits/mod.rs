//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! Repository trait 需要满足 `Send + Sync + 'static`，这样才能放进 `Arc` 里作为axum的共享状态，
//! 在多个请求（可能在不同线程）之间同时使用。
//!
//! trait 方法通过 [`async_trait`] 定义，因此可以作为 trait object 使用：
//!
//! ```rust,ignore
//! let repo: Arc<dyn CommentRepositoryTrait> = Arc::new(CommentRepository::new(pool));
//! let comment = repo.create_comment(create).await?;
//! ```
//!
//! 测试时可以注入一个使用独立数据库文件的仓库实例。

pub mod comment;

// 重新导出
pub use comment::CommentRepositoryTrait;
