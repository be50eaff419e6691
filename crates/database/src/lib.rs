//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、建表、评论增删查等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::comment::{CommentCreate, CommentInfo, Pagination};
pub use repositories::{comment::CommentRepository, traits::CommentRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
