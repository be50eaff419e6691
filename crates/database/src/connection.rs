use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Sqlite>;

/// 评论表结构
///
/// `AUTOINCREMENT` 保证删除最大的id之后也不会被重新分配。
/// 只有一张表，不做版本管理，所以直接使用 `IF NOT EXISTS` 建表。
const COMMENTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    content TEXT NOT NULL
);
"#;

/// 创建数据库连接池并确保表存在（一站式函数）
///
/// 任何失败都会返回错误，调用方需要直接终止启动流程。
pub async fn initialize_database(config: Arc<AppConfig>) -> DatabaseResult<DatabasePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| DatabaseError::connection(format!("解析数据库地址 {} 失败: {e}", config.database_url)))?
        // 数据库文件不存在时自动创建
        .create_if_missing(true)
        // WAL模式下读写可以并发
        .journal_mode(SqliteJournalMode::Wal)
        // 并发写入时等待锁，而不是直接返回SQLITE_BUSY
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_db_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接SQLite数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功: {}", config.database_url);

    sqlx::query(COMMENTS_SCHEMA)
        .execute(&pool)
        .await
        .map_err(|e| DatabaseError::schema(format!("创建comments表失败: {e}")))?;

    info!("✅ comments表已就绪");

    Ok(pool)
}
