use std::sync::Arc;
use tracing::Level;

/// 默认的SQLite数据库文件，相对于进程工作目录
pub const DEFAULT_DATABASE_URL: &str = "sqlite://comments.db";

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认连接池大小
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

/// 程序配置
///
/// 所有配置项都有默认值，不需要任何环境变量也能直接启动。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite数据库链接字符串
    ///
    /// 可通过环境变量 `DATABASE_URL` 来调整
    pub database_url: String,

    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: String,

    /// 数据库连接池最大连接数
    ///
    /// 可通过环境变量 `MAX_DB_CONNECTIONS` 来调整
    pub max_db_connections: u32,

    /// 日志级别，可通过环境变量 `LOG_LEVEL` 来调整
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_db_connections: DEFAULT_MAX_DB_CONNECTIONS,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn load() -> Arc<AppConfig> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 没有.env文件时直接使用进程环境变量
        let _ = dotenvy::dotenv();

        Arc::new(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// 根据 `lookup` 函数解析配置，未设置或者无法解析的值使用默认值
    pub fn from_lookup<F>(lookup: F) -> AppConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        AppConfig {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_db_connections: lookup("MAX_DB_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_db_connections),
            log_level: lookup("LOG_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
