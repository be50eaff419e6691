//! 🔧 共享库模块
//!
//! 这个模块包含了在多个crate之间共享的通用代码，目前只有：
//! - 程序配置

pub mod models;

// 重新导出常用类型
pub use models::{AppConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_MAX_DB_CONNECTIONS};
