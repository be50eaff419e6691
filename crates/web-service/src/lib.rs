//! Web服务模块
//!
//! 提供评论的 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{CommentRepository, CommentRepositoryTrait, DatabasePool};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 仓库在启动时创建后注入进来，测试时可以注入使用独立数据库的仓库。
#[derive(Clone)]
pub struct AppState {
    pub comment_repository: Arc<dyn CommentRepositoryTrait>,
}

impl AppState {
    pub fn new<CR: CommentRepositoryTrait>(comment_repository: CR) -> Self {
        Self {
            comment_repository: Arc::new(comment_repository),
        }
    }
}

/// 启动 Web 服务，收到关闭信号后优雅退出
pub async fn start_web_service(config: Arc<AppConfig>, pool: DatabasePool, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::new(CommentRepository::new(pool));

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
