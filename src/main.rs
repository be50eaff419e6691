use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load();

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动评论服务...");

    // 数据库打不开时直接退出，不然服务启动了也没用
    let pool = database::initialize_database(Arc::clone(&config))
        .await
        .wrap_err_with(|| format!("初始化数据库 {} 失败", config.database_url))?;

    // 关闭信号，发送端在收到系统信号之后发送true
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, pool, shutdown_rx).await?;

    info!("👋 评论服务已退出");

    Ok(())
}

/// 等待 Ctrl+C 或者 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("无法监听Ctrl+C信号: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("无法监听SIGTERM信号: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("收到Ctrl+C，开始优雅关闭...");
        }
        _ = terminate => {
            warn!("收到SIGTERM，开始优雅关闭...");
        }
    }
}
