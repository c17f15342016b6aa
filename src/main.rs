use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpinger::{AppState, Config, Result, StatusCache, create_router};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();

    tracing::info!(
        "Refreshing server status every {}s, probe timeout {}ms",
        config.check_interval_secs,
        config.probe_timeout_ms
    );

    // Создаём кеш статусов
    let cache = Arc::new(StatusCache::new(
        Duration::from_secs(config.check_interval_secs),
        Duration::from_millis(config.probe_timeout_ms),
    ));

    // Создаём состояние приложения
    let state = Arc::new(AppState {
        config: config.clone(),
        cache: cache.clone(),
    });

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    // Создание router
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    // Настройка адреса для прослушивания
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("mcpinger starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /health              - Health check");
    tracing::info!("  - GET  /lookup/{{identifier}} - Field lookup");
    tracing::info!("  - GET  /status/{{key}}        - Raw status snapshot");
    tracing::info!("  - POST /cache/clear         - Prune finished entries");

    // Запуск сервера с graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.clone().changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    // Останавливаем кеш и отменяем активные проверки
    cache.stop().await;
    tracing::info!("Status cache stopped");

    Ok(())
}

fn setup_tracing() {
    // Используем EnvFilter::from_default_env() для правильной обработки RUST_LOG
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
