use mergington_activities::config::Config;
use mergington_activities::router::{AppState, app_router};
use mergington_activities::service::seed;
use mergington_activities::{ActivityStorage, AppError};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        static_dir = %cfg.static_dir.display(),
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    let storage = ActivityStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;
    if seed::seed_if_empty(&storage).await? {
        info!("database was empty; default activities inserted");
    }

    let app = app_router(AppState::new(storage.clone()), &cfg.static_dir);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
