use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use timeplan::config::PlannerConfig;
use timeplan::db::PlannerDb;
use timeplan::server::create_router;
use timeplan::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PlannerConfig::load_or_default(config_path.as_deref())
        .context("failed to load configuration")?;

    let db = PlannerDb::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path))?;
    info!("Opened planner database at {}", config.db_path);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let state = Arc::new(AppState::new(config, db));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
