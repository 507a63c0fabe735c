use mood_metrics::{load_ledger, router, AppState, Config, LexiconClassifier};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    for path in [&config.ledger_path, &config.donations_path] {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
    }

    let ledger = load_ledger(&config.ledger_path).await?;
    info!(
        days = ledger.len(),
        path = %config.ledger_path.display(),
        "loaded sentiment ledger"
    );

    let addr = config.addr();
    let state = AppState::new(config, Arc::new(LexiconClassifier::new()), ledger);
    let app = router(state);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
