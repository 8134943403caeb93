use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod types;
mod utils;


fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on Ctrl-C, or SIGTERM where the platform has it.
async fn stop_requested() {
    let interrupt = async {
        tokio::signal::ctrl_c().await.ok();
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("interrupt received, draining connections"),
        _ = terminate => info!("terminate received, draining connections"),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = config::AppConfig::from_env()?;
    let app = routes::router(cfg.build_state()?);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    // A port we cannot bind ends the process.
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, upstream = %cfg.currencies_url, "currency relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(stop_requested())
        .await?;

    Ok(())
}
