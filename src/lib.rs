pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod tally;

use config::Config;
use log::info;
use std::sync::Arc;
use storage::JsonFileStorage;
use store::PollStore;
use tokio::net::TcpListener;
use tokio::signal;

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let storage = JsonFileStorage::new(&config.votes_path);
    let store = Arc::new(PollStore::open(Box::new(storage)).await?);

    let app = handlers::create_router(store);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Enquete API listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
