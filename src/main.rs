mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod routes;
mod scheduler;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Console + daily rolling file logging. The guard must outlive main
    // or buffered file output is dropped.
    let file_appender = tracing_appender::rolling::daily("logs", "meteops-core.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    let state = app_state::build_app_state();

    // Background maintenance loop (overdue alert sweep)
    tokio::spawn(scheduler::run(state.clone()));

    let port: u16 = std::env::var("METEOPS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8700);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = routes::app_router().with_state(state);
    let listener = TcpListener::bind(addr).await?;
    info!("meteops-core listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
            info!("Shutting down gracefully");
        })
        .await?;

    Ok(())
}
