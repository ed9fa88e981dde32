use anyhow::Context;
use chirpy::logging::{init_tracing, shutdown_tracer};
use chirpy::metrics::{init_metrics, metrics_app};
use chirpy::router::init_router;
use chirpy::state::init_app_state;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let state = init_app_state().await?;
    let port = state.server_config.port;
    let metrics_port = state.server_config.metrics_port;

    if let Some(handle) = init_metrics()? {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", metrics_port))
            .await
            .with_context(|| format!("Failed to bind metrics port {metrics_port}"))?;
        info!(port = metrics_port, "Prometheus metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    info!(port, "Server running on http://localhost:{port}");
    info!("Swagger UI available at http://localhost:{port}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
