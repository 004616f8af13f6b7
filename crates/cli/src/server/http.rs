use ferrous_gslb_api::{create_api_routes, AppState};
use ferrous_gslb_domain::config::ServerConfig;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_http_server(cfg: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let ip: IpAddr = cfg.bind_address.parse()?;
    let socket_addr = SocketAddr::new(ip, cfg.http_port);

    info!(bind_address = %socket_addr, "Starting remote-backend HTTP server");

    let app = create_api_routes(state).layer(TraceLayer::new_for_http());
    let listener = TcpListener::bind(socket_addr).await?;

    info!("Remote-backend server ready to accept lookups");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
