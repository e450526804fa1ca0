use metro_server::config::ServerConfig;
use metro_server::logging::init_tracing;
use metro_server::network::Network;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ServerConfig::from_env();

    // Load stations (fail fast if unavailable)
    info!(path = %config.stations_path.display(), "loading stations");
    let network = match Network::load(&config.stations_path) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "failed to load stations");
            std::process::exit(1);
        }
    };

    // Build app state
    let addr = config.bind_addr;
    let state = AppState::new(network, config.search);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!(%addr, "metro route planner listening");
    info!("GET  /health                - Health check");
    info!("GET  /stations?q=           - Search stations");
    info!("GET  /route?from=&to=&mode= - Plan a route (mode: fastest | fewest-transfers)");
    info!("GET  /lines                 - List lines");
    info!("POST /lines/:line/close     - Close a line");
    info!("POST /lines/:line/open      - Reopen a line");
    info!("POST /lines/reset           - Reopen every line");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
