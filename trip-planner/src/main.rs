use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner::graph::{CityGraph, full_network, seed_network};
use trip_planner::traffic::{SystemClock, TrafficModel};
use trip_planner::web::{AppState, NetworkKind, ServerConfig, create_router};

fn load_network(kind: NetworkKind) -> Result<CityGraph, Box<dyn std::error::Error>> {
    match kind {
        NetworkKind::Seed => Ok(seed_network()),
        NetworkKind::Full => Ok(full_network(&mut rand::rng())?),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let graph = load_network(config.network)?;
    info!(
        network = ?config.network,
        cities = graph.len(),
        routes = graph.route_count(),
        "Loaded city network"
    );

    let state = AppState::new(graph, TrafficModel::default(), config.search, SystemClock);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Trip planner listening");
    info!("  GET  /health      - Health check");
    info!("  GET  /api/cities  - List cities");
    info!("  POST /api/route   - Plan a route");

    axum::serve(listener, app).await?;
    Ok(())
}
