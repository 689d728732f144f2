use clap::Parser;
use drift_dispatch::adapters::engine::CommandEngine;
use drift_dispatch::adapters::AppState;
use drift_dispatch::utils::logger;
use drift_dispatch::{server, ServiceConfig, SimulationCoordinator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    logger::init(config.verbose);

    tracing::info!("Starting drift-dispatch");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    let config = match config.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let engine = CommandEngine::new(config.engine_cmd.clone());
    let registry = Arc::new(engine.registry(&config.models));
    tracing::info!("Registered models: {}", registry.names().join(", "));

    let coordinator = Arc::new(SimulationCoordinator::new(registry));
    let state = AppState::new(coordinator, config.engine_timeout());

    server::serve(state, config.grpc_addr(), config.http_addr()).await
}
