use anyhow::Context;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::adapters::grpc::GrpcSimulatorService;
use crate::adapters::{rest, AppState};

/// Serve both front ends against one shared coordinator. Either listener
/// failing tears the whole service down: a half-available service would
/// look healthy to one set of callers while the other set silently starves.
pub async fn serve(
    state: AppState,
    grpc_addr: SocketAddr,
    http_addr: SocketAddr,
) -> anyhow::Result<()> {
    let http_listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {http_addr}"))?;

    let grpc_server = tonic::transport::Server::builder()
        .add_service(GrpcSimulatorService::new(state.clone()).into_server())
        .serve(grpc_addr);
    let http_server = axum::serve(http_listener, rest::router(state)).into_future();

    info!("gRPC listening on {grpc_addr}");
    info!("HTTP listening on {http_addr}");

    tokio::select! {
        result = grpc_server => result.context("gRPC server terminated"),
        result = http_server => result.context("HTTP server terminated"),
    }
}
