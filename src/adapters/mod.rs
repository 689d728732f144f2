// Adapters layer: protocol front ends (gRPC, REST) and the concrete engine
// backend. Everything protocol-specific stays here; the core never sees a
// wire format.

pub mod engine;
pub mod grpc;
pub mod rest;

use crate::core::coordinator::SimulationCoordinator;
use crate::core::validate;
use crate::domain::model::{RawSimulationRequest, SimulationOutcome};
use crate::utils::error::{DispatchError, Result};
use http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tonic::Code;
use tracing::{error, info};

/// Shared by both protocol adapters. The coordinator is stateless and the
/// registry behind it is read-only, so cloning this freely is safe.
#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<SimulationCoordinator>,
    engine_timeout: Duration,
}

impl AppState {
    pub fn new(coordinator: Arc<SimulationCoordinator>, engine_timeout: Duration) -> Self {
        Self {
            coordinator,
            engine_timeout,
        }
    }
}

/// Validate, then run the simulation on a task of its own under the
/// configured deadline. This is the only place an accept loop ever waits:
/// the engine-bound work happens on the spawned task, and on timeout that
/// task is detached and left to finish in the background, so the engine
/// call's resources are still released when it eventually returns.
pub async fn dispatch(state: &AppState, raw: RawSimulationRequest) -> Result<SimulationOutcome> {
    let request = validate::validate(&raw, state.coordinator.registry())?;
    info!(
        model = %request.model_name,
        lon = request.lon,
        lat = request.lat,
        duration_hours = request.duration_hours,
        "simulation accepted"
    );

    let coordinator = Arc::clone(&state.coordinator);
    let handle = tokio::spawn(async move { coordinator.run(&request).await });

    match tokio::time::timeout(state.engine_timeout, handle).await {
        Ok(Ok(result)) => result,
        // A panic inside the run task is a coordinator defect, not caller
        // input; re-raise it instead of reporting it as an engine failure.
        // The runtime contains the re-raised panic to the calling transport
        // task, so the request's connection dies while the listeners keep
        // serving.
        Ok(Err(join_err)) => match join_err.try_into_panic() {
            Ok(payload) => {
                error!("simulation task panicked, re-raising on the request task");
                std::panic::resume_unwind(payload)
            }
            Err(join_err) => Err(DispatchError::Engine {
                message: join_err.to_string(),
            }),
        },
        Err(_) => Err(DispatchError::Timeout {
            limit_secs: state.engine_timeout.as_secs(),
        }),
    }
}

/// The single error-class mapping both adapters consult, so signaling stays
/// semantically identical across protocols.
pub fn status_for(error: &DispatchError) -> (StatusCode, Code) {
    match error {
        DispatchError::UnsupportedModel { .. }
        | DispatchError::MalformedTimestamp { .. }
        | DispatchError::InvalidTimeRange { .. }
        | DispatchError::InvalidGeometry { .. } => (StatusCode::BAD_REQUEST, Code::InvalidArgument),
        DispatchError::Engine { .. } => (StatusCode::BAD_GATEWAY, Code::Internal),
        DispatchError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, Code::DeadlineExceeded),
        DispatchError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, Code::Internal),
    }
}
