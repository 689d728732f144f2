use crate::core::registry::ModelRegistry;
use crate::domain::model::{SimulationOutcome, SimulationRequest};
use crate::utils::error::{DispatchError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one validated request against the engine: construct, seed, execute,
/// collect the artifact path. Stateless apart from the read-only registry,
/// so any number of tasks may call [`run`](Self::run) concurrently without
/// coordination.
pub struct SimulationCoordinator {
    registry: Arc<ModelRegistry>,
}

impl SimulationCoordinator {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Engine faults never propagate raw: every failure during seed, execute
    /// or output retrieval comes back as `DispatchError::Engine` carrying the
    /// engine's message untouched. A failed run is reported once; no retries
    /// happen here.
    pub async fn run(&self, request: &SimulationRequest) -> Result<SimulationOutcome> {
        // Validation already vetted the name and the registry is immutable,
        // so this miss is unreachable in practice. Kept so a broken contract
        // surfaces as a classified failure instead of a panic.
        let constructor =
            self.registry
                .lookup(&request.model_name)
                .ok_or_else(|| DispatchError::UnsupportedModel {
                    model: request.model_name.clone(),
                })?;

        let mut model = constructor();
        debug!(model = %request.model_name, "model instance constructed");

        if let Err(fault) = model
            .seed(request.lon, request.lat, request.radius, request.start_time)
            .await
        {
            warn!(model = %request.model_name, %fault, "engine rejected seed");
            return Err(DispatchError::Engine {
                message: fault.to_string(),
            });
        }

        if let Err(fault) = model.execute(request.duration_secs()).await {
            warn!(model = %request.model_name, %fault, "engine run failed");
            return Err(DispatchError::Engine {
                message: fault.to_string(),
            });
        }

        let result_file = model.output_path().map_err(|fault| DispatchError::Engine {
            message: fault.to_string(),
        })?;

        info!(model = %request.model_name, %result_file, "simulation completed");
        Ok(SimulationOutcome { result_file })
    }
}
