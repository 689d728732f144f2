use tonic::{Request, Response, Status};

use super::{dispatch, status_for, AppState};
use crate::domain::model::RawSimulationRequest;

pub mod v1 {
    tonic::include_proto!("opendrift.v1");
}

use v1::open_drift_simulator_server::{OpenDriftSimulator, OpenDriftSimulatorServer};
use v1::{SimulationRequest, SimulationResponse};

pub struct GrpcSimulatorService {
    state: AppState,
}

impl GrpcSimulatorService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn into_server(self) -> OpenDriftSimulatorServer<Self> {
        OpenDriftSimulatorServer::new(self)
    }
}

#[tonic::async_trait]
impl OpenDriftSimulator for GrpcSimulatorService {
    async fn run_simulation(
        &self,
        request: Request<SimulationRequest>,
    ) -> Result<Response<SimulationResponse>, Status> {
        let req = request.into_inner();
        let raw = RawSimulationRequest {
            model_name: req.model_name,
            lon: req.lon,
            lat: req.lat,
            radius: req.radius,
            start_time: req.start_time,
            end_time: (!req.end_time.is_empty()).then_some(req.end_time),
            duration_hours: req.duration_hours,
        };

        match dispatch(&self.state, raw).await {
            Ok(outcome) => Ok(Response::new(SimulationResponse {
                status: "success".to_string(),
                result_file: outcome.result_file,
            })),
            Err(error) => {
                let (_, code) = status_for(&error);
                Err(Status::new(code, format!("{}: {}", error.kind(), error)))
            }
        }
    }
}
