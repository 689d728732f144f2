use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use serde::Serialize;

use super::{dispatch, status_for, AppState};
use crate::domain::model::RawSimulationRequest;
use crate::utils::error::DispatchError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate))
        .route("/health", get(health))
        .with_state(state)
}

async fn simulate(
    State(state): State<AppState>,
    Json(raw): Json<RawSimulationRequest>,
) -> Result<Json<SimulateResponse>, DispatchError> {
    let outcome = dispatch(&state, raw).await?;
    Ok(Json(SimulateResponse {
        status: "success",
        result_file: outcome.result_file,
    }))
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

#[derive(Serialize)]
struct SimulateResponse {
    status: &'static str,
    result_file: String,
}

#[derive(Serialize)]
struct HealthResponse {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let (status, _) = status_for(&self);
        let body = ErrorBody {
            status: self.kind(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
