use async_trait::async_trait;
use chrono::NaiveDateTime;
use drift_dispatch::adapters::{rest, AppState};
use drift_dispatch::domain::ports::{DriftModel, EngineFault, EngineResult, ModelConstructor};
use drift_dispatch::{ModelRegistry, SimulationCoordinator};
use std::sync::Arc;
use std::time::Duration;

struct StaticModel {
    outcome: Result<&'static str, &'static str>,
}

#[async_trait]
impl DriftModel for StaticModel {
    async fn seed(
        &mut self,
        _lon: f64,
        _lat: f64,
        _radius: f64,
        _time: NaiveDateTime,
    ) -> EngineResult<()> {
        Ok(())
    }

    async fn execute(&mut self, _duration_secs: u64) -> EngineResult<()> {
        match self.outcome {
            Ok(_) => Ok(()),
            Err(message) => Err(EngineFault::new(message)),
        }
    }

    fn output_path(&self) -> EngineResult<String> {
        self.outcome
            .map(str::to_string)
            .map_err(EngineFault::new)
    }
}

fn static_constructor(outcome: Result<&'static str, &'static str>) -> ModelConstructor {
    Arc::new(move || Box::new(StaticModel { outcome }))
}

async fn spawn_server() -> String {
    let registry = ModelRegistry::new()
        .register("OceanDrift", static_constructor(Ok("/data/out/drift_0001.nc")))
        .register("Leeway", static_constructor(Err("no forcing data available")));
    let coordinator = Arc::new(SimulationCoordinator::new(Arc::new(registry)));
    let state = AppState::new(coordinator, Duration::from_secs(5));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, rest::router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "model_name": "OceanDrift",
        "lon": 12.5,
        "lat": 55.0,
        "radius": 1000.0,
        "start_time": "2024-01-01T00:00:00",
        "end_time": "2024-01-02T00:00:00",
        "duration_hours": 24
    })
}

#[tokio::test]
async fn simulate_returns_success_shape() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/simulate"))
        .json(&valid_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["result_file"], "/data/out/drift_0001.nc");
}

#[tokio::test]
async fn unknown_model_is_a_structured_client_error() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut body = valid_body();
    body["model_name"] = serde_json::json!("Unknown");
    let response = client
        .post(format!("{base}/simulate"))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "unsupported_model");
    assert!(body["error"].as_str().unwrap().contains("Unknown"));
}

#[tokio::test]
async fn validation_errors_carry_their_kind() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let cases = [
        ("start_time", serde_json::json!("garbage"), "malformed_timestamp"),
        ("lat", serde_json::json!(120.0), "invalid_geometry"),
        ("duration_hours", serde_json::json!(0), "invalid_time_range"),
    ];

    for (field, value, kind) in cases {
        let mut body = valid_body();
        body[field] = value;
        let response = client
            .post(format!("{base}/simulate"))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400, "case {kind}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], kind);
    }
}

#[tokio::test]
async fn engine_failure_maps_to_bad_gateway_with_message() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut body = valid_body();
    body["model_name"] = serde_json::json!("Leeway");
    let response = client
        .post(format!("{base}/simulate"))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "engine_error");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("no forcing data available"));
}

#[tokio::test]
async fn health_reports_the_service() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "drift-dispatch");
}
