use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The engine contract measures runs in seconds; callers speak hours.
pub const SECS_PER_HOUR: u64 = 3600;

/// An inbound request exactly as decoded from the wire, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSimulationRequest {
    pub model_name: String,
    pub lon: f64,
    pub lat: f64,
    pub radius: f64,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub duration_hours: i64,
}

/// A validated request. Immutable once constructed; created fresh per call
/// and discarded with it.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    pub model_name: String,
    pub lon: f64,
    pub lat: f64,
    pub radius: f64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_hours: u64,
}

impl SimulationRequest {
    /// Run length in the engine's native unit, exactly hours x 3600.
    pub fn duration_secs(&self) -> u64 {
        self.duration_hours * SECS_PER_HOUR
    }
}

/// What a completed run yields: the engine's artifact location.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub result_file: String,
}
