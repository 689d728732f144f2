use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

use crate::core::registry::ModelRegistry;
use crate::domain::ports::{DriftModel, EngineFault, EngineResult, ModelConstructor};

/// Engine backend that shells out to an external runner for the actual
/// physics. One subprocess per run; the runner prints the artifact path on
/// stdout and reports faults through its exit status and stderr.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    command: String,
}

impl CommandEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Constructor for `model_name` backed by this engine command.
    pub fn constructor(&self, model_name: &str) -> ModelConstructor {
        let command = self.command.clone();
        let model_name = model_name.to_string();
        Arc::new(move || {
            Box::new(CommandModel {
                command: command.clone(),
                model_name: model_name.clone(),
                seed: None,
                result_file: None,
            })
        })
    }

    /// A registry exposing every requested model through this engine.
    pub fn registry(&self, models: &[String]) -> ModelRegistry {
        models.iter().fold(ModelRegistry::new(), |registry, name| {
            registry.register(name.clone(), self.constructor(name))
        })
    }
}

#[derive(Debug, Clone)]
struct SeedPoint {
    lon: f64,
    lat: f64,
    radius: f64,
    time: NaiveDateTime,
}

struct CommandModel {
    command: String,
    model_name: String,
    seed: Option<SeedPoint>,
    result_file: Option<String>,
}

#[async_trait]
impl DriftModel for CommandModel {
    async fn seed(
        &mut self,
        lon: f64,
        lat: f64,
        radius: f64,
        time: NaiveDateTime,
    ) -> EngineResult<()> {
        self.seed = Some(SeedPoint {
            lon,
            lat,
            radius,
            time,
        });
        Ok(())
    }

    async fn execute(&mut self, duration_secs: u64) -> EngineResult<()> {
        let seed = self
            .seed
            .as_ref()
            .ok_or_else(|| EngineFault::new("model executed before seeding"))?;

        debug!(command = %self.command, model = %self.model_name, "launching engine runner");
        let output = Command::new(&self.command)
            .arg("--model")
            .arg(&self.model_name)
            .arg("--lon")
            .arg(seed.lon.to_string())
            .arg("--lat")
            .arg(seed.lat.to_string())
            .arg("--radius")
            .arg(seed.radius.to_string())
            .arg("--time")
            .arg(seed.time.format("%Y-%m-%dT%H:%M:%S").to_string())
            .arg("--duration-seconds")
            .arg(duration_secs.to_string())
            .output()
            .await
            .map_err(|e| EngineFault::new(format!("failed to launch engine runner: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineFault::new(format!(
                "engine runner exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if path.is_empty() {
            return Err(EngineFault::new("engine runner produced no output path"));
        }
        self.result_file = Some(path);
        Ok(())
    }

    fn output_path(&self) -> EngineResult<String> {
        self.result_file
            .clone()
            .ok_or_else(|| EngineFault::new("no output before a completed run"))
    }
}
