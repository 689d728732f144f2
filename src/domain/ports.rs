use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::fmt;
use std::sync::Arc;

/// A fault raised by the engine during seed, execute, or output retrieval.
/// The message travels back to callers verbatim for diagnostics.
#[derive(Debug, Clone)]
pub struct EngineFault(String);

impl EngineFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for EngineFault {}

pub type EngineResult<T> = std::result::Result<T, EngineFault>;

/// One drift-model run. An instance owns whatever state the underlying
/// engine needs and is never shared between requests: construct, seed,
/// execute, read the output, drop.
#[async_trait]
pub trait DriftModel: Send {
    async fn seed(
        &mut self,
        lon: f64,
        lat: f64,
        radius: f64,
        time: NaiveDateTime,
    ) -> EngineResult<()>;

    async fn execute(&mut self, duration_secs: u64) -> EngineResult<()>;

    fn output_path(&self) -> EngineResult<String>;
}

/// Builds a fresh, independent model instance per invocation.
pub type ModelConstructor = Arc<dyn Fn() -> Box<dyn DriftModel> + Send + Sync>;
