pub mod coordinator;
pub mod registry;
pub mod validate;

pub use crate::domain::model::{RawSimulationRequest, SimulationOutcome, SimulationRequest};
pub use crate::domain::ports::{DriftModel, ModelConstructor};
pub use crate::utils::error::Result;
