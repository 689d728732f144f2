pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::ServiceConfig;
pub use crate::core::{coordinator::SimulationCoordinator, registry::ModelRegistry};
pub use crate::domain::model::{RawSimulationRequest, SimulationOutcome, SimulationRequest};
pub use crate::utils::error::{DispatchError, Result};
