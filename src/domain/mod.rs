// Domain layer: request/result value objects and the engine port. No
// knowledge of wire formats or of any concrete engine backend.

pub mod model;
pub mod ports;
