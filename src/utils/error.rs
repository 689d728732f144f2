use thiserror::Error;

/// Everything the dispatch path can report to a caller. Validation-phase
/// variants are fixable by the caller; `Engine` and `Timeout` are not.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("model \"{model}\" is not registered")]
    UnsupportedModel { model: String },

    #[error("malformed timestamp in {field}: \"{value}\"")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("invalid time range: {reason}")]
    InvalidTimeRange { reason: String },

    #[error("invalid geometry: {field} = {value} ({reason})")]
    InvalidGeometry {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("engine failure: {message}")]
    Engine { message: String },

    #[error("simulation did not complete within {limit_secs}s")]
    Timeout { limit_secs: u64 },

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, DispatchError>;

impl DispatchError {
    /// Stable keyword reported on the wire for this error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedModel { .. } => "unsupported_model",
            Self::MalformedTimestamp { .. } => "malformed_timestamp",
            Self::InvalidTimeRange { .. } => "invalid_time_range",
            Self::InvalidGeometry { .. } => "invalid_geometry",
            Self::Engine { .. } => "engine_error",
            Self::Timeout { .. } => "timeout",
            Self::Config { .. } => "config_error",
        }
    }
}
