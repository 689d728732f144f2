use crate::core::registry::ModelRegistry;
use crate::domain::model::{RawSimulationRequest, SimulationRequest, SECS_PER_HOUR};
use crate::utils::error::{DispatchError, Result};
use chrono::NaiveDateTime;

/// Turn an untrusted wire request into a validated `SimulationRequest`, or
/// say precisely why not. Pure data validation: the engine is never touched
/// here, so an unsupported model name costs nothing but the lookup.
pub fn validate(raw: &RawSimulationRequest, registry: &ModelRegistry) -> Result<SimulationRequest> {
    if !registry.contains(&raw.model_name) {
        return Err(DispatchError::UnsupportedModel {
            model: raw.model_name.clone(),
        });
    }

    let start_time = parse_timestamp("start_time", &raw.start_time)?;
    let end_time = match raw.end_time.as_deref() {
        Some(value) if !value.is_empty() => Some(parse_timestamp("end_time", value)?),
        _ => None,
    };

    if let Some(end) = end_time {
        if start_time > end {
            return Err(DispatchError::InvalidTimeRange {
                reason: format!("start_time {start_time} is after end_time {end}"),
            });
        }
    }

    if raw.duration_hours <= 0 {
        return Err(DispatchError::InvalidTimeRange {
            reason: format!("duration_hours must be positive, got {}", raw.duration_hours),
        });
    }
    // The engine takes seconds; bound hours so the conversion cannot wrap.
    let max_hours = (u64::MAX / SECS_PER_HOUR) as i64;
    if raw.duration_hours > max_hours {
        return Err(DispatchError::InvalidTimeRange {
            reason: format!(
                "duration_hours must be at most {max_hours}, got {}",
                raw.duration_hours
            ),
        });
    }

    check_range("lat", raw.lat, -90.0, 90.0)?;
    check_range("lon", raw.lon, -180.0, 180.0)?;
    if !raw.radius.is_finite() || raw.radius < 0.0 {
        return Err(DispatchError::InvalidGeometry {
            field: "radius",
            value: raw.radius,
            reason: "must be a non-negative number of meters".to_string(),
        });
    }

    Ok(SimulationRequest {
        model_name: raw.model_name.clone(),
        lon: raw.lon,
        lat: raw.lat,
        radius: raw.radius,
        start_time,
        end_time,
        duration_hours: raw.duration_hours as u64,
    })
}

// ISO-8601 without offset, e.g. "2024-01-01T00:00:00".
fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime> {
    value
        .parse::<NaiveDateTime>()
        .map_err(|_| DispatchError::MalformedTimestamp {
            field,
            value: value.to_string(),
        })
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(DispatchError::InvalidGeometry {
            field,
            value,
            reason: format!("must be between {min} and {max}"),
        });
    }
    Ok(())
}
