use crate::utils::error::Result;

/// Implemented by configuration types that must be checked before the
/// service starts serving.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
