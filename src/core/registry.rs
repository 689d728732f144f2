use crate::domain::ports::ModelConstructor;
use std::collections::HashMap;

/// Model name to constructor table. Built once at startup and then shared
/// read-only behind an `Arc`; there is no runtime registration, so lookups
/// need no locking.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelConstructor>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: impl Into<String>, constructor: ModelConstructor) -> Self {
        self.models.insert(name.into(), constructor);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&ModelConstructor> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered names, sorted for stable logs and error messages.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DriftModel, EngineResult};
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use std::sync::Arc;

    struct NullModel;

    #[async_trait]
    impl DriftModel for NullModel {
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
            Ok(())
        }

        fn output_path(&self) -> EngineResult<String> {
            Ok("/dev/null".to_string())
        }
    }

    fn null_constructor() -> crate::domain::ports::ModelConstructor {
        Arc::new(|| Box::new(NullModel))
    }

    #[test]
    fn lookup_finds_registered_models_only() {
        let registry = ModelRegistry::new().register("OceanDrift", null_constructor());
        assert!(registry.lookup("OceanDrift").is_some());
        assert!(registry.contains("OceanDrift"));
        assert!(registry.lookup("Leeway").is_none());
        assert!(!registry.contains("oceandrift"));
    }

    #[test]
    fn names_are_sorted() {
        let registry = ModelRegistry::new()
            .register("OpenOil", null_constructor())
            .register("Leeway", null_constructor())
            .register("OceanDrift", null_constructor());
        assert_eq!(registry.names(), vec!["Leeway", "OceanDrift", "OpenOil"]);
    }
}
