//! Thresholds for fix filtering and doodle simplification.

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConfigError,
    ingest::{DEFAULT_MAX_ACCURACY_M, DEFAULT_MIN_SPACING_M},
    simplify::DEFAULT_TOLERANCE_M,
};

pub const MIN_SPACING_ENV: &str = "WALKS_MIN_SPACING_M";
pub const MAX_ACCURACY_ENV: &str = "WALKS_MAX_ACCURACY_M";
pub const SIMPLIFY_TOLERANCE_ENV: &str = "WALKS_SIMPLIFY_TOLERANCE_M";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Minimum gap between consecutive accepted points.
    pub min_spacing_meters: f64,
    /// Fixes with an accuracy radius at or above this are dropped.
    pub max_accuracy_meters: f64,
    /// Allowed deviation of the rendered doodle from the walked path.
    pub simplify_tolerance_meters: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            min_spacing_meters: DEFAULT_MIN_SPACING_M,
            max_accuracy_meters: DEFAULT_MAX_ACCURACY_M,
            simplify_tolerance_meters: DEFAULT_TOLERANCE_M,
        }
    }
}

impl WalkConfig {
    /// Defaults overridden by any of the `WALKS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &'static str, default: f64| -> Result<f64, ConfigError> {
            match lookup(name) {
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|source| ConfigError::Parse { name, source }),
                None => Ok(default),
            }
        };

        let config = Self {
            min_spacing_meters: read(MIN_SPACING_ENV, defaults.min_spacing_meters)?,
            max_accuracy_meters: read(MAX_ACCURACY_ENV, defaults.max_accuracy_meters)?,
            simplify_tolerance_meters: read(
                SIMPLIFY_TOLERANCE_ENV,
                defaults.simplify_tolerance_meters,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Spacing and tolerance must be finite and non-negative; the accuracy
    /// threshold must be finite and positive or every fix would be dropped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("min_spacing_meters", self.min_spacing_meters),
            ("simplify_tolerance_meters", self.simplify_tolerance_meters),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        if !self.max_accuracy_meters.is_finite() || self.max_accuracy_meters <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "max_accuracy_meters",
                value: self.max_accuracy_meters,
            });
        }

        Ok(())
    }
}
