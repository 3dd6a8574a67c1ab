//! Navigation tuning: defaults, JSON files, environment overrides.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use halite_core::constants::{DEFAULT_ANGULAR_STEP_RAD, DEFAULT_MAX_CORRECTIONS, MAX_SPEED};
use halite_core::types::Coordinate;
use halite_nav::navigation::NavigationRequest;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Parameters applied to every navigate call of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Requested thrust per move, at most `MAX_SPEED`.
    pub thrust: u32,
    pub avoid_obstacles: bool,
    pub max_corrections: u32,
    /// Rotation per correction (radians).
    pub angular_step_rad: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            thrust: MAX_SPEED,
            avoid_obstacles: true,
            max_corrections: DEFAULT_MAX_CORRECTIONS,
            angular_step_rad: DEFAULT_ANGULAR_STEP_RAD,
        }
    }
}

impl NavigationConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Apply `HALITE_*` environment variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(thrust) = lookup("HALITE_THRUST").and_then(|v| v.parse().ok()) {
            self.thrust = thrust;
        }
        if let Some(avoid) = lookup("HALITE_AVOID_OBSTACLES").and_then(|v| v.parse().ok()) {
            self.avoid_obstacles = avoid;
        }
        if let Some(max) = lookup("HALITE_MAX_CORRECTIONS").and_then(|v| v.parse().ok()) {
            self.max_corrections = max;
        }
        if let Some(step) = lookup("HALITE_ANGULAR_STEP_RAD").and_then(|v| v.parse().ok()) {
            self.angular_step_rad = step;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thrust > MAX_SPEED {
            return Err(ConfigError::Invalid(format!(
                "thrust {} exceeds max speed {MAX_SPEED}",
                self.thrust
            )));
        }
        if !self.angular_step_rad.is_finite() || self.angular_step_rad <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "angular step must be positive, got {}",
                self.angular_step_rad
            )));
        }
        Ok(())
    }

    /// Navigation request toward `target` under this config.
    pub fn request(&self, target: Coordinate) -> NavigationRequest {
        NavigationRequest {
            target,
            thrust: self.thrust,
            avoid_obstacles: self.avoid_obstacles,
            max_corrections: self.max_corrections,
            angular_step_rad: self.angular_step_rad,
        }
    }
}
