//! Swarm Engine
//!
//! Glowworm population, per-iteration dynamics, reporting and the run loop.

pub mod engine;
pub mod glowworm;
pub mod report;
pub mod runner;
#[cfg(feature = "python")]
pub mod py_api;

use crate::error::{GsoError, GsoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub use engine::GlowwormSwarm;
pub use glowworm::Glowworm;
pub use report::{AgentReport, SwarmReport};
pub use runner::{run, run_with_rng};

/// How a single `update` orders reads and writes across the population.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Agents are processed one at a time; each neighbour count sees the
    /// positions already moved earlier in the same pass.
    #[default]
    Sequential,
    /// Neighbour counts are taken from a snapshot of the pre-update
    /// population, then luminosity and motion are applied.
    Synchronous,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::Sequential => "sequential",
            UpdateMode::Synchronous => "synchronous",
        }
    }
}

impl FromStr for UpdateMode {
    type Err = GsoError;

    fn from_str(s: &str) -> GsoResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(UpdateMode::Sequential),
            "synchronous" => Ok(UpdateMode::Synchronous),
            other => Err(GsoError::InvalidParameter(format!(
                "unknown update mode: {}",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a glowworm run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub swarm_size: usize,
    pub dimensions: usize,
    pub min_position: f64,
    pub max_position: f64,
    pub min_luminosity: f64,
    pub max_luminosity: f64,
    pub perception_radius: f64,
    pub attraction_factor: f64,
    pub random_motion_factor: f64,
    pub iterations: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub update_mode: UpdateMode,
    pub output: OutputFormat,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            swarm_size: 10,
            dimensions: 2,
            min_position: -10.0,
            max_position: 10.0,
            min_luminosity: 0.0,
            max_luminosity: 1.0,
            perception_radius: 2.0,
            attraction_factor: 0.1,
            random_motion_factor: 0.1,
            iterations: 100,
            seed: None,
            update_mode: UpdateMode::Sequential,
            output: OutputFormat::Text,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> GsoResult<()> {
        if self.swarm_size == 0 {
            return Err(GsoError::InvalidParameter(
                "swarm_size must be at least 1".to_string(),
            ));
        }
        if self.dimensions == 0 {
            return Err(GsoError::InvalidParameter(
                "dimensions must be at least 1".to_string(),
            ));
        }
        glowworm::check_bounds("position", self.min_position, self.max_position)?;
        glowworm::check_bounds("luminosity", self.min_luminosity, self.max_luminosity)?;
        check_factors(
            self.perception_radius,
            self.attraction_factor,
            self.random_motion_factor,
        )
    }

    pub fn from_json_str(json: &str) -> GsoResult<Self> {
        serde_json::from_str(json).map_err(|e| GsoError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> GsoResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GsoError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }
}

pub(crate) fn check_factors(
    perception_radius: f64,
    attraction_factor: f64,
    random_motion_factor: f64,
) -> GsoResult<()> {
    if !perception_radius.is_finite() || perception_radius < 0.0 {
        return Err(GsoError::InvalidParameter(format!(
            "perception_radius must be finite and non-negative (got {})",
            perception_radius
        )));
    }
    if !attraction_factor.is_finite() {
        return Err(GsoError::InvalidParameter(format!(
            "attraction_factor must be finite (got {})",
            attraction_factor
        )));
    }
    if !random_motion_factor.is_finite() || random_motion_factor < 0.0 {
        return Err(GsoError::InvalidParameter(format!(
            "random_motion_factor must be finite and non-negative (got {})",
            random_motion_factor
        )));
    }
    Ok(())
}
