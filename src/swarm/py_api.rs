//! Python bindings for the glowworm swarm (feature `python`).

use super::{GlowwormSwarm, SwarmConfig, UpdateMode};
use crate::error::GsoError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

impl From<GsoError> for PyErr {
    fn from(err: GsoError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Run parameters as seen from Python
#[derive(Clone, Debug)]
#[pyclass(name = "SwarmConfig")]
pub struct PySwarmConfig {
    #[pyo3(get, set)]
    pub swarm_size: usize,
    #[pyo3(get, set)]
    pub dimensions: usize,
    #[pyo3(get, set)]
    pub min_position: f64,
    #[pyo3(get, set)]
    pub max_position: f64,
    #[pyo3(get, set)]
    pub min_luminosity: f64,
    #[pyo3(get, set)]
    pub max_luminosity: f64,
    #[pyo3(get, set)]
    pub perception_radius: f64,
    #[pyo3(get, set)]
    pub attraction_factor: f64,
    #[pyo3(get, set)]
    pub random_motion_factor: f64,
    #[pyo3(get, set)]
    pub seed: Option<u64>,
    #[pyo3(get, set)]
    pub update_mode: String, // "sequential", "synchronous"
}

#[pymethods]
impl PySwarmConfig {
    #[new]
    #[pyo3(signature = (
        swarm_size = 10,
        dimensions = 2,
        min_position = -10.0,
        max_position = 10.0,
        min_luminosity = 0.0,
        max_luminosity = 1.0,
        perception_radius = 2.0,
        attraction_factor = 0.1,
        random_motion_factor = 0.1,
        seed = None,
        update_mode = "sequential"
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        swarm_size: usize,
        dimensions: usize,
        min_position: f64,
        max_position: f64,
        min_luminosity: f64,
        max_luminosity: f64,
        perception_radius: f64,
        attraction_factor: f64,
        random_motion_factor: f64,
        seed: Option<u64>,
        update_mode: &str,
    ) -> Self {
        PySwarmConfig {
            swarm_size,
            dimensions,
            min_position,
            max_position,
            min_luminosity,
            max_luminosity,
            perception_radius,
            attraction_factor,
            random_motion_factor,
            seed,
            update_mode: update_mode.to_string(),
        }
    }

    pub fn validate(&self) -> PyResult<()> {
        self.to_config()?.validate()?;
        Ok(())
    }

    pub fn __repr__(&self) -> String {
        format!(
            "SwarmConfig(size={}, dims={}, radius={}, mode={})",
            self.swarm_size, self.dimensions, self.perception_radius, self.update_mode
        )
    }
}

impl PySwarmConfig {
    pub fn to_config(&self) -> Result<SwarmConfig, GsoError> {
        Ok(SwarmConfig {
            swarm_size: self.swarm_size,
            dimensions: self.dimensions,
            min_position: self.min_position,
            max_position: self.max_position,
            min_luminosity: self.min_luminosity,
            max_luminosity: self.max_luminosity,
            perception_radius: self.perception_radius,
            attraction_factor: self.attraction_factor,
            random_motion_factor: self.random_motion_factor,
            seed: self.seed,
            update_mode: self.update_mode.parse::<UpdateMode>()?,
            ..Default::default()
        })
    }
}

impl Default for PySwarmConfig {
    fn default() -> Self {
        let cfg = SwarmConfig::default();
        PySwarmConfig {
            swarm_size: cfg.swarm_size,
            dimensions: cfg.dimensions,
            min_position: cfg.min_position,
            max_position: cfg.max_position,
            min_luminosity: cfg.min_luminosity,
            max_luminosity: cfg.max_luminosity,
            perception_radius: cfg.perception_radius,
            attraction_factor: cfg.attraction_factor,
            random_motion_factor: cfg.random_motion_factor,
            seed: cfg.seed,
            update_mode: cfg.update_mode.as_str().to_string(),
        }
    }
}

/// Python-facing swarm that owns its own generator
#[pyclass(name = "GlowwormSwarm")]
pub struct PyGlowwormSwarm {
    swarm: GlowwormSwarm,
    rng: StdRng,
}

#[pymethods]
impl PyGlowwormSwarm {
    #[new]
    #[pyo3(signature = (config = None))]
    pub fn new(config: Option<PySwarmConfig>) -> PyResult<Self> {
        let cfg = config.unwrap_or_default().to_config()?;
        let mut rng = match cfg.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let swarm = GlowwormSwarm::new(&cfg, &mut rng)?;
        Ok(PyGlowwormSwarm { swarm, rng })
    }

    pub fn step(&mut self) -> PyResult<()> {
        self.swarm.update(&mut self.rng)?;
        Ok(())
    }

    pub fn run(&mut self, iterations: usize) -> PyResult<()> {
        for _ in 0..iterations {
            self.swarm.update(&mut self.rng)?;
        }
        Ok(())
    }

    pub fn positions(&self) -> Vec<Vec<f64>> {
        self.swarm.agents().iter().map(|g| g.position.clone()).collect()
    }

    pub fn luminosities(&self) -> Vec<f64> {
        self.swarm.agents().iter().map(|g| g.luminosity).collect()
    }

    pub fn neighbor_counts(&self) -> Vec<usize> {
        self.swarm.agents().iter().map(|g| g.neighbor_count).collect()
    }

    pub fn report_json(&self) -> PyResult<String> {
        Ok(self.swarm.report().to_json()?)
    }

    pub fn __len__(&self) -> usize {
        self.swarm.len()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "GlowwormSwarm(size={}, iteration={}, mode={:?})",
            self.swarm.len(),
            self.swarm.iteration(),
            self.swarm.update_mode()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let cfg = PySwarmConfig::default().to_config().unwrap();
        assert_eq!(cfg, SwarmConfig::default());
    }

    #[test]
    fn test_config_maps_update_mode() {
        let py_cfg = PySwarmConfig {
            update_mode: "synchronous".to_string(),
            seed: Some(3),
            ..Default::default()
        };
        let cfg = py_cfg.to_config().unwrap();
        assert_eq!(cfg.update_mode, UpdateMode::Synchronous);
        assert_eq!(cfg.seed, Some(3));

        let bad = PySwarmConfig {
            update_mode: "lockstep".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad.to_config(), Err(GsoError::InvalidParameter(_))));
    }
}
