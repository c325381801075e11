//! Glowworm Swarm Optimization
//!
//! A population of glowworms whose luminosity grows with the number of
//! neighbours inside a perception radius, while every position takes a
//! Gaussian random-walk step each iteration.
//!
//! ```
//! use glowworm_swarm::{run, SwarmConfig};
//!
//! let config = SwarmConfig { seed: Some(42), ..Default::default() };
//! let report = run(&config).unwrap();
//! assert_eq!(report.agents.len(), 10);
//! ```

pub mod error;
pub mod swarm;

pub use error::{GsoError, GsoResult};
pub use swarm::{
    run, run_with_rng, AgentReport, Glowworm, GlowwormSwarm, OutputFormat, SwarmConfig,
    SwarmReport, UpdateMode,
};

/// Initialize tracing for the library.
///
/// Output goes to stderr so the report on stdout stays clean.
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module initialization
#[cfg(feature = "python")]
#[pymodule]
fn glowworm_swarm(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<swarm::py_api::PySwarmConfig>()?;
    m.add_class::<swarm::py_api::PyGlowwormSwarm>()?;
    Ok(())
}
