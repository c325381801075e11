//! Run loop: configuration in, final report out.

use super::engine::GlowwormSwarm;
use super::report::SwarmReport;
use super::SwarmConfig;
use crate::error::GsoResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

/// Build the generator from `config.seed` and run to completion.
pub fn run(config: &SwarmConfig) -> GsoResult<SwarmReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(config, &mut rng)
}

/// Run with a caller-supplied generator. `config.seed` is ignored.
pub fn run_with_rng<R: Rng + ?Sized>(config: &SwarmConfig, rng: &mut R) -> GsoResult<SwarmReport> {
    let mut swarm = GlowwormSwarm::new(config, rng)?;
    if config.iterations == 0 {
        warn!("[Runner] iterations=0, reporting the initial population unchanged");
    }
    for _ in 0..config.iterations {
        swarm.update(rng)?;
    }

    let report = swarm.report();
    if let Some((idx, best)) = report.brightest() {
        info!(
            "[Runner] {} iterations done. Brightest: #{} (luminosity={:.3}), mean={:.3}",
            report.iterations,
            idx,
            best.luminosity,
            report.mean_luminosity()
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_default_shape() {
        let cfg = SwarmConfig {
            seed: Some(1),
            ..Default::default()
        };
        let report = run(&cfg).unwrap();
        assert_eq!(report.iterations, 100);
        assert_eq!(report.agents.len(), 10);
        assert!(report.agents.iter().all(|a| a.position.len() == 2));
    }

    #[test]
    fn test_run_same_seed_is_bit_identical() {
        let cfg = SwarmConfig {
            swarm_size: 15,
            iterations: 50,
            seed: Some(0xC0FFEE),
            ..Default::default()
        };
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_run_zero_iterations_reports_initial_state() {
        let cfg = SwarmConfig {
            iterations: 0,
            seed: Some(9),
            ..Default::default()
        };
        let report = run(&cfg).unwrap();
        assert_eq!(report.iterations, 0);
        assert!(report.agents.iter().all(|a| a.neighbor_count == 0));
        assert!(report
            .agents
            .iter()
            .all(|a| (0.0..=1.0).contains(&a.luminosity)));
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let cfg = SwarmConfig {
            swarm_size: 0,
            ..Default::default()
        };
        assert!(run(&cfg).is_err());
    }
}
