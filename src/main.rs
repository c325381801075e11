use anyhow::{Context, Result};
use glowworm_swarm::{run, setup_logging, OutputFormat, SwarmConfig};
use tracing::info;

fn load_config() -> Result<SwarmConfig> {
    let mut config = match std::env::var("GSO_CONFIG") {
        Ok(path) => SwarmConfig::from_json_file(&path)
            .with_context(|| format!("loading config from GSO_CONFIG={}", path))?,
        Err(_) => SwarmConfig::default(),
    };
    if let Ok(raw) = std::env::var("GSO_SEED") {
        let seed = raw
            .parse::<u64>()
            .with_context(|| format!("GSO_SEED is not an unsigned integer: {}", raw))?;
        config.seed = Some(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    setup_logging(std::env::var("RUST_LOG").ok());

    let config = load_config()?;
    info!(
        "[Driver] Running {} glowworms for {} iterations (seed={:?})",
        config.swarm_size, config.iterations, config.seed
    );

    let report = run(&config)?;
    match config.output {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
