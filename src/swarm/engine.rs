//! Glowworm Swarm Engine
//!
//! Owns the population and the three run parameters, and advances the
//! simulation one step at a time. Every step is O(N²) in the population
//! size: each agent measures its distance to every other agent.

use super::glowworm::Glowworm;
use super::report::SwarmReport;
use super::{check_factors, SwarmConfig, UpdateMode};
use crate::error::{GsoError, GsoResult};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct GlowwormSwarm {
    agents: Vec<Glowworm>,
    perception_radius: f64,
    attraction_factor: f64,
    random_motion_factor: f64,
    update_mode: UpdateMode,
    iteration: usize,
}

impl GlowwormSwarm {
    /// Empty swarm with fixed run parameters. Populate with [`initialize`].
    ///
    /// [`initialize`]: GlowwormSwarm::initialize
    pub fn with_params(
        perception_radius: f64,
        attraction_factor: f64,
        random_motion_factor: f64,
    ) -> GsoResult<Self> {
        check_factors(perception_radius, attraction_factor, random_motion_factor)?;
        Ok(GlowwormSwarm {
            agents: Vec::new(),
            perception_radius,
            attraction_factor,
            random_motion_factor,
            update_mode: UpdateMode::Sequential,
            iteration: 0,
        })
    }

    /// Validate `config` and spawn its population.
    pub fn new<R: Rng + ?Sized>(config: &SwarmConfig, rng: &mut R) -> GsoResult<Self> {
        config.validate()?;
        let mut swarm = Self::with_params(
            config.perception_radius,
            config.attraction_factor,
            config.random_motion_factor,
        )?
        .with_update_mode(config.update_mode);
        swarm.initialize(
            config.swarm_size,
            config.dimensions,
            config.min_position,
            config.max_position,
            config.min_luminosity,
            config.max_luminosity,
            rng,
        )?;
        Ok(swarm)
    }

    /// Wrap an existing population. All agents must share one dimensionality.
    pub fn from_agents(
        agents: Vec<Glowworm>,
        perception_radius: f64,
        attraction_factor: f64,
        random_motion_factor: f64,
    ) -> GsoResult<Self> {
        if let Some(first) = agents.first() {
            let expected = first.dimensions();
            if let Some(odd) = agents.iter().find(|g| g.dimensions() != expected) {
                return Err(GsoError::DimensionMismatch {
                    expected,
                    found: odd.dimensions(),
                });
            }
        }
        let mut swarm = Self::with_params(perception_radius, attraction_factor, random_motion_factor)?;
        swarm.agents = agents;
        Ok(swarm)
    }

    pub fn with_update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    /// Replace the population with `swarm_size` freshly spawned glowworms.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        swarm_size: usize,
        dimensions: usize,
        min_position: f64,
        max_position: f64,
        min_luminosity: f64,
        max_luminosity: f64,
        rng: &mut R,
    ) -> GsoResult<()> {
        if swarm_size == 0 {
            return Err(GsoError::InvalidParameter(
                "swarm_size must be at least 1".to_string(),
            ));
        }

        let agents = (0..swarm_size)
            .map(|_| {
                Glowworm::new(
                    dimensions,
                    min_position,
                    max_position,
                    min_luminosity,
                    max_luminosity,
                    &mut *rng,
                )
            })
            .collect::<GsoResult<Vec<_>>>()?;

        self.agents = agents;
        self.iteration = 0;
        info!(
            "[GlowwormSwarm] Initialized (size={}, dims={}, radius={:.2}, mode={:?})",
            swarm_size, dimensions, self.perception_radius, self.update_mode
        );
        Ok(())
    }

    /// Advance the swarm by one step.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GsoResult<()> {
        let links = match self.update_mode {
            UpdateMode::Sequential => self.update_sequential(rng)?,
            UpdateMode::Synchronous => self.update_synchronous(rng)?,
        };
        self.iteration += 1;
        debug!(
            "[GlowwormSwarm] Step {} complete ({} neighbour links)",
            self.iteration, links
        );
        Ok(())
    }

    /// In-place pass: agent `i` counts neighbours against agents `0..i`
    /// at their already-moved positions and `i+1..` at their old ones.
    fn update_sequential<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GsoResult<usize> {
        let mut links = 0;
        for i in 0..self.agents.len() {
            let count = self.agents[i].count_neighbors(&self.agents, self.perception_radius)?;
            links += count;

            let agent = &mut self.agents[i];
            agent.neighbor_count = count;
            agent.reinforce(self.attraction_factor);
            agent.diffuse(self.random_motion_factor, rng);
        }
        Ok(links)
    }

    /// Two-phase pass: all counts come from the pre-step population, then
    /// reinforcement and motion are applied in population order.
    fn update_synchronous<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GsoResult<usize> {
        let radius = self.perception_radius;
        let snapshot = &self.agents;
        let counts = snapshot
            .par_iter()
            .map(|g| g.count_neighbors(snapshot, radius))
            .collect::<GsoResult<Vec<usize>>>()?;

        let links = counts.iter().sum();
        for (agent, count) in self.agents.iter_mut().zip(counts) {
            agent.neighbor_count = count;
            agent.reinforce(self.attraction_factor);
            agent.diffuse(self.random_motion_factor, rng);
        }
        Ok(links)
    }

    pub fn agents(&self) -> &[Glowworm] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn perception_radius(&self) -> f64 {
        self.perception_radius
    }

    pub fn attraction_factor(&self) -> f64 {
        self.attraction_factor
    }

    pub fn random_motion_factor(&self) -> f64 {
        self.random_motion_factor
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    pub fn report(&self) -> SwarmReport {
        SwarmReport::from_swarm(self)
    }
}
