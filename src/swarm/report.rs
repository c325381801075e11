//! Final-state reporting for a swarm run.

use super::engine::GlowwormSwarm;
use crate::error::{GsoError, GsoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub position: Vec<f64>,
    pub luminosity: f64,
    pub neighbor_count: usize,
}

/// Snapshot of every agent, in population order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwarmReport {
    pub iterations: usize,
    pub agents: Vec<AgentReport>,
}

impl SwarmReport {
    pub fn from_swarm(swarm: &GlowwormSwarm) -> Self {
        SwarmReport {
            iterations: swarm.iteration(),
            agents: swarm
                .agents()
                .iter()
                .map(|g| AgentReport {
                    position: g.position.clone(),
                    luminosity: g.luminosity,
                    neighbor_count: g.neighbor_count,
                })
                .collect(),
        }
    }

    /// Index and entry of the brightest agent. Ties go to the earliest.
    pub fn brightest(&self) -> Option<(usize, &AgentReport)> {
        self.agents
            .iter()
            .enumerate()
            .fold(None, |best, (i, agent)| match best {
                Some((_, b)) if b.luminosity >= agent.luminosity => best,
                _ => Some((i, agent)),
            })
    }

    pub fn mean_luminosity(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(|a| a.luminosity).sum::<f64>() / self.agents.len() as f64
    }

    /// Pretty JSON. Non-finite values are refused since serde_json would
    /// write them as `null`, which does not parse back into `f64`.
    pub fn to_json(&self) -> GsoResult<String> {
        for (i, agent) in self.agents.iter().enumerate() {
            let finite = agent.luminosity.is_finite()
                && agent.position.iter().all(|x| x.is_finite());
            if !finite {
                return Err(GsoError::Serialization(format!(
                    "agent #{} has a non-finite position or luminosity",
                    i
                )));
            }
        }
        serde_json::to_string_pretty(self).map_err(|e| GsoError::Serialization(e.to_string()))
    }
}

impl fmt::Display for AgentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position: [")?;
        for (i, x) in self.position.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "], Luminosity: {}", self.luminosity)
    }
}

impl fmt::Display for SwarmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final positions and luminosities:")?;
        for agent in &self.agents {
            writeln!(f, "{}", agent)?;
        }
        Ok(())
    }
}
