//! Glowworm Agent
//!
//! A single member of the swarm: a point in the search space, a luminosity
//! that accumulates with local density, and the neighbour count observed on
//! the most recent update.

use crate::error::{GsoError, GsoResult};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Glowworm {
    pub position: Vec<f64>,
    pub luminosity: f64,
    /// Zero until the first update touches this agent.
    pub neighbor_count: usize,
}

impl Glowworm {
    /// Spawn a glowworm with every coordinate drawn uniformly from
    /// `[min_position, max_position]` and luminosity drawn uniformly from
    /// `[min_luminosity, max_luminosity]`.
    pub fn new<R: Rng + ?Sized>(
        dimensions: usize,
        min_position: f64,
        max_position: f64,
        min_luminosity: f64,
        max_luminosity: f64,
        rng: &mut R,
    ) -> GsoResult<Self> {
        if dimensions == 0 {
            return Err(GsoError::InvalidParameter(
                "dimensions must be at least 1".to_string(),
            ));
        }
        check_bounds("position", min_position, max_position)?;
        check_bounds("luminosity", min_luminosity, max_luminosity)?;

        let position = (0..dimensions)
            .map(|_| rng.gen_range(min_position..=max_position))
            .collect();
        let luminosity = rng.gen_range(min_luminosity..=max_luminosity);

        Ok(Glowworm {
            position,
            luminosity,
            neighbor_count: 0,
        })
    }

    /// Build a glowworm at a known position, mostly for fixtures.
    pub fn from_parts(position: Vec<f64>, luminosity: f64) -> Self {
        Glowworm {
            position,
            luminosity,
            neighbor_count: 0,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.position.len()
    }

    /// Euclidean distance to another glowworm of the same dimensionality.
    pub fn distance_to(&self, other: &Glowworm) -> GsoResult<f64> {
        if self.position.len() != other.position.len() {
            return Err(GsoError::DimensionMismatch {
                expected: self.position.len(),
                found: other.position.len(),
            });
        }

        let sum: f64 = self
            .position
            .iter()
            .zip(&other.position)
            .map(|(a, b)| {
                let diff = a - b;
                diff * diff
            })
            .sum();
        Ok(sum.sqrt())
    }

    /// Count the other members of `population` strictly closer than
    /// `perception_radius`.
    ///
    /// `self` is excluded by identity, so `self` must be borrowed from
    /// `population` for the exclusion to apply. A distinct agent sitting on
    /// the exact same coordinates still counts.
    pub fn count_neighbors(
        &self,
        population: &[Glowworm],
        perception_radius: f64,
    ) -> GsoResult<usize> {
        let mut count = 0;
        for other in population {
            if std::ptr::eq(self, other) {
                continue;
            }
            if self.distance_to(other)? < perception_radius {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Reinforce luminosity in proportion to the cached neighbour count.
    pub fn reinforce(&mut self, attraction_factor: f64) {
        self.luminosity += attraction_factor * self.neighbor_count as f64;
    }

    /// Random-walk step: each coordinate moves by `N(0, 1) * random_motion_factor`.
    pub fn diffuse<R: Rng + ?Sized>(&mut self, random_motion_factor: f64, rng: &mut R) {
        for coord in &mut self.position {
            let z: f64 = rng.sample(StandardNormal);
            *coord += z * random_motion_factor;
        }
    }
}

pub(crate) fn check_bounds(name: &str, min: f64, max: f64) -> GsoResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GsoError::InvalidParameter(format!(
            "{} bounds must be finite (got [{}, {}])",
            name, min, max
        )));
    }
    if min > max {
        return Err(GsoError::InvalidParameter(format!(
            "min {} exceeds max {} ({} > {})",
            name, name, min, max
        )));
    }
    if !(max - min).is_finite() {
        return Err(GsoError::InvalidParameter(format!(
            "{} range [{}, {}] is too wide to sample",
            name, min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for dims in 1..6 {
            let g = Glowworm::new(dims, -10.0, 10.0, 0.0, 1.0, &mut rng).unwrap();
            assert_eq!(g.position.len(), dims);
            assert!(g.position.iter().all(|x| (-10.0..=10.0).contains(x)));
            assert!((0.0..=1.0).contains(&g.luminosity));
            assert_eq!(g.neighbor_count, 0);
        }
    }

    #[test]
    fn test_new_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Glowworm::new(3, 2.5, 2.5, 0.4, 0.4, &mut rng).unwrap();
        assert_eq!(g.position, vec![2.5, 2.5, 2.5]);
        assert_eq!(g.luminosity, 0.4);
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Glowworm::new(0, -1.0, 1.0, 0.0, 1.0, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Glowworm::new(2, 1.0, -1.0, 0.0, 1.0, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Glowworm::new(2, -1.0, 1.0, 1.0, 0.0, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Glowworm::new(2, f64::NEG_INFINITY, 1.0, 0.0, 1.0, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(check_bounds("position", -1e308, 1e308).is_err());
        assert!(matches!(
            Glowworm::new(2, -1e308, 1e308, 0.0, 1.0, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Glowworm::new(2, -1.0, 1.0, -f64::MAX, f64::MAX, &mut rng),
            Err(GsoError::InvalidParameter(_))
        ));
        // Wide but representable ranges still sample.
        let g = Glowworm::new(2, -1e307, 1e307, 0.0, 1.0, &mut rng).unwrap();
        assert!(g.position.iter().all(|x| (-1e307..=1e307).contains(x)));
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Glowworm::from_parts(vec![0.0, 0.0], 0.0);
        let b = Glowworm::from_parts(vec![3.0, 4.0], 0.0);
        assert_eq!(a.distance_to(&b).unwrap(), 5.0);
        assert_eq!(b.distance_to(&a).unwrap(), 5.0);
        assert_eq!(a.distance_to(&a.clone()).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_zero_iff_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        let agents: Vec<Glowworm> = (0..8)
            .map(|_| Glowworm::new(3, -5.0, 5.0, 0.0, 1.0, &mut rng).unwrap())
            .collect();
        for a in &agents {
            for b in &agents {
                let d = a.distance_to(b).unwrap();
                assert_eq!(d, b.distance_to(a).unwrap());
                assert_eq!(d == 0.0, a.position == b.position);
            }
        }
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let a = Glowworm::from_parts(vec![0.0, 0.0], 0.0);
        let b = Glowworm::from_parts(vec![0.0, 0.0, 0.0], 0.0);
        assert_eq!(
            a.distance_to(&b),
            Err(GsoError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_count_neighbors_fixture() {
        let population = vec![
            Glowworm::from_parts(vec![0.0, 0.0], 0.0),
            Glowworm::from_parts(vec![1.0, 0.0], 0.0),
            Glowworm::from_parts(vec![5.0, 0.0], 0.0),
        ];
        let counts: Vec<usize> = population
            .iter()
            .map(|g| g.count_neighbors(&population, 2.0).unwrap())
            .collect();
        assert_eq!(counts, vec![1, 1, 0]);
    }

    #[test]
    fn test_count_neighbors_radius_is_exclusive() {
        let population = vec![
            Glowworm::from_parts(vec![0.0, 0.0], 0.0),
            Glowworm::from_parts(vec![2.0, 0.0], 0.0),
        ];
        assert_eq!(population[0].count_neighbors(&population, 2.0).unwrap(), 0);
    }

    #[test]
    fn test_count_neighbors_identity_not_value() {
        // Two distinct agents on the same spot see each other.
        let population = vec![
            Glowworm::from_parts(vec![1.0, 1.0], 0.0),
            Glowworm::from_parts(vec![1.0, 1.0], 0.0),
        ];
        assert_eq!(population[0].count_neighbors(&population, 0.5).unwrap(), 1);
        assert_eq!(population[1].count_neighbors(&population, 0.5).unwrap(), 1);
    }

    #[test]
    fn test_reinforce_and_zero_diffusion() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = Glowworm::from_parts(vec![1.0, -1.0], 0.5);
        g.neighbor_count = 3;
        g.reinforce(0.1);
        assert!((g.luminosity - 0.8).abs() < 1e-12);

        g.diffuse(0.0, &mut rng);
        assert_eq!(g.position, vec![1.0, -1.0]);
    }
}
