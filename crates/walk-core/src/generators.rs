use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

/// Cumulative positions of one simulation run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WalkPath {
    positions: Vec<f64>,
}

impl WalkPath {
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.positions.last().copied()
    }
}

impl FromIterator<f64> for WalkPath {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Seeded 1D walk with standard-normal increments.
#[derive(Debug, Clone)]
pub struct WalkGenerator {
    rng: StdRng,
    position: f64,
}

impl WalkGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(u64::from(seed)),
            position: 0.0,
        }
    }

    pub fn next_increment(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    pub fn next_position(&mut self) -> f64 {
        self.position += self.next_increment();
        self.position
    }
}

impl Iterator for WalkGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_position())
    }
}

pub fn simulate(step_count: usize, seed: u32) -> WalkPath {
    WalkGenerator::new(seed).take(step_count).collect()
}
