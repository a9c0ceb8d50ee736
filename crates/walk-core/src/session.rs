use rand::{rngs::OsRng, RngCore};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::FIXED_SEED,
    generators::{simulate, WalkPath},
    metrics::{compute_metrics, WalkMetrics},
    request::{SeedMode, SimulationRequest},
    state::SeedCache,
};

pub trait SeedSource {
    fn draw_seed(&mut self) -> u32;
}

/// Draws seeds from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn draw_seed(&mut self) -> u32 {
        OsRng.next_u32()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub seed: u32,
    pub seed_mode: SeedMode,
    pub path: WalkPath,
    pub metrics: WalkMetrics,
}

/// Fixed mode always yields [`FIXED_SEED`] and leaves the cache alone, even
/// when `regenerate` is set. Random mode draws a new seed when the cache is
/// empty or a regeneration was requested, otherwise reuses the cached one.
pub fn select_seed<S: SeedSource>(
    cache: &mut SeedCache,
    seed_mode: SeedMode,
    regenerate: bool,
    source: &mut S,
) -> u32 {
    match seed_mode {
        SeedMode::Fixed => FIXED_SEED,
        SeedMode::Random => match cache.seed() {
            Some(seed) if !regenerate => seed,
            _ => {
                let seed = source.draw_seed();
                debug!(seed, regenerate, "drew fresh walk seed");
                cache.store(seed);
                seed
            }
        },
    }
}

pub fn run_simulation<S: SeedSource>(
    request: &SimulationRequest,
    cache: &mut SeedCache,
    source: &mut S,
) -> SimulationOutcome {
    let seed = select_seed(cache, request.seed_mode(), request.regenerate(), source);
    let path = simulate(request.step_count(), seed);
    let metrics = compute_metrics(&path);

    SimulationOutcome {
        seed,
        seed_mode: request.seed_mode(),
        path,
        metrics,
    }
}
