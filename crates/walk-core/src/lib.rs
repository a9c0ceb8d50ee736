mod config;
mod generators;
mod metrics;
mod request;
mod session;
mod state;

pub use config::{WalkConfig, DEFAULT_STEPS, FIXED_SEED, MAX_STEPS, MIN_STEPS};
pub use generators::{simulate, WalkGenerator, WalkPath};
pub use metrics::{compute_metrics, running_max, WalkMetrics};
pub use request::{RequestError, SeedMode, SimulationRequest};
pub use session::{run_simulation, select_seed, OsSeedSource, SeedSource, SimulationOutcome};
pub use state::SeedCache;
