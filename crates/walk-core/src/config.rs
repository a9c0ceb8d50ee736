use serde::Serialize;

pub const MIN_STEPS: usize = 50;
pub const MAX_STEPS: usize = 500;
pub const DEFAULT_STEPS: usize = 150;
pub const FIXED_SEED: u32 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalkConfig {
    pub min_steps: usize,
    pub max_steps: usize,
    pub default_steps: usize,
    pub fixed_seed: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            min_steps: MIN_STEPS,
            max_steps: MAX_STEPS,
            default_steps: DEFAULT_STEPS,
            fixed_seed: FIXED_SEED,
        }
    }
}

impl WalkConfig {
    pub fn contains(&self, step_count: usize) -> bool {
        (self.min_steps..=self.max_steps).contains(&step_count)
    }
}
