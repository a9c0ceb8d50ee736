use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::WalkConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    Fixed,
    #[default]
    Random,
}

impl SeedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("step_count must be between {min} and {max}, got {actual}")]
    StepCountOutOfRange {
        actual: usize,
        min: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRequest {
    step_count: usize,
    seed_mode: SeedMode,
    regenerate: bool,
}

impl SimulationRequest {
    pub fn new(step_count: usize, seed_mode: SeedMode, regenerate: bool) -> Result<Self, RequestError> {
        let bounds = WalkConfig::default();
        if !bounds.contains(step_count) {
            return Err(RequestError::StepCountOutOfRange {
                actual: step_count,
                min: bounds.min_steps,
                max: bounds.max_steps,
            });
        }

        Ok(Self {
            step_count,
            seed_mode,
            regenerate,
        })
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn regenerate(&self) -> bool {
        self.regenerate
    }
}
