/// Per-session memory of the last random seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedCache {
    seed: Option<u32>,
}

impl SeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn store(&mut self, seed: u32) {
        self.seed = Some(seed);
    }

    pub fn is_empty(&self) -> bool {
        self.seed.is_none()
    }
}
