use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

pub const DIE_FACES: u8 = 6;

/// A fair six-sided die.
pub struct Die {
    rng: StdRng,
}

impl Die {
    pub fn new() -> Self {
        Die {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic die for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Die {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}
