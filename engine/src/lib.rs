pub mod api;
pub mod combat;
pub mod content;
pub mod error;
pub mod fighter;
pub mod narrate;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use api::{
    run_duel, simulate_many, DuelOptions, DuelOutcome, MatchupStats, NoPause, Pacer, Side,
    ThreadSleep, TurnRecord, Verdict,
};
pub use combat::turn::{resolve_turn, TurnOutcome};
pub use content::{builtin_roster, pick_pair, ArchetypePreset};
pub use error::{DuelError, UnknownArchetype};
pub use fighter::{Fighter, HealProfile, Role, Strike};

/// Anything that can hand out uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Fair coin: true with probability 0.5.
    fn coin(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<f64>, next: usize },
}

pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::from_entropy()) }
    }

    /// Replay a fixed list of draws, wrapping around once it runs out.
    /// An empty script always yields `0.0`.
    pub fn from_scripted(values: Vec<f64>) -> Self {
        Self { source: Source::Scripted { values, next: 0 } }
    }
}

impl RandomSource for Dice {
    fn next_unit(&mut self) -> f64 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(0.0..1.0),
            Source::Scripted { values, next } => {
                if values.is_empty() {
                    return 0.0;
                }
                let value = values[*next % values.len()];
                *next += 1;
                value
            }
        }
    }
}
