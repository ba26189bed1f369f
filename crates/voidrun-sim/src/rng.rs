//! Random draw seam for the spawner.
//!
//! The spawner only ever needs bounded integers and fair booleans. Routing
//! them through `SpawnRng` lets tests script exact sequences while the
//! engine uses a seeded ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of spawn draws.
pub trait SpawnRng: Send {
    /// Uniform integer in `0..bound`.
    fn next_int(&mut self, bound: u32) -> u32;
    /// Fair coin flip.
    fn next_bool(&mut self) -> bool;
}

/// Seeded, reproducible RNG. Same seed = same draw sequence.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl SpawnRng for SeededRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.inner.gen()
    }
}

/// One recorded draw.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    Int { bound: u32, value: u32 },
    Bool(bool),
}

/// Test double that replays scripted values and records every draw.
/// Running out of scripted values yields the bound minus one (never a
/// successful chance roll at realistic rates) and `false`.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: std::collections::VecDeque<u32>,
    bools: std::collections::VecDeque<bool>,
    pub draws: std::sync::Arc<std::sync::Mutex<Vec<Draw>>>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(ints: &[u32], bools: &[bool]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            bools: bools.iter().copied().collect(),
            draws: Default::default(),
        }
    }

    pub fn recorded(&self) -> Vec<Draw> {
        self.draws.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl SpawnRng for ScriptedRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self.ints.pop_front().unwrap_or(bound - 1);
        self.draws.lock().unwrap().push(Draw::Int { bound, value });
        value
    }

    fn next_bool(&mut self) -> bool {
        let value = self.bools.pop_front().unwrap_or(false);
        self.draws.lock().unwrap().push(Draw::Bool(value));
        value
    }
}
