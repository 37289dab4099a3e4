//! Computer move selection.

use super::{MoveIndex, MoveList};
use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};

/// Picks the computer's move uniformly at random.
///
/// The default source is `rand::thread_rng()`, a ChaCha-based generator
/// reseeded from the operating system. Tests inject a seeded generator.
pub struct MoveSelector<R = ThreadRng> {
    rng: R,
}

impl MoveSelector<ThreadRng> {
    /// Selector backed by the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for MoveSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> MoveSelector<R> {
    /// Selector backed by the given generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick an index in `[0, moves.len())`
    pub fn pick(&mut self, moves: &MoveList) -> MoveIndex {
        MoveIndex::new(self.rng.gen_range(0..moves.len()))
    }
}
