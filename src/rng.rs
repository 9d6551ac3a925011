//! Seedable random source for the computer player.
//!
//! Every random draw the engine makes goes through [`GameRng`], so a fixed
//! seed reproduces a whole game.
//!
//! ```
//! use tictactoe::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let moves = [1, 3, 5, 7];
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the OS entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    pub fn choose<T: Copy>(&mut self, slice: &[T]) -> Option<T> {
        slice.choose(&mut self.inner).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let items: Vec<usize> = (0..9).collect();
        for _ in 0..50 {
            assert_eq!(a.choose(&items), b.choose(&items));
            assert_eq!(a.gen_bool(0.6), b.gen_bool(0.6));
        }
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(1);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_stays_in_slice() {
        let mut rng = GameRng::new(9);
        let items = [2, 4, 8];
        for _ in 0..100 {
            let pick = rng.choose(&items).unwrap();
            assert!(items.contains(&pick));
        }
    }

    #[test]
    fn test_seed_recorded() {
        assert_eq!(GameRng::new(123).seed(), 123);
    }
}
