//! Deterministic random number generation and variant selection.
//!
//! The only randomness in the trick is the coin flip that picks a round's
//! [`Variant`]. It goes through the [`VariantSource`] trait so callers can
//! inject a seeded RNG, a fixed variant, or a scripted sequence.
//!
//! ```
//! use magic_cards::core::{GameRng, VariantSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence of variants
//! for _ in 0..10 {
//!     assert_eq!(a.next_variant(), b.next_variant());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::Variant;

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept, so [`GameRng::seed`] can be logged to
    /// reproduce a session.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Source of the per-round variant choice.
pub trait VariantSource {
    /// Pick the variant for the next round.
    fn next_variant(&mut self) -> Variant;
}

/// Fair coin: each variant with probability 0.5.
impl VariantSource for GameRng {
    fn next_variant(&mut self) -> Variant {
        if self.gen_bool(0.5) {
            Variant::Inverted
        } else {
            Variant::Standard
        }
    }
}

/// Always the same variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedVariant(pub Variant);

impl VariantSource for FixedVariant {
    fn next_variant(&mut self) -> Variant {
        self.0
    }
}

/// Scripted variants, repeated cyclically.
///
/// An empty script yields `Variant::Standard`.
#[derive(Clone, Debug, Default)]
pub struct VariantSequence {
    script: Vec<Variant>,
    position: usize,
}

impl VariantSequence {
    /// Create a sequence from a script.
    #[must_use]
    pub fn new(script: Vec<Variant>) -> Self {
        Self { script, position: 0 }
    }
}

impl VariantSource for VariantSequence {
    fn next_variant(&mut self) -> Variant {
        if self.script.is_empty() {
            return Variant::Standard;
        }
        let variant = self.script[self.position % self.script.len()];
        self.position += 1;
        variant
    }
}

impl<S: VariantSource + ?Sized> VariantSource for Box<S> {
    fn next_variant(&mut self) -> Variant {
        (**self).next_variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_variant(), rng2.next_variant());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..64).map(|_| rng1.next_variant()).collect();
        let seq2: Vec<_> = (0..64).map(|_| rng2.next_variant()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_coin_is_roughly_fair() {
        let mut rng = GameRng::new(7);
        let inverted = (0..10_000)
            .filter(|_| rng.next_variant() == Variant::Inverted)
            .count();

        // 10k flips: 4500..5500 is far outside any plausible deviation
        assert!((4500..5500).contains(&inverted), "inverted = {inverted}");
    }

    #[test]
    fn test_from_entropy_keeps_seed() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        for _ in 0..10 {
            assert_eq!(original.next_variant(), replay.next_variant());
        }
    }

    #[test]
    fn test_fixed_variant() {
        let mut source = FixedVariant(Variant::Inverted);
        for _ in 0..5 {
            assert_eq!(source.next_variant(), Variant::Inverted);
        }
    }

    #[test]
    fn test_variant_sequence_cycles() {
        let mut source = VariantSequence::new(vec![Variant::Inverted, Variant::Standard]);
        assert_eq!(source.next_variant(), Variant::Inverted);
        assert_eq!(source.next_variant(), Variant::Standard);
        assert_eq!(source.next_variant(), Variant::Inverted);

        let mut empty = VariantSequence::default();
        assert_eq!(empty.next_variant(), Variant::Standard);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn VariantSource> = Box::new(FixedVariant(Variant::Inverted));
        assert_eq!(source.next_variant(), Variant::Inverted);
    }
}
