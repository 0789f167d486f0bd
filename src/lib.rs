//! # magic-cards
//!
//! Deduction engine for the binary "mind-reading" card trick.
//!
//! The player thinks of a number in `1..=N` and answers, card by card,
//! whether the number is printed on it. Each card is worth a power of two;
//! adding up the "yes" cards spells out the number's binary expansion.
//!
//! ## Design Principles
//!
//! 1. **Explicit Configuration**: The range and card values come from a
//!    `TrickConfig` value passed in by the caller. No global card set.
//!
//! 2. **Immutable State**: Every transition returns a new `GameState`.
//!    Cards and answer history use `im` persistent vectors, so keeping
//!    every prior state is cheap.
//!
//! 3. **Injected Randomness**: The per-round variant coin flip goes through
//!    the `VariantSource` trait. Tests force either variant.
//!
//! ## Variants
//!
//! - **Standard**: card `v` shows `i` when `i & v != 0`; the answer is the total.
//! - **Inverted**: card `v` shows `i` when `(N + 1 - i) & v != 0`; the answer
//!   is `N + 1 - total`. Cards look different while the trick is unchanged.
//!
//! ## Modules
//!
//! - `core`: Trick configuration, RNG, variant sources
//! - `cards`: Cards, variants, card generation
//! - `game`: Events, round state, state machine

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, FixedVariant, GameRng, TrickConfig, VariantSequence, VariantSource,
};

pub use crate::cards::{generate_cards, signatures_unique, Card, Variant};

pub use crate::game::{replay, Answer, GameEvent, GameMachine, GameState, Phase, Reveal};
