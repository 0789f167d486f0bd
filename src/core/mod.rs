//! Core types: trick configuration and randomness.
//!
//! Everything a round needs from outside the state machine lives here:
//! the range and card values (`TrickConfig`) and the variant coin flip
//! (`VariantSource`).

pub mod config;
pub mod rng;

pub use config::{ConfigError, TrickConfig, DEFAULT_RANGE_BOUND, DEFAULT_VALUES, MAX_RANGE_BOUND};
pub use rng::{FixedVariant, GameRng, VariantSequence, VariantSource};
