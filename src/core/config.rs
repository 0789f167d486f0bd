//! Trick configuration.
//!
//! `TrickConfig` fixes the range of numbers the trick supports and the
//! power-of-two values printed on the cards. It is threaded explicitly through
//! card generation and round creation; there is no process-wide card set.
//!
//! ```
//! use magic_cards::core::TrickConfig;
//!
//! let config = TrickConfig::default();
//! assert_eq!(config.range_bound(), 100);
//! assert_eq!(config.values(), &[1, 2, 4, 8, 16, 32, 64]);
//!
//! // Smallest value set covering 1..=20
//! let small = TrickConfig::for_range(20).unwrap();
//! assert_eq!(small.values(), &[1, 2, 4, 8, 16]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound of the guessable range.
pub const DEFAULT_RANGE_BOUND: u32 = 100;

/// Default card values (sum 127, covers 1..=100).
pub const DEFAULT_VALUES: [u32; 7] = [1, 2, 4, 8, 16, 32, 64];

/// Largest supported range bound. Every round materialises each card's
/// numbers, so memory grows with `N * log2(N)`.
pub const MAX_RANGE_BOUND: u32 = 1 << 20;

/// Invalid trick configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("range bound must be at least 1")]
    ZeroRange,

    #[error("at least one card value is required")]
    EmptyValues,

    #[error("card value {0} is not a power of two")]
    NotPowerOfTwo(u32),

    #[error("card value {value} at index {index} is not greater than the previous value")]
    NotIncreasing { index: usize, value: u32 },

    #[error("card values sum to {sum}, which cannot cover 1..={range_bound}")]
    InsufficientCoverage { sum: u64, range_bound: u32 },

    #[error("range bound {0} exceeds the supported maximum of 1048576")]
    RangeTooLarge(u32),
}

/// Range bound and card values for the trick.
///
/// Invariants (checked by [`TrickConfig::new`]):
/// - `1 <= range_bound <= MAX_RANGE_BOUND`
/// - `values` are strictly increasing powers of two
/// - `sum(values) >= range_bound`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrickConfig")]
pub struct TrickConfig {
    range_bound: u32,
    values: Vec<u32>,
}

/// Unvalidated wire form of [`TrickConfig`].
#[derive(Deserialize)]
struct RawTrickConfig {
    range_bound: u32,
    values: Vec<u32>,
}

impl TryFrom<RawTrickConfig> for TrickConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTrickConfig) -> Result<Self, Self::Error> {
        Self::new(raw.range_bound, raw.values)
    }
}

impl Default for TrickConfig {
    fn default() -> Self {
        Self {
            range_bound: DEFAULT_RANGE_BOUND,
            values: DEFAULT_VALUES.to_vec(),
        }
    }
}

impl TrickConfig {
    /// Create a validated configuration.
    pub fn new(range_bound: u32, values: Vec<u32>) -> Result<Self, ConfigError> {
        if range_bound == 0 {
            return Err(ConfigError::ZeroRange);
        }
        if range_bound > MAX_RANGE_BOUND {
            return Err(ConfigError::RangeTooLarge(range_bound));
        }
        if values.is_empty() {
            return Err(ConfigError::EmptyValues);
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_power_of_two() {
                return Err(ConfigError::NotPowerOfTwo(value));
            }
            if index > 0 && value <= values[index - 1] {
                return Err(ConfigError::NotIncreasing { index, value });
            }
        }

        let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
        if sum < u64::from(range_bound) {
            return Err(ConfigError::InsufficientCoverage { sum, range_bound });
        }

        Ok(Self { range_bound, values })
    }

    /// Smallest configuration covering `1..=range_bound`.
    ///
    /// Uses one card per bit of `range_bound`.
    pub fn for_range(range_bound: u32) -> Result<Self, ConfigError> {
        if range_bound == 0 {
            return Err(ConfigError::ZeroRange);
        }
        let bits = u32::BITS - range_bound.leading_zeros();
        let values = (0..bits).map(|bit| 1u32 << bit).collect();
        Self::new(range_bound, values)
    }

    /// Upper bound of the guessable range (inclusive).
    #[must_use]
    pub fn range_bound(&self) -> u32 {
        self.range_bound
    }

    /// Card values in presentation order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of cards in a round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.values.len()
    }
}
