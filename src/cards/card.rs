//! Cards and variants.
//!
//! A `Card` pairs one power-of-two value with the numbers printed on it.
//! The `Variant` decides which number each card's bit is tested against:
//! the number itself (`Standard`) or its mirror `N + 1 - i` (`Inverted`).

use serde::{Deserialize, Serialize};

/// Card-generation and reveal strategy for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Cards show numbers whose own bit is set.
    Standard,
    /// Cards show numbers whose mirror `N + 1 - i` has the bit set.
    Inverted,
}

impl Variant {
    /// Both variants, in declaration order.
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::Inverted];

    /// The integer whose binary expansion decides where `number` is printed.
    ///
    /// Returns `None` when `number` is outside `1..=range_bound`.
    #[must_use]
    pub fn subject(self, number: u32, range_bound: u32) -> Option<u64> {
        if number == 0 || number > range_bound {
            return None;
        }
        match self {
            Variant::Standard => Some(u64::from(number)),
            Variant::Inverted => Some(u64::from(range_bound) + 1 - u64::from(number)),
        }
    }

    /// Check whether `number` is printed on the card worth `value`.
    ///
    /// Numbers outside `1..=range_bound` are never shown.
    #[must_use]
    pub fn shows(self, number: u32, value: u32, range_bound: u32) -> bool {
        self.subject(number, range_bound)
            .is_some_and(|subject| subject & u64::from(value) != 0)
    }

    /// Turn a round's accumulated total into the revealed number.
    ///
    /// `Inverted` undoes the mirroring applied at generation time. The
    /// result may fall outside `1..=range_bound` when answers were
    /// inconsistent; it is never clamped.
    #[must_use]
    pub fn finalize(self, total: i64, range_bound: u32) -> i64 {
        match self {
            Variant::Standard => total,
            Variant::Inverted => i64::from(range_bound) + 1 - total,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::Inverted => write!(f, "inverted"),
        }
    }
}

/// One question card.
///
/// `numbers` is sorted ascending and lies in `1..=range_bound`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Power of two this card contributes on a "yes".
    pub value: u32,

    /// Numbers displayed on the card.
    pub numbers: Vec<u32>,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(value: u32, numbers: Vec<u32>) -> Self {
        Self { value, numbers }
    }

    /// Check if `number` is displayed on this card.
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Number of displayed numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check if the card displays nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Split the displayed numbers into grid rows of `columns` entries.
    ///
    /// The last row may be shorter. `columns == 0` is treated as 1.
    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[u32]> {
        self.numbers.chunks(columns.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject() {
        assert_eq!(Variant::Standard.subject(13, 100), Some(13));
        assert_eq!(Variant::Inverted.subject(13, 100), Some(88));
        assert_eq!(Variant::Inverted.subject(1, 100), Some(100));
        assert_eq!(Variant::Inverted.subject(100, 100), Some(1));
    }

    #[test]
    fn test_subject_out_of_range() {
        for variant in Variant::ALL {
            assert_eq!(variant.subject(0, 100), None);
            assert_eq!(variant.subject(101, 100), None);
            assert_eq!(variant.subject(u32::MAX, 100), None);
            assert!(!variant.shows(101, 1, 100));
            assert!(!variant.shows(0, 64, 100));
        }
    }

    #[test]
    fn test_subject_at_u32_max() {
        assert_eq!(
            Variant::Inverted.subject(1, u32::MAX),
            Some(u64::from(u32::MAX))
        );
        assert_eq!(Variant::Inverted.subject(u32::MAX, u32::MAX), Some(1));
    }

    #[test]
    fn test_shows() {
        // 13 = 0b1101
        assert!(Variant::Standard.shows(13, 1, 100));
        assert!(!Variant::Standard.shows(13, 2, 100));
        assert!(Variant::Standard.shows(13, 4, 100));
        assert!(Variant::Standard.shows(13, 8, 100));

        // 101 - 13 = 88 = 0b1011000
        assert!(!Variant::Inverted.shows(13, 1, 100));
        assert!(Variant::Inverted.shows(13, 8, 100));
        assert!(Variant::Inverted.shows(13, 16, 100));
        assert!(Variant::Inverted.shows(13, 64, 100));
    }

    #[test]
    fn test_finalize() {
        assert_eq!(Variant::Standard.finalize(13, 100), 13);
        assert_eq!(Variant::Inverted.finalize(88, 100), 13);
        assert_eq!(Variant::Standard.finalize(0, 100), 0);
        assert_eq!(Variant::Inverted.finalize(0, 100), 101);
        assert_eq!(Variant::Inverted.finalize(127, 100), -26);

        // Large totals are not saturated
        let big = i64::from(u32::MAX) * 2;
        assert_eq!(Variant::Standard.finalize(big, u32::MAX), big);
        assert_eq!(
            Variant::Inverted.finalize(big, u32::MAX),
            i64::from(u32::MAX) + 1 - big
        );
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Standard.to_string(), "standard");
        assert_eq!(Variant::Inverted.to_string(), "inverted");
    }

    #[test]
    fn test_card_contains() {
        let card = Card::new(4, vec![4, 5, 6, 7, 12]);
        assert!(card.contains(5));
        assert!(card.contains(12));
        assert!(!card.contains(8));
        assert_eq!(card.len(), 5);
        assert!(!card.is_empty());
    }

    #[test]
    fn test_card_rows() {
        let card = Card::new(1, (1..=23).collect());
        let rows: Vec<_> = card.rows(10).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[2], &[21, 22, 23]);

        assert_eq!(card.rows(0).count(), 23);
    }
}
