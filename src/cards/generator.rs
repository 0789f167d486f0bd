//! Card generation.
//!
//! For every configured value the generator walks `1..=N` and keeps the
//! numbers whose subject (see [`Variant::subject`]) has that value's bit set.
//! Because each subject in `1..=N` has a distinct binary expansion, each
//! number ends up on a distinct set of cards: its *signature*.

use im::Vector;
use rustc_hash::FxHashSet;

use super::card::{Card, Variant};
use crate::core::TrickConfig;

/// Generate the ordered cards for a round.
///
/// One card per configured value, in configuration order.
#[must_use]
pub fn generate_cards(variant: Variant, config: &TrickConfig) -> Vector<Card> {
    generate_cards_with(variant, config.range_bound(), config.values())
}

/// Generate cards for an explicit range and value list.
///
/// Total over all inputs; uniqueness of signatures additionally requires
/// `values` to be distinct powers of two summing to at least `range_bound`.
#[must_use]
pub fn generate_cards_with(variant: Variant, range_bound: u32, values: &[u32]) -> Vector<Card> {
    values
        .iter()
        .map(|&value| {
            let numbers = (1..=range_bound)
                .filter(|&i| variant.shows(i, value, range_bound))
                .collect();
            Card::new(value, numbers)
        })
        .collect()
}

/// Bit mask of the card indices that display `number`.
///
/// Bit `k` is set when `cards[k]` shows the number. Cards past index 63
/// are ignored.
#[must_use]
pub fn signature(cards: &Vector<Card>, number: u32) -> u64 {
    cards
        .iter()
        .take(64)
        .enumerate()
        .filter(|(_, card)| card.contains(number))
        .fold(0u64, |mask, (k, _)| mask | (1u64 << k))
}

/// Sum of the values of the cards that display `number`.
#[must_use]
pub fn total_for(cards: &Vector<Card>, number: u32) -> u64 {
    cards
        .iter()
        .filter(|card| card.contains(number))
        .map(|card| u64::from(card.value))
        .sum()
}

/// Check that every number in `1..=range_bound` has a distinct, non-empty
/// signature.
#[must_use]
pub fn signatures_unique(cards: &Vector<Card>, range_bound: u32) -> bool {
    let mut seen = FxHashSet::default();
    (1..=range_bound).all(|number| {
        let sig = signature(cards, number);
        sig != 0 && seen.insert(sig)
    })
}
