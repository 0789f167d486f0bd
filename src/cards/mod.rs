//! Question cards.
//!
//! - `Card`: one power-of-two value and the numbers printed on it
//! - `Variant`: which bit test builds the cards and how the total is revealed
//! - `generate_cards`: builds a round's cards from a `TrickConfig`

pub mod card;
pub mod generator;

pub use card::{Card, Variant};
pub use generator::{generate_cards, generate_cards_with, signature, signatures_unique, total_for};
