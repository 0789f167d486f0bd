//! Round state.
//!
//! A `GameState` is an immutable value: answering returns a new state and
//! leaves the old one intact. Cards and answer history are `im::Vector`s,
//! so the copy shares structure with its predecessor.
//!
//! ## Phases
//!
//! - `Asking { step }`: `is_finished == false`, `cards[step]` is on screen and
//!   `calculated_number` is the running total.
//! - `Revealed`: `is_finished == true`, `calculated_number` is the final
//!   answer. `step` stays on the last card.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, trace, warn};

use super::event::Answer;
use crate::cards::{generate_cards, Card, Variant};
use crate::core::TrickConfig;

/// Where a round currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to `cards[step]`.
    Asking { step: usize },
    /// Final number computed.
    Revealed,
}

/// Outcome of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reveal {
    /// A number in `1..=range_bound`.
    Number(u32),
    /// No number in range has these answers (all "no", or inconsistent).
    Unrepresentable(i64),
}

impl Reveal {
    /// Classify a final answer against the range bound.
    #[must_use]
    pub fn classify(calculated: i64, range_bound: u32) -> Self {
        match u32::try_from(calculated) {
            Ok(n) if (1..=range_bound).contains(&n) => Reveal::Number(n),
            _ => Reveal::Unrepresentable(calculated),
        }
    }
}

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Index of the card being asked (last index once revealed).
    pub step: usize,

    /// Running total while asking; final answer once revealed.
    pub calculated_number: i64,

    /// Set by the terminal transition.
    pub is_finished: bool,

    /// Variant picked at round start.
    pub variant: Variant,

    /// Cards for this round, in asking order.
    pub cards: Vector<Card>,

    /// Upper bound of the guessable range.
    pub range_bound: u32,

    /// Answers given so far, oldest first.
    pub answers: Vector<Answer>,
}

impl GameState {
    /// Fresh round for a known variant.
    #[must_use]
    pub fn new(variant: Variant, config: &TrickConfig) -> Self {
        Self {
            step: 0,
            calculated_number: 0,
            is_finished: false,
            variant,
            cards: generate_cards(variant, config),
            range_bound: config.range_bound(),
            answers: Vector::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_finished {
            Phase::Revealed
        } else {
            Phase::Asking { step: self.step }
        }
    }

    /// Card to display, if the round has any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.step)
    }

    /// 1-based "card x of y" pair.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, self.cards.len())
    }

    /// Whether a UI should offer a restart control.
    ///
    /// Hidden on the very first card of an unanswered round.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.is_finished || self.step > 0
    }

    /// Outcome of the round, `None` while still asking.
    #[must_use]
    pub fn reveal(&self) -> Option<Reveal> {
        self.is_finished
            .then(|| Reveal::classify(self.calculated_number, self.range_bound))
    }

    /// Honest answers for `number` on this round's cards.
    ///
    /// Card `k` is answered "yes" exactly when it displays `number`.
    #[must_use]
    pub fn answer_key(&self, number: u32) -> SmallVec<[Answer; 8]> {
        self.cards
            .iter()
            .map(|card| Answer::from_bool(card.contains(number)))
            .collect()
    }

    /// Apply one answer, returning the successor state.
    ///
    /// On the last card the total is finalized and the round is revealed.
    /// A revealed round, or one without cards, is returned unchanged.
    #[must_use]
    pub fn answer(&self, answer: Answer) -> GameState {
        if self.is_finished {
            warn!(?answer, "answer ignored: round already revealed");
            return self.clone();
        }
        let Some(card) = self.current_card() else {
            warn!(step = self.step, cards = self.cards.len(), "answer ignored: no card at step");
            return self.clone();
        };

        let total = match answer {
            Answer::Yes => self.calculated_number + i64::from(card.value),
            Answer::No => self.calculated_number,
        };

        let mut answers = self.answers.clone();
        answers.push_back(answer);

        let is_last = self.step + 1 == self.cards.len();
        if !is_last {
            trace!(step = self.step, ?answer, total, "answer accepted");
            return GameState {
                step: self.step + 1,
                calculated_number: total,
                answers,
                ..self.clone()
            };
        }

        let calculated = self.variant.finalize(total, self.range_bound);
        let revealed = GameState {
            calculated_number: calculated,
            is_finished: true,
            answers,
            ..self.clone()
        };
        match Reveal::classify(calculated, self.range_bound) {
            Reveal::Number(n) => info!(variant = %self.variant, total, number = n, "round revealed"),
            Reveal::Unrepresentable(v) => {
                info!(variant = %self.variant, total, value = v, "round revealed unrepresentable result")
            }
        }
        revealed
    }
}
