//! Round state machine.
//!
//! `GameMachine` owns the configuration and the variant source. Its
//! `transition` takes a state by reference and returns the successor, so
//! callers keep every prior state if they want history.
//!
//! ```
//! use magic_cards::cards::Variant;
//! use magic_cards::core::{FixedVariant, TrickConfig};
//! use magic_cards::game::{GameEvent, GameMachine};
//!
//! let mut machine = GameMachine::new(TrickConfig::default(), FixedVariant(Variant::Standard));
//! let mut state = machine.create_initial_state();
//!
//! // Think of 13 = 1 + 4 + 8
//! for yes in [true, false, true, true, false, false, false] {
//!     let event = if yes { GameEvent::AnswerYes } else { GameEvent::AnswerNo };
//!     state = machine.transition(&state, event);
//! }
//!
//! assert!(state.is_finished);
//! assert_eq!(state.calculated_number, 13);
//! ```

use tracing::{debug, warn};

use super::event::{Answer, GameEvent};
use super::state::GameState;
use crate::cards::Variant;
use crate::core::{GameRng, TrickConfig, VariantSource};

/// Drives rounds from creation to reveal.
#[derive(Clone, Debug)]
pub struct GameMachine<S = GameRng> {
    config: TrickConfig,
    source: S,
}

impl GameMachine<GameRng> {
    /// Machine with a seeded fair coin.
    #[must_use]
    pub fn seeded(config: TrickConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }
}

impl<S: VariantSource> GameMachine<S> {
    /// Create a machine from a configuration and variant source.
    #[must_use]
    pub fn new(config: TrickConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Configuration used for every round.
    #[must_use]
    pub fn config(&self) -> &TrickConfig {
        &self.config
    }

    /// Start a new round: pick a variant and generate its cards.
    pub fn create_initial_state(&mut self) -> GameState {
        let variant = self.source.next_variant();
        debug!(%variant, cards = self.config.card_count(), range_bound = self.config.range_bound(), "new round");
        GameState::new(variant, &self.config)
    }

    /// Compute the successor of `state` under `event`.
    ///
    /// - `AnswerYes` / `AnswerNo`: see [`GameState::answer`]
    /// - `Restart`: a brand-new round, from any state
    /// - `Unknown`: `state` unchanged
    pub fn transition(&mut self, state: &GameState, event: GameEvent) -> GameState {
        match event {
            GameEvent::AnswerYes => state.answer(Answer::Yes),
            GameEvent::AnswerNo => state.answer(Answer::No),
            GameEvent::Restart => self.create_initial_state(),
            GameEvent::Unknown => {
                warn!(step = state.step, "unknown event ignored");
                state.clone()
            }
        }
    }
}

/// Rebuild a round from its variant and answers.
///
/// Answers past the reveal are ignored, as in live play.
#[must_use]
pub fn replay<I>(config: &TrickConfig, variant: Variant, answers: I) -> GameState
where
    I: IntoIterator<Item = Answer>,
{
    answers
        .into_iter()
        .fold(GameState::new(variant, config), |state, answer| state.answer(answer))
}
