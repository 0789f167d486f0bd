//! Input events for the round state machine.
//!
//! Events arrive from a UI as `{"type": "ANSWER_YES"}` objects. Any
//! unrecognised `type` deserialises to [`GameEvent::Unknown`], which the
//! machine ignores.

use serde::{Deserialize, Serialize};

/// A yes/no answer to the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    /// The thought-of number is on the card.
    Yes,
    /// It is not.
    No,
}

impl Answer {
    /// `Yes` for `true`, `No` for `false`.
    #[must_use]
    pub fn from_bool(yes: bool) -> Self {
        if yes {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    #[must_use]
    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

/// Event consumed by [`GameMachine::transition`](super::GameMachine::transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    AnswerYes,
    AnswerNo,
    Restart,
    /// Anything else. Transitions leave the state untouched.
    #[serde(other)]
    Unknown,
}

impl From<Answer> for GameEvent {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => GameEvent::AnswerYes,
            Answer::No => GameEvent::AnswerNo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_from_bool() {
        assert_eq!(Answer::from_bool(true), Answer::Yes);
        assert_eq!(Answer::from_bool(false), Answer::No);
        assert!(Answer::Yes.is_yes());
        assert!(!Answer::No.is_yes());
    }

    #[test]
    fn test_event_from_answer() {
        assert_eq!(GameEvent::from(Answer::Yes), GameEvent::AnswerYes);
        assert_eq!(GameEvent::from(Answer::No), GameEvent::AnswerNo);
    }
}
