//! Round state machine.
//!
//! A round moves through `Asking { step }` for each card and ends in
//! `Revealed`. `GameMachine::transition` is the single entry point a UI
//! calls; it never mutates the state it is given.

pub mod event;
pub mod machine;
pub mod state;

pub use event::{Answer, GameEvent};
pub use machine::{replay, GameMachine};
pub use state::{GameState, Phase, Reveal};
