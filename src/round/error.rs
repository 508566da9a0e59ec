//! Protocol-order errors for the round state machine.

use crate::door::Door;
use thiserror::Error;

/// Errors raised when a step is driven out of protocol order.
///
/// Every variant is a fatal programming error in the caller: the four
/// steps must run exactly once, in order. Nothing here is retryable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("player has already made a selection for this round")]
    AlreadyPicked,

    #[error("step '{step}' is not valid while the round is in phase '{phase}'")]
    OutOfOrder {
        step: &'static str,
        phase: &'static str,
    },

    #[error("expected exactly 2 unopened doors at the stay-or-switch step, found {count}")]
    UnopenedDoorCount { count: usize },

    #[error("player's final door {door} is already open")]
    FinalDoorAlreadyOpen { door: Door },
}
