//! The four-step round state machine.
//!
//! One [`Round`] is one trial of the puzzle. Its phase is an explicit
//! enum validated at the top of every step, rather than inferred from
//! door-collection queries; transitions are one-directional and no phase
//! can be re-entered.
//!
//! Invariants held after every step:
//! - exactly one door is `KnownWinner` for the round's lifetime;
//! - after step 2, exactly one door is `PickedByHost`, and that door is
//!   `Opened`, `KnownLoser`, not the prize and not the player's pick;
//! - from step 1 onward, exactly one door is `PickedByPlayer`.

use crate::door::{Door, DoorStatus, Knowledge};
use crate::selector::Selector;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod event;

pub use error::RoundError;
pub use event::StepEvent;

/// Phase of a round. Steps advance it strictly left to right.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    AwaitingPlayerPick,
    AwaitingHostReveal,
    AwaitingFinalChoice,
    AwaitingFinalReveal,
    Complete,
}

impl Phase {
    /// The phase's name for display and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingPlayerPick => "AwaitingPlayerPick",
            Self::AwaitingHostReveal => "AwaitingHostReveal",
            Self::AwaitingFinalChoice => "AwaitingFinalChoice",
            Self::AwaitingFinalReveal => "AwaitingFinalReveal",
            Self::Complete => "Complete",
        }
    }

    /// A completed round accepts no further steps.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// State for one trial: three doors, the player's selection history, the
/// host's opened door and the current phase.
///
/// Constructed per trial and discarded after [`Round::open_final_door`];
/// a round is never reused.
///
/// # Example
///
/// ```rust
/// use montyhall::{Door, Round, ScriptedSelector};
///
/// // Prize behind door 1; the player picks door 2, so the host is forced
/// // to open door 3, and switching wins.
/// let mut selector = ScriptedSelector::new([Door::Door1, Door::Door3], []);
/// let mut round = Round::new(&mut selector);
///
/// round.pick_initial_door(Door::Door2)?;
/// assert_eq!(round.host_reveal_losing_door(&mut selector)?, Door::Door3);
/// assert_eq!(round.resolve_final_choice(true)?, Door::Door1);
/// assert!(round.open_final_door()?);
/// # Ok::<(), montyhall::RoundError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    doors: [DoorStatus; 3],
    prize: Door,
    phase: Phase,
    selections: Vec<Door>,
    host_opened: Option<Door>,
    events: Vec<StepEvent>,
}

impl Round {
    /// Start a trial: the selector assigns the prize uniformly across the
    /// three doors; everything starts unopened and unpicked.
    pub fn new(selector: &mut dyn Selector) -> Self {
        let prize = selector.pick_door(&Door::ALL);
        let doors = Door::ALL.map(|door| {
            let knowledge = if door == prize {
                Knowledge::KnownWinner
            } else {
                Knowledge::Unknown
            };
            DoorStatus::new(door, knowledge)
        });
        tracing::debug!(prize = %prize, "round started");
        Self {
            doors,
            prize,
            phase: Phase::AwaitingPlayerPick,
            selections: Vec::with_capacity(2),
            host_opened: None,
            events: Vec::with_capacity(4),
        }
    }

    /// Step 1: the player commits to an initial door.
    pub fn pick_initial_door(&mut self, door: Door) -> Result<(), RoundError> {
        if self.phase != Phase::AwaitingPlayerPick {
            return Err(RoundError::AlreadyPicked);
        }
        self.selections.push(door);
        self.status_mut(door).pick_by_player();
        self.phase = Phase::AwaitingHostReveal;
        self.events.push(StepEvent::PlayerPicked { door });
        tracing::debug!(door = %door, "step 1: player picked");
        Ok(())
    }

    /// Step 2: the host opens a losing door the player did not pick.
    ///
    /// Candidates are the doors that are neither the player's pick nor the
    /// prize: one door when the player picked a loser, two when the player
    /// happened to pick the prize, in which case the selector breaks the
    /// tie uniformly.
    pub fn host_reveal_losing_door(
        &mut self,
        selector: &mut dyn Selector,
    ) -> Result<Door, RoundError> {
        if self.phase != Phase::AwaitingHostReveal {
            return Err(RoundError::OutOfOrder {
                step: "host_reveal_losing_door",
                phase: self.phase.name(),
            });
        }
        let candidates = self.host_candidates();
        let door = selector.pick_door(&candidates);
        self.status_mut(door).reveal_by_host();
        self.host_opened = Some(door);
        self.phase = Phase::AwaitingFinalChoice;
        self.events.push(StepEvent::HostOpened { door });
        tracing::debug!(door = %door, "step 2: host revealed loser");
        Ok(door)
    }

    /// Step 3: the player stays (`switch == false`) or switches to the one
    /// remaining unopened door. Returns the player's final door.
    pub fn resolve_final_choice(&mut self, switch: bool) -> Result<Door, RoundError> {
        if self.phase != Phase::AwaitingFinalChoice {
            return Err(RoundError::OutOfOrder {
                step: "resolve_final_choice",
                phase: self.phase.name(),
            });
        }
        let unopened: Vec<Door> = self
            .doors
            .iter()
            .filter(|s| s.is_unopened())
            .map(|s| s.door())
            .collect();
        if unopened.len() != 2 {
            return Err(RoundError::UnopenedDoorCount {
                count: unopened.len(),
            });
        }
        let Some(&current) = self.selections.last() else {
            return Err(RoundError::OutOfOrder {
                step: "resolve_final_choice",
                phase: self.phase.name(),
            });
        };

        let final_door = if switch {
            let Some(target) = unopened.into_iter().find(|&d| d != current) else {
                return Err(RoundError::UnopenedDoorCount { count: 1 });
            };
            self.status_mut(current).clear_player_pick();
            self.status_mut(target).pick_by_player();
            self.selections.push(target);
            target
        } else {
            current
        };

        self.phase = Phase::AwaitingFinalReveal;
        self.events.push(StepEvent::FinalChoice {
            switched: switch,
            door: final_door,
        });
        tracing::debug!(switched = switch, door = %final_door, "step 3: final choice");
        Ok(final_door)
    }

    /// Step 4: open the player's final door. Returns `true` on a win.
    /// Terminal: the round accepts no further steps.
    pub fn open_final_door(&mut self) -> Result<bool, RoundError> {
        if self.phase != Phase::AwaitingFinalReveal {
            return Err(RoundError::OutOfOrder {
                step: "open_final_door",
                phase: self.phase.name(),
            });
        }
        let Some(&door) = self.selections.last() else {
            return Err(RoundError::OutOfOrder {
                step: "open_final_door",
                phase: self.phase.name(),
            });
        };
        if !self.status(door).is_unopened() {
            return Err(RoundError::FinalDoorAlreadyOpen { door });
        }
        self.status_mut(door).open();
        let won = self.status(door).knowledge() == Knowledge::KnownWinner;
        self.phase = Phase::Complete;
        self.events.push(StepEvent::FinalReveal { door, won });
        tracing::debug!(door = %door, won, "step 4: final reveal");
        Ok(won)
    }

    /// Read-only snapshot of the three doors, in canonical order.
    pub fn statuses(&self) -> &[DoorStatus; 3] {
        &self.doors
    }

    /// The prize door.
    pub fn winning_door(&self) -> Door {
        self.prize
    }

    /// The player's successive selections: one entry after step 1, two
    /// after a switch.
    pub fn selections(&self) -> &[Door] {
        &self.selections
    }

    /// The door the host opened, once step 2 has run.
    pub fn host_opened(&self) -> Option<Door> {
        self.host_opened
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ordered events recorded so far, one per completed step.
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Doors the host may legally open: neither picked by the player nor
    /// hiding the prize.
    fn host_candidates(&self) -> Vec<Door> {
        self.doors
            .iter()
            .filter(|s| !s.is_player_pick() && s.door() != self.prize)
            .map(|s| s.door())
            .collect()
    }

    fn status(&self, door: Door) -> &DoorStatus {
        &self.doors[door as usize]
    }

    fn status_mut(&mut self, door: Door) -> &mut DoorStatus {
        &mut self.doors[door as usize]
    }
}
