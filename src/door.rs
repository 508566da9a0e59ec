//! Door identities and per-door state.
//!
//! A round owns exactly three doors. Each door carries three independent
//! tagged states: whether it has been opened, what is known about it, and
//! who (if anyone) currently holds it as their pick. Keeping these separate
//! is what lets the round express the puzzle's key subtlety: the host's
//! reveal uses hidden knowledge of the prize, while the player's decision
//! uses only observed open/closed state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the three doors.
///
/// Ordered `Door1 < Door2 < Door3`; iteration and display always follow
/// this order.
///
/// # Example
///
/// ```rust
/// use montyhall::Door;
///
/// assert!(Door::Door1 < Door::Door3);
/// assert_eq!(Door::ALL.len(), 3);
/// assert_eq!(Door::Door2.label(), "2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Door {
    Door1,
    Door2,
    Door3,
}

impl Door {
    /// All doors in canonical order.
    pub const ALL: [Door; 3] = [Door::Door1, Door::Door2, Door::Door3];

    /// The door's display label (its digit).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Door1 => "1",
            Self::Door2 => "2",
            Self::Door3 => "3",
        }
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a door has been opened. Monotonic: an opened door never closes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OpenState {
    Unopened,
    Opened,
}

impl OpenState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unopened => "Unopened",
            Self::Opened => "Opened",
        }
    }
}

impl fmt::Display for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What is known about what lies behind a door.
///
/// `KnownWinner` is assigned once, at round construction, to exactly one
/// door. `KnownLoser` is assigned by the host's reveal. Every other door
/// stays `Unknown` until it is finally opened.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Knowledge {
    Unknown,
    KnownWinner,
    KnownLoser,
}

impl Knowledge {
    /// One-character glyph used in status lines: `?`, `★` or `X`.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Unknown => "?",
            Self::KnownWinner => "★",
            Self::KnownLoser => "X",
        }
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Who currently holds a door as their pick.
///
/// Exactly one door is `PickedByPlayer` from step 1 onward (the holder can
/// change during the switch step); exactly one door is `PickedByHost` from
/// step 2 onward, permanently.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PickedState {
    Unpicked,
    PickedByPlayer,
    PickedByHost,
}

impl PickedState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unpicked => "Unpicked",
            Self::PickedByPlayer => "Picked by Player",
            Self::PickedByHost => "Picked by Host",
        }
    }
}

impl fmt::Display for PickedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable per-door record, owned exclusively by its round.
///
/// Fields evolve only through the transition methods below, which are
/// crate-private: outside the round, a `DoorStatus` is a read-only
/// snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DoorStatus {
    door: Door,
    open_state: OpenState,
    knowledge: Knowledge,
    picked_state: PickedState,
}

impl DoorStatus {
    pub(crate) fn new(door: Door, knowledge: Knowledge) -> Self {
        Self {
            door,
            open_state: OpenState::Unopened,
            knowledge,
            picked_state: PickedState::Unpicked,
        }
    }

    pub fn door(&self) -> Door {
        self.door
    }

    pub fn open_state(&self) -> OpenState {
        self.open_state
    }

    pub fn knowledge(&self) -> Knowledge {
        self.knowledge
    }

    pub fn picked_state(&self) -> PickedState {
        self.picked_state
    }

    pub fn is_unopened(&self) -> bool {
        self.open_state == OpenState::Unopened
    }

    pub fn is_player_pick(&self) -> bool {
        self.picked_state == PickedState::PickedByPlayer
    }

    /// Transfer the player's pick onto this door.
    pub(crate) fn pick_by_player(&mut self) {
        debug_assert_eq!(self.picked_state, PickedState::Unpicked);
        self.picked_state = PickedState::PickedByPlayer;
    }

    /// Release the player's pick (the switch step moves it elsewhere).
    pub(crate) fn clear_player_pick(&mut self) {
        debug_assert_eq!(self.picked_state, PickedState::PickedByPlayer);
        self.picked_state = PickedState::Unpicked;
    }

    /// The host claims and opens this door, exposing it as a loser.
    pub(crate) fn reveal_by_host(&mut self) {
        debug_assert_eq!(self.picked_state, PickedState::Unpicked);
        debug_assert_ne!(self.knowledge, Knowledge::KnownWinner);
        self.picked_state = PickedState::PickedByHost;
        self.knowledge = Knowledge::KnownLoser;
        self.open_state = OpenState::Opened;
    }

    /// Open the door. Never reverts.
    pub(crate) fn open(&mut self) {
        debug_assert_eq!(self.open_state, OpenState::Unopened);
        self.open_state = OpenState::Opened;
    }
}

impl fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "=> Door: {}: {} | {} | {}",
            self.door, self.open_state, self.knowledge, self.picked_state
        )
    }
}
