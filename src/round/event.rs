//! Structured step events emitted by the round.
//!
//! The round records one event per protocol step instead of printing
//! anything itself. Reporters decide whether and how to render them, so
//! narration can be switched off without touching the simulation.

use crate::door::Door;
use serde::{Deserialize, Serialize};

/// Immutable record of one protocol step: which step ran, which doors it
/// touched and what it decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepEvent {
    /// Step 1: the player committed to an initial door.
    PlayerPicked { door: Door },

    /// Step 2: the host opened a losing door.
    HostOpened { door: Door },

    /// Step 3: the player stayed or switched; `door` is the final pick.
    FinalChoice { switched: bool, door: Door },

    /// Step 4: the final door was opened.
    FinalReveal { door: Door, won: bool },
}

impl StepEvent {
    /// Protocol step number, 1 through 4.
    pub fn step_number(&self) -> u8 {
        match self {
            Self::PlayerPicked { .. } => 1,
            Self::HostOpened { .. } => 2,
            Self::FinalChoice { .. } => 3,
            Self::FinalReveal { .. } => 4,
        }
    }

    /// The door this step acted on.
    pub fn door(&self) -> Door {
        match self {
            Self::PlayerPicked { door }
            | Self::HostOpened { door }
            | Self::FinalChoice { door, .. }
            | Self::FinalReveal { door, .. } => *door,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_follow_protocol_order() {
        let events = [
            StepEvent::PlayerPicked { door: Door::Door1 },
            StepEvent::HostOpened { door: Door::Door2 },
            StepEvent::FinalChoice {
                switched: true,
                door: Door::Door3,
            },
            StepEvent::FinalReveal {
                door: Door::Door3,
                won: false,
            },
        ];
        let numbers: Vec<u8> = events.iter().map(StepEvent::step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn event_reports_its_door() {
        let event = StepEvent::HostOpened { door: Door::Door2 };
        assert_eq!(event.door(), Door::Door2);
    }

    #[test]
    fn events_serialize_round_trip() {
        let event = StepEvent::FinalReveal {
            door: Door::Door1,
            won: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: StepEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
