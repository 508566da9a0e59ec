//! Uniform random selection primitives.
//!
//! The round state machine and the batch runner never reach for ambient
//! process-wide randomness. They receive a [`Selector`] capability, which
//! keeps the core deterministic under test: swap in a [`ScriptedSelector`]
//! and every trial replays exactly.

use crate::door::Door;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;

/// Injected source of uniform choices.
///
/// Implementations must draw uniformly: every candidate door equally
/// likely, coin flips fair. A single-element candidate slice degenerates
/// to a deterministic return.
pub trait Selector {
    /// Pick one door uniformly at random from `candidates`.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty. The round state machine never
    /// produces an empty candidate set, so an empty slice indicates a bug
    /// in the caller, not a runtime condition.
    fn pick_door(&mut self, candidates: &[Door]) -> Door;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;
}

/// Selector backed by the thread-local RNG.
///
/// # Example
///
/// ```rust
/// use montyhall::{Door, Selector, ThreadRngSelector};
///
/// let mut selector = ThreadRngSelector::new();
/// let door = selector.pick_door(&Door::ALL);
/// assert!(Door::ALL.contains(&door));
///
/// // A single candidate degenerates to a deterministic return.
/// assert_eq!(selector.pick_door(&[Door::Door2]), Door::Door2);
/// ```
#[derive(Clone, Debug)]
pub struct ThreadRngSelector {
    rng: ThreadRng,
}

impl ThreadRngSelector {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for ThreadRngSelector {
    fn pick_door(&mut self, candidates: &[Door]) -> Door {
        assert!(
            !candidates.is_empty(),
            "selector invoked with an empty candidate set"
        );
        candidates[self.rng.random_range(0..candidates.len())]
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Deterministic selector that replays pre-scripted outputs.
///
/// Doors and coin flips are consumed in queue order. Tests script the
/// prize assignment, the player's initial pick, the host's tie-break and
/// the switch decision, then assert on the exact outcome.
///
/// # Panics
///
/// `pick_door` panics if the queue is exhausted or the scripted door is
/// not among the candidates; `coin_flip` panics when out of flips. All of
/// these indicate a mis-scripted test.
///
/// # Example
///
/// ```rust
/// use montyhall::{Door, ScriptedSelector, Selector};
///
/// let mut selector = ScriptedSelector::new([Door::Door1, Door::Door2], [true]);
/// assert_eq!(selector.pick_door(&Door::ALL), Door::Door1);
/// assert_eq!(selector.pick_door(&Door::ALL), Door::Door2);
/// assert!(selector.coin_flip());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSelector {
    doors: VecDeque<Door>,
    flips: VecDeque<bool>,
}

impl ScriptedSelector {
    pub fn new(
        doors: impl IntoIterator<Item = Door>,
        flips: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            doors: doors.into_iter().collect(),
            flips: flips.into_iter().collect(),
        }
    }

    /// Doors still queued.
    pub fn remaining_doors(&self) -> usize {
        self.doors.len()
    }
}

impl Selector for ScriptedSelector {
    fn pick_door(&mut self, candidates: &[Door]) -> Door {
        assert!(
            !candidates.is_empty(),
            "selector invoked with an empty candidate set"
        );
        let door = match self.doors.pop_front() {
            Some(door) => door,
            None => panic!("scripted selector ran out of doors"),
        };
        assert!(
            candidates.contains(&door),
            "scripted door {door} is not among the candidates {candidates:?}"
        );
        door
    }

    fn coin_flip(&mut self) -> bool {
        match self.flips.pop_front() {
            Some(flip) => flip,
            None => panic!("scripted selector ran out of coin flips"),
        }
    }
}
