//! Montyhall: a Monte Carlo tester for the Monty Hall problem.
//!
//! The crate is built around a small, strictly-ordered state machine: one
//! [`Round`] walks the four-step protocol (player picks, host reveals a
//! loser, player stays or switches, final reveal), and a [`Runner`] repeats
//! it thousands of times to show empirically that switching wins about 2/3
//! of the time while staying wins about 1/3.
//!
//! # Core Concepts
//!
//! - **Round**: the per-trial state machine over three [`Door`]s, with an
//!   explicit [`Phase`](round::Phase) validated at every step
//! - **Selector**: an injected uniform-choice capability, swappable for a
//!   scripted one in tests
//! - **Runner**: the batch driver that aggregates trial outcomes into a
//!   [`RunReport`]
//! - **Reporter**: an external consumer of step events; narration never
//!   affects outcomes
//!
//! # Example
//!
//! ```rust
//! use montyhall::{RunConfig, Runner, SilentReporter, ThreadRngSelector};
//!
//! let runner = Runner::new(RunConfig { rounds: 1_000 });
//! let mut selector = ThreadRngSelector::new();
//! let report = runner.run(&mut selector, &mut SilentReporter)?;
//!
//! assert_eq!(report.rounds, 1_000);
//! assert_eq!(
//!     report.switched_and_won + report.switched_and_lost,
//!     report.switched
//! );
//! # Ok::<(), montyhall::RoundError>(())
//! ```

pub mod door;
pub mod render;
pub mod report;
pub mod round;
pub mod runner;
pub mod selector;

// Re-export commonly used types
pub use door::{Door, DoorStatus, Knowledge, OpenState, PickedState};
pub use report::{ConsoleNarrator, Reporter, SilentReporter};
pub use round::{Phase, Round, RoundError, StepEvent};
pub use runner::{RoundResult, RunConfig, RunReport, Runner};
pub use selector::{ScriptedSelector, Selector, ThreadRngSelector};
