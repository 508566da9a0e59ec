//! Reporters: turn step events into console narration.
//!
//! The round emits structured [`StepEvent`]s and never prints. A
//! [`Reporter`] decides what to do with them; the silent implementation
//! makes quiet mode a true no-op, so narration can never influence
//! outcomes.

use crate::door::DoorStatus;
use crate::render::{render_doors_with_status, status_lines, RenderOptions};
use crate::round::StepEvent;

/// Consumer of step events and door snapshots.
///
/// Implementations must treat the snapshot as read-only; they observe the
/// round, they never steer it.
pub trait Reporter {
    /// A new trial is starting. `round_number` is 1-based.
    fn round_started(&mut self, round_number: usize, doors: &[DoorStatus; 3]);

    /// A protocol step just completed.
    fn step(&mut self, event: &StepEvent, doors: &[DoorStatus; 3]);
}

/// Reporter that does nothing; used for quiet runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn round_started(&mut self, _round_number: usize, _doors: &[DoorStatus; 3]) {}

    fn step(&mut self, _event: &StepEvent, _doors: &[DoorStatus; 3]) {}
}

/// Reporter that narrates each step to stdout and draws the door diagram
/// after every board-changing step.
#[derive(Clone, Debug)]
pub struct ConsoleNarrator {
    options: RenderOptions,
}

impl ConsoleNarrator {
    pub fn new() -> Self {
        Self {
            options: RenderOptions {
                initial_padding: 7,
                space_between_doors_and_status: 9,
                ..RenderOptions::default()
            },
        }
    }

    fn draw_board(&self, doors: &[DoorStatus; 3]) {
        let lines = status_lines(doors);
        println!("{}", render_doors_with_status(doors, &lines, &self.options));
        println!();
        println!("{}", "=".repeat(77));
        println!();
    }

    fn narration(event: &StepEvent) -> String {
        match event {
            StepEvent::PlayerPicked { door } => {
                format!("Step 1 - Player picks door {door}")
            }
            StepEvent::HostOpened { door } => {
                format!("Step 2 - Host opens losing door {door}")
            }
            StepEvent::FinalChoice { switched, door } => {
                if *switched {
                    format!("Step 3 - Player switches to door {door}")
                } else {
                    format!("Step 3 - Player stays with door {door}")
                }
            }
            StepEvent::FinalReveal { door, won } => {
                let verdict = if *won { "WINNER!" } else { "loser" };
                format!("Step 4 - Drumroll... opening door {door} ... {verdict}")
            }
        }
    }
}

impl Default for ConsoleNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleNarrator {
    fn round_started(&mut self, round_number: usize, doors: &[DoorStatus; 3]) {
        println!("Starting round #{round_number}...");
        self.draw_board(doors);
    }

    fn step(&mut self, event: &StepEvent, doors: &[DoorStatus; 3]) {
        println!("{}", Self::narration(event));
        // The final reveal closes the round; no board after it.
        if !matches!(event, StepEvent::FinalReveal { .. }) {
            self.draw_board(doors);
        }
    }
}
