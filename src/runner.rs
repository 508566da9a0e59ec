//! Batch execution of rounds and result aggregation.
//!
//! The runner drives N independent rounds end to end, choosing the
//! player's initial pick and switch decision through the injected
//! selector, and folds the recorded results into a [`RunReport`] once the
//! whole batch has completed. Rounds share nothing with each other; any
//! protocol error aborts the run immediately rather than producing a
//! partially-aggregated statistic.

use crate::door::Door;
use crate::report::Reporter;
use crate::round::{Round, RoundError};
use crate::selector::Selector;
use serde::{Deserialize, Serialize};

/// Batch configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of independent trials to run.
    pub rounds: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { rounds: 10_000 }
    }
}

/// Immutable snapshot of one completed trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub switched: bool,
    pub won: bool,
    pub winning_door: Door,
    pub initial_door: Door,
    pub final_door: Door,
    pub host_opened_door: Door,
}

/// Aggregate statistics over a full batch.
///
/// Every recorded [`RoundResult`] contributes equally; nothing is
/// excluded or reweighted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub rounds: usize,
    pub switched: usize,
    pub won: usize,
    pub switched_and_won: usize,
    pub switched_and_lost: usize,
    pub stayed_and_won: usize,
    pub stayed_and_lost: usize,
}

impl RunReport {
    /// Fold a result list into counters with a single scan.
    pub fn from_results(results: &[RoundResult]) -> Self {
        let mut report = Self {
            rounds: results.len(),
            switched: 0,
            won: 0,
            switched_and_won: 0,
            switched_and_lost: 0,
            stayed_and_won: 0,
            stayed_and_lost: 0,
        };
        for result in results {
            if result.switched {
                report.switched += 1;
            }
            if result.won {
                report.won += 1;
            }
            match (result.switched, result.won) {
                (true, true) => report.switched_and_won += 1,
                (true, false) => report.switched_and_lost += 1,
                (false, true) => report.stayed_and_won += 1,
                (false, false) => report.stayed_and_lost += 1,
            }
        }
        report
    }

    /// A joint count's share of all rounds, as a percentage.
    pub fn share_of_rounds(&self, count: usize) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.rounds as f64
    }

    /// Win rate among trials where the player switched, if any.
    pub fn switch_win_rate(&self) -> Option<f64> {
        (self.switched > 0).then(|| self.switched_and_won as f64 / self.switched as f64)
    }

    /// Win rate among trials where the player stayed, if any.
    pub fn stay_win_rate(&self) -> Option<f64> {
        let stayed = self.rounds - self.switched;
        (stayed > 0).then(|| self.stayed_and_won as f64 / stayed as f64)
    }

    /// Human-readable results block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&"*".repeat(73));
        out.push_str("\n\n Results:\n");
        out.push_str(&format!("   Rounds: {}\n", self.rounds));
        out.push_str(&format!("   Player Changed Door: {}\n", self.switched));
        out.push_str(&format!("   Player Won: {}\n", self.won));
        out.push_str(&format!(
            "   Player Changed Door And Won: {} - {:.0}%\n",
            self.switched_and_won,
            self.share_of_rounds(self.switched_and_won)
        ));
        out.push_str(&format!(
            "   Player Changed Door And Lost: {} - {:.0}%\n",
            self.switched_and_lost,
            self.share_of_rounds(self.switched_and_lost)
        ));
        out.push_str(&format!(
            "   Player Did Not Change Door And Won: {} - {:.0}%\n",
            self.stayed_and_won,
            self.share_of_rounds(self.stayed_and_won)
        ));
        out.push_str(&format!(
            "   Player Did Not Change Door And Lost: {} - {:.0}%\n",
            self.stayed_and_lost,
            self.share_of_rounds(self.stayed_and_lost)
        ));
        out
    }
}

/// Drives a configured number of independent trials.
///
/// # Example
///
/// ```rust
/// use montyhall::{RunConfig, Runner, SilentReporter, ThreadRngSelector};
///
/// let runner = Runner::new(RunConfig { rounds: 100 });
/// let mut selector = ThreadRngSelector::new();
/// let report = runner.run(&mut selector, &mut SilentReporter)?;
/// assert_eq!(report.rounds, 100);
/// # Ok::<(), montyhall::RoundError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// Run the full batch and aggregate the results.
    ///
    /// Any [`RoundError`] propagates immediately; no trial is skipped or
    /// retried.
    pub fn run(
        &self,
        selector: &mut dyn Selector,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport, RoundError> {
        let mut results = Vec::with_capacity(self.config.rounds);
        for round_number in 1..=self.config.rounds {
            results.push(self.run_round(round_number, selector, reporter)?);
        }
        let report = RunReport::from_results(&results);
        tracing::info!(
            rounds = report.rounds,
            switched = report.switched,
            won = report.won,
            "run complete"
        );
        Ok(report)
    }

    fn run_round(
        &self,
        round_number: usize,
        selector: &mut dyn Selector,
        reporter: &mut dyn Reporter,
    ) -> Result<RoundResult, RoundError> {
        let mut round = Round::new(selector);
        reporter.round_started(round_number, round.statuses());

        let initial_door = selector.pick_door(&Door::ALL);
        round.pick_initial_door(initial_door)?;
        notify_last(reporter, &round);

        let host_opened_door = round.host_reveal_losing_door(selector)?;
        notify_last(reporter, &round);

        let switched = selector.coin_flip();
        let final_door = round.resolve_final_choice(switched)?;
        notify_last(reporter, &round);

        let won = round.open_final_door()?;
        notify_last(reporter, &round);

        Ok(RoundResult {
            switched,
            won,
            winning_door: round.winning_door(),
            initial_door,
            final_door,
            host_opened_door,
        })
    }
}

/// Forward the round's most recent event to the reporter.
fn notify_last(reporter: &mut dyn Reporter, round: &Round) {
    if let Some(event) = round.events().last() {
        reporter.step(event, round.statuses());
    }
}
