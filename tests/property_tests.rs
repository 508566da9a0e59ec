//! Property-based tests for the round state machine and batch runner.
//!
//! These tests use proptest to verify the protocol invariants hold across
//! every combination of prize placement, initial pick, host tie-break and
//! switch decision, plus a large-sample convergence check on the famous
//! 2/3-vs-1/3 result.

use montyhall::{
    Door, Knowledge, Phase, Round, RunConfig, Runner, Selector, SilentReporter,
    ThreadRngSelector,
};
use proptest::prelude::*;
use std::collections::VecDeque;

/// Selector that resolves each pick as an index into the candidate list
/// (modulo its length) and answers coin flips from a script. Unlike
/// `ScriptedSelector` it needs no advance knowledge of the candidate set,
/// so arbitrary tie-breaks can be generated freely.
struct IndexedSelector {
    picks: VecDeque<usize>,
    flips: VecDeque<bool>,
}

impl IndexedSelector {
    fn new(picks: impl IntoIterator<Item = usize>, flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            flips: flips.into_iter().collect(),
        }
    }
}

impl Selector for IndexedSelector {
    fn pick_door(&mut self, candidates: &[Door]) -> Door {
        assert!(!candidates.is_empty());
        let index = self.picks.pop_front().expect("ran out of scripted picks");
        candidates[index % candidates.len()]
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().expect("ran out of scripted flips")
    }
}

prop_compose! {
    fn arbitrary_door()(variant in 0..3usize) -> Door {
        Door::ALL[variant]
    }
}

fn known_winner_count(round: &Round) -> usize {
    round
        .statuses()
        .iter()
        .filter(|s| s.knowledge() == Knowledge::KnownWinner)
        .count()
}

/// Drive one full trial with fully determined inputs. Returns the round,
/// the host's door, the final door and the outcome.
fn play(
    prize_index: usize,
    initial: Door,
    tiebreak: usize,
    switch: bool,
) -> (Round, Door, Door, bool) {
    let mut selector = IndexedSelector::new([prize_index, tiebreak], []);
    let mut round = Round::new(&mut selector);
    assert_eq!(known_winner_count(&round), 1);

    round.pick_initial_door(initial).unwrap();
    assert_eq!(known_winner_count(&round), 1);

    let host_door = round.host_reveal_losing_door(&mut selector).unwrap();
    assert_eq!(known_winner_count(&round), 1);

    let final_door = round.resolve_final_choice(switch).unwrap();
    assert_eq!(known_winner_count(&round), 1);

    let won = round.open_final_door().unwrap();
    assert_eq!(known_winner_count(&round), 1);

    (round, host_door, final_door, won)
}

proptest! {
    #[test]
    fn host_never_opens_the_prize_or_the_players_door(
        prize_index in 0..3usize,
        initial in arbitrary_door(),
        tiebreak in 0..2usize,
        switch in any::<bool>(),
    ) {
        let (round, host_door, _, _) = play(prize_index, initial, tiebreak, switch);
        prop_assert_ne!(host_door, round.winning_door());
        prop_assert_ne!(host_door, initial);
    }

    #[test]
    fn host_has_two_options_iff_player_holds_the_prize(
        prize_index in 0..3usize,
        initial in arbitrary_door(),
    ) {
        let prize = Door::ALL[prize_index];
        let (_, host_a, _, _) = play(prize_index, initial, 0, false);
        let (_, host_b, _, _) = play(prize_index, initial, 1, false);
        if initial == prize {
            prop_assert_ne!(host_a, host_b, "two eligible reveals when the pick is the prize");
        } else {
            prop_assert_eq!(host_a, host_b, "a losing pick forces the host's hand");
        }
    }

    #[test]
    fn switching_changes_the_final_door_and_staying_keeps_it(
        prize_index in 0..3usize,
        initial in arbitrary_door(),
        tiebreak in 0..2usize,
        switch in any::<bool>(),
    ) {
        let (round, host_door, final_door, _) = play(prize_index, initial, tiebreak, switch);
        if switch {
            prop_assert_ne!(final_door, initial);
            prop_assert_eq!(round.selections(), &[initial, final_door]);
        } else {
            prop_assert_eq!(final_door, initial);
            prop_assert_eq!(round.selections(), &[initial]);
        }
        prop_assert_ne!(final_door, host_door);
    }

    #[test]
    fn outcome_is_winning_iff_final_door_hides_the_prize(
        prize_index in 0..3usize,
        initial in arbitrary_door(),
        tiebreak in 0..2usize,
        switch in any::<bool>(),
    ) {
        let (round, _, final_door, won) = play(prize_index, initial, tiebreak, switch);
        prop_assert_eq!(won, final_door == round.winning_door());
        prop_assert!(round.phase().is_final());
    }

    #[test]
    fn fixed_selector_outputs_replay_deterministically(
        prize_index in 0..3usize,
        initial in arbitrary_door(),
        tiebreak in 0..2usize,
        switch in any::<bool>(),
    ) {
        let (_, host_a, final_a, won_a) = play(prize_index, initial, tiebreak, switch);
        let (_, host_b, final_b, won_b) = play(prize_index, initial, tiebreak, switch);
        prop_assert_eq!(host_a, host_b);
        prop_assert_eq!(final_a, final_b);
        prop_assert_eq!(won_a, won_b);
    }

    #[test]
    fn runner_report_is_consistent_for_a_single_scripted_trial(
        prize_index in 0..3usize,
        initial_index in 0..3usize,
        tiebreak in 0..2usize,
        switch in any::<bool>(),
    ) {
        let mut selector =
            IndexedSelector::new([prize_index, initial_index, tiebreak], [switch]);
        let runner = Runner::new(RunConfig { rounds: 1 });
        let report = runner.run(&mut selector, &mut SilentReporter).unwrap();

        prop_assert_eq!(report.rounds, 1);
        prop_assert_eq!(report.switched, switch as usize);
        prop_assert_eq!(
            report.switched_and_won
                + report.switched_and_lost
                + report.stayed_and_won
                + report.stayed_and_lost,
            1
        );
        prop_assert_eq!(report.switched_and_won + report.stayed_and_won, report.won);
    }
}

#[test]
fn win_rates_converge_to_two_thirds_and_one_third() {
    let runner = Runner::new(RunConfig { rounds: 10_000 });
    let mut selector = ThreadRngSelector::new();
    let report = runner.run(&mut selector, &mut SilentReporter).unwrap();

    let switch_rate = report.switch_win_rate().unwrap();
    let stay_rate = report.stay_win_rate().unwrap();
    assert!(
        (switch_rate - 2.0 / 3.0).abs() < 0.03,
        "switch win rate {switch_rate} outside 2/3 +/- 0.03"
    );
    assert!(
        (stay_rate - 1.0 / 3.0).abs() < 0.03,
        "stay win rate {stay_rate} outside 1/3 +/- 0.03"
    );
}

#[test]
fn completed_round_reports_complete_phase() {
    let (round, _, _, _) = play(0, Door::Door2, 0, true);
    assert_eq!(round.phase(), Phase::Complete);
    assert_eq!(round.events().len(), 4);
}
