//! Cycle detection and extrapolation against direct simulation.

use std::num::NonZeroU64;

use state_search::{Automaton, Cycle, CycleDetector, SearchError};

/// Counts 0, 1, then loops 2, 3, 4, 5, 6, 2, 3, ...: a tail of period 5
/// entered after 2 lead-in steps.
struct LeadInLoop;

impl Automaton for LeadInLoop {
    type State = u64;

    fn step(&self, n: &u64) -> u64 {
        if *n < 2 { n + 1 } else { 2 + (n - 2 + 1) % 5 }
    }
}

fn simulate(automaton: &impl Automaton<State = u64>, start: u64, steps: u64) -> u64 {
    let mut state = start;
    for _ in 0..steps {
        state = automaton.step(&state);
    }
    state
}

#[test]
fn detected_cycle_has_the_injected_offset_and_period() {
    let report = CycleDetector::new(LeadInLoop).run(&0, 1_000).unwrap();

    assert_eq!(
        report.answer.cycle,
        Some(Cycle {
            offset: 2,
            period: 5
        })
    );
    // 0..=6 simulated, then state 2 recurred
    assert_eq!(report.answer.steps_simulated, 7);
}

#[test]
fn huge_target_matches_direct_simulation() {
    let target = 1_000_003;
    let report = CycleDetector::new(LeadInLoop).run(&0, target).unwrap();

    assert_eq!(report.answer.state, simulate(&LeadInLoop, 0, target));
    // The shortcut must not have simulated anywhere near the target
    assert!(report.answer.steps_simulated < 10);
}

#[test]
fn small_targets_match_direct_simulation_exhaustively() {
    for target in 0..40 {
        let report = CycleDetector::new(LeadInLoop).run(&0, target).unwrap();
        assert_eq!(
            report.answer.state,
            simulate(&LeadInLoop, 0, target),
            "diverged at target {target}"
        );
    }
}

#[test]
fn target_before_any_repeat_is_answered_without_a_cycle() {
    let report = CycleDetector::new(LeadInLoop).run(&0, 4).unwrap();

    assert_eq!(report.answer.state, 4);
    assert_eq!(report.answer.cycle, None);
    assert_eq!(report.answer.steps_simulated, 4);
}

#[test]
fn never_repeating_process_hits_the_step_limit() {
    let limit = NonZeroU64::new(100).unwrap();
    let detector = CycleDetector::from_step(|n: &u64| n + 1).with_step_limit(limit);

    let err = detector.run(&0, 1_000).unwrap_err();
    assert!(matches!(err, SearchError::StepLimitExceeded { limit: 100 }));
}

#[test]
fn target_exactly_at_the_step_limit_still_succeeds() {
    let limit = NonZeroU64::new(100).unwrap();
    let detector = CycleDetector::from_step(|n: &u64| n + 1).with_step_limit(limit);

    let report = detector.run(&0, 100).unwrap();
    assert_eq!(report.answer.state, 100);
    assert_eq!(report.answer.cycle, None);
}

#[test]
fn closure_steps_detect_cycles_too() {
    // Multiplicative group mod 11: 2^k cycles with period 10
    let detector = CycleDetector::from_step(|n: &u64| (n * 2) % 11);

    let report = detector.run(&1, 1_000_000).unwrap();
    assert_eq!(report.answer.state, simulate_closure(1, 1_000_000));
    assert_eq!(
        report.answer.cycle,
        Some(Cycle {
            offset: 0,
            period: 10
        })
    );
}

fn simulate_closure(start: u64, steps: u64) -> u64 {
    let mut state = start;
    for _ in 0..steps {
        state = (state * 2) % 11;
    }
    state
}
