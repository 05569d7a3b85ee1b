//! Property-based tests for the solved tables.

use std::sync::OnceLock;

use proptest::prelude::*;

use pig_solver::pig::{Action, PigSolver, SolverConfig};

const GOAL: usize = 25;

fn solved() -> &'static PigSolver {
    static SOLVER: OnceLock<PigSolver> = OnceLock::new();
    SOLVER.get_or_init(|| PigSolver::new(SolverConfig::new(GOAL, 1e-10)).unwrap())
}

/// Strategy: a stored state (i, j, k) with i + k < GOAL.
fn state_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (0..GOAL, 0..GOAL).prop_flat_map(|(i, j)| (Just(i), Just(j), 0..GOAL - i))
}

proptest! {
    // 1. Every stored value is a probability
    #[test]
    fn value_is_probability((i, j, k) in state_strategy()) {
        let p = solved().win_prob(i, j, k);
        prop_assert!((0.0..=1.0).contains(&p), "p={p} at ({i}, {j}, {k})");
    }

    // 2. Reaching the goal is a certain win, whatever the opponent holds
    #[test]
    fn banked_goal_wins(i in 0..2 * GOAL, j in 0..2 * GOAL, k in 0..2 * GOAL) {
        prop_assume!(i + k >= GOAL);
        prop_assert_eq!(solved().win_prob(i, j, k), 1.0);
    }

    // 3. An opponent at the goal is a certain loss
    #[test]
    fn opponent_goal_loses(i in 0..GOAL, j in GOAL..2 * GOAL, k in 0..GOAL) {
        prop_assume!(i + k < GOAL);
        prop_assert_eq!(solved().win_prob(i, j, k), 0.0);
    }

    // 4. Holding at k = 0 hands the opponent the mirrored position
    #[test]
    fn hold_branch_matches_mirror(i in 0..GOAL, j in 0..GOAL) {
        let solver = solved();
        let mirror = 1.0 - solver.win_prob(j, i, 0);
        let value = solver.win_prob(i, j, 0);
        prop_assert!(value >= mirror - 1e-9);
        if solver.action(i, j, 0) == Some(Action::Hold) {
            prop_assert!((value - mirror).abs() < 1e-9);
        }
    }

    // 5. The stored action is the better of the two branches
    #[test]
    fn action_matches_branches((i, j, k) in state_strategy()) {
        let solver = solved();
        let (p_roll, p_hold) = solver.action_values(i, j, k);
        prop_assert!((solver.win_prob(i, j, k) - p_roll.max(p_hold)).abs() < 1e-9);
        // Skip near-ties, where the last sweep may still flip the choice.
        if (p_roll - p_hold).abs() > 1e-7 {
            let expected = if p_roll > p_hold { Action::Roll } else { Action::Hold };
            prop_assert_eq!(solver.action(i, j, k), Some(expected));
        }
    }

    // 6. The threshold is the first hold
    #[test]
    fn threshold_is_first_hold(i in 0..GOAL, j in 0..GOAL) {
        let solver = solved();
        let t = solver.hold_threshold(i, j);
        prop_assert!(t <= GOAL - i);
        for k in 0..t {
            prop_assert_eq!(solver.action(i, j, k), Some(Action::Roll));
        }
        if t < GOAL - i {
            prop_assert_eq!(solver.action(i, j, t), Some(Action::Hold));
        }
    }
}

#[test]
fn policy_is_monotone_in_turn_total_for_small_goals() {
    for goal in [2, 5, 10, 20, 30] {
        let solver = PigSolver::new(SolverConfig::new(goal, 1e-9)).unwrap();
        for i in 0..goal {
            for j in 0..goal {
                let t = solver.hold_threshold(i, j);
                for k in t..goal - i {
                    assert_eq!(
                        solver.action(i, j, k),
                        Some(Action::Hold),
                        "goal {goal}: rolls at ({i}, {j}, {k}) above threshold {t}"
                    );
                }
            }
        }
    }
}

#[test]
fn repeated_solves_are_bit_identical() {
    let config = SolverConfig::new(GOAL, 1e-10);
    let again = PigSolver::new(config).unwrap();
    assert_eq!(again.table(), solved().table());
    assert_eq!(again.export_table(), solved().export_table());
}
