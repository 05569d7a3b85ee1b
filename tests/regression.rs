//! Regression anchors for standard Pig (goal 100).

use std::io::BufReader;
use std::sync::OnceLock;

use pig_solver::pig::{Action, PigSolver, SolverConfig};
use pig_solver::report::{write_thresholds, ThresholdGrid};

fn standard() -> &'static PigSolver {
    static SOLVER: OnceLock<PigSolver> = OnceLock::new();
    SOLVER.get_or_init(|| PigSolver::new(SolverConfig::default()).unwrap())
}

#[test]
fn first_player_win_probability() {
    let p = standard().first_player_win_prob();
    assert!(p > 0.5305 && p < 0.5307, "first player wins with p = {p}");
}

#[test]
fn opening_hold_threshold() {
    let solver = standard();
    assert_eq!(solver.hold_threshold(0, 0), 21);
    assert_eq!(solver.action(0, 0, 20), Some(Action::Roll));
    assert_eq!(solver.action(0, 0, 21), Some(Action::Hold));
}

#[test]
fn converges_well_inside_sweep_bound() {
    let stats = standard().stats();
    assert!(stats.final_max_delta < 1e-9);
    assert!(stats.sweeps > 1 && stats.sweeps < 1_000, "took {} sweeps", stats.sweeps);
    assert_eq!(stats.states_per_sweep, 100 * 100 * 101 / 2);
}

#[test]
fn trailing_player_rolls_to_the_goal() {
    // Any hold lets an opponent on 99 win with five chances in six.
    let solver = standard();
    assert_eq!(solver.hold_threshold(0, 99), 100);
}

#[test]
fn exported_thresholds_round_trip() {
    let solver = standard();
    let mut buf = Vec::new();
    write_thresholds(solver, &mut buf).unwrap();

    let text = std::str::from_utf8(&buf).unwrap();
    assert_eq!(text.lines().count(), 100);
    assert!(text.ends_with('\n'));
    assert!(text.lines().all(|l| l.split(',').count() == 100 && !l.ends_with(',')));

    let grid = ThresholdGrid::parse(BufReader::new(buf.as_slice())).unwrap();
    assert_eq!(grid.goal, 100);
    for i in 0..100 {
        for j in 0..100 {
            assert_eq!(grid.get(i, j), Some(solver.hold_threshold(i, j)));
        }
    }
}
