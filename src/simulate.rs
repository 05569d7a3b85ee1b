//! Monte Carlo play-out of Pig strategies.
//!
//! Used to check solved win probabilities against actual games and to
//! compare the optimal policy with simple heuristics. Every game draws from
//! its own `StdRng` seeded from the base seed and the game index, so results
//! do not depend on how rayon schedules the games.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pig::{Action, PigSolver};

/// Turns after which a game is abandoned as unfinished.
pub const MAX_TURNS: usize = 100_000;

/// A roll/hold decision rule.
pub trait Strategy: Sync {
    /// Whether to roll with banked score `i`, opponent score `j` and turn
    /// total `k`. Only asked while `i + k` is below the goal.
    fn should_roll(&self, i: usize, j: usize, k: usize) -> bool;

    /// Short name for reports.
    fn name(&self) -> String;

    /// Goal the strategy was built for, if it only covers one.
    fn goal(&self) -> Option<usize> {
        None
    }
}

/// Plays the solved policy.
#[derive(Debug, Clone, Copy)]
pub struct OptimalStrategy<'a> {
    solver: &'a PigSolver,
}

impl<'a> OptimalStrategy<'a> {
    /// Wrap a solved game.
    pub fn new(solver: &'a PigSolver) -> Self {
        Self { solver }
    }
}

impl Strategy for OptimalStrategy<'_> {
    fn should_roll(&self, i: usize, j: usize, k: usize) -> bool {
        self.solver.action(i, j, k) == Some(Action::Roll)
    }

    fn name(&self) -> String {
        "optimal".to_string()
    }

    fn goal(&self) -> Option<usize> {
        Some(self.solver.goal())
    }
}

/// Rolls until the turn total reaches a fixed value.
///
/// A limit of 0 is treated as 1 so the player never passes on an empty turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldAt(pub usize);

impl Strategy for HoldAt {
    fn should_roll(&self, _i: usize, _j: usize, k: usize) -> bool {
        k < self.0.max(1)
    }

    fn name(&self) -> String {
        format!("hold at {}", self.0)
    }
}

/// Outcome of a batch of simulated games.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Games played.
    pub games: u64,
    /// Games won by the player who moved first.
    pub first_wins: u64,
    /// Games abandoned after [`MAX_TURNS`].
    pub unfinished: u64,
}

impl SimulationResult {
    /// Fraction of finished games won by the first player.
    pub fn first_win_rate(&self) -> f64 {
        let finished = self.games - self.unfinished;
        if finished == 0 {
            return 0.0;
        }
        self.first_wins as f64 / finished as f64
    }
}

/// Winner of one game: `Some(0)` for the first player, `Some(1)` for the
/// second, `None` if abandoned.
pub fn play_game<R: Rng>(
    goal: usize,
    players: [&dyn Strategy; 2],
    rng: &mut R,
) -> Option<usize> {
    let mut scores = [0usize; 2];
    let mut current = 0usize;
    let mut turn_total = 0usize;

    for _ in 0..MAX_TURNS {
        loop {
            let (i, j) = (scores[current], scores[1 - current]);
            if !players[current].should_roll(i, j, turn_total) {
                scores[current] += turn_total;
                break;
            }
            match rng.gen_range(1..=6usize) {
                1 => break,
                face => {
                    turn_total += face;
                    if i + turn_total >= goal {
                        return Some(current);
                    }
                }
            }
        }
        turn_total = 0;
        current = 1 - current;
    }

    None
}

/// Play `games` games of `first` against `second` to `goal` points.
///
/// # Panics
/// Panics if either strategy was built for a different goal.
pub fn simulate(
    goal: usize,
    first: &dyn Strategy,
    second: &dyn Strategy,
    games: u64,
    seed: u64,
) -> SimulationResult {
    for player in [first, second] {
        if let Some(own) = player.goal() {
            assert_eq!(
                own,
                goal,
                "{} strategy solved for goal {} cannot play to {}",
                player.name(),
                own,
                goal
            );
        }
    }

    let (first_wins, unfinished) = (0..games)
        .into_par_iter()
        .map(|game| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(game));
            match play_game(goal, [first, second], &mut rng) {
                Some(0) => (1u64, 0u64),
                Some(_) => (0, 0),
                None => (0, 1),
            }
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    log::debug!(
        "{} vs {}: {} of {} games won by the first player",
        first.name(),
        second.name(),
        first_wins,
        games
    );

    SimulationResult {
        games,
        first_wins,
        unfinished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pig::SolverConfig;

    #[test]
    fn test_hold_at_never_passes_empty_turn() {
        assert!(HoldAt(0).should_roll(0, 0, 0));
        assert!(!HoldAt(0).should_roll(0, 0, 1));
        assert!(HoldAt(20).should_roll(50, 10, 19));
        assert!(!HoldAt(20).should_roll(50, 10, 20));
    }

    #[test]
    fn test_game_always_finishes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let winner = play_game(30, [&HoldAt(5), &HoldAt(15)], &mut rng);
            assert!(matches!(winner, Some(0) | Some(1)));
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let a = simulate(20, &HoldAt(10), &HoldAt(10), 500, 42);
        let b = simulate(20, &HoldAt(10), &HoldAt(10), 500, 42);
        assert_eq!(a, b);
        assert_eq!(a.games, 500);
        assert_eq!(a.unfinished, 0);
    }

    #[test]
    #[should_panic(expected = "solved for goal 10 cannot play to 20")]
    fn test_optimal_strategy_rejects_other_goal() {
        let solver = PigSolver::new(SolverConfig::new(10, 1e-9)).unwrap();
        let optimal = OptimalStrategy::new(&solver);
        simulate(20, &optimal, &HoldAt(10), 10, 0);
    }

    #[test]
    fn test_optimal_strategy_reports_goal() {
        let solver = PigSolver::new(SolverConfig::new(10, 1e-9)).unwrap();
        assert_eq!(OptimalStrategy::new(&solver).goal(), Some(10));
        assert_eq!(HoldAt(20).goal(), None);
    }

    #[test]
    fn test_optimal_self_play_matches_solved_value() {
        let solver = PigSolver::new(SolverConfig::new(30, 1e-9)).unwrap();
        let optimal = OptimalStrategy::new(&solver);
        let result = simulate(30, &optimal, &optimal, 20_000, 1);

        // Standard error is about 0.0035.
        let expected = solver.first_player_win_prob();
        assert!(
            (result.first_win_rate() - expected).abs() < 0.03,
            "simulated {} vs solved {}",
            result.first_win_rate(),
            expected
        );
    }

    #[test]
    fn test_optimal_first_player_beats_hold_at_twenty() {
        let solver = PigSolver::new(SolverConfig::new(30, 1e-9)).unwrap();
        let optimal = OptimalStrategy::new(&solver);

        // Optimal moving first against hold-at-20 must do at least as well
        // as optimal against optimal, which already exceeds one half.
        let result = simulate(30, &optimal, &HoldAt(20), 20_000, 3);
        assert!(result.first_win_rate() > 0.5);
    }
}
