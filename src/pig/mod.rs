//! Value-iteration engine for the dice game Pig.
//!
//! # Rules
//!
//! Two players race to a target score. On each turn the player to move rolls
//! one six-sided die as often as they like: a 1 ends the turn and forfeits the
//! turn total, any other face adds to it. Holding banks the turn total and
//! passes the die.
//!
//! # Model
//!
//! A state `(i, j, k)` is seen from the player about to act: `i` is their
//! banked score, `j` the opponent's, `k` the turn total. Its value is the
//! probability that this player eventually wins under optimal play:
//!
//! ```text
//! P_roll = 1/6 * (1 - P(j, i, 0)) + sum_{d=2..6} 1/6 * P(i, j, k + d)
//! P_hold = 1 - P(j, i + k, 0)
//! P(i, j, k) = max(P_roll, P_hold)
//! ```
//!
//! with `P = 1` once `i + k` reaches the goal and `P = 0` once `j` has.
//! The recurrence refers to itself through the opponent's states, so it is
//! solved by repeated sweeps until no value moves by more than `epsilon`.
//!
//! # Example
//!
//! ```
//! use pig_solver::pig::{PigSolver, SolverConfig};
//!
//! let solver = PigSolver::new(SolverConfig::new(10, 1e-9)).unwrap();
//! println!("first player wins with p = {:.4}", solver.first_player_win_prob());
//! println!("hold at {} from the start", solver.hold_threshold(0, 0));
//! ```
//!
//! # References
//!
//! - Neller, T., Presser, C. "Optimal Play of the Dice Game Pig" (2004)

pub mod action;
pub mod config;
pub mod solver;
pub mod table;

pub use action::Action;
pub use config::{
    ConfigError, SolveStats, SolverConfig, SweepPoint, DEFAULT_EPSILON, DEFAULT_GOAL,
    DEFAULT_MAX_SWEEPS,
};
pub use solver::{solve_many, PigSolver, SolveError, SweepProgress};
pub use table::{StateTable, TableExport};
