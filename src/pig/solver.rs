//! Value-iteration solver for two-player Pig.
//!
//! The solver fills one value table for "the player about to act" and reuses
//! it for both players by swapping the banked scores. Sweeps run over every
//! stored state in a fixed `i`, `j`, `k` order and overwrite values in place,
//! so later updates within a sweep already see earlier ones (Gauss-Seidel).
//! Results are therefore tied to that order.

use std::time::Instant;

use rayon::prelude::*;

use crate::pig::action::Action;
use crate::pig::config::{ConfigError, SolveStats, SolverConfig};
use crate::pig::table::{StateTable, TableExport};

/// Faces of the die that add to the turn total.
const SCORING_FACES: std::ops::RangeInclusive<usize> = 2..=6;

/// Probability of any single face.
const FACE_PROB: f64 = 1.0 / 6.0;

/// A solved game of Pig.
///
/// Construction runs value iteration to convergence; afterwards the tables
/// are read-only.
///
/// # Example
/// ```
/// use pig_solver::pig::{Action, PigSolver, SolverConfig};
///
/// let solver = PigSolver::new(SolverConfig::new(2, 1e-9)).unwrap();
/// assert!(solver.first_player_win_prob() > 0.5);
/// assert_eq!(solver.action(0, 0, 0), Some(Action::Roll));
/// ```
#[derive(Debug, Clone)]
pub struct PigSolver {
    /// Configuration the tables were solved with.
    config: SolverConfig,

    /// Solved value and policy tables.
    table: StateTable,

    /// Statistics tracking.
    stats: SolveStats,
}

impl PigSolver {
    /// Validate `config` and solve the game.
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        Self::with_callback(config, |_| {})
    }

    /// Solve the game, calling `callback` after every sweep.
    pub fn with_callback<F>(config: SolverConfig, mut callback: F) -> Result<Self, SolveError>
    where
        F: FnMut(&SweepProgress),
    {
        config.validate()?;
        let len = config
            .table_len()
            .ok_or(ConfigError::GoalTooLarge(config.goal))?;

        let mut solver = Self {
            table: StateTable::new(config.goal, len),
            stats: SolveStats::new(),
            config,
        };
        solver.stats.states_per_sweep = solver.table.num_states();
        solver.value_iterate(&mut callback)?;
        Ok(solver)
    }

    fn value_iterate<F>(&mut self, callback: &mut F) -> Result<(), SolveError>
    where
        F: FnMut(&SweepProgress),
    {
        let start_time = Instant::now();
        log::info!(
            "solving pig: goal {} epsilon {:e} ({} states)",
            self.config.goal,
            self.config.epsilon,
            self.stats.states_per_sweep
        );

        let mut sweep = 0u64;
        loop {
            sweep += 1;
            let max_delta = self.sweep();

            self.stats.record_sweep(sweep, max_delta);
            self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
            self.stats.update_rate();
            log::debug!("sweep {:>6} max delta {:e}", sweep, max_delta);

            callback(&SweepProgress {
                sweep,
                max_delta,
                epsilon: self.config.epsilon,
                elapsed_seconds: self.stats.elapsed_seconds,
            });

            if max_delta < self.config.epsilon {
                log::info!(
                    "converged after {} sweeps in {:.2}s, first player wins with p = {:.6}",
                    sweep,
                    self.stats.elapsed_seconds,
                    self.first_player_win_prob()
                );
                return Ok(());
            }

            if sweep >= self.config.max_sweeps {
                log::warn!(
                    "no convergence after {} sweeps (max delta {:e}, epsilon {:e})",
                    sweep,
                    max_delta,
                    self.config.epsilon
                );
                return Err(SolveError::NotConverged {
                    sweeps: sweep,
                    max_delta,
                });
            }
        }
    }

    /// One in-place pass over every stored state.
    ///
    /// Returns the largest absolute value change.
    fn sweep(&mut self) -> f64 {
        let goal = self.config.goal;
        let mut max_delta = 0.0f64;

        for i in 0..goal {
            for j in 0..goal {
                for k in 0..goal - i {
                    let (p_roll, p_hold) = self.action_values(i, j, k);
                    let action = Action::choose(p_roll, p_hold);
                    let change = self.table.update(i, j, k, p_roll.max(p_hold), action);
                    max_delta = max_delta.max(change);
                }
            }
        }

        max_delta
    }

    /// Expected win probability of rolling and of holding at `(i, j, k)`.
    ///
    /// Reads only through [`PigSolver::win_prob`].
    pub fn action_values(&self, i: usize, j: usize, k: usize) -> (f64, f64) {
        // Rolling a 1 busts: the opponent moves next from (j, i).
        let mut p_roll = FACE_PROB * (1.0 - self.win_prob(j, i, 0));
        for face in SCORING_FACES {
            p_roll += FACE_PROB * self.win_prob(i, j, k + face);
        }

        let p_hold = 1.0 - self.win_prob(j, i + k, 0);

        (p_roll, p_hold)
    }

    /// Probability that the player to move wins from `(i, j, k)`.
    ///
    /// `i` is the mover's banked score, `j` the opponent's, `k` the turn total.
    /// Returns `1.0` when `i + k >= goal`, `0.0` when `j >= goal`, and the
    /// solved value otherwise.
    pub fn win_prob(&self, i: usize, j: usize, k: usize) -> f64 {
        self.table.win_prob(i, j, k)
    }

    /// Optimal action at a stored state, or `None` if `(i, j, k)` is terminal
    /// or out of range.
    pub fn action(&self, i: usize, j: usize, k: usize) -> Option<Action> {
        self.table.action(i, j, k)
    }

    /// Probability that the first player wins from the empty-score start.
    pub fn first_player_win_prob(&self) -> f64 {
        self.table.win_prob(0, 0, 0)
    }

    /// Lowest turn total at which the player with `i` points facing `j`
    /// should hold.
    ///
    /// Equals `goal - i` if rolling is optimal at every turn total.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not below the goal.
    pub fn hold_threshold(&self, i: usize, j: usize) -> usize {
        match self.table.hold_threshold(i, j) {
            Some(threshold) => threshold,
            None => panic!(
                "scores ({}, {}) out of range for goal {}",
                i, j, self.config.goal
            ),
        }
    }

    /// Target score.
    pub fn goal(&self) -> usize {
        self.config.goal
    }

    /// Convergence threshold the solve used.
    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Get statistics of the solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Get reference to the solved tables.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Export the solved tables for serialization.
    pub fn export_table(&self) -> TableExport {
        self.table.export()
    }
}

/// Solve several independent configurations in parallel.
///
/// Each configuration gets its own solver; results keep the input order.
pub fn solve_many(configs: &[SolverConfig]) -> Vec<Result<PigSolver, SolveError>> {
    configs
        .par_iter()
        .map(|config| PigSolver::new(config.clone()))
        .collect()
}

/// Progress reported after each sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepProgress {
    /// Sweeps completed so far.
    pub sweep: u64,
    /// Largest value change in the sweep just completed.
    pub max_delta: f64,
    /// Target threshold.
    pub epsilon: f64,
    /// Elapsed time in seconds.
    pub elapsed_seconds: f64,
}

/// Errors that can occur while solving.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The configuration was rejected before any sweep ran.
    Config(ConfigError),
    /// The sweep bound was reached without meeting epsilon.
    NotConverged {
        /// Sweeps performed.
        sweeps: u64,
        /// Largest change in the final sweep.
        max_delta: f64,
    },
}

impl From<ConfigError> for SolveError {
    fn from(err: ConfigError) -> Self {
        SolveError::Config(err)
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Config(err) => write!(f, "Invalid configuration: {}", err),
            SolveError::NotConverged { sweeps, max_delta } => write!(
                f,
                "Value iteration did not converge after {} sweeps (max delta {:e})",
                sweeps, max_delta
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Config(err) => Some(err),
            SolveError::NotConverged { .. } => None,
        }
    }
}
