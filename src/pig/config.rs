//! Configuration options for the Pig solver.
//!
//! This module provides the solver configuration, its validation errors,
//! and the statistics recorded while the value iteration runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default target score.
pub const DEFAULT_GOAL: usize = 100;

/// Default convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default safety bound on the number of sweeps.
pub const DEFAULT_MAX_SWEEPS: u64 = 10_000;

/// Configuration for the Pig solver.
///
/// # Example
/// ```
/// use pig_solver::pig::SolverConfig;
///
/// let config = SolverConfig::default().with_goal(20);
/// assert_eq!(config.goal, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Target score ending the game.
    pub goal: usize,

    /// Convergence threshold on the maximum per-sweep change of any value.
    ///
    /// Iteration stops once a full sweep changes no value by `epsilon` or more.
    pub epsilon: f64,

    /// Safety bound on the number of sweeps.
    ///
    /// Reaching it without meeting `epsilon` is reported as non-convergence.
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: u64,
}

fn default_max_sweeps() -> u64 {
    DEFAULT_MAX_SWEEPS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            epsilon: DEFAULT_EPSILON,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl SolverConfig {
    /// Create a configuration for the given goal and epsilon.
    pub fn new(goal: usize, epsilon: f64) -> Self {
        Self {
            goal,
            epsilon,
            ..Default::default()
        }
    }

    /// Builder method: set the target score.
    pub fn with_goal(mut self, goal: usize) -> Self {
        self.goal = goal;
        self
    }

    /// Builder method: set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set the sweep safety bound.
    pub fn with_max_sweeps(mut self, max_sweeps: u64) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Number of cells in each dense `goal × goal × goal` table.
    ///
    /// Returns `None` if the cube does not fit in `usize`.
    pub fn table_len(&self) -> Option<usize> {
        self.goal.checked_mul(self.goal)?.checked_mul(self.goal)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal == 0 {
            return Err(ConfigError::InvalidGoal(self.goal));
        }

        if self.table_len().is_none() {
            return Err(ConfigError::GoalTooLarge(self.goal));
        }

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }

        if self.max_sweeps == 0 {
            return Err(ConfigError::InvalidMaxSweeps);
        }

        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur when validating or loading a solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Goal must be positive.
    InvalidGoal(usize),
    /// Goal is too large for the dense tables to be addressed.
    GoalTooLarge(usize),
    /// Epsilon must be positive and finite.
    InvalidEpsilon(f64),
    /// The sweep bound must be at least one.
    InvalidMaxSweeps,
    /// Failed to read a configuration file.
    IoError(String),
    /// Failed to parse a configuration file.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidGoal(goal) => write!(f, "Goal {} must be positive", goal),
            ConfigError::GoalTooLarge(goal) => {
                write!(f, "Goal {} is too large for a dense state table", goal)
            }
            ConfigError::InvalidEpsilon(eps) => {
                write!(f, "Epsilon {} must be positive and finite", eps)
            }
            ConfigError::InvalidMaxSweeps => write!(f, "Max sweeps must be at least 1"),
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics tracked during value iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Total number of sweeps completed.
    pub sweeps: u64,

    /// Number of states updated by each sweep.
    pub states_per_sweep: usize,

    /// Largest value change seen in the last sweep.
    pub final_max_delta: f64,

    /// Total time spent iterating (in seconds).
    pub elapsed_seconds: f64,

    /// Sweeps per second.
    pub sweeps_per_second: f64,

    /// Maximum change recorded after every sweep.
    pub history: Vec<SweepPoint>,
}

/// The largest value change observed in one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Sweep number, starting at 1.
    pub sweep: u64,
    /// Maximum absolute change of any state during the sweep.
    pub max_delta: f64,
}

impl SolveStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update sweeps per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.sweeps_per_second = self.sweeps as f64 / self.elapsed_seconds;
        }
    }

    /// Record the outcome of one sweep.
    pub fn record_sweep(&mut self, sweep: u64, max_delta: f64) {
        self.sweeps = sweep;
        self.final_max_delta = max_delta;
        self.history.push(SweepPoint { sweep, max_delta });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_standard_pig() {
        let config = SolverConfig::default();
        assert_eq!(config.goal, 100);
        assert_eq!(config.epsilon, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert_eq!(
            SolverConfig::new(0, 1e-9).validate(),
            Err(ConfigError::InvalidGoal(0))
        );
        assert_eq!(
            SolverConfig::new(10, 0.0).validate(),
            Err(ConfigError::InvalidEpsilon(0.0))
        );
        assert_eq!(
            SolverConfig::new(10, -1.0).validate(),
            Err(ConfigError::InvalidEpsilon(-1.0))
        );
        assert!(matches!(
            SolverConfig::new(10, f64::NAN).validate(),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert_eq!(
            SolverConfig::new(10, 1e-6).with_max_sweeps(0).validate(),
            Err(ConfigError::InvalidMaxSweeps)
        );
        assert_eq!(
            SolverConfig::new(usize::MAX, 1e-6).validate(),
            Err(ConfigError::GoalTooLarge(usize::MAX))
        );
    }

    #[test]
    fn test_from_json_str() {
        let config = SolverConfig::from_json_str(r#"{"goal": 50, "epsilon": 1e-6}"#).unwrap();
        assert_eq!(config.goal, 50);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.max_sweeps, DEFAULT_MAX_SWEEPS);

        let err = SolverConfig::from_json_str(r#"{"goal": 0, "epsilon": 1e-6}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidGoal(0));

        let err = SolverConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_stats_record_sweep() {
        let mut stats = SolveStats::new();
        stats.record_sweep(1, 0.5);
        stats.record_sweep(2, 0.25);
        stats.elapsed_seconds = 2.0;
        stats.update_rate();

        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.final_max_delta, 0.25);
        assert_eq!(stats.history.len(), 2);
        assert_eq!(stats.sweeps_per_second, 1.0);
    }
}
