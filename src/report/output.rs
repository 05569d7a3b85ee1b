//! JSON solution document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::csv::ThresholdGrid;
use crate::pig::{PigSolver, SolveStats, SolverConfig};

/// Everything downstream tools need from a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionOutput {
    /// Configuration the game was solved with.
    pub config: SolverConfig,
    /// Statistics of the solve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SolveStats>,
    /// Probability that the first player wins.
    pub first_player_win: f64,
    /// Hold threshold for every score pair.
    pub thresholds: ThresholdGrid,
}

impl SolutionOutput {
    /// Build the document from a solved game.
    ///
    /// The per-sweep history is left out to keep the file small.
    pub fn from_solver(solver: &PigSolver) -> Self {
        let mut stats = solver.stats().clone();
        stats.history.clear();
        Self {
            config: solver.config().clone(),
            stats: Some(stats),
            first_player_win: solver.first_player_win_prob(),
            thresholds: ThresholdGrid::from_solver(solver),
        }
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
