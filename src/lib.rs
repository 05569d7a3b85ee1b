//! # Pig Solver
//!
//! Computes the optimal policy for the two-player dice game Pig by value
//! iteration, giving for every game state the probability of winning under
//! optimal play and whether to roll or hold.
//!
//! ## Features
//!
//! - **Value Iteration**: In-place sweeps over every `(score, opponent, turn total)` state
//! - **Hold Thresholds**: Turn total at which to stop rolling for each score pair
//! - **Exports**: Comma-separated threshold grid, console summaries, JSON solution
//! - **Simulation**: Seeded Monte Carlo play-out of the solved policy against heuristics
//!
//! ## Quick Start
//!
//! ```
//! use pig_solver::pig::{PigSolver, SolverConfig};
//!
//! let solver = PigSolver::new(SolverConfig::new(20, 1e-9)).unwrap();
//! let p = solver.first_player_win_prob();
//! assert!(p > 0.5 && p < 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`pig`]: Value-iteration engine and solved tables
//! - [`report`]: Read-only output adapters
//! - [`simulate`]: Policy play-out
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        PigSolver                                │
//! │  - Boundary-aware win probability   - In-place sweeps           │
//! │  - Convergence test                 - Hold-threshold extraction │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ read-only
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌───────────┐         ┌────────────┐
//!    │   CSV   │         │  Summary  │         │ Simulation │
//!    │ export  │         │  / JSON   │         │            │
//!    └─────────┘         └───────────┘         └────────────┘
//! ```

#![warn(missing_docs)]

/// Value-iteration engine.
///
/// Owns the state tables and the convergence loop.
pub mod pig;

/// Output adapters for solved games.
pub mod report;

/// Monte Carlo play-out of strategies.
pub mod simulate;

// Re-export commonly used types at crate root for convenience
pub use pig::{Action, PigSolver, SolveError, SolveStats, SolverConfig};
