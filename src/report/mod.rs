//! Output adapters for a solved game.
//!
//! These only read the solved tables: the comma-separated threshold export,
//! console summaries, and a JSON solution document.

pub mod csv;
pub mod output;
pub mod summary;

pub use csv::{
    read_thresholds_csv, write_thresholds, write_thresholds_csv, ExportError, ThresholdGrid,
};
pub use output::SolutionOutput;
pub use summary::{
    endgame_window, print_summary, write_hold_values, write_policy_window, write_summary, Headline,
};
