//! Console summaries of a solved game.

use std::io::Write;
use std::ops::Range;

use crate::pig::PigSolver;

/// Headline numbers for the opening position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headline {
    /// Probability the first player wins.
    pub first_player_win: f64,
    /// Lowest turn total at which the first player should hold.
    pub first_hold: usize,
    /// Probability the second player wins.
    pub second_player_win: f64,
}

impl Headline {
    /// Compute the headline numbers from a solved game.
    pub fn from_solver(solver: &PigSolver) -> Self {
        let first_player_win = solver.first_player_win_prob();
        Self {
            first_player_win,
            first_hold: solver.hold_threshold(0, 0),
            second_player_win: 1.0 - first_player_win,
        }
    }

    /// Write the headline as plain text.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "First player win probability:  {:.6}", self.first_player_win)?;
        writeln!(writer, "Lowest turn total to hold at:  {}", self.first_hold)?;
        writeln!(writer, "Second player win probability: {:.6}", self.second_player_win)
    }
}

/// Write every hold threshold, space separated, one row per player score.
pub fn write_hold_values<W: Write>(solver: &PigSolver, writer: &mut W) -> std::io::Result<()> {
    let goal = solver.goal();
    for i in 0..goal {
        let row: Vec<String> = (0..goal)
            .map(|j| solver.hold_threshold(i, j).to_string())
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Default window for [`write_policy_window`]: the last ten scores.
pub fn endgame_window(goal: usize) -> Range<usize> {
    goal.saturating_sub(10)..goal
}

/// Write `(player, opponent, threshold)` rows for both scores in `window`.
///
/// The window is clipped to `0..goal`.
pub fn write_policy_window<W: Write>(
    solver: &PigSolver,
    window: Range<usize>,
    writer: &mut W,
) -> std::io::Result<()> {
    let window = window.start.min(solver.goal())..window.end.min(solver.goal());
    writeln!(writer, "Player\tOpponent\tHoldThreshold")?;
    for i in window.clone() {
        for j in window.clone() {
            writeln!(writer, "{}\t{}\t{}", i, j, solver.hold_threshold(i, j))?;
        }
    }
    Ok(())
}

/// Write the headline followed by the endgame policy window.
pub fn write_summary<W: Write>(solver: &PigSolver, writer: &mut W) -> std::io::Result<()> {
    Headline::from_solver(solver).write_to(writer)?;
    writeln!(writer)?;
    write_policy_window(solver, endgame_window(solver.goal()), writer)
}

/// Print the summary to stdout.
pub fn print_summary(solver: &PigSolver) {
    if let Err(e) = write_summary(solver, &mut std::io::stdout().lock()) {
        eprintln!("Error printing summary: {}", e);
    }
}
