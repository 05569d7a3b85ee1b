//! Comma-separated hold-threshold export.
//!
//! One line per player score `i` in `0..goal`; each line holds `goal`
//! thresholds for opponent scores `j = 0..goal`, separated by commas, with
//! no trailing delimiter and a `\n` after every row.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pig::PigSolver;

/// Hold thresholds for every `(i, j)` score pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdGrid {
    /// Target score; the grid is `goal × goal`.
    pub goal: usize,
    /// `rows[i][j]` is the hold threshold for player score `i` against `j`.
    pub rows: Vec<Vec<usize>>,
}

impl ThresholdGrid {
    /// Extract every threshold from a solved game.
    pub fn from_solver(solver: &PigSolver) -> Self {
        let goal = solver.goal();
        let rows = (0..goal)
            .map(|i| (0..goal).map(|j| solver.hold_threshold(i, j)).collect())
            .collect();
        Self { goal, rows }
    }

    /// Threshold for player score `i` against opponent score `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.rows.get(i)?.get(j).copied()
    }

    /// Write the grid in the comma-separated export format.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|k| k.to_string()).collect();
            writeln!(writer, "{}", line.join(","))?;
        }
        Ok(())
    }

    /// Parse a grid from the comma-separated export format.
    ///
    /// The number of rows determines the goal; every row must have exactly
    /// that many fields.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ExportError> {
        let mut rows = Vec::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line
                .split(',')
                .enumerate()
                .map(|(col, field)| {
                    field.trim().parse::<usize>().map_err(|_| ExportError::Parse {
                        line: line_idx + 1,
                        column: col + 1,
                        field: field.to_string(),
                    })
                })
                .collect::<Result<Vec<usize>, ExportError>>()?;
            rows.push(row);
        }

        let goal = rows.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != goal) {
            return Err(ExportError::Shape {
                line: idx + 1,
                expected: goal,
                actual: row.len(),
            });
        }

        Ok(Self { goal, rows })
    }
}

/// Write the thresholds of a solved game to `writer`.
pub fn write_thresholds<W: Write>(solver: &PigSolver, writer: &mut W) -> std::io::Result<()> {
    ThresholdGrid::from_solver(solver).write_to(writer)
}

/// Write the thresholds of a solved game to a file.
pub fn write_thresholds_csv<P: AsRef<Path>>(solver: &PigSolver, path: P) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_thresholds(solver, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a threshold grid from a file written by [`write_thresholds_csv`].
pub fn read_thresholds_csv<P: AsRef<Path>>(path: P) -> Result<ThresholdGrid, ExportError> {
    ThresholdGrid::parse(BufReader::new(File::open(path)?))
}

/// Errors from writing or reading the threshold export.
#[derive(Debug)]
pub enum ExportError {
    /// Underlying I/O failure.
    Io(std::io::Error),
    /// A field was not a non-negative integer.
    Parse {
        /// 1-based line number.
        line: usize,
        /// 1-based field number.
        column: usize,
        /// The offending text.
        field: String,
    },
    /// A row did not have one field per opponent score.
    Shape {
        /// 1-based line number.
        line: usize,
        /// Expected field count.
        expected: usize,
        /// Actual field count.
        actual: usize,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "IO error: {}", err),
            ExportError::Parse { line, column, field } => write!(
                f,
                "Line {} field {}: '{}' is not a threshold",
                line, column, field
            ),
            ExportError::Shape {
                line,
                expected,
                actual,
            } => write!(
                f,
                "Line {} has {} fields, expected {}",
                line, actual, expected
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            _ => None,
        }
    }
}
