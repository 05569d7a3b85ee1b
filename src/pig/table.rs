//! Dense storage for win probabilities and the roll/hold policy.
//!
//! Both tables are flat `goal × goal × goal` buffers addressed by
//! `(i, j, k)`. Cells with `i + k >= goal` are allocated but never written;
//! they are terminal states and only reachable through
//! [`StateTable::win_prob`], which answers them from the game's boundary
//! conditions instead of the buffer.

use serde::{Deserialize, Serialize};

use crate::pig::action::Action;

/// Value and policy tables for one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable {
    goal: usize,
    /// Win probability of the player to move: (i, j, k) -> p
    values: Vec<f64>,
    /// `true` where rolling is optimal: (i, j, k) -> roll?
    roll: Vec<bool>,
}

impl StateTable {
    /// Allocate zeroed tables for the given goal.
    ///
    /// `len` must equal `goal³`; callers compute it with overflow checks.
    pub(crate) fn new(goal: usize, len: usize) -> Self {
        debug_assert_eq!(Some(len), goal.checked_pow(3));
        Self {
            goal,
            values: vec![0.0; len],
            roll: vec![false; len],
        }
    }

    /// Target score the tables were sized for.
    pub fn goal(&self) -> usize {
        self.goal
    }

    #[inline]
    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.goal && j < self.goal && i + k < self.goal);
        (i * self.goal + j) * self.goal + k
    }

    /// Whether `(i, j, k)` is a stored, non-terminal state.
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.goal && j < self.goal && i + k < self.goal
    }

    /// Boundary-aware win probability for the player to move.
    ///
    /// Returns `1.0` once `i + k` reaches the goal, `0.0` once the opponent's
    /// score `j` has, and the stored value otherwise.
    #[inline]
    pub fn win_prob(&self, i: usize, j: usize, k: usize) -> f64 {
        if i + k >= self.goal {
            1.0
        } else if j >= self.goal {
            0.0
        } else {
            self.values[self.index(i, j, k)]
        }
    }

    /// Stored action at a non-terminal state.
    pub fn action(&self, i: usize, j: usize, k: usize) -> Option<Action> {
        if !self.contains(i, j, k) {
            return None;
        }
        Some(if self.roll[self.index(i, j, k)] {
            Action::Roll
        } else {
            Action::Hold
        })
    }

    /// Overwrite one state and return the absolute change of its value.
    #[inline]
    pub(crate) fn update(&mut self, i: usize, j: usize, k: usize, value: f64, action: Action) -> f64 {
        let idx = self.index(i, j, k);
        let change = (value - self.values[idx]).abs();
        self.values[idx] = value;
        self.roll[idx] = action.is_roll();
        change
    }

    /// Smallest turn total at which holding is optimal for `(i, j)`.
    ///
    /// Clamped to `goal - i` when rolling is optimal for every stored `k`.
    /// Returns `None` unless both scores are below the goal.
    pub fn hold_threshold(&self, i: usize, j: usize) -> Option<usize> {
        if !self.contains(i, j, 0) {
            return None;
        }
        let limit = self.goal - i;
        let base = self.index(i, j, 0);
        let threshold = self.roll[base..base + limit]
            .iter()
            .position(|&roll| !roll)
            .unwrap_or(limit);
        Some(threshold)
    }

    /// Number of stored, non-terminal states.
    pub fn num_states(&self) -> usize {
        // sum over i of goal * (goal - i); never exceeds goal³
        self.goal * (self.goal * (self.goal + 1) / 2)
    }

    /// Export the stored states as a serializable snapshot.
    pub fn export(&self) -> TableExport {
        let mut values = Vec::with_capacity(self.num_states());
        let mut roll = Vec::with_capacity(self.num_states());
        for i in 0..self.goal {
            for j in 0..self.goal {
                let base = self.index(i, j, 0);
                values.extend_from_slice(&self.values[base..base + self.goal - i]);
                roll.extend_from_slice(&self.roll[base..base + self.goal - i]);
            }
        }
        TableExport {
            goal: self.goal,
            values,
            roll,
        }
    }
}

/// Serializable snapshot of the stored states, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableExport {
    /// Target score.
    pub goal: usize,
    /// Win probabilities for every `(i, j, k)` with `i + k < goal`.
    pub values: Vec<f64>,
    /// Roll flags in the same order as `values`.
    pub roll: Vec<bool>,
}
