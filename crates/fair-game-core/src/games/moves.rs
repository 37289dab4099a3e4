//! Validated move list and move indices.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Zero-based position of a move in its [`MoveList`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveIndex(usize);

impl MoveIndex {
    /// Create from a zero-based position
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position
    pub fn get(self) -> usize {
        self.0
    }

    /// One-based number shown in the menu
    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, odd-length list of distinct move names.
///
/// Each move beats the `len / 2` moves that follow it, wrapping around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<String>,
}

impl MoveList {
    /// Smallest playable list
    pub const MIN_MOVES: usize = 3;

    /// Validate and build the move list
    pub fn new<I, S>(moves: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < Self::MIN_MOVES {
            return Err(ConfigError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount(moves.len()));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if name.is_empty() {
                return Err(ConfigError::EmptyMoveName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a validated list
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All names in order
    pub fn names(&self) -> &[String] {
        &self.moves
    }

    /// Name of the move at `index`.
    ///
    /// Panics if `index` did not come from this list.
    pub fn name(&self, index: MoveIndex) -> &str {
        &self.moves[index.0]
    }

    /// Checked conversion from a zero-based position
    pub fn index(&self, position: usize) -> Option<MoveIndex> {
        (position < self.moves.len()).then_some(MoveIndex(position))
    }

    /// Iterate over (index, name) pairs
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveIndex(i), name.as_str()))
    }
}
