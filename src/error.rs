use thiserror::Error;

use crate::structure::SlotId;

/// A grid matrix that can't describe a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("grid must have a non-zero width and height (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid declares {expected} rows but {actual} were given")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A vocabulary entry that can't be placed in a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("vocabulary entry {index} is empty")]
    EmptyWord { index: usize },

    #[error("word {word:?} contains {found:?}, which is not a letter from A to Z")]
    InvalidCharacter { word: String, found: char },
}

/// Failure to read a grid or word list from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("structure file contains no rows")]
    Empty,

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Failure to load a [`FillConfig`](crate::FillConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The ways a fill attempt can come up empty. None of these are bugs: an unsatisfiable puzzle is
/// an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FillFailure {
    #[error("no word in the vocabulary fits slot {slot}")]
    NoCandidates { slot: SlotId },

    #[error("arc consistency left slot {slot} without candidates")]
    ArcInconsistent { slot: SlotId },

    #[error("search exhausted every candidate without finding a fill")]
    Exhausted,

    #[error("search gave up after visiting {states} states")]
    BudgetExhausted { states: u64 },
}
