//! Fill a crossword grid with words from a vocabulary by treating it as a constraint satisfaction
//! problem: every slot is a variable, its domain is the set of words that could go there, and
//! every crossing between two slots is a binary constraint requiring them to agree on the shared
//! letter.
//!
//! Filling happens in three stages, driven by [`Filler`]:
//!
//! 1. node consistency, which drops every word of the wrong length from each slot's domain;
//! 2. AC-3, which prunes words that have no compatible partner in some crossing slot;
//! 3. backtracking search, ordering slots by minimum remaining values (ties broken by degree)
//!    and words by least-constraining value.

pub mod arc_consistency;
pub mod backtracking_search;
pub mod config;
pub mod domain;
pub mod error;
pub mod overlap;
pub mod parse;
pub mod render;
pub mod structure;
pub mod word_list;

pub use crate::backtracking_search::{Assignment, FillSuccess, Filler, Statistics};
pub use crate::config::{ArcOrder, FillConfig};
pub use crate::error::{ConfigError, FillFailure, ParseError, StructureError, VocabularyError};
pub use crate::structure::{Cell, Direction, Slot, SlotId, Structure};
pub use crate::word_list::{Vocabulary, WordId};

/// The expected maximum length for a single slot.
pub const MAX_SLOT_LENGTH: usize = 21;

/// Number of distinct letters a cell can hold.
pub const ALPHABET_SIZE: usize = 26;
