//! Plain-text formats for grids and word lists.
//!
//! A structure file has one line per grid row; `_` marks a fillable cell and any other character
//! a blocked one. Rows shorter than the widest row are padded with blocked cells. A word file has
//! one word per line.

use crate::error::ParseError;
use crate::structure::Structure;
use crate::word_list::Vocabulary;

/// Marks a fillable cell in a structure file.
pub const FILLABLE: char = '_';

/// Parse a grid from its text form.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] if the text has no rows.
pub fn parse_structure(text: &str) -> Result<Structure, ParseError> {
    let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    let fillable: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<bool> = row.chars().map(|c| c == FILLABLE).collect();
            cells.resize(width, false);
            cells
        })
        .collect();

    Ok(Structure::new(width, rows.len(), fillable)?)
}

/// Parse a word list, one word per line. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`ParseError::Vocabulary`] if any word contains something other than a letter.
pub fn parse_words(text: &str) -> Result<Vocabulary, ParseError> {
    let words = text.lines().map(str::trim).filter(|line| !line.is_empty());

    Ok(Vocabulary::new(words)?)
}
