use crate::backtracking_search::Assignment;
use crate::structure::Structure;
use crate::word_list::{glyph_char, Vocabulary};

/// Character drawn for blocked cells by [`render_text`].
pub const BLOCK: char = '█';

/// Lay out the letters of `assignment` on the grid. Cells that are blocked or not covered by any
/// assigned slot are `None`. Works for partial assignments too.
#[must_use]
pub fn letter_grid(
    structure: &Structure,
    vocabulary: &Vocabulary,
    assignment: &Assignment,
) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; structure.width()]; structure.height()];

    for (slot_id, word_id) in assignment.iter() {
        let word = vocabulary.word(word_id);

        for ((row, col), &glyph) in structure.slot(slot_id).cells().zip(&word.glyphs) {
            letters[row][col] = Some(glyph_char(glyph));
        }
    }

    letters
}

/// Turn the given structure and assignment into a rendered string, one line per row.
#[must_use]
pub fn render_text(structure: &Structure, vocabulary: &Vocabulary, assignment: &Assignment) -> String {
    let letters = letter_grid(structure, vocabulary, assignment);

    letters
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    if structure.is_fillable((row, col)) {
                        letter.unwrap_or(' ')
                    } else {
                        BLOCK
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use crate::Filler;

    #[test]
    fn test_render_sample_fill() {
        let (structure, vocabulary) = testing::sample();
        let result = Filler::new(&structure, &vocabulary).solve().unwrap();

        assert_eq!(
            render_text(&structure, &vocabulary, &result.assignment),
            "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE"
        );
    }

    #[test]
    fn test_partial_assignment_leaves_gaps() {
        let structure = testing::structure(&["___", "#_#"]);
        let vocabulary = testing::vocabulary(&["CAT"]);
        let mut assignment = Assignment::new(structure.slot_count());
        assignment.assign(0, 0);

        let letters = letter_grid(&structure, &vocabulary, &assignment);

        assert_eq!(
            letters,
            vec![vec![Some('C'), Some('A'), Some('T')], vec![None, None, None]]
        );
        assert_eq!(render_text(&structure, &vocabulary, &assignment), "CAT\n█ █");
    }
}
