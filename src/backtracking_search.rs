//! Grid filling by backtracking search over the arc-consistent domains.
//!
//! The search is depth-first with an explicit stack of choice points rather than recursion. At
//! each step it picks the unassigned slot with the fewest remaining candidates (ties go to the
//! slot crossing the most others, then to the lowest id), and tries that slot's candidates in
//! least-constraining-value order. Domains are never changed once the search starts; only the
//! assignment grows and shrinks.

use std::cmp::Reverse;

use bit_set::BitSet;
use instant::{Duration, Instant};

use crate::arc_consistency::{establish_arc_consistency, Arc, ArcConsistencyResult};
use crate::config::FillConfig;
use crate::domain::DomainStore;
use crate::error::FillFailure;
use crate::overlap::OverlapIndex;
use crate::render;
use crate::structure::{SlotId, Structure};
use crate::word_list::{Vocabulary, WordId};
use crate::ALPHABET_SIZE;

/// A partial mapping from slots to the words chosen for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    used_words: BitSet,
    assigned_count: usize,
}

impl Assignment {
    /// An empty assignment for a puzzle with `slot_count` slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Assignment {
        Assignment {
            words: vec![None; slot_count],
            used_words: BitSet::new(),
            assigned_count: 0,
        }
    }

    #[must_use]
    pub fn get(&self, slot_id: SlotId) -> Option<WordId> {
        self.words[slot_id]
    }

    #[must_use]
    pub fn is_assigned(&self, slot_id: SlotId) -> bool {
        self.words[slot_id].is_some()
    }

    /// Does every slot have a word?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned_count == self.words.len()
    }

    /// Number of slots with a word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned_count == 0
    }

    /// Iterate over `(slot, word)` pairs for every assigned slot.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(slot_id, word_id)| word_id.map(|word_id| (slot_id, word_id)))
    }

    pub(crate) fn assign(&mut self, slot_id: SlotId, word_id: WordId) {
        self.unassign(slot_id);
        self.words[slot_id] = Some(word_id);
        self.used_words.insert(word_id);
        self.assigned_count += 1;
    }

    pub(crate) fn unassign(&mut self, slot_id: SlotId) -> Option<WordId> {
        let word_id = self.words[slot_id].take()?;
        self.used_words.remove(word_id);
        self.assigned_count -= 1;
        Some(word_id)
    }

    /// Could `word_id` go in the (currently empty) `slot_id` without breaking consistency? The
    /// word must be unused and agree with every assigned crossing slot on the shared letter.
    #[must_use]
    pub fn can_assign(
        &self,
        slot_id: SlotId,
        word_id: WordId,
        overlaps: &OverlapIndex,
        vocabulary: &Vocabulary,
    ) -> bool {
        if self.used_words.contains(word_id) {
            return false;
        }

        let word = vocabulary.word(word_id);
        overlaps.neighbors(slot_id).iter().all(|&neighbor| match self.words[neighbor] {
            Some(neighbor_word_id) => {
                let (i, j) = overlaps.require(slot_id, neighbor);
                word.glyph(i) == vocabulary.word(neighbor_word_id).glyph(j)
            }
            None => true,
        })
    }

    /// Check the whole assignment from scratch: every word fits its slot's length, no word is
    /// used twice, and every pair of assigned crossing slots agrees on the shared letter.
    #[must_use]
    pub fn is_consistent(
        &self,
        structure: &Structure,
        overlaps: &OverlapIndex,
        vocabulary: &Vocabulary,
    ) -> bool {
        let mut seen = BitSet::new();

        self.iter().all(|(slot_id, word_id)| {
            let word = vocabulary.word(word_id);

            seen.insert(word_id)
                && word.len() == structure.slot(slot_id).length
                && overlaps.neighbors(slot_id).iter().all(|&neighbor| match self.words[neighbor] {
                    Some(neighbor_word_id) => {
                        let (i, j) = overlaps.require(slot_id, neighbor);
                        word.glyph(i) == vocabulary.word(neighbor_word_id).glyph(j)
                    }
                    None => true,
                })
        })
    }
}

/// A struct tracking statistics about the filling process.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub node_consistency_removals: u64,
    pub arc_revisions: u64,
    pub arc_removals: u64,
    pub states: u64,
    pub backtracks: u64,
    pub duration: Duration,
}

/// A struct representing the results of a fill operation.
#[derive(Debug, Clone)]
pub struct FillSuccess {
    pub statistics: Statistics,
    pub assignment: Assignment,
}

/// A slot being tried during search, with its candidates in the order they'll be tried.
#[derive(Debug)]
struct ChoicePoint {
    slot_id: SlotId,
    candidates: Vec<WordId>,
    next: usize,
}

/// Owns the mutable state of one fill attempt: the domains and the statistics. The structure
/// and vocabulary are borrowed and never changed.
#[derive(Debug)]
pub struct Filler<'a> {
    structure: &'a Structure,
    vocabulary: &'a Vocabulary,
    overlaps: OverlapIndex,
    domains: DomainStore,
    config: FillConfig,
    statistics: Statistics,
}

impl<'a> Filler<'a> {
    #[must_use]
    pub fn new(structure: &'a Structure, vocabulary: &'a Vocabulary) -> Filler<'a> {
        Filler::with_config(structure, vocabulary, FillConfig::default())
    }

    #[must_use]
    pub fn with_config(
        structure: &'a Structure,
        vocabulary: &'a Vocabulary,
        config: FillConfig,
    ) -> Filler<'a> {
        Filler {
            structure,
            vocabulary,
            overlaps: OverlapIndex::new(structure),
            domains: DomainStore::new(structure, vocabulary),
            config,
            statistics: Statistics::default(),
        }
    }

    #[must_use]
    pub fn overlaps(&self) -> &OverlapIndex {
        &self.overlaps
    }

    #[must_use]
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Drop every candidate whose length doesn't match its slot.
    pub fn enforce_node_consistency(&mut self) -> usize {
        let removed = self
            .domains
            .enforce_node_consistency(self.structure, self.vocabulary);
        self.statistics.node_consistency_removals += removed as u64;
        removed
    }

    /// Make `x` arc-consistent with `y`. Returns whether `x`'s domain changed.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` don't cross.
    pub fn revise(&mut self, x: SlotId, y: SlotId) -> bool {
        crate::arc_consistency::revise(&self.overlaps, self.vocabulary, &mut self.domains, x, y)
    }

    /// Run AC-3 from `arcs`, or from every arc in the puzzle (ordered per the config) if `arcs`
    /// is `None`.
    pub fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> ArcConsistencyResult {
        let result = establish_arc_consistency(
            &self.overlaps,
            self.vocabulary,
            &mut self.domains,
            arcs,
            self.config.arc_order,
        );

        let (revisions, removals) = match &result {
            Ok(success) => (success.revisions, success.removals),
            Err(failure) => (failure.revisions, failure.removals),
        };
        self.statistics.arc_revisions += revisions;
        self.statistics.arc_removals += removals;

        result
    }

    /// Choose the next slot to fill: fewest remaining candidates first, then most crossings, then
    /// lowest id. Returns `None` once every slot is assigned.
    #[must_use]
    pub fn select_unassigned_slot(&self, assignment: &Assignment) -> Option<SlotId> {
        self.structure
            .variables()
            .filter(|&slot_id| !assignment.is_assigned(slot_id))
            .min_by_key(|&slot_id| {
                (
                    self.domains.len(slot_id),
                    Reverse(self.overlaps.degree(slot_id)),
                    slot_id,
                )
            })
    }

    /// The candidates for `slot_id`, ordered by how many words each would rule out of the domains
    /// of the unassigned slots crossing it (fewest first, ties by ascending word id).
    ///
    /// Counts are taken against the full domains, not just the words still compatible with the
    /// current assignment.
    ///
    /// # Panics
    ///
    /// Panics if node consistency hasn't been enforced and a domain still holds a word too short
    /// to reach a crossing.
    #[must_use]
    pub fn order_domain_values(&self, slot_id: SlotId, assignment: &Assignment) -> Vec<WordId> {
        // For each unassigned neighbor: (offset in this slot, domain size, glyph counts at the
        // shared cell). A candidate rules out every neighbor word with a different glyph there.
        let crossings: Vec<(usize, usize, [usize; ALPHABET_SIZE])> = self
            .overlaps
            .neighbors(slot_id)
            .iter()
            .filter(|&&neighbor| !assignment.is_assigned(neighbor))
            .map(|&neighbor| {
                let (i, j) = self.overlaps.require(slot_id, neighbor);
                let mut glyph_counts = [0; ALPHABET_SIZE];
                for word_id in self.domains.iter(neighbor) {
                    glyph_counts[usize::from(self.vocabulary.word(word_id).glyph(j))] += 1;
                }
                (i, self.domains.len(neighbor), glyph_counts)
            })
            .collect();

        let mut candidates: Vec<(usize, WordId)> = self
            .domains
            .iter(slot_id)
            .map(|word_id| {
                let word = self.vocabulary.word(word_id);
                let ruled_out = crossings
                    .iter()
                    .map(|(i, size, glyph_counts)| size - glyph_counts[usize::from(word.glyph(*i))])
                    .sum();
                (ruled_out, word_id)
            })
            .collect();

        // Stable, and domains iterate in ascending id order.
        candidates.sort_by_key(|&(ruled_out, _)| ruled_out);
        candidates.into_iter().map(|(_, word_id)| word_id).collect()
    }

    /// Extend `assignment` to a complete, consistent assignment, trying every possibility before
    /// giving up.
    ///
    /// # Errors
    ///
    /// Returns [`FillFailure::Exhausted`] if no extension exists, or
    /// [`FillFailure::BudgetExhausted`] if the configured state budget runs out first.
    ///
    /// # Panics
    ///
    /// Panics if a domain still holds a word shorter than its slot, i.e. if node consistency
    /// hasn't been enforced.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> Result<Assignment, FillFailure> {
        let mut stack: Vec<ChoicePoint> = vec![];

        'slot_selection: loop {
            let Some(slot_id) = self.select_unassigned_slot(&assignment) else {
                return Ok(assignment);
            };

            self.statistics.states += 1;
            if let Some(max_states) = self.config.max_states {
                if self.statistics.states > max_states {
                    log::debug!("giving up after {max_states} states");
                    return Err(FillFailure::BudgetExhausted { states: max_states });
                }
            }

            let candidates = self.order_domain_values(slot_id, &assignment);
            log::trace!(
                "depth {}: slot {} ({}) with {} candidates",
                stack.len(),
                slot_id,
                self.structure.slot(slot_id),
                candidates.len()
            );
            stack.push(ChoicePoint {
                slot_id,
                candidates,
                next: 0,
            });

            // Advance the innermost choice point to its next consistent candidate, unwinding any
            // choice points that run out along the way.
            while let Some(point) = stack.last_mut() {
                assignment.unassign(point.slot_id);

                while let Some(&word_id) = point.candidates.get(point.next) {
                    point.next += 1;

                    if assignment.can_assign(point.slot_id, word_id, &self.overlaps, self.vocabulary) {
                        assignment.assign(point.slot_id, word_id);
                        continue 'slot_selection;
                    }
                }

                stack.pop();
                self.statistics.backtracks += 1;
            }

            return Err(FillFailure::Exhausted);
        }
    }

    /// Enforce node and arc consistency, then search for a fill.
    ///
    /// # Errors
    ///
    /// Returns a [`FillFailure`] describing the stage at which the puzzle proved unfillable.
    pub fn solve(&mut self) -> Result<FillSuccess, FillFailure> {
        let start = Instant::now();
        let result = self.solve_inner();
        self.statistics.duration = start.elapsed();

        match &result {
            Ok(_) => log::info!("found a fill: {:?}", self.statistics),
            Err(failure) => log::info!("no fill ({failure}): {:?}", self.statistics),
        }

        result.map(|assignment| FillSuccess {
            statistics: self.statistics.clone(),
            assignment,
        })
    }

    fn solve_inner(&mut self) -> Result<Assignment, FillFailure> {
        self.enforce_node_consistency();
        if let Some(slot) = self.domains.first_empty() {
            return Err(FillFailure::NoCandidates { slot });
        }

        self.ac3(None)
            .map_err(|failure| FillFailure::ArcInconsistent { slot: failure.slot_id })?;

        let assignment = self.backtrack(Assignment::new(self.structure.slot_count()))?;
        debug_assert!(assignment.is_complete());
        debug_assert!(assignment.is_consistent(self.structure, &self.overlaps, self.vocabulary));

        Ok(assignment)
    }

    /// The grid of letters for `assignment`.
    #[must_use]
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        render::letter_grid(self.structure, self.vocabulary, assignment)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::ArcOrder;
    use crate::testing;

    fn words_by_slot(vocabulary: &Vocabulary, assignment: &Assignment) -> Vec<String> {
        assignment
            .iter()
            .map(|(_, word_id)| vocabulary.word(word_id).string.clone())
            .collect()
    }

    #[test]
    fn test_fill_sample() {
        let (structure, vocabulary) = testing::sample();
        let mut filler = Filler::new(&structure, &vocabulary);

        let result = filler.solve().expect("Failed to find a fill");

        assert!(result.assignment.is_complete());
        assert_eq!(
            words_by_slot(&vocabulary, &result.assignment),
            vec!["SIX", "NINE", "SEVEN", "FIVE"]
        );
        assert!(result.statistics.states >= 4);

        let letters = filler.letter_grid(&result.assignment);
        assert_eq!(letters[0], vec![None, Some('S'), Some('I'), Some('X'), None]);
        assert_eq!(letters[2][1], Some('V'));
        assert_eq!(letters[2][2], None);
    }

    #[test]
    fn test_fill_sample_with_shuffled_arcs() {
        let (structure, vocabulary) = testing::sample();
        let config = FillConfig::new().with_arc_order(ArcOrder::Shuffled { seed: 50 });

        let result = Filler::with_config(&structure, &vocabulary, config).solve().unwrap();

        assert_eq!(
            words_by_slot(&vocabulary, &result.assignment),
            vec!["SIX", "NINE", "SEVEN", "FIVE"]
        );
    }

    #[test]
    fn test_single_slot() {
        let structure = testing::structure(&["___"]);
        let vocabulary = testing::vocabulary(&["cat", "dog"]);

        let result = Filler::new(&structure, &vocabulary).solve().unwrap();

        let words = words_by_slot(&vocabulary, &result.assignment);
        assert_eq!(words.len(), 1);
        assert!(words[0] == "CAT" || words[0] == "DOG");
    }

    #[test]
    fn test_crossing_slots_agree_on_shared_letter() {
        // Slot 0 is across on row 0, slot 1 is down through column 1, sharing cell (0, 1).
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["CAT", "ARC", "TEA"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        let result = filler.solve().unwrap();

        let across = vocabulary.word(result.assignment.get(0).unwrap());
        let down = vocabulary.word(result.assignment.get(1).unwrap());
        assert_eq!(filler.overlaps().overlap(0, 1), Some((1, 0)));
        assert_eq!(across.glyph(1), down.glyph(0));
        assert_eq!((across.string.as_str(), down.string.as_str()), ("CAT", "ARC"));
    }

    #[test]
    fn test_short_words_fail_before_search() {
        let (structure, _) = testing::sample();
        let vocabulary = testing::vocabulary(&["a", "be", "to"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        assert_eq!(filler.solve().unwrap_err(), FillFailure::NoCandidates { slot: 0 });
        assert_eq!(filler.statistics().states, 0);
        assert_eq!(filler.statistics().arc_revisions, 0);
    }

    #[test]
    fn test_missing_length_has_no_solution() {
        let (structure, vocabulary) = testing::sample();
        let vocabulary_without_fives = Vocabulary::new(
            vocabulary
                .iter()
                .map(|(_, word)| word.string.as_str())
                .filter(|word| word.len() != 5),
        )
        .unwrap();

        let result = Filler::new(&structure, &vocabulary_without_fives).solve();

        assert_eq!(result.unwrap_err(), FillFailure::NoCandidates { slot: 2 });
    }

    #[test]
    fn test_arc_inconsistent_puzzle() {
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["CAT", "DOG"]);

        let mut filler = Filler::new(&structure, &vocabulary);

        assert_eq!(filler.solve().unwrap_err(), FillFailure::ArcInconsistent { slot: 0 });
        assert_eq!(filler.statistics().arc_revisions, 1);
        assert_eq!(filler.statistics().arc_removals, 2);
        assert_eq!(filler.statistics().states, 0);
    }

    #[test]
    fn test_ac3_before_node_consistency() {
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["A", "CAT"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        // "A" can't reach the across slot's middle cell, but does supply the A that CAT needs.
        assert!(filler.ac3(None).is_ok());
        assert_eq!(filler.domains().iter(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(filler.domains().iter(1).collect::<Vec<_>>(), vec![0]);

        // The length check still runs first when solving.
        assert_eq!(filler.solve().unwrap_err(), FillFailure::NoCandidates { slot: 1 });
    }

    #[test]
    fn test_revise_drops_words_too_short_for_the_crossing() {
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["A", "CAT", "TAR"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        assert!(filler.revise(0, 1));
        assert_eq!(filler.domains().iter(0).collect::<Vec<_>>(), vec![1, 2]);
        assert!(!filler.revise(0, 1));
    }

    #[test]
    fn test_duplicate_words_are_rejected() {
        // Every slot is two letters long and "AA" satisfies every crossing, but it can only be
        // used once, so only search can discover the puzzle is unfillable.
        let structure = testing::structure(&["__", "__"]);
        let vocabulary = testing::vocabulary(&["AA"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        assert_eq!(filler.solve().unwrap_err(), FillFailure::Exhausted);
        assert!(filler.statistics().backtracks > 0);
    }

    #[test]
    fn test_search_backtracks_to_find_a_fill() {
        // AC-3 leaves every word in every slot, and the first few branches dead-end on duplicates.
        let structure = testing::structure(&["__", "__"]);
        let vocabulary = testing::vocabulary(&["AB", "BA", "AA", "BB", "BC", "CB"]);
        let mut filler = Filler::new(&structure, &vocabulary);

        let result = filler.solve().unwrap();

        assert!(result.assignment.is_complete());
        assert!(result
            .assignment
            .is_consistent(&structure, filler.overlaps(), &vocabulary));
        assert!(result.statistics.backtracks > 0);
    }

    #[test]
    fn test_state_budget() {
        let structure = testing::structure(&["__", "__"]);
        let vocabulary = testing::vocabulary(&["AA"]);
        let config = FillConfig::new().with_max_states(1);
        let mut filler = Filler::with_config(&structure, &vocabulary, config);

        assert_eq!(
            filler.solve().unwrap_err(),
            FillFailure::BudgetExhausted { states: 1 }
        );
    }

    /// Slot 0 is a four-letter across entry crossed by two-letter down slots 1 and 2.
    const COMB: [&str; 2] = ["____", "_#_#"];

    #[test]
    fn test_degree_breaks_domain_size_ties() {
        let structure = testing::structure(&COMB);
        let vocabulary = testing::vocabulary(&["ABCD", "EFGH", "AX", "CY"]);
        let mut filler = Filler::new(&structure, &vocabulary);
        filler.enforce_node_consistency();

        let mut assignment = Assignment::new(structure.slot_count());
        assert_eq!(filler.overlaps().degree(0), 2);
        assert_eq!(filler.select_unassigned_slot(&assignment), Some(0));

        // Slots 1 and 2 tie on both counts; the choice is stable.
        assignment.assign(0, 0);
        assert_eq!(filler.select_unassigned_slot(&assignment), Some(1));
        assert_eq!(filler.select_unassigned_slot(&assignment), Some(1));
    }

    #[test]
    fn test_fewest_remaining_values_comes_first() {
        let structure = testing::structure(&COMB);
        let vocabulary = testing::vocabulary(&["ABCD", "EFGH", "IJKL", "AX", "CY"]);
        let mut filler = Filler::new(&structure, &vocabulary);
        filler.enforce_node_consistency();

        let assignment = Assignment::new(structure.slot_count());
        assert_eq!(filler.select_unassigned_slot(&assignment), Some(1));
    }

    #[test]
    fn test_least_constraining_value_order() {
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["CAT", "COT", "ARC", "ART", "OAK"]);
        let mut filler = Filler::new(&structure, &vocabulary);
        filler.enforce_node_consistency();

        // Down words start with C, C, A, A, O. CAT and OAK clash with three of them, COT with
        // four, ARC and ART with all five.
        let mut assignment = Assignment::new(structure.slot_count());
        assert_eq!(filler.order_domain_values(0, &assignment), vec![0, 4, 1, 2, 3]);

        // Assigned neighbors don't count.
        assignment.assign(1, 2);
        assert_eq!(filler.order_domain_values(0, &assignment), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_assignment_consistency() {
        let structure = testing::structure(&["___", "#_#", "#_#"]);
        let vocabulary = testing::vocabulary(&["CAT", "ARC", "TEA"]);
        let filler = Filler::new(&structure, &vocabulary);
        let overlaps = filler.overlaps();

        let mut assignment = Assignment::new(2);
        assert!(assignment.is_empty());
        assert!(assignment.can_assign(0, 0, overlaps, &vocabulary));
        assignment.assign(0, 0);

        // Reusing CAT is a duplicate; TEA puts T where CAT has A.
        assert!(!assignment.can_assign(1, 0, overlaps, &vocabulary));
        assert!(!assignment.can_assign(1, 2, overlaps, &vocabulary));
        assert!(assignment.can_assign(1, 1, overlaps, &vocabulary));

        assignment.assign(1, 2);
        assert!(!assignment.is_consistent(&structure, overlaps, &vocabulary));

        assignment.assign(1, 1);
        assert!(assignment.is_consistent(&structure, overlaps, &vocabulary));
        assert!(assignment.is_complete());
        assert_eq!(assignment.len(), 2);

        assert_eq!(assignment.unassign(1), Some(1));
        assert!(!assignment.is_complete());
        assert_eq!(assignment.unassign(1), None);
    }

    /// Try every combination of words for a grid with four slots.
    fn has_any_fill(structure: &Structure, overlaps: &OverlapIndex, vocabulary: &Vocabulary) -> bool {
        let word_count = vocabulary.len();
        let mut assignment = Assignment::new(structure.slot_count());

        (0..word_count.pow(4)).any(|combination| {
            for slot_id in 0..4 {
                assignment.unassign(slot_id);
            }
            let mut rest = combination;
            for slot_id in 0..4 {
                let word_id = rest % word_count;
                rest /= word_count;
                if !assignment.can_assign(slot_id, word_id, overlaps, vocabulary) {
                    return false;
                }
                assignment.assign(slot_id, word_id);
            }
            assignment.is_consistent(structure, overlaps, vocabulary)
        })
    }

    proptest! {
        #[test]
        fn test_fills_are_consistent_and_failures_are_genuine(
            words in prop::collection::vec("[A-C]{3}", 1..16),
        ) {
            let structure = testing::structure(&["___", "_#_", "___"]);
            let vocabulary = Vocabulary::new(&words).unwrap();
            let mut filler = Filler::new(&structure, &vocabulary);

            match filler.solve() {
                Ok(result) => {
                    prop_assert!(result.assignment.is_complete());
                    prop_assert!(result
                        .assignment
                        .is_consistent(&structure, filler.overlaps(), &vocabulary));
                }
                Err(_) => prop_assert!(!has_any_fill(&structure, filler.overlaps(), &vocabulary)),
            }
        }
    }
}
