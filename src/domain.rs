use bit_set::BitSet;

use crate::structure::{SlotId, Structure};
use crate::word_list::{Vocabulary, Word, WordId};

/// The current candidate words for every slot, as bit sets over [`WordId`].
///
/// Domains only ever shrink: first through [`DomainStore::enforce_node_consistency`], then through
/// arc consistency. Search reads them but never changes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<BitSet>,
}

impl DomainStore {
    /// Start every slot off with the full vocabulary.
    #[must_use]
    pub fn new(structure: &Structure, vocabulary: &Vocabulary) -> DomainStore {
        let full: BitSet = (0..vocabulary.len()).collect();

        DomainStore {
            domains: structure.variables().map(|_| full.clone()).collect(),
        }
    }

    /// Remove every word whose length differs from its slot's length. Returns the number of
    /// removals.
    pub fn enforce_node_consistency(
        &mut self,
        structure: &Structure,
        vocabulary: &Vocabulary,
    ) -> usize {
        let mut removed = 0;

        for (slot_id, slot) in structure.slots().iter().enumerate() {
            removed += self.retain(slot_id, vocabulary, |word| word.len() == slot.length);
        }

        log::debug!("node consistency removed {removed} candidates");
        removed
    }

    #[must_use]
    pub fn domain(&self, slot_id: SlotId) -> &BitSet {
        &self.domains[slot_id]
    }

    /// How many candidates `slot_id` has left.
    #[must_use]
    pub fn len(&self, slot_id: SlotId) -> usize {
        self.domains[slot_id].len()
    }

    #[must_use]
    pub fn contains(&self, slot_id: SlotId, word_id: WordId) -> bool {
        self.domains[slot_id].contains(word_id)
    }

    /// Iterate over the candidates for `slot_id` in ascending id order.
    pub fn iter(&self, slot_id: SlotId) -> impl Iterator<Item = WordId> + '_ {
        self.domains[slot_id].iter()
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// The first slot whose domain is empty, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<SlotId> {
        self.domains.iter().position(BitSet::is_empty)
    }

    /// Keep only the candidates for `slot_id` that satisfy `keep`. Returns the number removed.
    pub(crate) fn retain<F>(&mut self, slot_id: SlotId, vocabulary: &Vocabulary, keep: F) -> usize
    where
        F: Fn(&Word) -> bool,
    {
        let doomed: Vec<WordId> = self.domains[slot_id]
            .iter()
            .filter(|&word_id| !keep(vocabulary.word(word_id)))
            .collect();

        for &word_id in &doomed {
            self.domains[slot_id].remove(word_id);
        }

        doomed.len()
    }
}
