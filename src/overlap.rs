use std::collections::HashMap;

use smallvec::SmallVec;

use crate::structure::{Cell, SlotId, Structure};
use crate::MAX_SLOT_LENGTH;

/// Where two crossing slots meet: the offset of the shared cell within the first slot and within
/// the second slot.
pub type Overlap = (usize, usize);

/// Precomputed crossings between every pair of slots in a structure. Built once and never
/// mutated.
#[derive(Debug, Clone)]
pub struct OverlapIndex {
    /// Indexed by `[a][b]`; `None` when the slots don't cross or `a == b`.
    overlaps: Vec<Vec<Option<Overlap>>>,

    /// For each slot, every other slot that crosses it, in ascending id order.
    neighbors: Vec<SmallVec<[SlotId; MAX_SLOT_LENGTH]>>,
}

impl OverlapIndex {
    #[must_use]
    pub fn new(structure: &Structure) -> OverlapIndex {
        let slot_count = structure.slot_count();

        // (slot id, offset within slot) for every slot covering each cell.
        let mut entries_by_cell: HashMap<Cell, SmallVec<[(SlotId, usize); 2]>> = HashMap::new();
        for (slot_id, slot) in structure.slots().iter().enumerate() {
            for (offset, cell) in slot.cells().enumerate() {
                entries_by_cell.entry(cell).or_default().push((slot_id, offset));
            }
        }

        let mut overlaps = vec![vec![None; slot_count]; slot_count];
        for entries in entries_by_cell.values() {
            for &(a, offset_a) in entries {
                for &(b, offset_b) in entries {
                    if a != b {
                        overlaps[a][b] = Some((offset_a, offset_b));
                    }
                }
            }
        }

        let neighbors = overlaps
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(other, overlap)| overlap.map(|_| other))
                    .collect()
            })
            .collect();

        OverlapIndex {
            overlaps,
            neighbors,
        }
    }

    /// The shared cell between `a` and `b`, as `(offset in a, offset in b)`.
    #[must_use]
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        self.overlaps[a][b]
    }

    /// Like [`OverlapIndex::overlap`], for callers that only ever ask about crossing pairs.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` don't cross.
    #[must_use]
    pub fn require(&self, a: SlotId, b: SlotId) -> Overlap {
        self.overlaps[a][b]
            .unwrap_or_else(|| panic!("slots {a} and {b} have no overlap"))
    }

    /// Every other slot crossing `slot_id`.
    #[must_use]
    pub fn neighbors(&self, slot_id: SlotId) -> &[SlotId] {
        &self.neighbors[slot_id]
    }

    #[must_use]
    pub fn degree(&self, slot_id: SlotId) -> usize {
        self.neighbors[slot_id].len()
    }

    /// Every ordered pair `(x, y)` of distinct crossing slots.
    pub fn arcs(&self) -> impl Iterator<Item = (SlotId, SlotId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, neighbors)| neighbors.iter().map(move |&y| (x, y)))
    }
}
