//! AC-3: make every slot's domain arc-consistent with each slot crossing it.

use std::collections::VecDeque;

use bit_set::BitSet;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::ArcOrder;
use crate::domain::DomainStore;
use crate::overlap::OverlapIndex;
use crate::structure::SlotId;
use crate::word_list::Vocabulary;

/// A directed constraint: `x` must stay consistent with `y`.
pub type Arc = (SlotId, SlotId);

/// Counters from a successful AC-3 run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcConsistencySuccess {
    pub revisions: u64,
    pub removals: u64,
}

/// AC-3 emptied the domain of `slot_id`, so the puzzle has no fill. The counters cover the work
/// done up to and including the revision that emptied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcConsistencyFailure {
    pub slot_id: SlotId,
    pub revisions: u64,
    pub removals: u64,
}

pub type ArcConsistencyResult = Result<ArcConsistencySuccess, ArcConsistencyFailure>;

/// Bit `g` is set iff some candidate for `slot_id` has glyph `g` at `offset`. Candidates too short
/// to reach `offset` contribute nothing.
fn glyph_mask(domains: &DomainStore, vocabulary: &Vocabulary, slot_id: SlotId, offset: usize) -> u32 {
    domains.iter(slot_id).fold(0, |mask, word_id| {
        match vocabulary.word(word_id).glyphs.get(offset) {
            Some(&glyph) => mask | 1 << glyph,
            None => mask,
        }
    })
}

fn revise_counting(
    overlaps: &OverlapIndex,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    x: SlotId,
    y: SlotId,
) -> usize {
    let (offset_x, offset_y) = overlaps.require(x, y);

    // Every word in x needs at least one partner in y that agrees on the shared cell, which is
    // the same as its letter appearing at that cell somewhere in y's domain.
    let supported = glyph_mask(domains, vocabulary, y, offset_y);

    domains.retain(x, vocabulary, |word| {
        word.glyphs
            .get(offset_x)
            .is_some_and(|&glyph| supported & (1 << glyph) != 0)
    })
}

/// Remove from `x`'s domain every word with no compatible word in `y`'s domain. Returns whether
/// anything was removed. A word too short to reach the shared cell is never compatible, so this
/// is safe to call before node consistency.
///
/// # Panics
///
/// Panics if `x` and `y` don't cross.
pub fn revise(
    overlaps: &OverlapIndex,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    x: SlotId,
    y: SlotId,
) -> bool {
    revise_counting(overlaps, vocabulary, domains, x, y) > 0
}

/// Every arc in the puzzle, in the requested order.
#[must_use]
pub fn initial_arcs(overlaps: &OverlapIndex, arc_order: ArcOrder) -> Vec<Arc> {
    let mut arcs: Vec<Arc> = overlaps.arcs().collect();

    if let ArcOrder::Shuffled { seed } = arc_order {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        arcs.shuffle(&mut rng);
    }

    arcs
}

/// Queue of arcs still to be revised. An arc is never queued twice at the same time.
struct ArcQueue {
    queue: VecDeque<Arc>,
    pending: BitSet,
    slot_count: usize,
}

impl ArcQueue {
    fn new(slot_count: usize) -> ArcQueue {
        ArcQueue {
            queue: VecDeque::new(),
            pending: BitSet::with_capacity(slot_count * slot_count),
            slot_count,
        }
    }

    fn push_back(&mut self, (x, y): Arc) {
        if self.pending.insert(x * self.slot_count + y) {
            self.queue.push_back((x, y));
        }
    }

    fn pop_front(&mut self) -> Option<Arc> {
        let (x, y) = self.queue.pop_front()?;
        self.pending.remove(x * self.slot_count + y);
        Some((x, y))
    }
}

/// Run AC-3 starting from `arcs`, or from every arc in the puzzle if `arcs` is `None`.
///
/// Whenever revising `(x, y)` shrinks `x`'s domain, every arc `(z, x)` for a neighbor `z` of `x`
/// other than `y` is queued again. Fails as soon as any domain becomes empty.
pub fn establish_arc_consistency(
    overlaps: &OverlapIndex,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    arcs: Option<Vec<Arc>>,
    arc_order: ArcOrder,
) -> ArcConsistencyResult {
    let mut queue = ArcQueue::new(domains.slot_count());
    for arc in arcs.unwrap_or_else(|| initial_arcs(overlaps, arc_order)) {
        queue.push_back(arc);
    }

    let mut success = ArcConsistencySuccess::default();

    while let Some((x, y)) = queue.pop_front() {
        success.revisions += 1;

        let removed = revise_counting(overlaps, vocabulary, domains, x, y);
        if removed == 0 {
            continue;
        }
        success.removals += removed as u64;

        log::trace!("revising ({x}, {y}) removed {removed} candidates from slot {x}");

        if domains.len(x) == 0 {
            log::debug!("arc consistency emptied slot {x}");
            return Err(ArcConsistencyFailure {
                slot_id: x,
                revisions: success.revisions,
                removals: success.removals,
            });
        }

        for &z in overlaps.neighbors(x) {
            if z != y {
                queue.push_back((z, x));
            }
        }
    }

    log::debug!(
        "arc consistency reached a fixpoint after {} revisions ({} removals)",
        success.revisions,
        success.removals
    );

    Ok(success)
}
