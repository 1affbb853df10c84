//! Relative positions and reduced unions — the position algebra underlying
//! the universal Levenshtein automaton (Schulz-Mihov, section 3).
//!
//! A [`RelPos`] is a position `i^#e` ("i symbols consumed, e edits used"),
//! expressed relative to some outside base. A [`ReducedUnion`] is a set of
//! such positions, closed under the subsumption relation: no member
//! dominates another.

use std::fmt;

/// If somebody wants `n > 15`, `CharVec` (u32-backed) would need to grow.
pub const MAX_N: u8 = 15;

/// A position relative to an outside boundary: "`offset` symbols consumed
/// beyond the boundary, `edit` edits used so far".
///
/// Field order is `(edit, offset)` so that the derived [`Ord`] matches the
/// canonical total order the reduced union is sorted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelPos {
    edit: u8,
    offset: u32,
}

impl RelPos {
    pub fn new(offset: u32, edit: u8) -> Self {
        Self { edit, offset }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn edit(&self) -> u8 {
        self.edit
    }

    /// Returns this position rebased to a boundary `k` positions further in.
    ///
    /// Requires `k <= offset`; rebasing is only ever applied after computing
    /// a [`ReducedUnion::raise_level`], which guarantees this.
    pub fn rebased(&self, k: u32) -> Self {
        debug_assert!(k <= self.offset, "rebase past a position's offset");
        Self {
            edit: self.edit,
            offset: self.offset - k,
        }
    }

    /// Subsumption: does `self` dominate `other`?
    ///
    /// `self` subsumes `other` iff `other` has strictly more edits spent and
    /// its offset is within that edit slack of `self`'s offset. A subsumed
    /// position can always be reached by `self` with no more edits, so it
    /// carries no information and may be dropped from a reduced union.
    pub fn subsumes(&self, other: &RelPos) -> bool {
        if other.edit <= self.edit {
            return false;
        }
        let slack = (other.edit - self.edit) as u64;
        let diff = (i64::from(other.offset) - i64::from(self.offset)).unsigned_abs();
        diff <= slack
    }
}

impl fmt::Display for RelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}#{}", self.offset, self.edit)
    }
}

/// A set of [`RelPos`] values, all relative to the same base, pairwise
/// non-subsuming, kept sorted by `(edit, offset)` for structural equality
/// and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReducedUnion {
    positions: Vec<RelPos>,
}

impl ReducedUnion {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelPos> {
        self.positions.iter()
    }

    /// The maximum amount that can be subtracted from every offset — the
    /// minimum offset in the set, or 0 for an empty set.
    pub fn raise_level(&self) -> u32 {
        self.positions.iter().map(RelPos::offset).min().unwrap_or(0)
    }

    /// Adds a position, preserving the "no subsumption" invariant: drops
    /// `p` if some existing position already subsumes it, and removes any
    /// existing positions that `p` in turn subsumes.
    ///
    /// Because the list is ordered by `(edit, offset)`, the only candidates
    /// that could subsume `p` are its predecessors in that order, and the
    /// only candidates `p` could subsume are its successors — this bounds
    /// the cost of `add` to linear in the size of the union.
    pub fn add(&mut self, p: RelPos) {
        let ni = match self.positions.binary_search(&p) {
            Ok(_) => return, // already present
            Err(ni) => ni,
        };

        if self.positions[..ni].iter().any(|q| q.subsumes(&p)) {
            return;
        }

        self.positions.insert(ni, p);

        let mut i = ni + 1;
        while i < self.positions.len() {
            if p.subsumes(&self.positions[i]) {
                self.positions.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Adds a position known not to be present and known not to break the
    /// "no subsumption" invariant — callers must only use this when
    /// building a reduced union from a set of positions computed together,
    /// as the elementary transitions of Table 4.1 do.
    pub fn add_unchecked(&mut self, p: RelPos) {
        let idx = self.positions.binary_search(&p).unwrap_or_else(|i| i);
        debug_assert!(
            self.positions.get(idx) != Some(&p),
            "add_unchecked called with a position already present"
        );
        self.positions.insert(idx, p);
    }

    /// Merges another reduced union into this one, preserving the
    /// subsumption invariant. Both must be relative to the same base.
    pub fn merge(&mut self, other: &ReducedUnion) {
        for &p in other.iter() {
            self.add(p);
        }
    }

    /// Returns this set rebased so that its minimum offset becomes 0.
    /// Requires `k <= raise_level()`.
    pub fn rebased(&self, k: u32) -> ReducedUnion {
        ReducedUnion {
            positions: self.positions.iter().map(|p| p.rebased(k)).collect(),
        }
    }
}
