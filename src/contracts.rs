//! Debug-only invariant checks for the position algebra and automaton
//! states. Zero-cost in release builds; exist to catch a broken invariant
//! at the point it's introduced rather than several calls downstream.

use crate::position::ReducedUnion;

/// A reduced union must be sorted by `(edit, offset)` and pairwise
/// non-subsuming — exactly what [`ReducedUnion::add`] maintains.
///
/// Also checked here: a state handed to [`crate::levenshtein_dfa::LevenshteinAutomaton::delta`]
/// must already be in normal form (`raise_level() == 0`) — the same
/// precondition `Facade.delta` asserts before doing anything else.
#[inline]
pub fn check_reduced_union(ru: &ReducedUnion) {
    debug_assert!(
        ru.is_empty() || ru.raise_level() == 0,
        "reduced union not in normal form: raise_level() = {}",
        ru.raise_level()
    );

    let positions: Vec<_> = ru.iter().collect();
    for w in positions.windows(2) {
        debug_assert!(
            w[0] < w[1],
            "reduced union out of canonical order: {} then {}",
            w[0],
            w[1]
        );
    }
    for (i, &p) in positions.iter().enumerate() {
        for &q in &positions[i + 1..] {
            debug_assert!(
                !p.subsumes(q) && !q.subsumes(p),
                "reduced union contains a subsumption pair: {p} / {q}"
            );
        }
    }
}
