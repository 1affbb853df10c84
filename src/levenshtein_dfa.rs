//! Universal Levenshtein automaton (Schulz-Mihov 2002), synchronously
//! traversed alongside the DAWG by the search driver.
//!
//! The automaton's state graph is query-independent — only the
//! characteristic-vector computation at each step depends on the actual
//! query string, which is why the [`LazyTable`] transition cache can be
//! shared across every query at a given tolerance `n`.
//!
//! # Elementary transitions (Table 4.1 of the paper)
//!
//! For a position `i^#e` with `e < n` (case I), a relevant sub-word of the
//! query gives rise to a match transition when its first symbol equals the
//! probe, and to insertion/substitution/deletion transitions otherwise. For
//! `e == n` (case II) only the match transition survives — the edit budget
//! is spent.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::charvec::CharVec;
use crate::contracts::check_reduced_union;
use crate::error::ConfigError;
use crate::position::{RelPos, ReducedUnion};

/// Length of the relevant subword for a position `i` edits `e` into a query
/// of length `w`.
fn relevant_pos_len(i: u32, w: u32, e: u8, n: u8) -> u32 {
    debug_assert!(i <= w);
    debug_assert!(e <= n);
    (u32::from(n - e) + 1).min(w - i)
}

/// Length of the relevant subword for a state at base `i` in a query of
/// length `w`.
fn relevant_state_len(i: u32, w: u32, n: u8) -> u32 {
    (2 * u32::from(n) + 1).min(w - i)
}

/// Part I of Table 4.1: `edit < n`.
fn delta_i(pos: RelPos, cv: CharVec) -> ReducedUnion {
    let mut result = ReducedUnion::new();

    if cv.is_empty() {
        result.add_unchecked(RelPos::new(pos.offset(), pos.edit() + 1));
        return result;
    }

    if cv.size() == 1 {
        if cv.has_first_bit_set() {
            result.add_unchecked(RelPos::new(pos.offset() + 1, pos.edit()));
        } else {
            result.add_unchecked(RelPos::new(pos.offset(), pos.edit() + 1));
            result.add_unchecked(RelPos::new(pos.offset() + 1, pos.edit() + 1));
        }
        return result;
    }

    if cv.has_first_bit_set() {
        result.add_unchecked(RelPos::new(pos.offset() + 1, pos.edit()));
    } else {
        result.add_unchecked(RelPos::new(pos.offset(), pos.edit() + 1));
        result.add_unchecked(RelPos::new(pos.offset() + 1, pos.edit() + 1));
        if let Some(j) = cv.lowest_set_bit_index() {
            debug_assert!(j > 1);
            result.add_unchecked(RelPos::new(pos.offset() + j, pos.edit() + (j - 1) as u8));
        }
    }

    result
}

/// Part II of Table 4.1: `edit == n`. Only a match keeps the position alive.
fn delta_ii(pos: RelPos, cv: CharVec) -> ReducedUnion {
    let mut result = ReducedUnion::new();
    if cv.has_first_bit_set() {
        result.add_unchecked(RelPos::new(pos.offset() + 1, pos.edit()));
    }
    result
}

/// The per-`(reduced union, characteristic vector)` transition cache for a
/// given tolerance `n`. Append-only and monotonic — entries are never
/// invalidated, so sharing one across concurrent queries at the same `n`
/// only needs mutual exclusion around reads/inserts, never coordination
/// between them.
struct LazyTable {
    n: u8,
    memo: HashMap<ReducedUnion, HashMap<CharVec, ReducedUnion>>,
}

impl LazyTable {
    fn new(n: u8) -> Self {
        LazyTable {
            n,
            memo: HashMap::new(),
        }
    }

    /// The elementary transition for one absolute position, sub-ranging
    /// `char_vec` to the window relevant to that position.
    fn elem_delta(&self, base: u32, w: u32, pos: RelPos, char_vec: CharVec) -> ReducedUnion {
        let rl = relevant_pos_len(base + pos.offset(), w, pos.edit(), self.n);
        debug_assert!(rl <= char_vec.size());
        let local = if rl < char_vec.size() || pos.offset() > 0 {
            char_vec.subrange(rl, 1 + pos.offset())
        } else {
            char_vec
        };

        if pos.edit() < self.n {
            delta_i(pos, local)
        } else {
            delta_ii(pos, local)
        }
    }

    /// State transition, memoized by `(reduced_union, char_vec)` alone —
    /// two states whose unions are equal have identical transitions for the
    /// same characteristic vector regardless of base, since positions are
    /// relative.
    fn delta(
        &mut self,
        reduced_union: &ReducedUnion,
        base: u32,
        w: u32,
        char_vec: CharVec,
    ) -> ReducedUnion {
        if let Some(image) = self
            .memo
            .get(reduced_union)
            .and_then(|inner| inner.get(&char_vec))
        {
            return image.clone();
        }

        let mut image = ReducedUnion::new();
        for &pos in reduced_union.iter() {
            image.merge(&self.elem_delta(base, w, pos, char_vec));
        }

        self.memo
            .entry(reduced_union.clone())
            .or_default()
            .insert(char_vec, image.clone());
        image
    }
}

/// An automaton state: a reduced union in normal form, pinned to `base`.
/// The failure state has no representation of its own — it is simply the
/// absence of a `LevenState` (see [`LevenshteinAutomaton::delta`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevenState {
    base: u32,
    reduced_union: ReducedUnion,
}

impl LevenState {
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn reduced_union(&self) -> &ReducedUnion {
        &self.reduced_union
    }
}

fn shared_table(n: u8) -> &'static Mutex<HashMap<u8, LazyTable>> {
    static CACHE: OnceLock<Mutex<HashMap<u8, LazyTable>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// The per-query handle bundling the target word, the tolerance, and the
/// process-wide memoized transition table for that tolerance.
pub struct LevenshteinAutomaton {
    query: Vec<char>,
    n: u8,
}

impl LevenshteinAutomaton {
    /// Constructs a facade over `query` with tolerance `n`. Obtains the
    /// shared [`LazyTable`] for `n`, creating it lazily on first use.
    pub fn new(query: &str, n: u8) -> Result<Self, ConfigError> {
        if !(1..=15).contains(&n) {
            return Err(ConfigError::ToleranceOutOfRange(n));
        }
        let cache = shared_table(n);
        cache
            .lock()
            .unwrap()
            .entry(n)
            .or_insert_with(|| LazyTable::new(n));
        Ok(LevenshteinAutomaton {
            query: query.chars().collect(),
            n,
        })
    }

    pub fn tolerance(&self) -> u8 {
        self.n
    }

    fn query_len(&self) -> u32 {
        self.query.len() as u32
    }

    /// The initial state `{ 0^#0 }`.
    pub fn initial_state(&self) -> LevenState {
        let mut ru = ReducedUnion::new();
        ru.add_unchecked(RelPos::new(0, 0));
        LevenState {
            base: 0,
            reduced_union: ru,
        }
    }

    /// Advances `state` on `symbol`, returning `None` on failure (no match
    /// possible from here).
    pub fn delta(&self, state: &LevenState, symbol: char) -> Option<LevenState> {
        check_reduced_union(&state.reduced_union);

        let w = self.query_len();
        let rl = relevant_state_len(state.base, w, self.n);
        let window_end = (state.base + rl) as usize;
        let window = &self.query[state.base as usize..window_end];
        let char_vec = CharVec::from_window(window, symbol);

        let image = {
            let cache = shared_table(self.n);
            let mut guard = cache.lock().unwrap();
            let table = guard.get_mut(&self.n).expect("table seeded in new()");
            table.delta(&state.reduced_union, state.base, w, char_vec)
        };

        if image.is_empty() {
            return None;
        }

        let k = image.raise_level();
        let reduced_union = if k > 0 { image.rebased(k) } else { image };
        Some(LevenState {
            base: state.base + k,
            reduced_union,
        })
    }

    /// Is `state` accepting — i.e. does some position have fewer query
    /// symbols remaining than edit budget remaining?
    pub fn is_final(&self, state: &LevenState) -> bool {
        let w = self.query_len();
        state.reduced_union.iter().any(|p| {
            let consumed = state.base + p.offset();
            let remaining = w.saturating_sub(consumed);
            remaining <= u32::from(self.n - p.edit())
        })
    }
}
